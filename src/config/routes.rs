//! Client-side route surface.
//!
//! The dashboard's navigation is configuration, not code: deployments ship
//! different subsets of the sub-views, so the route list arrives via
//! `--routes` and the default is the union of every route observed in the
//! field. Routes here are declarations only; the views behind them are
//! external to this crate.

use crate::config::constants::DEFAULT_ROUTES;
use crate::error_handling::InitializationError;

/// A single client-side route: a path plus the label shown in navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Route path, always starting with `/`.
    pub path: String,
    /// Human-readable navigation label.
    pub label: String,
}

/// An ordered, de-duplicated set of client-side routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    /// Parses a list of route paths into a `RouteSet`.
    ///
    /// Paths must start with `/` and contain no whitespace. Duplicates are
    /// collapsed, keeping the first occurrence's position.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError::InvalidRoute`] for the first path that
    /// fails validation.
    pub fn parse<S: AsRef<str>>(paths: &[S]) -> Result<Self, InitializationError> {
        let mut routes: Vec<Route> = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            if !path.starts_with('/') || path.chars().any(char::is_whitespace) {
                return Err(InitializationError::InvalidRoute {
                    path: path.to_string(),
                });
            }
            if routes.iter().any(|r| r.path == path) {
                continue;
            }
            routes.push(Route {
                path: path.to_string(),
                label: label_for(path),
            });
        }
        Ok(Self { routes })
    }

    /// Iterates the routes in navigation order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// Number of routes in the set.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteSet {
    /// The union of both observed dashboard variants' menus.
    fn default() -> Self {
        Self::parse(DEFAULT_ROUTES).unwrap_or(Self { routes: Vec::new() })
    }
}

/// Navigation label for a route path.
///
/// Known dashboard views keep their original menu labels; anything else gets
/// a capitalized form of its first path segment.
fn label_for(path: &str) -> String {
    match path {
        "/" => "Overview".to_string(),
        "/alerts" => "Alerts".to_string(),
        "/network" => "Network".to_string(),
        "/export" => "Export Data".to_string(),
        "/http" => "HTTP Packets".to_string(),
        "/visualizer" => "Visualizer".to_string(),
        "/globe" => "Globe".to_string(),
        other => {
            let segment = other.trim_start_matches('/');
            let segment = segment.split('/').next().unwrap_or(segment);
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => "Overview".to_string(),
            }
        }
    }
}
