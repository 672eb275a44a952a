//! soc_status library: SOC dashboard polling core
//!
//! This library provides the data layer behind a SOC dashboard: a one-shot
//! host identity fetch, a recurring top source IPs poll loop with stale
//! response protection, and the view snapshots both publish for rendering.
//!
//! # Example
//!
//! ```no_run
//! use soc_status::{run_dashboard, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     api_base: "http://localhost:5000".into(),
//!     duration_seconds: 10,
//!     ..Default::default()
//! };
//!
//! let report = run_dashboard(config).await?;
//! println!("Dispatched {} polls: {} applied, {} failed",
//!          report.polls_attempted, report.polls_applied, report.polls_failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod api;
mod app;
pub mod config;
pub mod dashboard;
pub mod error_handling;
pub mod initialization;

// Re-export public API
pub use app::render_overview;
pub use config::{Config, LogFormat, LogLevel, Route, RouteSet};
pub use dashboard::{
    to_map_markers, Dashboard, DashboardOptions, IdentityView, MapMarker, TopIpsView,
};
pub use error_handling::PollStats;
pub use run::{run_dashboard, DashboardReport};

// Internal run module (contains the main dashboard lifecycle logic)
mod run {
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::{Context, Result};
    use log::{info, warn};
    use tokio_util::sync::CancellationToken;

    use crate::app::{log_progress, print_poll_statistics, render_overview, shutdown_gracefully};
    use crate::config::{Config, RouteSet, LOGGING_INTERVAL_SECS};
    use crate::dashboard::{Dashboard, DashboardOptions, IdentityView, TopIpsView};
    use crate::error_handling::PollStats;
    use crate::initialization::init_api_client;

    /// Results of a completed dashboard run.
    ///
    /// Carries the final view snapshots so callers can render or inspect
    /// what the dashboard held at shutdown.
    #[derive(Debug, Clone)]
    pub struct DashboardReport {
        /// Number of polls dispatched
        pub polls_attempted: usize,
        /// Number of poll responses applied to the view
        pub polls_applied: usize,
        /// Number of polls that failed
        pub polls_failed: usize,
        /// Final state of the identity panel
        pub identity: IdentityView,
        /// Final state of the top IPs panel
        pub top_ips: TopIpsView,
        /// Validated navigation routes for rendering
        pub routes: RouteSet,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the dashboard core with the provided configuration.
    ///
    /// This is the main entry point for the library. It spawns the identity
    /// fetch and the top IPs poll loop, keeps them running for the
    /// configured duration (or until Ctrl-C when no duration is set), then
    /// tears both down and reports the final state.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The route configuration is invalid
    /// - The API base URL cannot be parsed
    /// - The HTTP client cannot be built
    ///
    /// Backend failures during the run never error out; they are logged and
    /// counted instead.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use soc_status::{run_dashboard, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     duration_seconds: 5,
    ///     ..Default::default()
    /// };
    /// let report = run_dashboard(config).await?;
    /// println!("Applied {} polls", report.polls_applied);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_dashboard(config: Config) -> Result<DashboardReport> {
        // Fail fast on bad configuration before anything is spawned
        anyhow::ensure!(
            config.poll_interval_ms > 0,
            "poll interval must be positive (got --poll-interval-ms 0)"
        );
        let routes = RouteSet::parse(&config.routes).context("Invalid route configuration")?;
        let client = init_api_client(&config).context("Failed to initialize API client")?;

        let stats = Arc::new(PollStats::new());
        let start_time = std::time::Instant::now();

        info!(
            "Starting dashboard against {} (poll interval {}ms)",
            config.api_base, config.poll_interval_ms
        );
        let dashboard = Dashboard::spawn(
            client,
            DashboardOptions::from_config(&config),
            Arc::clone(&stats),
        );

        let cancel = CancellationToken::new();
        let cancel_logging = cancel.child_token();
        let stats_for_logging = Arc::clone(&stats);
        let logging_task = Some(tokio::task::spawn(async move {
            let mut interval =
                tokio::time::interval(std::time::Duration::from_secs(LOGGING_INTERVAL_SECS));
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        log_progress(start_time, &stats_for_logging);
                    }
                    _ = cancel_logging.cancelled() => {
                        break;
                    }
                }
            }
        }));

        // Live overview: re-render whenever either view publishes a change
        let cancel_render = cancel.child_token();
        let render_routes = routes.clone();
        let mut render_identity_rx = dashboard.identity();
        let mut render_top_ips_rx = dashboard.top_ips();
        let render_task = Some(tokio::task::spawn(async move {
            loop {
                tokio::select! {
                    _ = cancel_render.cancelled() => break,
                    changed = render_identity_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                    changed = render_top_ips_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
                // borrow_and_update on both marks them seen, so one poll
                // application triggers exactly one re-render
                let overview = render_overview(
                    &render_identity_rx.borrow_and_update(),
                    &render_top_ips_rx.borrow_and_update(),
                    &render_routes,
                );
                println!("{overview}");
            }
        }));

        if config.duration_seconds > 0 {
            tokio::time::sleep(Duration::from_secs(config.duration_seconds)).await;
            info!("Configured duration elapsed; shutting down");
        } else {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Ctrl-C received; shutting down"),
                Err(error) => warn!("Failed to listen for Ctrl-C: {error}; shutting down"),
            }
        }

        // Receivers outlive the handle, so the report can snapshot the
        // frozen views after teardown
        let identity_rx = dashboard.identity();
        let top_ips_rx = dashboard.top_ips();

        shutdown_gracefully(cancel, logging_task, render_task, dashboard).await;

        let identity = identity_rx.borrow().clone();
        let top_ips = top_ips_rx.borrow().clone();

        log_progress(start_time, &stats);
        print_poll_statistics(&stats);

        let elapsed_seconds = start_time.elapsed().as_secs_f64();

        Ok(DashboardReport {
            polls_attempted: stats.polls_attempted(),
            polls_applied: stats.polls_succeeded(),
            polls_failed: stats.total_errors(),
            identity,
            top_ips,
            routes,
            elapsed_seconds,
        })
    }
}
