//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, cadence, limits)
//! - CLI option types and parsing
//! - The client-side route surface

mod constants;
mod routes;
mod types;

// Re-export all constants
pub use constants::*;
pub use routes::{Route, RouteSet};
pub use types::{Config, LogFormat, LogLevel};
