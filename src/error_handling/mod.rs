//! Error handling and poll statistics.
//!
//! This module provides:
//! - Error type definitions and categorization
//! - Poll statistics tracking (attempts, failures by category, info events)
//! - The backoff delay schedule for suspended polling
//!
//! Failure categories are split into:
//! - **Errors**: Failed fetches, counted by transport/status/decode class
//! - **Info**: Notable non-failures (stale discards, backoff transitions)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{backoff_schedule, categorize_fetch_error, update_error_stats};
pub use stats::PollStats;
pub use types::{ErrorType, FetchError, InfoType, InitializationError};
