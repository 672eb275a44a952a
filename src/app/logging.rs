//! Progress logging utilities.

use log::info;
use std::sync::Arc;

use crate::error_handling::PollStats;

/// Logs progress information about the poll loop.
///
/// # Arguments
///
/// * `start_time` - The start time of the dashboard run
/// * `stats` - Shared poll statistics
pub fn log_progress(start_time: std::time::Instant, stats: &Arc<PollStats>) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let attempted = stats.polls_attempted();
    let applied = stats.polls_succeeded();
    let errors = stats.total_errors();
    info!(
        "Poll progress: {} dispatched, {} applied, {} errors in {:.2} seconds",
        attempted, applied, errors, elapsed_secs
    );
}
