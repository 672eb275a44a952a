//! Graceful shutdown handling.

use tokio_util::sync::CancellationToken;

use crate::dashboard::Dashboard;

/// Shuts down all background tasks gracefully.
///
/// Stops the periodic progress logging and the live renderer first, then
/// tears down the dashboard tasks. Views stay readable afterwards; they
/// just stop changing.
pub async fn shutdown_gracefully(
    cancel: CancellationToken,
    logging_task: Option<tokio::task::JoinHandle<()>>,
    render_task: Option<tokio::task::JoinHandle<()>>,
    dashboard: Dashboard,
) {
    // Signal observer tasks to stop and await them
    cancel.cancel();
    if let Some(logging_task) = logging_task {
        let _ = logging_task.await;
    }
    if let Some(render_task) = render_task {
        let _ = render_task.await;
    }

    dashboard.shutdown().await;
}
