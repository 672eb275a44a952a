//! One-shot host identity fetch.
//!
//! Issues exactly one request for the identity record when the dashboard
//! starts. Subscribers joining later observe the settled view through the
//! watch channel instead of triggering a refetch.

use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::api::ApiClient;
use crate::dashboard::state::IdentityView;

/// Spawns the identity fetch task.
///
/// The task settles the view exactly once: populated on success, the fixed
/// error message on failure. Underlying failure detail is logged, never
/// shown. If `cancel` fires first the view is left untouched.
pub(crate) fn spawn_identity_fetch(
    client: ApiClient,
    tx: watch::Sender<IdentityView>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            result = client.system_info() => match result {
                Ok(info) => {
                    info!("Identity loaded: {} ({})", info.hostname, info.internal_ip);
                    let _ = tx.send(IdentityView::loaded(info));
                }
                Err(error) => {
                    warn!("Identity fetch failed: {error}");
                    let _ = tx.send(IdentityView::failed());
                }
            },
            _ = cancel.cancelled() => {
                debug!("Identity fetch cancelled before settling");
            }
        }
    })
}
