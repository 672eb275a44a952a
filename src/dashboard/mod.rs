//! Dashboard core: background fetch tasks and the view state they feed.
//!
//! [`Dashboard::spawn`] starts two tasks against the backend: a one-shot
//! identity fetch and the recurring top IPs poll loop. Each publishes into a
//! watch channel; any number of subscribers can read the latest snapshot
//! without triggering extra requests. [`Dashboard::shutdown`] cancels both
//! tasks and waits for them, after which the snapshots are frozen.

mod identity;
mod markers;
mod poller;
mod state;

pub use markers::{to_map_markers, MapMarker};
pub use state::{IdentityView, TopIpsView};

use std::sync::Arc;
use std::time::Duration;

use log::warn;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::api::ApiClient;
use crate::config::{Config, DEFAULT_POLL_INTERVAL_MS};
use crate::error_handling::PollStats;

use identity::spawn_identity_fetch;
use poller::{spawn_top_ips_poller, PollerOptions};

/// Tuning for [`Dashboard::spawn`].
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// Gap between top IPs poll dispatches.
    pub poll_interval: Duration,
    /// Consecutive poll failures before dispatch is suspended for a backoff
    /// delay. Zero disables suspension.
    pub max_consecutive_failures: u32,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            max_consecutive_failures: 0,
        }
    }
}

impl DashboardOptions {
    /// Derives dashboard tuning from the CLI configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            max_consecutive_failures: config.max_consecutive_failures,
        }
    }
}

/// Handle to the running dashboard core.
///
/// Dropping the handle without calling [`Dashboard::shutdown`] leaves the
/// tasks running until the runtime itself shuts down; orderly teardown goes
/// through `shutdown`.
pub struct Dashboard {
    identity_rx: watch::Receiver<IdentityView>,
    top_ips_rx: watch::Receiver<TopIpsView>,
    cancel: CancellationToken,
    identity_task: JoinHandle<()>,
    poller_task: JoinHandle<()>,
}

impl Dashboard {
    /// Starts the identity fetch and the top IPs poll loop.
    pub fn spawn(client: ApiClient, options: DashboardOptions, stats: Arc<PollStats>) -> Self {
        let cancel = CancellationToken::new();
        let (identity_tx, identity_rx) = watch::channel(IdentityView::default());
        let (top_ips_tx, top_ips_rx) = watch::channel(TopIpsView::default());

        let identity_task = spawn_identity_fetch(client.clone(), identity_tx, cancel.clone());
        let poller_task = spawn_top_ips_poller(
            client,
            PollerOptions {
                interval: options.poll_interval,
                max_consecutive_failures: options.max_consecutive_failures,
            },
            top_ips_tx,
            stats,
            cancel.clone(),
        );

        Self {
            identity_rx,
            top_ips_rx,
            cancel,
            identity_task,
            poller_task,
        }
    }

    /// Subscribes to the identity panel state.
    pub fn identity(&self) -> watch::Receiver<IdentityView> {
        self.identity_rx.clone()
    }

    /// Subscribes to the top IPs panel state.
    pub fn top_ips(&self) -> watch::Receiver<TopIpsView> {
        self.top_ips_rx.clone()
    }

    /// Clones the latest identity snapshot.
    pub fn latest_identity(&self) -> IdentityView {
        self.identity_rx.borrow().clone()
    }

    /// Clones the latest top IPs snapshot.
    pub fn latest_top_ips(&self) -> TopIpsView {
        self.top_ips_rx.borrow().clone()
    }

    /// Stops both tasks and waits for them to exit.
    ///
    /// Consumes the handle, so teardown can only happen once. After this
    /// returns, no further writes to either view are possible; existing
    /// receivers keep serving the last published snapshots. Responses still
    /// in flight are dropped, not applied.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(error) = self.identity_task.await {
            warn!("Identity task ended abnormally: {error}");
        }
        if let Err(error) = self.poller_task.await {
            warn!("Poller task ended abnormally: {error}");
        }
    }
}
