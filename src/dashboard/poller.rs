//! Top source IPs poll loop.
//!
//! Dispatches a fetch immediately and then on a fixed cadence, applying each
//! fresh response wholesale to the shared view. Responses can complete out of
//! order when the backend is slow; a per-dispatch sequence number keeps older
//! data from overwriting newer data. All view writes happen inside this task,
//! so once it exits nothing can mutate the snapshot.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::api::{ApiClient, IpRecord};
use crate::dashboard::state::TopIpsView;
use crate::error_handling::{
    backoff_schedule, update_error_stats, FetchError, InfoType, PollStats,
};

/// Tuning for the poll loop.
#[derive(Debug, Clone)]
pub(crate) struct PollerOptions {
    /// Gap between poll dispatches. The first dispatch happens immediately.
    pub interval: Duration,
    /// Consecutive failures before dispatch is suspended for a backoff delay.
    /// Zero disables suspension; the loop then retries every interval forever.
    pub max_consecutive_failures: u32,
}

/// Spawns the poll loop task.
pub(crate) fn spawn_top_ips_poller(
    client: ApiClient,
    options: PollerOptions,
    tx: watch::Sender<TopIpsView>,
    stats: Arc<PollStats>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(run_poll_loop(client, options, tx, stats, cancel))
}

async fn run_poll_loop(
    client: ApiClient,
    options: PollerOptions,
    tx: watch::Sender<TopIpsView>,
    stats: Arc<PollStats>,
    cancel: CancellationToken,
) {
    // The first tick completes immediately, so the panel fills without
    // waiting a full interval. interval() panics on a zero duration, so
    // clamp in case a caller bypassed config validation.
    let mut ticker = tokio::time::interval(options.interval.max(Duration::from_millis(1)));

    let mut inflight = FuturesUnordered::new();
    let mut next_seq: u64 = 0;
    let mut last_applied_seq: u64 = 0;
    let mut consecutive_failures: u32 = 0;
    let mut backoff = backoff_schedule(options.interval);
    let mut suspended_until: Option<Instant> = None;

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(
                    "Top IPs poller stopping; discarding {} in-flight response(s)",
                    inflight.len()
                );
                break;
            }
            _ = ticker.tick() => {
                // Ticks keep firing while suspended; only dispatch is gated.
                if let Some(until) = suspended_until {
                    if Instant::now() < until {
                        stats.increment_info(InfoType::TickSuppressed);
                        debug!("Poll tick suppressed during backoff");
                        continue;
                    }
                    suspended_until = None;
                    stats.increment_info(InfoType::PollResumed);
                    info!("Polling resumed after backoff");
                }
                next_seq += 1;
                stats.record_attempt();
                debug!("Dispatching top IPs poll (seq {next_seq})");
                inflight.push(fetch_top_ips(client.clone(), next_seq));
            }
            Some((seq, result)) = inflight.next() => {
                match result {
                    Ok(records) => {
                        consecutive_failures = 0;
                        backoff = backoff_schedule(options.interval);
                        if suspended_until.take().is_some() {
                            stats.increment_info(InfoType::PollResumed);
                            info!("Polling resumed: backend answered an in-flight poll");
                        }
                        if seq > last_applied_seq {
                            last_applied_seq = seq;
                            stats.record_success();
                            debug!("Applying top IPs poll (seq {seq}, {} records)", records.len());
                            tx.send_modify(|view| view.apply(records));
                        } else {
                            stats.increment_info(InfoType::StaleResponseDiscarded);
                            debug!(
                                "Discarding stale top IPs response (seq {seq}, newest applied {last_applied_seq})"
                            );
                        }
                    }
                    Err(error) => {
                        // The previous snapshot stays on screen; failures are
                        // log-only.
                        warn!("Top IPs poll failed (seq {seq}): {error}");
                        update_error_stats(&stats, &error);
                        consecutive_failures += 1;
                        if options.max_consecutive_failures > 0
                            && consecutive_failures >= options.max_consecutive_failures
                        {
                            let delay = backoff.next().unwrap_or(options.interval);
                            suspended_until = Some(Instant::now() + delay);
                            stats.increment_info(InfoType::PollSuspended);
                            warn!(
                                "Suspending poll dispatch for {delay:?} after {consecutive_failures} consecutive failure(s)"
                            );
                        }
                    }
                }
            }
        }
    }
}

async fn fetch_top_ips(client: ApiClient, seq: u64) -> (u64, Result<Vec<IpRecord>, FetchError>) {
    let result = client.top_ips().await;
    (seq, result)
}
