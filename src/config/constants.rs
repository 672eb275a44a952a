//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! application, including the backend endpoints, polling cadence, and other
//! operational parameters.

// Backend API contract
/// Default base URL of the SOC backend.
///
/// The backend is a collaborator service consumed as-is; it exposes the two
/// endpoints below and nothing about it is configured here beyond where to
/// reach it. Override via the `--api-base` CLI flag.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
/// Path of the one-shot system identity endpoint (hostname + internal IP).
pub const SYSTEM_INFO_ENDPOINT: &str = "/api/system_info";
/// Path of the ranked source-IP endpoint polled on a fixed schedule.
pub const TOP_IPS_ENDPOINT: &str = "/api/top_ips";

// Polling cadence
/// Default poll period for the top-IPs endpoint in milliseconds.
///
/// 3000 ms keeps the table and map feeling live without hammering a backend
/// that is typically colocated on the analyst's own machine.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 3000;
/// Per-request timeout in seconds.
///
/// The backend answers from memory, so anything slower than this is treated
/// as a failed poll rather than waited out.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

// Failure handling
/// User-facing message shown when the identity fetch fails.
///
/// The identity fetch happens once per run and is never retried, so the
/// message is static. Transport errors and non-2xx responses both map here.
pub const IDENTITY_FETCH_ERROR: &str = "Failed to fetch system information.";
/// Factor by which the poll-suspension delay grows after each further failure
/// once backoff has engaged.
pub const POLL_BACKOFF_FACTOR: u64 = 2;
/// Maximum poll-suspension delay in seconds once backoff has engaged.
///
/// Caps the exponential growth so a recovering backend is noticed within a
/// minute even after long outages.
pub const POLL_BACKOFF_MAX_DELAY_SECS: u64 = 60;

// Navigation surface
/// Default client-side route set, rendered as the navigation menu.
///
/// Union of the two observed dashboard variants; the set is configuration
/// (`--routes`), not code, so deployments can trim it to the views they
/// actually ship.
pub const DEFAULT_ROUTES: &[&str] = &[
    "/",
    "/alerts",
    "/network",
    "/export",
    "/http",
    "/visualizer",
    "/globe",
];
/// `--routes` default as a single delimited argument value.
pub const DEFAULT_ROUTES_ARG: &str = "/,/alerts,/network,/export,/http,/visualizer,/globe";

// Progress logging
/// Progress logging interval in seconds.
pub const LOGGING_INTERVAL_SECS: u64 = 5;

// User agent
/// User-Agent header sent with every request, versioned from the manifest.
pub const USER_AGENT: &str = concat!("soc_status/", env!("CARGO_PKG_VERSION"));
