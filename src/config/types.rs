//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_API_BASE, DEFAULT_POLL_INTERVAL_MS, DEFAULT_ROUTES, DEFAULT_ROUTES_ARG,
    DEFAULT_TIMEOUT_SECONDS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Runtime configuration, parsed from the command line or constructed
/// programmatically.
///
/// Every option has a default matching the observed dashboard behavior, so
/// `soc_status` with no arguments watches a backend on `localhost:5000` at
/// the stock 3-second cadence.
///
/// # Examples
///
/// ```bash
/// # Watch the default local backend until Ctrl-C
/// soc_status
///
/// # Faster cadence against a remote backend, for 30 seconds
/// soc_status --api-base http://siem.lab:5000 --poll-interval-ms 1000 --duration-seconds 30
/// ```
///
/// ```no_run
/// use soc_status::Config;
///
/// let config = Config {
///     api_base: "http://127.0.0.1:5000".to_string(),
///     poll_interval_ms: 1000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "soc_status",
    about = "Polls a SOC backend for system identity and top source IPs."
)]
pub struct Config {
    /// Base URL of the SOC backend API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Poll period for the top-IPs endpoint in milliseconds
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    pub poll_interval_ms: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// Consecutive poll failures before request dispatch is suspended
    ///
    /// 0 disables backoff entirely: ticks keep dispatching through failure
    /// streaks of any length, matching the original dashboard. With N > 0,
    /// after N consecutive failures dispatch pauses for an exponentially
    /// growing delay (capped at 60s) and resumes on the first success.
    #[arg(long, default_value_t = 0)]
    pub max_consecutive_failures: u32,

    /// Client-side routes rendered in the navigation menu
    #[arg(long, value_delimiter = ',', default_value = DEFAULT_ROUTES_ARG)]
    pub routes: Vec<String>,

    /// How long to run in seconds (0 runs until Ctrl-C)
    #[arg(long, default_value_t = 0)]
    pub duration_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            max_consecutive_failures: 0,
            routes: DEFAULT_ROUTES.iter().map(|r| r.to_string()).collect(),
            duration_seconds: 0,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
