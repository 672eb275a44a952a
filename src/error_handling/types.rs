//! Error type definitions.
//!
//! This module defines all error and info types used throughout the
//! application.

use log::SetLoggerError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
///
/// These are the only errors that abort a run; everything after
/// initialization degrades to stale data instead of failing.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    /// The configured API base is not a valid absolute URL.
    #[error("Invalid API base URL '{url}': {source}")]
    InvalidApiBase {
        /// The rejected value as supplied.
        url: String,
        /// Why the URL parser rejected it.
        source: url::ParseError,
    },

    /// A configured route path failed validation.
    #[error("Invalid route path '{path}': routes must start with '/' and contain no whitespace")]
    InvalidRoute {
        /// The rejected path as supplied.
        path: String,
    },
}

/// A failed fetch against one of the backend endpoints.
///
/// Both endpoints share the same failure classes; what differs is the
/// consumer reaction (fixed error message for identity, log-and-continue for
/// polls), which lives with the callers, not here.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (connect failure, timeout, ...).
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        /// Endpoint path the request targeted.
        endpoint: &'static str,
        /// Underlying client error.
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status.
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        /// Endpoint path the request targeted.
        endpoint: &'static str,
        /// The non-success status code.
        status: StatusCode,
    },

    /// The response body did not match the endpoint's JSON contract.
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        /// Endpoint path the request targeted.
        endpoint: &'static str,
        /// Underlying decode error.
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Endpoint path the failed request targeted.
    pub fn endpoint(&self) -> &'static str {
        match self {
            FetchError::Transport { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => endpoint,
        }
    }
}

/// Categories of fetch failures, counted per run.
///
/// Statuses the backend actually produces get their own buckets for better
/// shutdown reports; everything else collapses into the generic variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Transport-level failures
    RequestTimeout,
    ConnectError,
    RequestError,
    BodyError,
    RedirectError,
    // Response decoding
    DecodeError,
    // Non-2xx statuses
    StatusBadRequest,          // 400
    StatusUnauthorized,        // 401
    StatusForbidden,           // 403
    StatusNotFound,            // 404
    StatusTooManyRequests,     // 429
    StatusInternalServerError, // 500
    StatusBadGateway,          // 502
    StatusServiceUnavailable,  // 503
    StatusGatewayTimeout,      // 504
    StatusOther,
    // Anything else
    OtherError,
}

/// Informational events worth counting but not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// An out-of-order poll completion was dropped by the sequence guard.
    StaleResponseDiscarded,
    /// A tick fired while dispatch was suspended by backoff.
    TickSuppressed,
    /// Backoff engaged after the configured failure streak.
    PollSuspended,
    /// First success after a suspension reset the schedule.
    PollResumed,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::RequestTimeout => "Request timeout",
            ErrorType::ConnectError => "Connect error",
            ErrorType::RequestError => "Request error",
            ErrorType::BodyError => "Response body error",
            ErrorType::RedirectError => "Redirect error",
            ErrorType::DecodeError => "Response decode error",
            ErrorType::StatusBadRequest => "Bad Request (400)",
            ErrorType::StatusUnauthorized => "Unauthorized (401)",
            ErrorType::StatusForbidden => "Forbidden (403)",
            ErrorType::StatusNotFound => "Not Found (404)",
            ErrorType::StatusTooManyRequests => "Too Many Requests (429)",
            ErrorType::StatusInternalServerError => "Internal Server Error (500)",
            ErrorType::StatusBadGateway => "Bad Gateway (502)",
            ErrorType::StatusServiceUnavailable => "Service Unavailable (503)",
            ErrorType::StatusGatewayTimeout => "Gateway Timeout (504)",
            ErrorType::StatusOther => "Other non-2xx status",
            ErrorType::OtherError => "Other error",
        }
    }
}

impl std::fmt::Display for InfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::StaleResponseDiscarded => "Stale response discarded",
            InfoType::TickSuppressed => "Tick suppressed by backoff",
            InfoType::PollSuspended => "Polling suspended",
            InfoType::PollResumed => "Polling resumed",
        }
    }
}
