//! Error categorization and backoff schedule.
//!
//! This module provides functions to categorize fetch failures and to build
//! the poll-suspension delay schedule used when backoff is enabled.

use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use super::stats::PollStats;
use super::types::{ErrorType, FetchError};

/// Creates the poll-suspension delay schedule.
///
/// Delays start at twice the poll interval and grow by
/// `POLL_BACKOFF_FACTOR` per further consecutive failure, capped at
/// `POLL_BACKOFF_MAX_DELAY_SECS`. The iterator never exhausts; the cap
/// bounds growth instead, so a recovering backend is always re-probed.
///
/// # Returns
///
/// A delay iterator the poller draws from each time a suspension is extended.
pub fn backoff_schedule(poll_interval: Duration) -> impl Iterator<Item = Duration> {
    let interval_ms = u64::try_from(poll_interval.as_millis())
        .unwrap_or(u64::MAX)
        .max(1);
    ExponentialBackoff::from_millis(crate::config::POLL_BACKOFF_FACTOR)
        .factor(interval_ms) // First delay is 2x the poll interval
        .max_delay(Duration::from_secs(crate::config::POLL_BACKOFF_MAX_DELAY_SECS))
}

/// Categorizes a [`FetchError`] into an [`ErrorType`].
///
/// Status failures map by code, decode failures to their own bucket, and
/// transport failures by the underlying `reqwest` error class.
pub fn categorize_fetch_error(error: &FetchError) -> ErrorType {
    match error {
        FetchError::Status { status, .. } => match status.as_u16() {
            400 => ErrorType::StatusBadRequest,
            401 => ErrorType::StatusUnauthorized,
            403 => ErrorType::StatusForbidden,
            404 => ErrorType::StatusNotFound,
            429 => ErrorType::StatusTooManyRequests,
            500 => ErrorType::StatusInternalServerError,
            502 => ErrorType::StatusBadGateway,
            503 => ErrorType::StatusServiceUnavailable,
            504 => ErrorType::StatusGatewayTimeout,
            _ => ErrorType::StatusOther,
        },
        FetchError::Decode { .. } => ErrorType::DecodeError,
        FetchError::Transport { source, .. } => categorize_reqwest_error(source),
    }
}

/// Categorizes a transport-level `reqwest::Error`.
///
/// Timeout and connect are checked before the broader `is_request` class,
/// which would otherwise swallow both.
fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_timeout() {
        ErrorType::RequestTimeout
    } else if error.is_connect() {
        ErrorType::ConnectError
    } else if error.is_redirect() {
        ErrorType::RedirectError
    } else if error.is_body() {
        ErrorType::BodyError
    } else if error.is_request() {
        ErrorType::RequestError
    } else {
        ErrorType::OtherError
    }
}

/// Updates poll statistics based on a [`FetchError`].
///
/// Analyzes the error and increments the appropriate [`ErrorType`] counter.
pub fn update_error_stats(stats: &PollStats, error: &FetchError) {
    let error_type = categorize_fetch_error(error);
    stats.increment_error(error_type);
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::time::Duration;

    #[test]
    fn test_backoff_schedule_first_delay_doubles_interval() {
        let interval = Duration::from_millis(3000);
        let first = backoff_schedule(interval)
            .next()
            .expect("schedule should be endless");
        assert_eq!(first, Duration::from_millis(6000));
    }

    #[test]
    fn test_backoff_schedule_grows_monotonically() {
        let delays: Vec<Duration> = backoff_schedule(Duration::from_millis(100))
            .take(5)
            .collect();
        for i in 1..delays.len() {
            assert!(
                delays[i] >= delays[i - 1],
                "delay should not shrink: {:?} then {:?}",
                delays[i - 1],
                delays[i]
            );
        }
    }

    #[test]
    fn test_backoff_schedule_respects_max_delay() {
        let cap = Duration::from_secs(crate::config::POLL_BACKOFF_MAX_DELAY_SECS);
        for delay in backoff_schedule(Duration::from_secs(10)).take(20) {
            assert!(
                delay <= cap,
                "delay {:?} exceeds the {:?} cap",
                delay,
                cap
            );
        }
    }

    #[test]
    fn test_status_codes_categorize_to_their_buckets() {
        let cases = [
            (StatusCode::BAD_REQUEST, ErrorType::StatusBadRequest),
            (StatusCode::UNAUTHORIZED, ErrorType::StatusUnauthorized),
            (StatusCode::FORBIDDEN, ErrorType::StatusForbidden),
            (StatusCode::NOT_FOUND, ErrorType::StatusNotFound),
            (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorType::StatusTooManyRequests,
            ),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorType::StatusInternalServerError,
            ),
            (StatusCode::BAD_GATEWAY, ErrorType::StatusBadGateway),
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorType::StatusServiceUnavailable,
            ),
            (StatusCode::GATEWAY_TIMEOUT, ErrorType::StatusGatewayTimeout),
            (StatusCode::IM_A_TEAPOT, ErrorType::StatusOther),
        ];
        for (status, expected) in cases {
            let error = FetchError::Status {
                endpoint: "/api/top_ips",
                status,
            };
            assert_eq!(
                categorize_fetch_error(&error),
                expected,
                "status {} should categorize as {:?}",
                status,
                expected
            );
        }
    }

    #[test]
    fn test_status_categorization_feeds_stats() {
        let stats = PollStats::new();
        let error = FetchError::Status {
            endpoint: "/api/top_ips",
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        update_error_stats(&stats, &error);
        update_error_stats(&stats, &error);
        assert_eq!(
            stats.get_error_count(ErrorType::StatusServiceUnavailable),
            2
        );
    }

    // Transport and decode categorization need real reqwest::Error instances,
    // which require a live socket to produce. Those paths are covered by the
    // httptest-backed client tests in src/api/client.rs.
}
