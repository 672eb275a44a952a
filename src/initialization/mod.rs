//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - Logger (plain or JSON format)
//! - HTTP client (with timeout and user agent)
//! - Backend API client
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error_handling::InitializationError;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the backend API client from configuration.
///
/// Builds the HTTP client and resolves the endpoint URLs against the
/// configured API base in one step.
///
/// # Errors
///
/// Returns an `InitializationError` if the HTTP client cannot be built or
/// the API base is not a valid absolute URL.
pub fn init_api_client(config: &Config) -> Result<ApiClient, InitializationError> {
    let http = init_client(config)?;
    ApiClient::new(http, &config.api_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_api_client_with_defaults() {
        let config = Config::default();
        assert!(init_api_client(&config).is_ok());
    }

    #[test]
    fn test_init_api_client_rejects_relative_base() {
        let config = Config {
            api_base: "api.example.com/no-scheme".into(),
            ..Default::default()
        };
        assert!(matches!(
            init_api_client(&config),
            Err(InitializationError::InvalidApiBase { .. })
        ));
    }
}
