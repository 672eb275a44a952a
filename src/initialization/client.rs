//! HTTP client initialization.
//!
//! This module provides functions to initialize the HTTP client with proper
//! configuration for backend requests.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, USER_AGENT};
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client with default settings.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header identifying this tool and its version
/// - Timeout from configuration
/// - Rustls TLS backend (no native TLS)
///
/// # Arguments
///
/// * `config` - Configuration containing the timeout setting
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
