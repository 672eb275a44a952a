//! HTTP client for the SOC backend.
//!
//! One thin wrapper over `reqwest` that knows the two endpoints, checks
//! statuses, and decodes bodies into the wire types. Reaction to failures
//! (fixed message vs. log-and-continue) belongs to the callers.

use std::sync::Arc;

use log::{debug, error};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::types::{IpRecord, SystemInfo};
use crate::config::{SYSTEM_INFO_ENDPOINT, TOP_IPS_ENDPOINT};
use crate::error_handling::{FetchError, InitializationError};

/// Client for the SOC backend API.
///
/// Cheap to clone; every fetch task holds its own copy. Endpoint URLs are
/// resolved against the base once at construction, so fetches cannot fail on
/// URL assembly.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Arc<reqwest::Client>,
    system_info_url: Url,
    top_ips_url: Url,
}

impl ApiClient {
    /// Creates a client for the backend at `api_base`.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError::InvalidApiBase`] if `api_base` is not
    /// an absolute URL the endpoint paths can be joined onto.
    pub fn new(http: Arc<reqwest::Client>, api_base: &str) -> Result<Self, InitializationError> {
        let base = Url::parse(api_base).map_err(|source| InitializationError::InvalidApiBase {
            url: api_base.to_string(),
            source,
        })?;
        let system_info_url =
            base.join(SYSTEM_INFO_ENDPOINT)
                .map_err(|source| InitializationError::InvalidApiBase {
                    url: api_base.to_string(),
                    source,
                })?;
        let top_ips_url =
            base.join(TOP_IPS_ENDPOINT)
                .map_err(|source| InitializationError::InvalidApiBase {
                    url: api_base.to_string(),
                    source,
                })?;
        Ok(Self {
            http,
            system_info_url,
            top_ips_url,
        })
    }

    /// Fetches the host identity record.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on transport failure, non-2xx status, or a
    /// body that does not decode as the contract shape.
    pub async fn system_info(&self) -> Result<SystemInfo, FetchError> {
        self.get_json(SYSTEM_INFO_ENDPOINT, &self.system_info_url)
            .await
    }

    /// Fetches the ranked source-IP list.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on transport failure, non-2xx status, or a
    /// body that does not decode as the contract shape.
    pub async fn top_ips(&self) -> Result<Vec<IpRecord>, FetchError> {
        self.get_json(TOP_IPS_ENDPOINT, &self.top_ips_url).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: &Url,
    ) -> Result<T, FetchError> {
        debug!("GET {url}");

        let response = self.http.get(url.clone()).send().await.map_err(|source| {
            error!(
                "Request to {} failed: {} (is_timeout: {}, is_connect: {})",
                endpoint,
                source,
                source.is_timeout(),
                source.is_connect()
            );
            FetchError::Transport { endpoint, source }
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("{} returned HTTP {}", endpoint, status);
            return Err(FetchError::Status { endpoint, status });
        }

        response.json::<T>().await.map_err(|source| {
            error!("Failed to decode {} response: {}", endpoint, source);
            FetchError::Decode { endpoint, source }
        })
    }
}
