//! Wire types for the SOC backend API.
//!
//! These structs mirror the backend's JSON contract exactly; no renaming or
//! enrichment happens at this layer.

use serde::{Deserialize, Serialize};

/// Host identity returned by `/api/system_info`.
///
/// Fetched once per run; there is no refresh endpoint behavior to model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Hostname of the monitored system.
    pub hostname: String,
    /// Internal (LAN) IP address of the monitored system.
    pub internal_ip: String,
}

/// One ranked source IP from `/api/top_ips`.
///
/// The backend returns these already ranked; the list is replaced wholesale
/// on every successful poll, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpRecord {
    /// Observed source IP address.
    pub ip: String,
    /// Number of packets/events attributed to this IP.
    pub count: u64,
    /// Geolocated city name.
    pub city: String,
    /// Geolocated region/state name.
    pub region: String,
    /// Geolocated country name.
    pub country: String,
    /// ISP or organization owning the address.
    pub isp: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}
