//! Backend API contract: endpoint wire types and the HTTP client.

mod client;
mod types;

pub use client::ApiClient;
pub use types::{IpRecord, SystemInfo};
