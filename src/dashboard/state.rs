//! View state for the dashboard panels.
//!
//! These are plain snapshots pushed through watch channels. Subscribers read
//! whatever was published last; only the owning background task writes.

use chrono::{DateTime, Utc};

use crate::api::{IpRecord, SystemInfo};
use crate::config::IDENTITY_FETCH_ERROR;

/// State of the host identity panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityView {
    /// True until the one-shot identity fetch has settled.
    pub loading: bool,
    /// Identity record, present only after a successful fetch.
    pub system_info: Option<SystemInfo>,
    /// Fixed operator-facing message, present only after a failed fetch.
    pub error: Option<String>,
}

impl Default for IdentityView {
    fn default() -> Self {
        Self {
            loading: true,
            system_info: None,
            error: None,
        }
    }
}

impl IdentityView {
    /// Settled view after a successful fetch.
    pub fn loaded(info: SystemInfo) -> Self {
        Self {
            loading: false,
            system_info: Some(info),
            error: None,
        }
    }

    /// Settled view after a failed fetch. The message is always the same
    /// fixed string; failure detail goes to the log, not the panel.
    pub fn failed() -> Self {
        Self {
            loading: false,
            system_info: None,
            error: Some(IDENTITY_FETCH_ERROR.to_string()),
        }
    }

    /// True once the fetch has settled, successfully or not.
    pub fn is_settled(&self) -> bool {
        !self.loading
    }
}

/// State of the top source IPs panel.
///
/// A successful poll replaces `records` wholesale; a failed poll leaves the
/// previous snapshot untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopIpsView {
    /// Current ranked records, exactly as the backend returned them.
    pub records: Vec<IpRecord>,
    /// Wall-clock time of the last applied poll.
    pub last_updated: Option<DateTime<Utc>>,
    /// Number of polls whose responses have been applied to this view.
    pub polls_applied: u64,
}

impl TopIpsView {
    /// Replaces the snapshot with a fresh backend response.
    pub fn apply(&mut self, records: Vec<IpRecord>) {
        self.records = records;
        self.last_updated = Some(Utc::now());
        self.polls_applied += 1;
    }
}
