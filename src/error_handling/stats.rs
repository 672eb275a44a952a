//! Poll statistics tracking.
//!
//! This module provides thread-safe statistics tracking for poll attempts,
//! fetch failures by category, and informational events during a run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType};

/// Thread-safe poll statistics tracker.
///
/// Tracks attempt/success/failure counts alongside per-category error
/// counters and informational events, using atomic counters so the poller
/// task, the identity task, and observers can all touch it concurrently.
/// All categories are initialized to zero on creation.
///
/// # Thread Safety
///
/// This struct is thread-safe and can be shared across multiple tasks using `Arc`.
pub struct PollStats {
    polls_attempted: AtomicUsize,
    polls_succeeded: AtomicUsize,
    errors: HashMap<ErrorType, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

impl PollStats {
    /// Creates a tracker with every category zeroed.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        let mut info = HashMap::new();
        for info_type in InfoType::iter() {
            info.insert(info_type, AtomicUsize::new(0));
        }

        PollStats {
            polls_attempted: AtomicUsize::new(0),
            polls_succeeded: AtomicUsize::new(0),
            errors,
            info,
        }
    }

    /// Record a dispatched poll request.
    pub fn record_attempt(&self) {
        self.polls_attempted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a poll whose response was applied.
    pub fn record_success(&self) {
        self.polls_succeeded.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment a failure-category counter.
    ///
    /// All error types are initialized in the constructor, so a missing key
    /// indicates an initialization bug; it is logged rather than panicking so
    /// a stats bookkeeping bug can never take the poller down.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in PollStats initialization.",
                error
            );
        }
    }

    /// Increment an info counter.
    ///
    /// Same missing-key policy as [`PollStats::increment_error`].
    pub fn increment_info(&self, info_type: InfoType) {
        if let Some(counter) = self.info.get(&info_type) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment info counter for {:?} which is not in the map. \
                 This indicates a bug in PollStats initialization.",
                info_type
            );
        }
    }

    /// Number of poll requests dispatched so far.
    pub fn polls_attempted(&self) -> usize {
        self.polls_attempted.load(Ordering::SeqCst)
    }

    /// Number of poll responses applied so far.
    pub fn polls_succeeded(&self) -> usize {
        self.polls_succeeded.load(Ordering::SeqCst)
    }

    /// Get the count for a failure category.
    ///
    /// Returns 0 if the error type is not in the map (should never happen if
    /// properly initialized).
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or_else(|| {
                log::warn!(
                    "Error type {:?} not found in stats map, returning 0. \
                     This indicates a bug in PollStats initialization.",
                    error
                );
                0
            })
    }

    /// Get the count for an info type.
    ///
    /// Returns 0 if the info type is not in the map (should never happen if
    /// properly initialized).
    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info
            .get(&info_type)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or_else(|| {
                log::warn!(
                    "Info type {:?} not found in stats map, returning 0. \
                     This indicates a bug in PollStats initialization.",
                    info_type
                );
                0
            })
    }

    /// Get total failure count across all categories.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    /// Get total info count across all info types.
    pub fn total_info(&self) -> usize {
        InfoType::iter().map(|i| self.get_info_count(i)).sum()
    }
}

impl Default for PollStats {
    fn default() -> Self {
        Self::new()
    }
}
