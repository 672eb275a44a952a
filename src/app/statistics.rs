//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, PollStats};

/// Prints error and info statistics for a completed run to the log.
///
/// This function is used internally by the library and in tests.
pub fn print_poll_statistics(stats: &PollStats) {
    let total_errors = stats.total_errors();
    let total_info = stats.total_info();

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}
