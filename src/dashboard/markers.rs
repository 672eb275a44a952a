//! Projection of ranked IP records into map markers.
//!
//! Pure data mapping for the geographic panel. No I/O, no filtering: every
//! record becomes exactly one marker, in input order.

use serde::Serialize;

use crate::api::IpRecord;

/// One plotted point on the attack map.
///
/// Serializable so a map front-end can consume the marker list directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    /// Source address, used as the marker key and tooltip title.
    pub ip: String,
    /// Event count driving marker size.
    pub count: u64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl From<&IpRecord> for MapMarker {
    fn from(record: &IpRecord) -> Self {
        Self {
            ip: record.ip.clone(),
            count: record.count,
            lat: record.latitude,
            lon: record.longitude,
        }
    }
}

/// Projects a ranked record list into markers, preserving order.
pub fn to_map_markers(records: &[IpRecord]) -> Vec<MapMarker> {
    records.iter().map(MapMarker::from).collect()
}
