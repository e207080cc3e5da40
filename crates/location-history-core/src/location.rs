//! The coordinate record.

use serde::{Deserialize, Serialize};

/// A single coordinate report for an order.
///
/// Latitude and longitude are opaque text on the wire and in memory; this
/// service records what the courier device sent and never interprets the
/// values as numbers. A field absent from an append payload deserializes to
/// the empty string rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude, as supplied by the caller.
    #[serde(default)]
    pub lat: String,
    /// Longitude, as supplied by the caller.
    #[serde(default)]
    pub lng: String,
}

impl Location {
    /// Creates a new `Location` from latitude and longitude text.
    #[must_use]
    pub fn new(lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            lng: lng.into(),
        }
    }
}
