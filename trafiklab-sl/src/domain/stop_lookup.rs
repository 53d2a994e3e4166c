//! Stop locations found by the typeahead search.

use super::TransportMode;

/// One match from a stop location lookup.
///
/// Matches are returned in the provider's own relevance order; the ranking
/// weight behind it is not exposed by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct StopLocationEntry {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
}

impl StopLocationEntry {
    /// The id of this stop area.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The name of this stop area.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The sorting weight for this station. SL does not expose its ranking,
    /// so this is always 0.
    pub fn weight(&self) -> u32 {
        0
    }

    /// Whether the given mode of transport stops at this location. SL does
    /// not provide this information, so this is always true.
    pub fn is_stop_location_for_transport_mode(&self, _transport_mode: TransportMode) -> bool {
        true
    }
}
