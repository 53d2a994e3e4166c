//! Response envelopes.
//!
//! Each envelope owns one decode pass over its section of a response
//! document and exposes the decoded collection in order, along with the
//! original transport response as passthrough metadata.

use crate::convert::{ConversionError, convert_stop_location, convert_timetable, convert_trip};
use crate::domain::{StopLocationEntry, TimeTableEntry, TimeTableType, Trip};
use crate::transport::WebResponse;
use crate::types::{DeparturesDocument, TripDocument, TypeaheadDocument};

/// A decoded departure board.
///
/// Entries are in category-block order (metro, bus, train, tram, ship; the
/// provider's order within each block), not chronological order. Callers
/// needing chronological order must sort.
#[derive(Debug, Clone)]
pub struct TimeTableResponse {
    timetable: Vec<TimeTableEntry>,
    original_response: WebResponse,
}

impl TimeTableResponse {
    pub(crate) fn from_document(
        original_response: WebResponse,
        document: &DeparturesDocument,
    ) -> Result<Self, ConversionError> {
        let data = document.response_data.clone().unwrap_or_default();
        Ok(Self {
            timetable: convert_timetable(&data)?,
            original_response,
        })
    }

    /// The requested timetable, as an ordered list of entries.
    pub fn timetable(&self) -> &[TimeTableEntry] {
        &self.timetable
    }

    /// The kind of entries in this timetable. SL only provides departures.
    pub fn timetable_type(&self) -> TimeTableType {
        TimeTableType::Departures
    }

    /// The original response from the API.
    pub fn original_response(&self) -> &WebResponse {
        &self.original_response
    }
}

/// A decoded set of route suggestions.
#[derive(Debug, Clone)]
pub struct RoutePlanningResponse {
    trips: Vec<Trip>,
    original_response: WebResponse,
}

impl RoutePlanningResponse {
    pub(crate) fn from_document(
        original_response: WebResponse,
        document: &TripDocument,
    ) -> Result<Self, ConversionError> {
        let trips = document
            .trips
            .iter()
            .map(convert_trip)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            trips,
            original_response,
        })
    }

    /// The trip candidates, in the provider's order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// The original response from the API.
    pub fn original_response(&self) -> &WebResponse {
        &self.original_response
    }
}

/// A decoded stop location search result.
#[derive(Debug, Clone)]
pub struct StopLocationLookupResponse {
    found_stop_locations: Vec<StopLocationEntry>,
    original_response: WebResponse,
}

impl StopLocationLookupResponse {
    pub(crate) fn from_document(
        original_response: WebResponse,
        document: &TypeaheadDocument,
    ) -> Self {
        let found_stop_locations = document
            .response_data
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(convert_stop_location)
            .collect();
        Self {
            found_stop_locations,
            original_response,
        }
    }

    /// The stop areas that were found, in the provider's relevance order.
    pub fn found_stop_locations(&self) -> &[StopLocationEntry] {
        &self.found_stop_locations
    }

    /// The original response from the API.
    pub fn original_response(&self) -> &WebResponse {
        &self.original_response
    }
}
