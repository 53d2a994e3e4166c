//! Typed request objects for the three SL operations.
//!
//! Requests are plain parameter holders: setters perform the documented
//! normalization (query truncation, timezone coercion) but no local
//! validation — invalid ids and the like surface as provider errors at call
//! time. A request should be treated as immutable once handed to an
//! operation.

use chrono::{DateTime, NaiveDateTime, TimeZone};

use crate::domain::time::{now_in_provider_timezone, to_provider_timezone};
use crate::domain::{ProductCode, ProductFilter, TimeTableType};

/// The maximum search query length accepted by the typeahead endpoint.
const MAX_SEARCH_QUERY_CHARS: usize = 20;

/// Whether a route should depart or arrive at the requested time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoutePlanningSearchType {
    /// The trip should depart at the specified time.
    #[default]
    DepartAtSpecifiedTime,
    /// The trip should arrive at the specified time.
    ArriveAtSpecifiedTime,
}

/// A request for a departure board at one stop location.
#[derive(Debug, Clone, Default)]
pub struct TimeTableRequest {
    stop_id: String,
    timetable_type: TimeTableType,
    product_filter: ProductFilter,
    date_time: Option<NaiveDateTime>,
}

impl TimeTableRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// The Rikshållplats id of the stop to fetch a board for.
    pub fn stop_id(&self) -> &str {
        &self.stop_id
    }

    pub fn set_stop_id(&mut self, stop_id: impl Into<String>) {
        self.stop_id = stop_id.into();
    }

    /// Departures (default) or arrivals. SL only supports departures; an
    /// arrivals request is rejected by the client before any network call.
    pub fn timetable_type(&self) -> TimeTableType {
        self.timetable_type
    }

    pub fn set_timetable_type(&mut self, timetable_type: TimeTableType) {
        self.timetable_type = timetable_type;
    }

    /// The transport categories to include. Empty means unrestricted.
    pub fn product_filter(&self) -> ProductFilter {
        self.product_filter
    }

    /// Restrict results to one more transport category.
    pub fn add_product_to_filter(&mut self, code: ProductCode) {
        self.product_filter.add(code);
    }

    /// The query time, defaulting to the current time in the provider's
    /// civil timezone when unset.
    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time.unwrap_or_else(now_in_provider_timezone)
    }

    /// Set the query time. The instant is coerced into the provider's civil
    /// timezone.
    pub fn set_date_time<Z: TimeZone>(&mut self, date_time: DateTime<Z>) {
        self.date_time = Some(to_provider_timezone(date_time));
    }

    /// Revert to querying at the current time.
    pub fn clear_date_time(&mut self) {
        self.date_time = None;
    }
}

/// A request for route suggestions between two stop locations.
#[derive(Debug, Clone)]
pub struct RoutePlanningRequest {
    origin_stop_id: String,
    destination_stop_id: String,
    via_stop_id: Option<String>,
    language: String,
    search_type: RoutePlanningSearchType,
    product_filter: ProductFilter,
    date_time: Option<NaiveDateTime>,
}

impl Default for RoutePlanningRequest {
    fn default() -> Self {
        Self {
            origin_stop_id: String::new(),
            destination_stop_id: String::new(),
            via_stop_id: None,
            language: "sv".to_string(),
            search_type: RoutePlanningSearchType::default(),
            product_filter: ProductFilter::none(),
            date_time: None,
        }
    }
}

impl RoutePlanningRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// The Rikshållplats id of the origin stop.
    pub fn origin_stop_id(&self) -> &str {
        &self.origin_stop_id
    }

    pub fn set_origin_stop_id(&mut self, origin_stop_id: impl Into<String>) {
        self.origin_stop_id = origin_stop_id.into();
    }

    /// The Rikshållplats id of the destination stop.
    pub fn destination_stop_id(&self) -> &str {
        &self.destination_stop_id
    }

    pub fn set_destination_stop_id(&mut self, destination_stop_id: impl Into<String>) {
        self.destination_stop_id = destination_stop_id.into();
    }

    /// An optional stop the trip must pass through.
    pub fn via_stop_id(&self) -> Option<&str> {
        self.via_stop_id.as_deref()
    }

    pub fn set_via_stop_id(&mut self, via_stop_id: Option<String>) {
        self.via_stop_id = via_stop_id;
    }

    /// The response language. Defaults to "sv".
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Whether the query time is a departure or an arrival constraint.
    pub fn search_type(&self) -> RoutePlanningSearchType {
        self.search_type
    }

    pub fn set_search_type(&mut self, search_type: RoutePlanningSearchType) {
        self.search_type = search_type;
    }

    /// The transport categories to include. Empty means unrestricted.
    pub fn product_filter(&self) -> ProductFilter {
        self.product_filter
    }

    /// Restrict results to one more transport category.
    pub fn add_product_to_filter(&mut self, code: ProductCode) {
        self.product_filter.add(code);
    }

    /// The query time, defaulting to the current time in the provider's
    /// civil timezone when unset.
    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time.unwrap_or_else(now_in_provider_timezone)
    }

    /// Set the query time. The instant is coerced into the provider's civil
    /// timezone.
    pub fn set_date_time<Z: TimeZone>(&mut self, date_time: DateTime<Z>) {
        self.date_time = Some(to_provider_timezone(date_time));
    }

    /// Revert to querying at the current time.
    pub fn clear_date_time(&mut self) {
        self.date_time = None;
    }
}

/// A free-text stop location search.
#[derive(Debug, Clone)]
pub struct StopLocationLookupRequest {
    search_query: String,
    language: String,
    max_results: u32,
}

impl Default for StopLocationLookupRequest {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            language: "sv".to_string(),
            max_results: 10,
        }
    }
}

impl StopLocationLookupRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// The (partial) station name to search for.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Set the station name to search for. Input longer than 20 characters
    /// is silently truncated to the first 20 — documented endpoint
    /// behavior, not an error.
    pub fn set_search_query(&mut self, search_query: impl Into<String>) {
        let search_query = search_query.into();
        self.search_query = search_query.chars().take(MAX_SEARCH_QUERY_CHARS).collect();
    }

    /// The response language. Defaults to "sv".
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// The maximum number of results to return. The response may contain
    /// fewer, never more. Defaults to 10.
    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    pub fn set_max_results(&mut self, max_results: u32) {
        self.max_results = max_results;
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn search_query_never_exceeds_twenty_characters(query in ".{0,64}") {
            let mut request = StopLocationLookupRequest::new();
            request.set_search_query(query.clone());

            prop_assert!(request.search_query().chars().count() <= 20);
            // The stored value is always a prefix of the input.
            prop_assert!(query.starts_with(request.search_query()));
        }
    }
}
