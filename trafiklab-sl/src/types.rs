//! Raw SL API response DTOs.
//!
//! These types map directly to the provider's JSON responses. `Option` is
//! used liberally because SL omits fields rather than sending null in many
//! cases, and a few id-like fields arrive as either strings or numbers
//! depending on the endpoint.

use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

/// Deserialize a field that may arrive as a JSON string or number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// As [`string_or_number`], for optional fields.
fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Deserialize an integer that may arrive as a JSON string or number.
fn integer_string_or_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected an integer, got {s:?}"))),
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| de::Error::custom(format!("expected an integer, got {n}"))),
        other => Err(de::Error::custom(format!(
            "expected an integer, got {other}"
        ))),
    }
}

/// Response from the realtime departures endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeparturesDocument {
    /// Provider status code; 0 on success.
    pub status_code: Option<i64>,

    /// Human-readable status message accompanying an error code.
    pub message: Option<String>,

    /// The actual departure board, absent on errors.
    pub response_data: Option<DeparturesData>,
}

/// The departure board payload, bucketed per transport category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeparturesData {
    #[serde(default)]
    pub metros: Vec<DepartureDto>,

    #[serde(default)]
    pub buses: Vec<DepartureDto>,

    #[serde(default)]
    pub trains: Vec<DepartureDto>,

    #[serde(default)]
    pub trams: Vec<DepartureDto>,

    #[serde(default)]
    pub ships: Vec<DepartureDto>,
}

/// A single departure on the board.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepartureDto {
    #[serde(deserialize_with = "string_or_number")]
    pub stop_area_number: String,

    pub stop_area_name: String,

    /// Line group name, e.g. "Tunnelbanans gröna linje". Often absent.
    #[serde(default)]
    pub group_of_line: Option<String>,

    #[serde(deserialize_with = "string_or_number")]
    pub line_number: String,

    pub destination: String,

    /// Scheduled time, `2024-03-15T14:30:00`.
    pub time_tabled_date_time: String,

    /// Realtime-estimated time, same format.
    pub expected_date_time: String,

    /// Human-readable display time, e.g. "3 min".
    pub display_time: String,

    #[serde(deserialize_with = "string_or_number")]
    pub journey_number: String,

    /// Provider category: METRO, BUS, TRAIN, TRAM or SHIP.
    pub transport_mode: String,

    /// Service deviations attached to this departure.
    #[serde(default)]
    pub deviations: Option<Vec<DeviationDto>>,
}

/// A service deviation attached to a departure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviationDto {
    /// Deviation consequence, e.g. "CANCELLED" or "INFORMATION".
    #[serde(default)]
    pub consequence: Option<String>,

    #[serde(default)]
    pub text: Option<String>,
}

/// Response from the trip planning endpoint (HAFAS envelope).
#[derive(Debug, Clone, Deserialize)]
pub struct TripDocument {
    #[serde(rename = "Trip", default)]
    pub trips: Vec<TripDto>,
}

/// One trip candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct TripDto {
    #[serde(rename = "LegList")]
    pub leg_list: LegListDto,
}

/// Wrapper around the legs of a trip.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegListDto {
    #[serde(rename = "Leg", default)]
    pub legs: Vec<LegDto>,
}

/// One leg of a trip candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct LegDto {
    /// Leg discriminator: "JNY" for a vehicle journey, "WALK" for a walk.
    #[serde(rename = "type")]
    pub leg_type: String,

    /// Destination display text of the vehicle. Absent on walks.
    #[serde(default)]
    pub direction: Option<String>,

    /// The vehicle serving this leg. Absent on walks.
    #[serde(rename = "Product", default)]
    pub product: Option<ProductDto>,

    /// The complete stop sequence, departure and arrival included. Only
    /// present on journey legs when the passlist was requested.
    #[serde(rename = "Stops", default)]
    pub stops: Option<StopListDto>,

    #[serde(rename = "Origin")]
    pub origin: StopDto,

    #[serde(rename = "Destination")]
    pub destination: StopDto,

    #[serde(rename = "Notes", default)]
    pub notes: Option<NoteListDto>,
}

/// Wrapper around a leg's stop sequence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopListDto {
    #[serde(rename = "Stop", default)]
    pub stops: Vec<StopDto>,
}

/// Wrapper around a leg's notes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteListDto {
    #[serde(rename = "Note", default)]
    pub notes: Vec<NoteDto>,
}

/// A free-text remark on a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteDto {
    #[serde(default)]
    pub value: Option<String>,
}

/// The vehicle ("product") serving a journey leg.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    pub name: String,

    /// Trip number; a numeric string on the wire.
    #[serde(deserialize_with = "integer_string_or_number")]
    pub num: i64,

    /// Transport category, padded with trailing spaces, e.g. "BUS     ".
    #[serde(rename = "catOut")]
    pub cat_out: String,

    #[serde(deserialize_with = "string_or_number")]
    pub line: String,
}

/// A stop location in a trip-planner response.
#[derive(Debug, Clone, Deserialize)]
pub struct StopDto {
    /// Rikshållplats id, present on leg endpoints.
    #[serde(rename = "extId", default, deserialize_with = "optional_string_or_number")]
    pub ext_id: Option<String>,

    /// Prefixed stop area id, present on passlist stops.
    #[serde(
        rename = "mainMastExtId",
        default,
        deserialize_with = "optional_string_or_number"
    )]
    pub main_mast_ext_id: Option<String>,

    pub name: String,

    pub lat: f64,

    pub lon: f64,

    #[serde(rename = "depDate", default)]
    pub dep_date: Option<String>,

    #[serde(rename = "depTime", default)]
    pub dep_time: Option<String>,

    #[serde(rename = "arrDate", default)]
    pub arr_date: Option<String>,

    #[serde(rename = "arrTime", default)]
    pub arr_time: Option<String>,

    #[serde(rename = "rtDepDate", default)]
    pub rt_dep_date: Option<String>,

    #[serde(rename = "rtDepTime", default)]
    pub rt_dep_time: Option<String>,

    #[serde(rename = "rtArrDate", default)]
    pub rt_arr_date: Option<String>,

    #[serde(rename = "rtArrTime", default)]
    pub rt_arr_time: Option<String>,

    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub track: Option<String>,

    /// Generic date, only seen on walk-leg endpoints.
    #[serde(default)]
    pub date: Option<String>,

    /// Generic time, only seen on walk-leg endpoints.
    #[serde(default)]
    pub time: Option<String>,
}

/// Response from the typeahead (stop lookup) endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypeaheadDocument {
    pub status_code: Option<i64>,

    pub message: Option<String>,

    /// Matches in provider relevance order, absent on errors.
    pub response_data: Option<Vec<SiteDto>>,
}

/// One typeahead match.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteDto {
    #[serde(rename = "SiteId", deserialize_with = "string_or_number")]
    pub site_id: String,

    #[serde(rename = "Name")]
    pub name: String,

    /// Longitude in integer micro-degrees, as a numeric string.
    #[serde(rename = "X", deserialize_with = "integer_string_or_number")]
    pub x: i64,

    /// Latitude in integer micro-degrees, as a numeric string.
    #[serde(rename = "Y", deserialize_with = "integer_string_or_number")]
    pub y: i64,
}
