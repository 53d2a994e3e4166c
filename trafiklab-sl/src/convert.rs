//! Conversion from raw API DTOs to domain types.
//!
//! This module handles the transformation of SL's JSON payloads into the
//! crate's validated domain types, including timestamp parsing and the
//! stop-sequence trimming for journey legs.

use crate::domain::time::{TimeError, parse_combined, parse_date_time_pair};
use crate::domain::{
    JourneyLeg, Leg, Stop, StopLocationEntry, TimeTableEntry, TransportMode, Trip, Vehicle,
    VehicleStop, WalkLeg,
};
use crate::types::{
    DepartureDto, DeparturesData, LegDto, ProductDto, SiteDto, StopDto, TripDto,
};

/// The prefix length on `mainMastExtId` stop area ids, e.g. `30010` on
/// `300101321`.
const MAIN_MAST_PREFIX_LEN: usize = 5;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a timestamp
    #[error(transparent)]
    InvalidTime(#[from] TimeError),

    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Convert a departure board payload into a combined, ordered timetable.
///
/// The five category buckets are iterated in a fixed order (metro, bus,
/// train, tram, ship); entries keep the provider's order within each bucket.
/// The result is therefore in category-block order, not chronological order.
pub(crate) fn convert_timetable(
    data: &DeparturesData,
) -> Result<Vec<TimeTableEntry>, ConversionError> {
    let buckets = [
        &data.metros,
        &data.buses,
        &data.trains,
        &data.trams,
        &data.ships,
    ];

    let mut timetable = Vec::with_capacity(buckets.iter().map(|b| b.len()).sum());
    for bucket in buckets {
        for entry in bucket {
            timetable.push(convert_departure(entry)?);
        }
    }
    Ok(timetable)
}

fn convert_departure(dto: &DepartureDto) -> Result<TimeTableEntry, ConversionError> {
    let line_name = match &dto.group_of_line {
        Some(group_of_line) => group_of_line.clone(),
        None => format!("{} {}", dto.line_number, dto.destination),
    };

    let is_cancelled = dto
        .deviations
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .any(|deviation| deviation.consequence.as_deref() == Some("CANCELLED"));

    Ok(TimeTableEntry {
        stop_id: dto.stop_area_number.clone(),
        stop_name: dto.stop_area_name.clone(),
        line_name,
        line_number: dto.line_number.clone(),
        direction: dto.destination.clone(),
        trip_number: dto.journey_number.clone(),
        scheduled_stop_time: parse_combined(&dto.time_tabled_date_time)?,
        estimated_stop_time: parse_combined(&dto.expected_date_time)?,
        display_time: dto.display_time.clone(),
        transport_mode: TransportMode::from_provider_category(&dto.transport_mode),
        is_cancelled,
    })
}

/// Convert one trip candidate.
pub(crate) fn convert_trip(dto: &TripDto) -> Result<Trip, ConversionError> {
    let legs = dto
        .leg_list
        .legs
        .iter()
        .map(convert_leg)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Trip { legs })
}

/// Convert one leg, branching on the provider discriminator.
///
/// Journey legs ("JNY") carry a vehicle and the complete stop sequence; the
/// first and last entries of that sequence become the typed departure and
/// arrival stops, everything in between the intermediary stops. Any other
/// type is a walk with endpoint stops only.
fn convert_leg(dto: &LegDto) -> Result<Leg, ConversionError> {
    let notes = dto
        .notes
        .as_ref()
        .map(|list| list.notes.iter().filter_map(|n| n.value.clone()).collect())
        .unwrap_or_default();

    if dto.leg_type != "JNY" {
        return Ok(Leg::Walk(WalkLeg {
            departure: convert_stop(&dto.origin)?,
            arrival: convert_stop(&dto.destination)?,
            notes,
        }));
    }

    let product = dto
        .product
        .as_ref()
        .ok_or(ConversionError::MissingField("Product"))?;
    let stops = &dto
        .stops
        .as_ref()
        .ok_or(ConversionError::MissingField("Stops"))?
        .stops;
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ConversionError::MissingField("Stops.Stop")),
    };

    // The endpoints take their track from the leg's own Origin/Destination
    // nodes when present; the passlist entries often lack it.
    let departure = convert_vehicle_stop(first, dto.origin.track.as_deref())?;
    let arrival = convert_vehicle_stop(last, dto.destination.track.as_deref())?;

    let intermediary_stops = if stops.len() > 2 {
        stops[1..stops.len() - 1]
            .iter()
            .map(|stop| convert_vehicle_stop(stop, None))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        Vec::new()
    };

    Ok(Leg::Journey(JourneyLeg {
        departure,
        arrival,
        vehicle: convert_vehicle(product),
        direction: dto.direction.clone().unwrap_or_default(),
        intermediary_stops,
        notes,
    }))
}

fn convert_vehicle(dto: &ProductDto) -> Vehicle {
    Vehicle {
        name: dto.name.clone(),
        number: dto.num,
        transport_mode: TransportMode::from_provider_category(&dto.cat_out),
        line_number: dto.line.clone(),
    }
}

/// Convert a plain stop as found on walk-leg endpoints.
pub(crate) fn convert_stop(dto: &StopDto) -> Result<Stop, ConversionError> {
    let stop_id = dto
        .ext_id
        .clone()
        .ok_or(ConversionError::MissingField("extId"))?;
    let (scheduled_departure_time, scheduled_arrival_time) = convert_stop_times(dto)?;

    Ok(Stop {
        stop_id,
        stop_name: dto.name.clone(),
        latitude: dto.lat,
        longitude: dto.lon,
        scheduled_departure_time,
        scheduled_arrival_time,
        platform: dto.track.clone(),
    })
}

/// Convert a passlist stop into a vehicle stop with realtime estimates.
///
/// The stop area id is taken from `mainMastExtId` with its fixed-length
/// prefix stripped. `track_override` replaces the stop's own track when the
/// enclosing leg provides one.
pub(crate) fn convert_vehicle_stop(
    dto: &StopDto,
    track_override: Option<&str>,
) -> Result<VehicleStop, ConversionError> {
    let main_mast_ext_id = dto
        .main_mast_ext_id
        .as_deref()
        .ok_or(ConversionError::MissingField("mainMastExtId"))?;
    let stop_id = main_mast_ext_id
        .get(MAIN_MAST_PREFIX_LEN..)
        .unwrap_or_default()
        .to_string();

    let (scheduled_departure_time, scheduled_arrival_time) = convert_stop_times(dto)?;

    let realtime_departure_time = match (&dto.rt_dep_date, &dto.rt_dep_time) {
        (Some(date), Some(time)) => Some(parse_date_time_pair(date, time)?),
        _ => None,
    };
    let realtime_arrival_time = match (&dto.rt_arr_date, &dto.rt_arr_time) {
        (Some(date), Some(time)) => Some(parse_date_time_pair(date, time)?),
        _ => None,
    };

    let platform = track_override
        .map(str::to_string)
        .or_else(|| dto.track.clone());

    Ok(VehicleStop {
        stop: Stop {
            stop_id,
            stop_name: dto.name.clone(),
            latitude: dto.lat,
            longitude: dto.lon,
            scheduled_departure_time,
            scheduled_arrival_time,
            platform,
        },
        realtime_departure_time,
        realtime_arrival_time,
    })
}

/// Scheduled departure/arrival for a stop record.
///
/// A record lacking both but exposing a generic date/time pair (walk-leg
/// endpoints) treats that single moment as both its arrival and departure.
fn convert_stop_times(
    dto: &StopDto,
) -> Result<(Option<chrono::NaiveDateTime>, Option<chrono::NaiveDateTime>), ConversionError> {
    let mut departure = match (&dto.dep_date, &dto.dep_time) {
        (Some(date), Some(time)) => Some(parse_date_time_pair(date, time)?),
        _ => None,
    };
    let mut arrival = match (&dto.arr_date, &dto.arr_time) {
        (Some(date), Some(time)) => Some(parse_date_time_pair(date, time)?),
        _ => None,
    };

    if departure.is_none()
        && arrival.is_none()
        && let (Some(date), Some(time)) = (&dto.date, &dto.time)
    {
        let moment = parse_date_time_pair(date, time)?;
        departure = Some(moment);
        arrival = Some(moment);
    }

    Ok((departure, arrival))
}

/// Convert one typeahead match. Coordinates arrive as integer micro-degrees.
pub(crate) fn convert_stop_location(dto: &SiteDto) -> StopLocationEntry {
    StopLocationEntry {
        id: dto.site_id.clone(),
        name: dto.name.clone(),
        latitude: dto.y as f64 / 1_000_000.0,
        longitude: dto.x as f64 / 1_000_000.0,
    }
}
