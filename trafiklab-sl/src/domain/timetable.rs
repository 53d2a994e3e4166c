//! Departure board entries.

use chrono::NaiveDateTime;

use super::TransportMode;

/// Whether a timetable lists departures or arrivals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeTableType {
    #[default]
    Departures,
    Arrivals,
}

/// An entry in a timetable, describing one departure of a vehicle at a stop
/// location.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeTableEntry {
    pub(crate) stop_id: String,
    pub(crate) stop_name: String,
    pub(crate) line_name: String,
    pub(crate) line_number: String,
    pub(crate) direction: String,
    pub(crate) trip_number: String,
    pub(crate) scheduled_stop_time: NaiveDateTime,
    pub(crate) estimated_stop_time: NaiveDateTime,
    pub(crate) display_time: String,
    pub(crate) transport_mode: Option<TransportMode>,
    pub(crate) is_cancelled: bool,
}

impl TimeTableEntry {
    /// The Rikshållplats id for the stop location.
    pub fn stop_id(&self) -> &str {
        &self.stop_id
    }

    /// The name of the stop at which the vehicle stops.
    pub fn stop_name(&self) -> &str {
        &self.stop_name
    }

    /// The name of the line group, e.g. "Tunnelbanans gröna linje". When the
    /// provider omits it, this is "{line number} {destination}".
    pub fn line_name(&self) -> &str {
        &self.line_name
    }

    /// The number of the line the vehicle runs on.
    pub fn line_number(&self) -> &str {
        &self.line_number
    }

    /// The destination display text of the departing vehicle.
    pub fn direction(&self) -> &str {
        &self.direction
    }

    /// The number of the trip the vehicle makes on this day.
    pub fn trip_number(&self) -> &str {
        &self.trip_number
    }

    /// The scheduled stop time, in provider-local civil time.
    pub fn scheduled_stop_time(&self) -> NaiveDateTime {
        self.scheduled_stop_time
    }

    /// The estimated (realtime) stop time, including possible delays.
    pub fn estimated_stop_time(&self) -> NaiveDateTime {
        self.estimated_stop_time
    }

    /// The human-readable display time, e.g. "3 min" or "14:05".
    pub fn display_time(&self) -> &str {
        &self.display_time
    }

    /// The mode of transport, when the provider category is a known one.
    pub fn transport_mode(&self) -> Option<TransportMode> {
        self.transport_mode
    }

    /// The operator of the vehicle. SL reports itself for every entry.
    pub fn operator(&self) -> &str {
        super::vehicle::SL_OPERATOR_NAME
    }

    /// The kind of timetable this entry belongs to. SL only provides
    /// departure boards.
    pub fn timetable_type(&self) -> TimeTableType {
        TimeTableType::Departures
    }

    /// Whether this vehicle's trip has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.is_cancelled
    }
}
