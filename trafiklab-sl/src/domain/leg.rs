//! Legs of a planned trip.

use chrono::NaiveDateTime;

use super::{Stop, Vehicle, VehicleStop};

/// One uninterrupted segment of a [`Trip`](super::Trip): either aboard a
/// single vehicle or a walk between two stop locations.
///
/// The two variants make the absence of vehicle data on a walk a type-level
/// guarantee rather than a runtime null-check.
#[derive(Debug, Clone, PartialEq)]
pub enum Leg {
    /// A vehicle-borne segment.
    Journey(JourneyLeg),
    /// A walking transfer between two stop locations.
    Walk(WalkLeg),
}

/// A leg travelled aboard a single vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyLeg {
    pub(crate) departure: VehicleStop,
    pub(crate) arrival: VehicleStop,
    pub(crate) vehicle: Vehicle,
    pub(crate) direction: String,
    pub(crate) intermediary_stops: Vec<VehicleStop>,
    pub(crate) notes: Vec<String>,
}

impl JourneyLeg {
    /// The stop at which this leg starts.
    pub fn departure(&self) -> &VehicleStop {
        &self.departure
    }

    /// The stop at which this leg ends.
    pub fn arrival(&self) -> &VehicleStop {
        &self.arrival
    }

    /// The vehicle used on this leg.
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// The destination display text of the vehicle.
    pub fn direction(&self) -> &str {
        &self.direction
    }

    /// Stops between departure and arrival, in travel order. The departure
    /// and arrival stops themselves are not part of this list.
    pub fn intermediary_stops(&self) -> &[VehicleStop] {
        &self.intermediary_stops
    }

    /// Free-text remarks about this leg.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}

/// A walking transfer between two stop locations.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkLeg {
    pub(crate) departure: Stop,
    pub(crate) arrival: Stop,
    pub(crate) notes: Vec<String>,
}

impl WalkLeg {
    /// The stop at which this walk starts.
    pub fn departure(&self) -> &Stop {
        &self.departure
    }

    /// The stop at which this walk ends.
    pub fn arrival(&self) -> &Stop {
        &self.arrival
    }

    /// Free-text remarks about this leg.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}

impl Leg {
    /// The stop location at which this leg starts.
    pub fn departure(&self) -> &Stop {
        match self {
            Leg::Journey(leg) => leg.departure.stop(),
            Leg::Walk(leg) => &leg.departure,
        }
    }

    /// The stop location at which this leg ends.
    pub fn arrival(&self) -> &Stop {
        match self {
            Leg::Journey(leg) => leg.arrival.stop(),
            Leg::Walk(leg) => &leg.arrival,
        }
    }

    /// The vehicle used on this leg, if any.
    pub fn vehicle(&self) -> Option<&Vehicle> {
        match self {
            Leg::Journey(leg) => Some(&leg.vehicle),
            Leg::Walk(_) => None,
        }
    }

    /// The vehicle's destination display text, absent on walks.
    pub fn direction(&self) -> Option<&str> {
        match self {
            Leg::Journey(leg) => Some(leg.direction.as_str()),
            Leg::Walk(_) => None,
        }
    }

    /// Free-text remarks about this leg.
    pub fn notes(&self) -> &[String] {
        match self {
            Leg::Journey(leg) => &leg.notes,
            Leg::Walk(leg) => &leg.notes,
        }
    }

    /// The scheduled departure time at the start of this leg.
    pub fn scheduled_departure_time(&self) -> Option<NaiveDateTime> {
        self.departure().scheduled_departure_time()
    }

    /// The scheduled arrival time at the end of this leg.
    pub fn scheduled_arrival_time(&self) -> Option<NaiveDateTime> {
        self.arrival().scheduled_arrival_time()
    }

    /// Duration of this leg in seconds, or 0 when either end's time is
    /// unknown.
    pub fn duration_seconds(&self) -> i64 {
        match (self.scheduled_arrival_time(), self.scheduled_departure_time()) {
            (Some(arrival), Some(departure)) => (arrival - departure).num_seconds(),
            _ => 0,
        }
    }
}
