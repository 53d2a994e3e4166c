//! Trips suggested by the route planner.

use super::{Leg, Stop};

/// One complete suggested journey from origin to destination, composed of
/// ordered legs. A transfer is required between any two consecutive legs.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub(crate) legs: Vec<Leg>,
}

impl Trip {
    /// The legs making up this trip, in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// The departure stop of the first leg, or `None` for an empty trip.
    pub fn departure(&self) -> Option<&Stop> {
        self.legs.first().map(Leg::departure)
    }

    /// The arrival stop of the last leg, or `None` for an empty trip.
    pub fn arrival(&self) -> Option<&Stop> {
        self.legs.last().map(Leg::arrival)
    }

    /// Duration of the whole trip in seconds.
    ///
    /// `None` for an empty trip; 0 when either endpoint's scheduled time is
    /// unknown.
    pub fn duration_seconds(&self) -> Option<i64> {
        let departure = self.departure()?;
        let arrival = self.arrival()?;
        match (
            arrival.scheduled_arrival_time(),
            departure.scheduled_departure_time(),
        ) {
            (Some(arrival), Some(departure)) => Some((arrival - departure).num_seconds()),
            _ => Some(0),
        }
    }
}
