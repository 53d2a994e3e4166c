//! Stop locations along a leg.

use chrono::NaiveDateTime;

/// A stop location with scheduled times, as it appears on a walking leg or
/// as part of a vehicle's stop sequence.
///
/// All times are provider-local civil time. A leg endpoint may know only one
/// of the two times: a trip's first stop has no arrival, its last no
/// departure.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub(crate) stop_id: String,
    pub(crate) stop_name: String,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) scheduled_departure_time: Option<NaiveDateTime>,
    pub(crate) scheduled_arrival_time: Option<NaiveDateTime>,
    pub(crate) platform: Option<String>,
}

impl Stop {
    /// The Rikshållplats id for this stop location.
    pub fn stop_id(&self) -> &str {
        &self.stop_id
    }

    /// The display name of this stop location.
    pub fn stop_name(&self) -> &str {
        &self.stop_name
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The scheduled departure time, if known at this stop.
    pub fn scheduled_departure_time(&self) -> Option<NaiveDateTime> {
        self.scheduled_departure_time
    }

    /// The scheduled arrival time, if known at this stop.
    pub fn scheduled_arrival_time(&self) -> Option<NaiveDateTime> {
        self.scheduled_arrival_time
    }

    /// The platform or track the vehicle stops at, if known.
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }
}

/// A stop made by a vehicle, carrying realtime estimates on top of the
/// scheduled times.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleStop {
    pub(crate) stop: Stop,
    pub(crate) realtime_departure_time: Option<NaiveDateTime>,
    pub(crate) realtime_arrival_time: Option<NaiveDateTime>,
}

impl VehicleStop {
    /// The underlying stop location and scheduled times.
    pub fn stop(&self) -> &Stop {
        &self.stop
    }

    /// The Rikshållplats id for this stop location.
    pub fn stop_id(&self) -> &str {
        self.stop.stop_id()
    }

    /// The display name of this stop location.
    pub fn stop_name(&self) -> &str {
        self.stop.stop_name()
    }

    /// The scheduled departure time, if known at this stop.
    pub fn scheduled_departure_time(&self) -> Option<NaiveDateTime> {
        self.stop.scheduled_departure_time()
    }

    /// The scheduled arrival time, if known at this stop.
    pub fn scheduled_arrival_time(&self) -> Option<NaiveDateTime> {
        self.stop.scheduled_arrival_time()
    }

    /// The platform or track the vehicle stops at, if known.
    pub fn platform(&self) -> Option<&str> {
        self.stop.platform()
    }

    /// The estimated (realtime) departure time. Falls back to the scheduled
    /// time when no realtime figure has been reported.
    pub fn estimated_departure_time(&self) -> Option<NaiveDateTime> {
        self.realtime_departure_time
            .or(self.stop.scheduled_departure_time)
    }

    /// The estimated (realtime) arrival time. Falls back to the scheduled
    /// time when no realtime figure has been reported.
    pub fn estimated_arrival_time(&self) -> Option<NaiveDateTime> {
        self.realtime_arrival_time
            .or(self.stop.scheduled_arrival_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn stop() -> Stop {
        Stop {
            stop_id: "1321".to_string(),
            stop_name: "Alvik".to_string(),
            latitude: 59.333,
            longitude: 18.011,
            scheduled_departure_time: Some(at(10, 0)),
            scheduled_arrival_time: Some(at(9, 58)),
            platform: Some("2".to_string()),
        }
    }

    #[test]
    fn estimated_times_prefer_realtime() {
        let vehicle_stop = VehicleStop {
            stop: stop(),
            realtime_departure_time: Some(at(10, 5)),
            realtime_arrival_time: Some(at(10, 2)),
        };

        assert_eq!(vehicle_stop.estimated_departure_time(), Some(at(10, 5)));
        assert_eq!(vehicle_stop.estimated_arrival_time(), Some(at(10, 2)));
        assert_eq!(vehicle_stop.scheduled_departure_time(), Some(at(10, 0)));
    }

    #[test]
    fn estimated_times_fall_back_to_scheduled() {
        let vehicle_stop = VehicleStop {
            stop: stop(),
            realtime_departure_time: None,
            realtime_arrival_time: None,
        };

        assert_eq!(vehicle_stop.estimated_departure_time(), Some(at(10, 0)));
        assert_eq!(vehicle_stop.estimated_arrival_time(), Some(at(9, 58)));
    }
}
