//! Vehicles on journey legs.

use super::TransportMode;

/// The operator code SL reports for every vehicle.
pub const SL_OPERATOR_CODE: u32 = 275;
/// The operator name SL reports for every vehicle.
pub const SL_OPERATOR_NAME: &str = "SL";
/// The operator URL SL reports for every vehicle.
pub const SL_OPERATOR_URL: &str = "https://sl.se";

/// The vehicle used to travel a journey leg.
///
/// SL is an aggregator: every vehicle reports SL as its operator, not the
/// company actually running it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub(crate) name: String,
    pub(crate) number: i64,
    pub(crate) transport_mode: Option<TransportMode>,
    pub(crate) line_number: String,
}

impl Vehicle {
    /// The display name of the vehicle, e.g. "Tunnelbanans gröna linje 17".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The trip number, uniquely identifying the trip this vehicle makes on
    /// a given day.
    pub fn number(&self) -> i64 {
        self.number
    }

    /// The mode of transport, when the provider category is a known one.
    pub fn transport_mode(&self) -> Option<TransportMode> {
        self.transport_mode
    }

    /// The line number the vehicle runs on, e.g. "17".
    pub fn line_number(&self) -> &str {
        &self.line_number
    }

    /// The code of the operating company. Always SL's own code.
    pub fn operator_code(&self) -> u32 {
        SL_OPERATOR_CODE
    }

    /// The name of the operating company. Always "SL".
    pub fn operator_name(&self) -> &str {
        SL_OPERATOR_NAME
    }

    /// The URL of the operating company.
    pub fn operator_url(&self) -> &str {
        SL_OPERATOR_URL
    }
}
