//! Decoded domain values exposed by the SDK.
//!
//! Everything in this module is a read-only view over a decoded API
//! response: constructed once by the response envelopes, never mutated
//! afterwards, and owned exclusively by the envelope that created it.

mod leg;
mod stop;
mod stop_lookup;
pub mod time;
mod timetable;
mod transport_mode;
mod trip;
pub(crate) mod vehicle;

pub use leg::{JourneyLeg, Leg, WalkLeg};
pub use stop::{Stop, VehicleStop};
pub use stop_lookup::StopLocationEntry;
pub use time::{PROVIDER_TIMEZONE, TimeError};
pub use timetable::{TimeTableEntry, TimeTableType};
pub use transport_mode::{ProductCode, ProductFilter, TransportMode};
pub use trip::Trip;
pub use vehicle::{SL_OPERATOR_CODE, SL_OPERATOR_NAME, SL_OPERATOR_URL, Vehicle};
