//! Client SDK for SL's (Storstockholms Lokaltrafik) Trafiklab APIs.
//!
//! Covers three endpoints: realtime departure boards, trip planning and
//! free-text stop location lookup. The provider computes everything; this
//! crate builds requests, classifies provider errors and decodes responses
//! into read-only domain values.
//!
//! ```no_run
//! use trafiklab_sl::{SlClient, SlClientConfig, TimeTableRequest};
//!
//! # async fn example() -> Result<(), trafiklab_sl::SlError> {
//! let client = SlClient::new(
//!     SlClientConfig::new()
//!         .with_user_agent("my-app/1.0")
//!         .with_timetables_api_key("..."),
//! )?;
//!
//! let mut request = TimeTableRequest::new();
//! request.set_stop_id("1002");
//! let board = client.get_timetable(&request).await?;
//! for entry in board.timetable() {
//!     println!("{} towards {}", entry.line_name(), entry.direction());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod convert;
pub mod domain;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

mod validate;

pub use client::{SlClient, SlClientConfig};
pub use error::SlError;
pub use request::{
    RoutePlanningRequest, RoutePlanningSearchType, StopLocationLookupRequest, TimeTableRequest,
};
pub use response::{RoutePlanningResponse, StopLocationLookupResponse, TimeTableResponse};
pub use transport::{HttpWebClient, WebClient, WebResponse};
