//! SDK error types.
//!
//! Provider errors are decoded into one of these variants and propagated
//! unchanged; the SDK never recovers locally. Provider messages are kept
//! verbatim, and the parameters that were sent are carried along for
//! reproducibility. Callers should avoid echoing the `key` fields in logs.

use std::collections::HashMap;

/// Errors returned by the SL client.
#[derive(Debug, thiserror::Error)]
pub enum SlError {
    /// No API key was configured, or the provider demanded one.
    #[error("{message}")]
    KeyRequired { message: String },

    /// The API key was rejected by the provider.
    #[error("the API key was rejected by the provider")]
    InvalidKey {
        /// The key that was sent.
        key: String,
    },

    /// The provider rejected the request as invalid.
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// Provider message, verbatim.
        message: String,
        /// The parameters that were sent.
        parameters: HashMap<String, String>,
    },

    /// One or more stop locations in the request are invalid.
    #[error("one or more stop locations in this request are invalid")]
    InvalidStopLocation {
        /// The parameters that were sent.
        parameters: HashMap<String, String>,
    },

    /// The request quota for the key has been exceeded.
    #[error("quota exceeded on {api}: {reason}")]
    QuotaExceeded {
        /// Which API reported the quota violation.
        api: String,
        /// The key whose quota is exhausted.
        key: String,
        /// Provider reason, e.g. "Requests per minute exceeded".
        reason: String,
    },

    /// The provider is unavailable, or returned a body that could not be
    /// understood — which most often means it is down or rate-limiting
    /// upstream.
    #[error("service unavailable at {url}: {reason}")]
    ServiceUnavailable { url: String, reason: String },

    /// The requested date or time is outside the period supported by the
    /// provider.
    #[error("date/time outside the supported period: {date}")]
    DateTimeOutOfRange {
        /// The parameters that were sent.
        parameters: HashMap<String, String>,
        /// The offending date parameter.
        date: String,
    },

    /// The transport-level request timed out.
    #[error("request to {url} timed out")]
    RequestTimedOut { url: String },

    /// The operation is not supported by this provider; rejected locally
    /// before any network call.
    #[error("{message}")]
    NotSupported { message: String },

    /// HTTP request failed (network error, TLS failure, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
