//! Provider error classification.
//!
//! SL's endpoints signal errors through two different legacy envelopes: the
//! departure-board family sets a numeric `StatusCode`, the HAFAS-based trip
//! planner a string `errorCode`. Bodies are not guaranteed mutually
//! exclusive, so both checks run, in that fixed order, as two independent
//! lookup tables.

use serde_json::Value;

use crate::error::SlError;
use crate::transport::WebResponse;

/// Default message for a provider-side key requirement (`StatusCode` 1001).
const KEY_REQUIRED_MESSAGE: &str =
    "an API key is required for this request. Obtain a free key at https://www.trafiklab.se/api";

/// Inspect a decoded response body for error markers.
///
/// Returns `Ok(())` when neither error envelope signals a problem, in which
/// case the body can be handed to the matching decoder. `api` is a
/// human-readable label for the endpoint, used in quota messages.
pub(crate) fn validate_response(
    response: &WebResponse,
    body: &Value,
    api: &str,
) -> Result<(), SlError> {
    if let Some(code) = body.get("StatusCode").and_then(Value::as_i64)
        && code != 0
    {
        tracing::debug!(code, api, "provider returned an error status code");
        return Err(classify_status_code(code, response, body, api));
    }

    if let Some(code) = body.get("errorCode").and_then(Value::as_str) {
        tracing::debug!(code, api, "provider returned an error code");
        return Err(classify_error_code(code, response, body));
    }

    Ok(())
}

/// Dispatch table for the numeric `StatusCode` envelope.
fn classify_status_code(code: i64, response: &WebResponse, body: &Value, api: &str) -> SlError {
    match code {
        1001 => SlError::KeyRequired {
            message: KEY_REQUIRED_MESSAGE.to_string(),
        },
        1002 | 1005 => SlError::InvalidKey {
            key: echoed_parameter(response, "key"),
        },
        1003 => SlError::InvalidRequest {
            message: "Invalid API".to_string(),
            parameters: response.request_parameters().clone(),
        },
        1004 => SlError::ServiceUnavailable {
            url: response.url().to_string(),
            reason: "The service is currently unavailable for requests with a priority over 2."
                .to_string(),
        },
        1006 => SlError::QuotaExceeded {
            api: api.to_string(),
            key: echoed_parameter(response, "key"),
            reason: "Requests per minute exceeded".to_string(),
        },
        1007 => SlError::QuotaExceeded {
            api: api.to_string(),
            key: echoed_parameter(response, "key"),
            reason: "Requests per month exceeded".to_string(),
        },
        5321 | 5322 | 5323 => SlError::InvalidRequest {
            message: "One or more parameters are invalid".to_string(),
            parameters: response.request_parameters().clone(),
        },
        4001 => SlError::InvalidStopLocation {
            parameters: response.request_parameters().clone(),
        },
        _ => SlError::InvalidRequest {
            message: body_text(body, "Message"),
            parameters: response.request_parameters().clone(),
        },
    }
}

/// Dispatch table for the string `errorCode` envelope.
fn classify_error_code(code: &str, response: &WebResponse, body: &Value) -> SlError {
    match code {
        "API_AUTH" => SlError::InvalidKey {
            key: echoed_parameter(response, "key"),
        },
        "API_QUOTA" => SlError::QuotaExceeded {
            api: response.url().to_string(),
            key: echoed_parameter(response, "key"),
            reason: "Quota exceeded".to_string(),
        },
        "API_PARAM" => SlError::InvalidRequest {
            message: body_text(body, "errorText"),
            parameters: response.request_parameters().clone(),
        },
        "SVC_LOC_NEAR" | "SVC_LOC" => SlError::InvalidStopLocation {
            parameters: response.request_parameters().clone(),
        },
        "SVC_DATATIME_PERIOD" => SlError::DateTimeOutOfRange {
            parameters: response.request_parameters().clone(),
            date: echoed_parameter(response, "date"),
        },
        _ => SlError::InvalidRequest {
            message: body_text(body, "errorText"),
            parameters: response.request_parameters().clone(),
        },
    }
}

fn echoed_parameter(response: &WebResponse, name: &str) -> String {
    response.request_parameter(name).unwrap_or_default().to_string()
}

fn body_text(body: &Value, field: &str) -> String {
    body.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
