//! Pluggable HTTP transport.
//!
//! The client only needs "send a request with URL + parameters, get back
//! status, body and the parameters that were sent". The [`WebClient`] trait
//! captures that contract so tests can inject scripted transports;
//! [`HttpWebClient`] is the `reqwest`-backed production implementation.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use crate::error::SlError;

/// User agent fragment identifying this SDK.
pub const SDK_USER_AGENT: &str = "Trafiklab/Sl-rust-sdk";

/// A raw response from the transport, echoing the request that produced it.
#[derive(Debug, Clone)]
pub struct WebResponse {
    url: String,
    request_parameters: HashMap<String, String>,
    status: u16,
    body: String,
}

impl WebResponse {
    /// Create a response. `request_parameters` are the parameters that were
    /// sent, echoed back for error reporting.
    pub fn new(
        url: String,
        request_parameters: HashMap<String, String>,
        status: u16,
        body: String,
    ) -> Self {
        Self {
            url,
            request_parameters,
            status,
            body,
        }
    }

    /// The URL the request was sent to, without query parameters.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// All parameters that were sent with the request.
    pub fn request_parameters(&self) -> &HashMap<String, String> {
        &self.request_parameters
    }

    /// One parameter that was sent with the request, if present.
    pub fn request_parameter(&self, name: &str) -> Option<&str> {
        self.request_parameters.get(name).map(String::as_str)
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// The transport contract consumed by the client.
///
/// Implementations must be concurrency-safe if the client is to be shared
/// across tasks. A transport failure is fatal to the call; the client
/// propagates it unchanged.
pub trait WebClient {
    /// Send a GET request with the given query parameters.
    fn make_request(
        &self,
        url: &str,
        parameters: &[(String, String)],
    ) -> impl Future<Output = Result<WebResponse, SlError>> + Send;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpWebClient {
    http: reqwest::Client,
}

impl HttpWebClient {
    /// Create a transport. The user agent is composed as
    /// `"{application} VIA {SDK}"` so the provider can attribute traffic.
    pub fn new(application_user_agent: &str, timeout_secs: u64) -> Result<Self, SlError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("{application_user_agent} VIA {SDK_USER_AGENT}"))
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { http })
    }
}

impl WebClient for HttpWebClient {
    fn make_request(
        &self,
        url: &str,
        parameters: &[(String, String)],
    ) -> impl Future<Output = Result<WebResponse, SlError>> + Send {
        let echoed: HashMap<String, String> = parameters.iter().cloned().collect();
        let request = self.http.get(url).query(parameters);
        let url = url.to_string();

        async move {
            let response = request.send().await.map_err(|e| {
                if e.is_timeout() {
                    SlError::RequestTimedOut { url: url.clone() }
                } else {
                    SlError::Http(e)
                }
            })?;

            let status = response.status().as_u16();
            let body = response.text().await?;

            Ok(WebResponse::new(url, echoed, status, body))
        }
    }
}
