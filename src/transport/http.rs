use crate::{Error, ErrorContext, Result};
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Header carrying our per-call correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request body encodings the backend accepts.
pub enum Payload {
    Multipart(reqwest::multipart::Form),
    Json(serde_json::Value),
    Form(Vec<(&'static str, String)>),
}

impl Payload {
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Multipart(_) => "multipart",
            Payload::Json(_) => "json",
            Payload::Form(_) => "form",
        }
    }
}

/// Status and body of a completed round trip, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: Url, default_timeout: Duration, use_system_proxy: bool) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(default_timeout)
            .connect_timeout(default_timeout.min(Duration::from_secs(10)))
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if !use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL (including any path prefix) joined with a capability path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Issue exactly one POST. Only transport failures are errors here; any
    /// HTTP status comes back as a [`RawResponse`].
    pub async fn post(
        &self,
        path: &str,
        payload: Payload,
        timeout: Duration,
        request_id: &str,
        source: &str,
    ) -> Result<RawResponse> {
        let url = self.endpoint(path);
        debug!(url = %url, payload = payload.kind(), "Sending request");

        let request = self
            .client
            .post(&url)
            .timeout(timeout)
            .header(ACCEPT, "application/json")
            .header(REQUEST_ID_HEADER, request_id);

        let request = match payload {
            Payload::Multipart(form) => request.multipart(form),
            Payload::Json(body) => request.json(&body),
            Payload::Form(fields) => request.form(&fields),
        };

        let response = request
            .send()
            .await
            .map_err(|e| transport_error("request failed", e, source))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error("failed to read response body", e, source))?;

        debug!(status, bytes = body.len(), "Received response");
        Ok(RawResponse { status, body })
    }
}

fn transport_error(what: &str, e: reqwest::Error, source: &str) -> Error {
    let context = ErrorContext::new().with_source(source);
    if e.is_timeout() {
        Error::timeout_with_context(format!("{}: timed out ({})", what, e), context)
    } else {
        Error::network_with_context(format!("{}: {}", what, e), context)
    }
}
