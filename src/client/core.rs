use crate::client::builder::CareerClientBuilder;
use crate::config::ClientConfig;
use crate::logging::Logger;
use crate::transport::{HttpTransport, Payload, RawResponse};
use crate::types::{Advisory, AnalysisRequest, AnalysisResponse, Capability, Report};
use crate::{Error, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info_span, warn, Span};
use url::Url;
use uuid::Uuid;

/// Client for every capability of the analysis backend.
///
/// Cheap to clone; clones share one connection pool and nothing else.
#[derive(Clone)]
pub struct CareerClient {
    pub(crate) transport: Arc<HttpTransport>,
    pub(crate) logger: Logger,
    pub(crate) request_timeout: Duration,
    pub(crate) hr_qa_timeout: Duration,
}

/// Per-call identity: which capability, and the correlation id sent upstream.
pub(crate) struct CallScope {
    pub capability: Capability,
    pub request_id: String,
}

impl CallScope {
    pub fn new(capability: Capability) -> Self {
        Self {
            capability,
            request_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn source(&self) -> &'static str {
        self.capability.name()
    }

    pub fn span(&self) -> Span {
        info_span!(
            "backend_call",
            capability = self.capability.name(),
            request_id = %self.request_id
        )
    }
}

impl CareerClient {
    pub fn builder() -> CareerClientBuilder {
        CareerClientBuilder::new()
    }

    pub fn from_config(config: &ClientConfig, logger: Logger) -> Result<Self> {
        CareerClientBuilder::from_config(config).logger(logger).build()
    }

    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    /// Timeout applied to calls for `capability`.
    pub fn timeout_for(&self, capability: Capability) -> Duration {
        match capability {
            Capability::HrQa => self.hr_qa_timeout,
            _ => self.request_timeout,
        }
    }

    /// Route a request to its capability, keeping that capability's failure policy.
    pub async fn submit(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        match request {
            AnalysisRequest::AtsCheck {
                resume,
                job_description,
            } => self
                .check_resume_against_job(&resume, &job_description)
                .await
                .map(AnalysisResponse::Report),
            AnalysisRequest::HrQuestion { query } => self
                .answer_hr_question(&query)
                .await
                .map(AnalysisResponse::Advisory),
            AnalysisRequest::JobPosting { url } => self
                .analyze_job_posting(&url)
                .await
                .map(AnalysisResponse::Advisory),
            AnalysisRequest::ResumeTailor {
                resume,
                job_posting_url,
                github_url,
                write_up,
            } => self
                .tailor_resume_and_guide(&resume, &job_posting_url, &github_url, &write_up)
                .await
                .map(AnalysisResponse::Tailored),
        }
    }

    pub(crate) async fn send(&self, scope: &CallScope, payload: Payload) -> Result<RawResponse> {
        self.transport
            .post(
                scope.capability.path(),
                payload,
                self.timeout_for(scope.capability),
                &scope.request_id,
                scope.source(),
            )
            .await
    }
}

/// Log a strict-path failure and hand it back for propagation.
pub(crate) fn log_failure(scope: &CallScope, err: Error) -> Error {
    error!(origin = %err.origin(), status = ?err.status(), "{} failed: {}", scope.source(), err);
    err
}

/// Fold a post-validation outcome into a best-effort value, logging failures.
pub(crate) fn degrade(scope: &CallScope, outcome: Result<Report>) -> Advisory<String> {
    match outcome {
        Ok(report) => {
            if !report.is_found() {
                warn!("Received empty response from {}", scope.source());
            }
            report.into()
        }
        Err(err) => {
            error!(
                origin = %err.origin(),
                status = ?err.status(),
                "{} unavailable, returning no result: {}",
                scope.source(),
                err
            );
            Advisory::Unavailable(err)
        }
    }
}
