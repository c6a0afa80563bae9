//! Job-posting analysis by URL.

use crate::client::core::{degrade, CallScope, CareerClient};
use crate::client::{normalize, validation};
use crate::transport::Payload;
use crate::types::{Advisory, Capability};
use crate::Result;
use tracing::{debug, info, Instrument};

impl CareerClient {
    /// Analyze the job posting at `url`.
    ///
    /// The URL must be absolute with a host; anything else is rejected before
    /// any request. Failures after that are logged and returned as
    /// [`Advisory::Unavailable`].
    pub async fn analyze_job_posting(&self, url: &str) -> Result<Advisory<String>> {
        self.logger
            .attach(async {
                let scope = CallScope::new(Capability::JobPosting);
                let span = scope.span();
                self.run_job_posting(&scope, url).instrument(span).await
            })
            .await
    }

    async fn run_job_posting(&self, scope: &CallScope, url: &str) -> Result<Advisory<String>> {
        validation::validate_absolute_url("url", url, scope.source())?;
        debug!(url, "Sending job posting URL for analysis");

        let outcome = self
            .send(scope, Payload::Form(vec![("url", url.to_string())]))
            .await
            .and_then(|raw| {
                debug!(status = raw.status, "Received job analysis response");
                normalize::response_report(scope.capability, &raw)
            });

        let advisory = degrade(scope, outcome);
        if advisory.is_answer() {
            info!("Successfully retrieved job analysis report");
        }
        Ok(advisory)
    }
}
