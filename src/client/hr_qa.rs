//! HR behavioral Q&A.

use crate::client::core::{degrade, CallScope, CareerClient};
use crate::client::{normalize, validation};
use crate::transport::Payload;
use crate::types::{Advisory, Capability};
use crate::Result;
use serde_json::json;
use tracing::{debug, info, Instrument};

impl CareerClient {
    /// Ask the HR Q&A service a behavioral interview question.
    ///
    /// Best-effort: the only `Err` is a blank query. Timeouts, bad statuses and
    /// malformed bodies are logged and returned as [`Advisory::Unavailable`].
    pub async fn answer_hr_question(&self, query: &str) -> Result<Advisory<String>> {
        self.logger
            .attach(async {
                let scope = CallScope::new(Capability::HrQa);
                let span = scope.span();
                self.run_hr_question(&scope, query).instrument(span).await
            })
            .await
    }

    async fn run_hr_question(&self, scope: &CallScope, query: &str) -> Result<Advisory<String>> {
        validation::validate_query(query, scope.source())?;
        debug!(query, "Sending HR question");

        let outcome = self
            .send(scope, Payload::Json(json!({ "query": query })))
            .await
            .and_then(|raw| {
                debug!(status = raw.status, "HR QA request completed");
                normalize::response_report(scope.capability, &raw)
            });

        let advisory = degrade(scope, outcome);
        if advisory.is_answer() {
            info!("Successfully retrieved HR answer");
        }
        Ok(advisory)
    }
}
