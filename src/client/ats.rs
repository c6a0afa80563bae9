//! ATS check: resume PDF plus job description, scored by the backend.

use crate::client::core::{log_failure, CallScope, CareerClient};
use crate::client::{normalize, validation};
use crate::transport::Payload;
use crate::types::{Capability, Report, ResumeFile};
use crate::Result;
use reqwest::multipart::Form;
use tracing::{debug, info, Instrument};

impl CareerClient {
    /// Submit a resume and job description and return the compatibility report.
    ///
    /// Strict: transport, status and decode failures are returned as `Err`.
    /// A 2xx answer without a report gives [`Report::NotFound`].
    pub async fn check_resume_against_job(
        &self,
        resume: &ResumeFile,
        job_description: &str,
    ) -> Result<Report> {
        self.logger
            .attach(async {
                let scope = CallScope::new(Capability::Ats);
                let span = scope.span();
                self.run_ats_check(&scope, resume, job_description)
                    .instrument(span)
                    .await
            })
            .await
    }

    async fn run_ats_check(
        &self,
        scope: &CallScope,
        resume: &ResumeFile,
        job_description: &str,
    ) -> Result<Report> {
        validation::validate_resume_file(resume, scope.source())?;
        validation::require_text("job_description", job_description, scope.source())?;

        info!("Starting ATS compatibility check");
        debug!(file = resume.file_name(), bytes = resume.len(), "Processing resume file");

        let form = Form::new()
            .part("file", resume.to_part()?)
            .text("job_description", job_description.to_string());

        let raw = self
            .send(scope, Payload::Multipart(form))
            .await
            .map_err(|e| log_failure(scope, e))?;
        let report =
            normalize::response_report(scope.capability, &raw).map_err(|e| log_failure(scope, e))?;

        info!(found = report.is_found(), "ATS check completed successfully");
        Ok(report)
    }
}
