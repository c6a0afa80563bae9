//! Resume tailoring: resume, job posting, GitHub profile and personal statement.

use crate::client::core::{log_failure, CallScope, CareerClient};
use crate::client::normalize::{self, RESULT_FIELD};
use crate::client::validation;
use crate::transport::{Payload, RawResponse};
use crate::types::{Capability, ResumeFile, TailoredResume};
use crate::Result;
use reqwest::multipart::Form;
use tracing::{debug, info, Instrument};

impl CareerClient {
    /// Request a tailored resume and application guide.
    ///
    /// Strict: PDF generation downstream depends on a well-formed result, so
    /// any failure, including a body that is not a JSON object, is an `Err`.
    pub async fn tailor_resume_and_guide(
        &self,
        resume: &ResumeFile,
        job_posting_url: &str,
        github_url: &str,
        write_up: &str,
    ) -> Result<TailoredResume> {
        self.logger
            .attach(async {
                let scope = CallScope::new(Capability::ResumeTailor);
                let span = scope.span();
                self.run_tailor(&scope, resume, job_posting_url, github_url, write_up)
                    .instrument(span)
                    .await
            })
            .await
    }

    async fn run_tailor(
        &self,
        scope: &CallScope,
        resume: &ResumeFile,
        job_posting_url: &str,
        github_url: &str,
        write_up: &str,
    ) -> Result<TailoredResume> {
        let source = scope.source();
        validation::validate_resume_file(resume, source)?;
        validation::validate_absolute_url("job_posting_url", job_posting_url, source)?;
        validation::validate_absolute_url("github_url", github_url, source)?;
        validation::require_text("write_up", write_up, source)?;

        info!("Starting resume tailoring");
        debug!(
            file = resume.file_name(),
            bytes = resume.len(),
            job_posting_url,
            github_url,
            "Tailoring inputs"
        );

        let form = Form::new()
            .part("file", resume.to_part()?)
            .text("job_posting_url", job_posting_url.to_string())
            .text("github_url", github_url.to_string())
            .text("write_up", write_up.to_string());

        let raw = self
            .send(scope, Payload::Multipart(form))
            .await
            .map_err(|e| log_failure(scope, e))?;

        let tailored = decode_tailored(scope.capability, &raw).map_err(|e| log_failure(scope, e))?;
        info!(found = tailored.result.is_found(), "Resume tailoring completed");
        Ok(tailored)
    }
}

fn decode_tailored(capability: Capability, raw: &RawResponse) -> Result<TailoredResume> {
    normalize::ensure_success(capability, raw)?;
    let body = normalize::parse_json_body(capability, raw)?;
    let result = normalize::string_field(capability, &body, RESULT_FIELD)?;
    Ok(TailoredResume {
        result,
        raw_response: body,
    })
}
