//! Capabilities and the request value submitted for each of them.

use super::file::ResumeFile;
use std::fmt;

pub const ATS_CHECK_PATH: &str = "/api/ats-checker/check";
pub const HR_QA_PATH: &str = "/api/hr-qa/answer";
pub const JOB_ANALYSIS_PATH: &str = "/api/job-analysis/analyze";
pub const RESUME_BUILDER_PATH: &str = "/api/resume-builder/check";

/// What a caller sees when a call fails after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Failures are returned as `Err` and must interrupt the workflow.
    Strict,
    /// Failures are logged and surfaced as an empty result value.
    BestEffort,
}

/// One backend endpoint serving one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Ats,
    HrQa,
    JobPosting,
    ResumeTailor,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::Ats,
        Capability::HrQa,
        Capability::JobPosting,
        Capability::ResumeTailor,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Capability::Ats => ATS_CHECK_PATH,
            Capability::HrQa => HR_QA_PATH,
            Capability::JobPosting => JOB_ANALYSIS_PATH,
            Capability::ResumeTailor => RESUME_BUILDER_PATH,
        }
    }

    /// Stable name used in logs and error context.
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Ats => "ats-check",
            Capability::HrQa => "hr-qa",
            Capability::JobPosting => "job-posting",
            Capability::ResumeTailor => "resume-tailor",
        }
    }

    pub fn policy(&self) -> FailurePolicy {
        match self {
            Capability::Ats | Capability::ResumeTailor => FailurePolicy::Strict,
            Capability::HrQa | Capability::JobPosting => FailurePolicy::BestEffort,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One user-submitted unit of work.
#[derive(Debug, Clone)]
pub enum AnalysisRequest {
    AtsCheck {
        resume: ResumeFile,
        job_description: String,
    },
    HrQuestion {
        query: String,
    },
    JobPosting {
        url: String,
    },
    ResumeTailor {
        resume: ResumeFile,
        job_posting_url: String,
        github_url: String,
        write_up: String,
    },
}

impl AnalysisRequest {
    pub fn ats_check(resume: ResumeFile, job_description: impl Into<String>) -> Self {
        AnalysisRequest::AtsCheck {
            resume,
            job_description: job_description.into(),
        }
    }

    pub fn hr_question(query: impl Into<String>) -> Self {
        AnalysisRequest::HrQuestion {
            query: query.into(),
        }
    }

    pub fn job_posting(url: impl Into<String>) -> Self {
        AnalysisRequest::JobPosting { url: url.into() }
    }

    pub fn resume_tailor(
        resume: ResumeFile,
        job_posting_url: impl Into<String>,
        github_url: impl Into<String>,
        write_up: impl Into<String>,
    ) -> Self {
        AnalysisRequest::ResumeTailor {
            resume,
            job_posting_url: job_posting_url.into(),
            github_url: github_url.into(),
            write_up: write_up.into(),
        }
    }

    pub fn kind(&self) -> Capability {
        match self {
            AnalysisRequest::AtsCheck { .. } => Capability::Ats,
            AnalysisRequest::HrQuestion { .. } => Capability::HrQa,
            AnalysisRequest::JobPosting { .. } => Capability::JobPosting,
            AnalysisRequest::ResumeTailor { .. } => Capability::ResumeTailor,
        }
    }

    /// Run the same local checks the client applies before any I/O.
    pub fn validate(&self) -> crate::Result<()> {
        use crate::client::validation;
        let source = self.kind().name();
        match self {
            AnalysisRequest::AtsCheck {
                resume,
                job_description,
            } => {
                validation::validate_resume_file(resume, source)?;
                validation::require_text("job_description", job_description, source)
            }
            AnalysisRequest::HrQuestion { query } => validation::validate_query(query, source),
            AnalysisRequest::JobPosting { url } => {
                validation::validate_absolute_url("url", url, source).map(|_| ())
            }
            AnalysisRequest::ResumeTailor {
                resume,
                job_posting_url,
                github_url,
                write_up,
            } => {
                validation::validate_resume_file(resume, source)?;
                validation::validate_absolute_url("job_posting_url", job_posting_url, source)?;
                validation::validate_absolute_url("github_url", github_url, source)?;
                validation::require_text("write_up", write_up, source)
            }
        }
    }
}
