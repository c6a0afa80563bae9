//! Explicit outcome types.
//!
//! An empty string is never a success value: a missing or blank backend field
//! becomes [`Report::NotFound`] or [`Advisory::NoAnswer`].

use super::resume::ResumeData;
use crate::{Error, ErrorContext, Result};

pub const NO_REPORT_FOUND: &str = "No report found.";
pub const NO_ANALYSIS_PROVIDED: &str = "No analysis provided.";

/// Result of a strict call that reached the backend successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Found(String),
    /// The backend answered 2xx but the report field was missing or blank.
    NotFound,
}

impl Report {
    pub fn from_field(value: Option<String>) -> Self {
        match value {
            Some(text) if !text.trim().is_empty() => Report::Found(text),
            _ => Report::NotFound,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Report::Found(_))
    }

    pub fn as_found(&self) -> Option<&str> {
        match self {
            Report::Found(text) => Some(text),
            Report::NotFound => None,
        }
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            Report::Found(text) => Some(text),
            Report::NotFound => None,
        }
    }

    /// Markdown to display, with the "No report found." placeholder.
    pub fn as_markdown(&self) -> &str {
        self.as_found().unwrap_or(NO_REPORT_FOUND)
    }
}

/// Result of a best-effort call. Failures are kept, not raised.
#[derive(Debug)]
pub enum Advisory<T> {
    Answer(T),
    /// The backend answered 2xx without usable content.
    NoAnswer,
    /// The call failed after validation; the error was logged.
    Unavailable(Error),
}

impl<T> Advisory<T> {
    pub fn is_answer(&self) -> bool {
        matches!(self, Advisory::Answer(_))
    }

    pub fn answer(&self) -> Option<&T> {
        match self {
            Advisory::Answer(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Advisory::Unavailable(err) => Some(err),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Advisory::Answer(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Advisory<U> {
        match self {
            Advisory::Answer(value) => Advisory::Answer(f(value)),
            Advisory::NoAnswer => Advisory::NoAnswer,
            Advisory::Unavailable(err) => Advisory::Unavailable(err),
        }
    }
}

impl From<Report> for Advisory<String> {
    fn from(report: Report) -> Self {
        match report {
            Report::Found(text) => Advisory::Answer(text),
            Report::NotFound => Advisory::NoAnswer,
        }
    }
}

/// Tailoring answer: the markdown guide plus the full response body.
#[derive(Debug, Clone, PartialEq)]
pub struct TailoredResume {
    pub result: Report,
    pub raw_response: serde_json::Value,
}

impl TailoredResume {
    pub fn analysis_markdown(&self) -> &str {
        self.result.as_found().unwrap_or(NO_ANALYSIS_PROVIDED)
    }

    /// Structured resume from the `resume_json` field, when the backend sent one.
    ///
    /// The field may be an object or a JSON-encoded string.
    pub fn resume_data(&self) -> Result<Option<ResumeData>> {
        let value = match self.raw_response.get("resume_json") {
            None | Some(serde_json::Value::Null) => return Ok(None),
            Some(serde_json::Value::String(s)) => {
                serde_json::from_str::<serde_json::Value>(s).map_err(resume_decode_error)?
            }
            Some(other) => other.clone(),
        };
        let data: ResumeData = serde_json::from_value(value).map_err(resume_decode_error)?;
        data.validate()?;
        Ok(Some(data))
    }
}

fn resume_decode_error(e: serde_json::Error) -> Error {
    Error::decode_with_context(
        format!("invalid resume_json: {}", e),
        ErrorContext::new()
            .with_field_path("resume_json")
            .with_source("resume-tailor"),
    )
}

/// Any capability's outcome, for generic dispatch.
#[derive(Debug)]
pub enum AnalysisResponse {
    Report(Report),
    Advisory(Advisory<String>),
    Tailored(TailoredResume),
}

impl AnalysisResponse {
    /// True only when there is non-empty content to render.
    pub fn is_success(&self) -> bool {
        match self {
            AnalysisResponse::Report(r) => r.is_found(),
            AnalysisResponse::Advisory(a) => a.is_answer(),
            AnalysisResponse::Tailored(t) => t.result.is_found(),
        }
    }

    pub fn markdown(&self) -> Option<&str> {
        match self {
            AnalysisResponse::Report(r) => r.as_found(),
            AnalysisResponse::Advisory(a) => a.answer().map(String::as_str),
            AnalysisResponse::Tailored(t) => t.result.as_found(),
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            AnalysisResponse::Advisory(a) => a.error(),
            _ => None,
        }
    }
}
