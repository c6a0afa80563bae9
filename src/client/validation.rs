//! 输入校验：在发出任何网络请求之前拒绝缺失或格式错误的输入。
//!
//! Local input validation. Every check here runs before any I/O.

use crate::types::ResumeFile;
use crate::{Error, ErrorContext, Result};
use tracing::warn;
use url::Url;

/// Recommended HR query bounds. Logged when exceeded, never enforced.
pub const MIN_QUERY_CHARS: usize = 3;
pub const MAX_QUERY_CHARS: usize = 500;

fn rejected(field: &str, source: &str, msg: impl Into<String>) -> Error {
    Error::validation_with_context(
        msg,
        ErrorContext::new()
            .with_field_path(field)
            .with_source(source),
    )
}

/// Resume must have bytes, a file name and a PDF-compatible content type.
pub(crate) fn validate_resume_file(file: &ResumeFile, source: &str) -> Result<()> {
    if file.is_empty() {
        return Err(rejected("file", source, "resume file is empty"));
    }
    if file.file_name().trim().is_empty() {
        return Err(rejected("file", source, "resume file has no file name"));
    }
    if !file.is_pdf() {
        return Err(Error::validation_with_context(
            "resume file must be a PDF",
            ErrorContext::new()
                .with_field_path("file")
                .with_details(file.content_type().to_string())
                .with_source(source),
        ));
    }
    Ok(())
}

/// Text must contain at least one non-whitespace character.
pub(crate) fn require_text(field: &str, value: &str, source: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(rejected(field, source, format!("{} is required", field)));
    }
    Ok(())
}

pub(crate) fn validate_query(query: &str, source: &str) -> Result<()> {
    require_text("query", query, source)?;
    let chars = query.trim().chars().count();
    if !(MIN_QUERY_CHARS..=MAX_QUERY_CHARS).contains(&chars) {
        warn!(
            chars,
            min = MIN_QUERY_CHARS,
            max = MAX_QUERY_CHARS,
            "HR query length outside recommended bounds"
        );
    }
    Ok(())
}

/// Value must parse as an absolute URL with both a scheme and a host.
pub(crate) fn validate_absolute_url(field: &str, value: &str, source: &str) -> Result<Url> {
    require_text(field, value, source)?;
    let url = Url::parse(value.trim()).map_err(|e| {
        Error::validation_with_context(
            format!("{} is not a valid URL: {}", field, e),
            ErrorContext::new()
                .with_field_path(field)
                .with_details(value.to_string())
                .with_source(source),
        )
    })?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(Error::validation_with_context(
            format!("{} must include a host", field),
            ErrorContext::new()
                .with_field_path(field)
                .with_details(value.to_string())
                .with_source(source),
        )),
    }
}
