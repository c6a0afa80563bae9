use std::fmt;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Input field or configuration key that caused the error (e.g. "job_description", "API_BASE_URL")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g. backend error detail, body snippet)
    pub details: Option<String>,
    /// Source of the error, usually the capability name (e.g. "ats-check", "hr-qa")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a failure came from. Callers branch on this instead of parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorOrigin {
    /// Connection failure, timeout, or an unreadable response stream.
    Network,
    /// The backend answered with a non-2xx status.
    HttpStatus,
    /// The response body was empty, not JSON, or not the expected shape.
    Decode,
    /// Local input (or configuration) was rejected before any I/O.
    Validation,
}

impl ErrorOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorOrigin::Network => "network",
            ErrorOrigin::HttpStatus => "http-status",
            ErrorOrigin::Decode => "decode",
            ErrorOrigin::Validation => "validation",
        }
    }
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for every client operation.
///
/// Transport and parser errors are wrapped here at the point of failure; raw
/// `reqwest` or `serde_json` errors never reach the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network error: {message}{}", format_context(.context))]
    Network {
        message: String,
        timed_out: bool,
        context: ErrorContext,
    },

    #[error("HTTP {status}: {message}{}", format_context(.context))]
    HttpStatus {
        status: u16,
        message: String,
        context: ErrorContext,
    },

    #[error("Decode error: {message}{}", format_context(.context))]
    Decode {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::validation_with_context(msg, ErrorContext::new())
    }

    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn network_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Network {
            message: msg.into(),
            timed_out: false,
            context,
        }
    }

    pub fn timeout_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Network {
            message: msg.into(),
            timed_out: true,
            context,
        }
    }

    pub fn http_status_with_context(
        status: u16,
        msg: impl Into<String>,
        context: ErrorContext,
    ) -> Self {
        Error::HttpStatus {
            status,
            message: msg.into(),
            context,
        }
    }

    pub fn decode_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Decode {
            message: msg.into(),
            context,
        }
    }

    /// Failure origin. Configuration problems are local rejections, so they
    /// report as [`ErrorOrigin::Validation`].
    pub fn origin(&self) -> ErrorOrigin {
        match self {
            Error::Validation { .. } | Error::Configuration { .. } => ErrorOrigin::Validation,
            Error::Network { .. } => ErrorOrigin::Network,
            Error::HttpStatus { .. } => ErrorOrigin::HttpStatus,
            Error::Decode { .. } => ErrorOrigin::Decode,
        }
    }

    /// Upstream HTTP status code, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Network { timed_out: true, .. })
    }

    /// Human-readable message without the context suffix.
    pub fn message(&self) -> &str {
        match self {
            Error::Validation { message, .. }
            | Error::Configuration { message, .. }
            | Error::Network { message, .. }
            | Error::HttpStatus { message, .. }
            | Error::Decode { message, .. } => message,
        }
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            Error::Validation { context, .. }
            | Error::Configuration { context, .. }
            | Error::Network { context, .. }
            | Error::HttpStatus { context, .. }
            | Error::Decode { context, .. } => context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_mapping() {
        let ctx = ErrorContext::new;
        assert_eq!(Error::validation("x").origin(), ErrorOrigin::Validation);
        assert_eq!(Error::configuration("x").origin(), ErrorOrigin::Validation);
        assert_eq!(
            Error::network_with_context("x", ctx()).origin(),
            ErrorOrigin::Network
        );
        assert_eq!(
            Error::http_status_with_context(502, "x", ctx()).origin(),
            ErrorOrigin::HttpStatus
        );
        assert_eq!(
            Error::decode_with_context("x", ctx()).origin(),
            ErrorOrigin::Decode
        );
    }

    #[test]
    fn test_status_only_for_http_errors() {
        let err = Error::http_status_with_context(503, "unavailable", ErrorContext::new());
        assert_eq!(err.status(), Some(503));
        assert_eq!(Error::validation("bad").status(), None);
    }

    #[test]
    fn test_display_includes_context() {
        let err = Error::validation_with_context(
            "job description is required",
            ErrorContext::new()
                .with_field_path("job_description")
                .with_source("ats-check"),
        );
        let text = err.to_string();
        assert!(text.starts_with("Validation error: job description is required"));
        assert!(text.contains("field: job_description"));
        assert!(text.contains("source: ats-check"));
        assert_eq!(err.message(), "job description is required");
    }

    #[test]
    fn test_timeout_flag() {
        let err = Error::timeout_with_context("timed out", ErrorContext::new());
        assert!(err.is_timeout());
        assert_eq!(err.origin(), ErrorOrigin::Network);
        assert!(!Error::network_with_context("refused", ErrorContext::new()).is_timeout());
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(ErrorOrigin::HttpStatus.to_string(), "http-status");
        assert_eq!(ErrorOrigin::Decode.as_str(), "decode");
    }
}
