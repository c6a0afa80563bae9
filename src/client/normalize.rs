//! Response normalization: status check, JSON decoding and field extraction.

use crate::transport::RawResponse;
use crate::types::{Capability, Report};
use crate::{Error, ErrorContext, Result};
use serde_json::Value;

/// Field holding the markdown answer on every `response`-style endpoint.
pub(crate) const RESPONSE_FIELD: &str = "response";
/// Field holding the markdown guide on the tailoring endpoint.
pub(crate) const RESULT_FIELD: &str = "result";

const SNIPPET_CHARS: usize = 200;

/// Non-2xx becomes [`Error::HttpStatus`] with the backend's detail attached.
pub(crate) fn ensure_success(capability: Capability, raw: &RawResponse) -> Result<()> {
    if raw.is_success() {
        return Ok(());
    }
    let detail = error_detail(&raw.body);
    let mut context = ErrorContext::new().with_source(capability.name());
    if !detail.is_empty() {
        context = context.with_details(detail);
    }
    Err(Error::http_status_with_context(
        raw.status,
        format!("{} returned status {}", capability.path(), raw.status),
        context,
    ))
}

/// A 2xx body must be non-empty JSON.
pub(crate) fn parse_json_body(capability: Capability, raw: &RawResponse) -> Result<Value> {
    if raw.body.trim().is_empty() {
        return Err(Error::decode_with_context(
            "empty response body",
            ErrorContext::new().with_source(capability.name()),
        ));
    }
    serde_json::from_str(&raw.body).map_err(|e| {
        Error::decode_with_context(
            format!("response is not valid JSON: {}", e),
            ErrorContext::new()
                .with_details(snippet(&raw.body))
                .with_source(capability.name()),
        )
    })
}

/// Read an optional string field from a JSON object body.
///
/// Missing, `null` or blank gives [`Report::NotFound`]; a non-object body or a
/// non-string field is a decode error.
pub(crate) fn string_field(capability: Capability, body: &Value, field: &str) -> Result<Report> {
    let object = body.as_object().ok_or_else(|| {
        Error::decode_with_context(
            format!("expected a JSON object, got {}", json_type(body)),
            ErrorContext::new().with_source(capability.name()),
        )
    })?;
    match object.get(field) {
        None | Some(Value::Null) => Ok(Report::NotFound),
        Some(Value::String(text)) => Ok(Report::from_field(Some(text.clone()))),
        Some(other) => Err(Error::decode_with_context(
            format!("field '{}' must be a string, got {}", field, json_type(other)),
            ErrorContext::new()
                .with_field_path(field)
                .with_source(capability.name()),
        )),
    }
}

/// Full pipeline for the `{"response": "..."}` endpoints.
pub(crate) fn response_report(capability: Capability, raw: &RawResponse) -> Result<Report> {
    ensure_success(capability, raw)?;
    let body = parse_json_body(capability, raw)?;
    string_field(capability, &body, RESPONSE_FIELD)
}

/// Backend error detail: `detail`, `error` or `message` when the body is JSON,
/// otherwise a truncated snippet.
pub(crate) fn error_detail(body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["detail", "error", "message"] {
            match map.get(key) {
                Some(Value::String(s)) => return s.clone(),
                Some(Value::Null) | None => continue,
                Some(other) => return other.to_string(),
            }
        }
    }
    snippet(body)
}

fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= SNIPPET_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(SNIPPET_CHARS).collect();
    format!("{}...", cut)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorOrigin;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_response_field_found() {
        let body = r###"{"response":"## Match 87%"}"###;
        let report = response_report(Capability::Ats, &raw(200, body)).unwrap();
        assert_eq!(report, Report::Found("## Match 87%".into()));
    }

    #[test]
    fn test_missing_or_blank_field_is_not_found() {
        for body in [r#"{}"#, r#"{"response":null}"#, r#"{"response":"  "}"#] {
            assert_eq!(
                response_report(Capability::Ats, &raw(200, body)).unwrap(),
                Report::NotFound,
                "body {}",
                body
            );
        }
    }

    #[test]
    fn test_empty_success_body_is_decode_error() {
        let err = response_report(Capability::HrQa, &raw(200, "")).unwrap_err();
        assert_eq!(err.origin(), ErrorOrigin::Decode);
    }

    #[test]
    fn test_non_json_body_is_decode_error() {
        let err = response_report(Capability::HrQa, &raw(200, "<html>oops</html>")).unwrap_err();
        assert_eq!(err.origin(), ErrorOrigin::Decode);
        assert_eq!(err.context().details.as_deref(), Some("<html>oops</html>"));
    }

    #[test]
    fn test_non_object_or_non_string_is_decode_error() {
        assert!(response_report(Capability::Ats, &raw(200, r#"["a"]"#)).is_err());
        let err = response_report(Capability::Ats, &raw(200, r#"{"response": 42}"#)).unwrap_err();
        assert_eq!(err.context().field_path.as_deref(), Some("response"));
    }

    #[test]
    fn test_status_error_carries_detail() {
        let err = response_report(
            Capability::Ats,
            &raw(422, r#"{"detail":"file must be a PDF"}"#),
        )
        .unwrap_err();
        assert_eq!(err.origin(), ErrorOrigin::HttpStatus);
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.context().details.as_deref(), Some("file must be a PDF"));
        assert_eq!(err.context().source.as_deref(), Some("ats-check"));
    }

    #[test]
    fn test_error_detail_fallbacks() {
        assert_eq!(
            error_detail(r#"{"detail":[{"loc":["body","url"],"msg":"field required"}]}"#),
            r#"[{"loc":["body","url"],"msg":"field required"}]"#
        );
        assert_eq!(error_detail(r#"{"error":"boom"}"#), "boom");
        assert_eq!(error_detail("Internal Server Error"), "Internal Server Error");
        let long = "x".repeat(500);
        assert_eq!(error_detail(&long).len(), SNIPPET_CHARS + 3);
    }
}
