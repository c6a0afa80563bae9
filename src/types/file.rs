//! Uploaded resume file.

use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use std::path::Path;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
const OCTET_STREAM: &str = "application/octet-stream";

/// Content types the backend accepts as a PDF upload.
const PDF_COMPATIBLE_TYPES: &[&str] = &[
    "application/pdf",
    "application/x-pdf",
    "application/acrobat",
];

/// A resume upload: file name, declared content type and raw bytes.
///
/// Bytes are forwarded to the backend unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    file_name: String,
    content_type: String,
    bytes: Bytes,
}

impl ResumeFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn pdf(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self::new(file_name, PDF_CONTENT_TYPE, bytes)
    }

    /// Read a resume from disk, deriving the content type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                Error::validation_with_context(
                    "resume path has no file name",
                    ErrorContext::new()
                        .with_field_path("file")
                        .with_details(path.display().to_string()),
                )
            })?;
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            Error::validation_with_context(
                format!("failed to read resume file: {}", e),
                ErrorContext::new()
                    .with_field_path("file")
                    .with_details(path.display().to_string()),
            )
        })?;
        let content_type = content_type_for(&file_name);
        Ok(Self::new(file_name, content_type, bytes))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True when the declared type (ignoring parameters) is a PDF type.
    pub fn is_pdf(&self) -> bool {
        let essence = self
            .content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        PDF_COMPATIBLE_TYPES.contains(&essence.as_str())
    }

    pub(crate) fn to_part(&self) -> Result<reqwest::multipart::Part> {
        reqwest::multipart::Part::bytes(self.bytes.to_vec())
            .file_name(self.file_name.clone())
            .mime_str(&self.content_type)
            .map_err(|e| {
                Error::validation_with_context(
                    format!("invalid content type: {}", e),
                    ErrorContext::new()
                        .with_field_path("file")
                        .with_details(self.content_type.clone()),
                )
            })
    }
}

/// Content type inferred from a file name.
pub fn content_type_for(file_name: &str) -> &'static str {
    if file_name.to_ascii_lowercase().ends_with(".pdf") {
        PDF_CONTENT_TYPE
    } else {
        OCTET_STREAM
    }
}
