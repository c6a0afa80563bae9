//! Structured resume returned by the tailoring backend (`resume_json`).

use crate::{Error, ErrorContext, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeData {
    pub name: String,
    pub about_me: String,
    pub contact_info: ContactInfo,
    pub education: Vec<EducationItem>,
    pub experience: Vec<ExperienceItem>,
    pub skills: Vec<String>,
    pub soft_skills: Vec<String>,
}

impl ResumeData {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation_with_context(
                "resume name is empty",
                ErrorContext::new()
                    .with_field_path("resume_json.name")
                    .with_source("resume-tailor"),
            ));
        }
        if !EMAIL_PATTERN.is_match(self.contact_info.email.trim()) {
            return Err(Error::validation_with_context(
                "resume contact e-mail is not a valid address",
                ErrorContext::new()
                    .with_field_path("resume_json.contact_info.email")
                    .with_details(self.contact_info.email.clone())
                    .with_source("resume-tailor"),
            ));
        }
        Ok(())
    }
}
