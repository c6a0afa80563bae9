//! 客户端配置：后端地址、日志级别与超时（支持环境变量与 .env）。
//!
//! Client configuration.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `API_BASE_URL` | Backend base URL | required |
//! | `LOG_LEVEL` | Log level (`trace` .. `error`, any case) | `INFO` |
//! | `CAREER_HTTP_TIMEOUT_SECS` | Timeout applied to every capability | 30 |
//! | `CAREER_HR_QA_TIMEOUT_SECS` | Tighter timeout for HR Q&A | 10 |

use crate::{Error, ErrorContext, Result};
use std::time::Duration;
use tracing::Level;
use url::Url;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_HR_QA_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_BASE_URL: &str = "API_BASE_URL";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_REQUEST_TIMEOUT: &str = "CAREER_HTTP_TIMEOUT_SECS";
pub const ENV_HR_QA_TIMEOUT: &str = "CAREER_HR_QA_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub log_level: Level,
    pub request_timeout: Duration,
    pub hr_qa_timeout: Duration,
}

impl ClientConfig {
    /// Create a config for `base_url` with default log level and timeouts.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            log_level: Level::INFO,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            hr_qa_timeout: DEFAULT_HR_QA_TIMEOUT,
        })
    }

    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_BASE_URL)
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "backend base URL is not set",
                    ErrorContext::new().with_field_path(ENV_BASE_URL),
                )
            })?;

        let mut config = Self::new(&base_url)?;

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = parse_log_level(&level);
        }
        if let Some(secs) = lookup(ENV_REQUEST_TIMEOUT) {
            config.request_timeout = parse_timeout(ENV_REQUEST_TIMEOUT, &secs)?;
        }
        if let Some(secs) = lookup(ENV_HR_QA_TIMEOUT) {
            config.hr_qa_timeout = parse_timeout(ENV_HR_QA_TIMEOUT, &secs)?;
        }

        Ok(config)
    }

    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_hr_qa_timeout(mut self, timeout: Duration) -> Self {
        self.hr_qa_timeout = timeout;
        self
    }
}

pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid backend base URL: {}", e),
            ErrorContext::new()
                .with_field_path(ENV_BASE_URL)
                .with_details(raw.to_string()),
        )
    })?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(Error::configuration_with_context(
            "backend base URL must be an http(s) URL with a host",
            ErrorContext::new()
                .with_field_path(ENV_BASE_URL)
                .with_details(raw.to_string()),
        ));
    }
    // capability paths are appended to the base, so it must end at the path
    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::configuration_with_context(
            "backend base URL must not carry a query string or fragment",
            ErrorContext::new()
                .with_field_path(ENV_BASE_URL)
                .with_details(raw.to_string()),
        ));
    }
    Ok(url)
}

/// Unknown levels fall back to INFO.
pub fn parse_log_level(raw: &str) -> Level {
    raw.trim().parse::<Level>().unwrap_or(Level::INFO)
}

fn parse_timeout(key: &str, raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|s| *s > 0)
        .ok_or_else(|| {
            Error::configuration_with_context(
                "timeout must be a positive number of seconds",
                ErrorContext::new()
                    .with_field_path(key)
                    .with_details(raw.to_string()),
            )
        })?;
    Ok(Duration::from_secs(secs))
}
