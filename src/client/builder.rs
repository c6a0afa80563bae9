use crate::client::core::CareerClient;
use crate::config::{self, ClientConfig, DEFAULT_HR_QA_TIMEOUT, DEFAULT_REQUEST_TIMEOUT};
use crate::logging::Logger;
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Builder for [`CareerClient`].
///
/// Keep this surface area small and predictable.
pub struct CareerClientBuilder {
    base_url: Option<Url>,
    base_url_raw: Option<String>,
    request_timeout: Duration,
    hr_qa_timeout: Duration,
    logger: Option<Logger>,
    use_system_proxy: bool,
}

impl CareerClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            base_url_raw: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            hr_qa_timeout: DEFAULT_HR_QA_TIMEOUT,
            logger: None,
            use_system_proxy: true,
        }
    }

    /// Start from a loaded [`ClientConfig`]. The logger is not derived from
    /// the config; pass one with [`Self::logger`].
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base_url: Some(config.base_url.clone()),
            base_url_raw: None,
            request_timeout: config.request_timeout,
            hr_qa_timeout: config.hr_qa_timeout,
            logger: None,
            use_system_proxy: true,
        }
    }

    /// Backend base URL. Capability paths are appended to it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = None;
        self.base_url_raw = Some(base_url.into());
        self
    }

    /// Timeout for every capability except HR Q&A.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn hr_qa_timeout(mut self, timeout: Duration) -> Self {
        self.hr_qa_timeout = timeout;
        self
    }

    /// Inject the logger. Default is [`Logger::current`] taken at build time.
    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Ignore `HTTP_PROXY`/`HTTPS_PROXY` and connect directly.
    pub fn no_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }

    pub fn build(self) -> Result<CareerClient> {
        let base_url = match (self.base_url, self.base_url_raw) {
            (_, Some(raw)) => config::parse_base_url(&raw)?,
            (Some(url), None) => url,
            (None, None) => {
                return Err(Error::configuration_with_context(
                    "backend base URL is required",
                    ErrorContext::new().with_field_path("base_url"),
                ))
            }
        };

        for (field, timeout) in [
            ("request_timeout", self.request_timeout),
            ("hr_qa_timeout", self.hr_qa_timeout),
        ] {
            if timeout.is_zero() {
                return Err(Error::configuration_with_context(
                    "timeout must be greater than zero",
                    ErrorContext::new().with_field_path(field),
                ));
            }
        }

        let transport = Arc::new(HttpTransport::new(
            base_url,
            self.request_timeout,
            self.use_system_proxy,
        )?);

        Ok(CareerClient {
            transport,
            logger: self.logger.unwrap_or_else(Logger::current),
            request_timeout: self.request_timeout,
            hr_qa_timeout: self.hr_qa_timeout,
        })
    }
}

impl Default for CareerClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Capability;
    use crate::ErrorOrigin;

    #[test]
    fn test_build_requires_base_url() {
        let err = CareerClientBuilder::new().build().err().unwrap();
        assert_eq!(err.origin(), ErrorOrigin::Validation);
        assert_eq!(err.context().field_path.as_deref(), Some("base_url"));
    }

    #[test]
    fn test_build_rejects_invalid_base_url() {
        assert!(CareerClientBuilder::new()
            .base_url("localhost:8000")
            .build()
            .is_err());
    }

    #[test]
    fn test_build_rejects_base_url_with_query() {
        let err = CareerClientBuilder::new()
            .base_url("http://localhost:8000/?tenant=a")
            .build()
            .err()
            .unwrap();
        assert_eq!(err.origin(), ErrorOrigin::Validation);
        assert!(err.message().contains("query string"));
    }

    #[test]
    fn test_build_rejects_zero_timeout() {
        let err = CareerClientBuilder::new()
            .base_url("http://localhost:8000")
            .hr_qa_timeout(Duration::ZERO)
            .build()
            .err()
            .unwrap();
        assert_eq!(err.context().field_path.as_deref(), Some("hr_qa_timeout"));
    }

    #[test]
    fn test_timeouts_per_capability() {
        let client = CareerClientBuilder::new()
            .base_url("http://localhost:8000")
            .request_timeout(Duration::from_secs(25))
            .hr_qa_timeout(Duration::from_secs(7))
            .logger(Logger::silent())
            .build()
            .unwrap();
        assert_eq!(client.timeout_for(Capability::HrQa), Duration::from_secs(7));
        assert_eq!(client.timeout_for(Capability::Ats), Duration::from_secs(25));
        assert_eq!(client.timeout_for(Capability::ResumeTailor), Duration::from_secs(25));
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig::new("https://backend.example.com")
            .unwrap()
            .with_request_timeout(Duration::from_secs(60));
        let client = CareerClientBuilder::from_config(&config)
            .logger(Logger::silent())
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "https://backend.example.com/");
        assert_eq!(client.timeout_for(Capability::JobPosting), Duration::from_secs(60));
        assert_eq!(client.timeout_for(Capability::HrQa), Duration::from_secs(10));
    }
}
