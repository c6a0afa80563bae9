//! # career-assist-client
//!
//! 职业助手分析后端的类型化 HTTP 客户端。
//!
//! Typed HTTP client for the career-assist analysis backend.
//!
//! ## Overview
//!
//! The backend offers four capabilities: ATS resume checks, HR behavioral
//! Q&A, job-posting analysis and resume tailoring. This crate turns caller
//! input into exactly one backend request per call and normalizes the answer
//! into display-ready markdown or a typed [`Error`].
//!
//! ## Failure policies
//!
//! - **Strict** (ATS check, resume tailoring): every failure is an `Err`.
//! - **Best-effort** (HR Q&A, job posting): failures after validation are
//!   logged and returned as [`Advisory::Unavailable`]. Only local validation
//!   errors are `Err`.
//!
//! Validation always runs before any I/O, whatever the policy.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use career_assist_client::{CareerClient, ClientConfig, Logger, ResumeFile};
//!
//! #[tokio::main]
//! async fn main() -> career_assist_client::Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let client = CareerClient::from_config(&config, Logger::new(config.log_level))?;
//!
//!     let resume = ResumeFile::from_path("resume.pdf").await?;
//!     let report = client
//!         .check_resume_against_job(&resume, "Senior Rust engineer, async networking")
//!         .await?;
//!     println!("{}", report.as_markdown());
//!
//!     if let Some(answer) = client
//!         .answer_hr_question("Tell me about a time you disagreed with a teammate")
//!         .await?
//!         .into_option()
//!     {
//!         println!("{}", answer);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | `CareerClient`, its builder, and the submission gate |
//! | [`types`] | Requests, uploaded files, outcomes and the resume schema |
//! | [`transport`] | The HTTP round trip |
//! | [`config`] | Environment-driven configuration |
//! | [`logging`] | Injected `tracing` logger |
//! | [`error`] | The unified error type |

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod transport;
pub mod types;

pub use client::{CareerClient, CareerClientBuilder, SubmitGate, SubmitPermit};
pub use config::ClientConfig;
pub use error::{Error, ErrorContext, ErrorOrigin};
pub use logging::{LogBuffer, Logger};
pub use types::{
    Advisory, AnalysisRequest, AnalysisResponse, Capability, FailurePolicy, Report, ResumeData,
    ResumeFile, TailoredResume,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
