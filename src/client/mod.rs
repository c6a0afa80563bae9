//! 客户端模块：每个后端能力一个操作，统一的校验、请求与结果归一化。
//!
//! # Client Module
//!
//! [`CareerClient`] exposes one operation per backend capability. Every
//! operation validates locally, issues exactly one POST, and normalizes the
//! answer according to the capability's [`FailurePolicy`](crate::FailurePolicy):
//!
//! | Operation | Capability | Policy | Returns |
//! |-----------|------------|--------|---------|
//! | [`CareerClient::check_resume_against_job`] | ATS check | strict | `Result<Report>` |
//! | [`CareerClient::answer_hr_question`] | HR Q&A | best-effort | `Result<Advisory<String>>` |
//! | [`CareerClient::analyze_job_posting`] | Job posting | best-effort | `Result<Advisory<String>>` |
//! | [`CareerClient::tailor_resume_and_guide`] | Resume tailoring | strict | `Result<TailoredResume>` |
//!
//! For best-effort operations the only `Err` is a validation failure.

mod ats;
mod builder;
mod core;
mod gate;
mod hr_qa;
mod job_posting;
mod normalize;
mod resume_tailor;
pub(crate) mod validation;

pub use builder::CareerClientBuilder;
pub use self::core::CareerClient;
pub use gate::{SubmitGate, SubmitPermit};
pub use validation::{MAX_QUERY_CHARS, MIN_QUERY_CHARS};
