//! 类型模块：请求、上传文件、结果与简历结构等核心数据类型。
//!
//! # Types Module
//!
//! Request-scoped values exchanged with the analysis backend. Nothing here
//! persists across calls.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Capability`] | One backend endpoint (ATS check, HR Q&A, job posting, tailoring) |
//! | [`FailurePolicy`] | Strict (raise) or best-effort (degrade) per capability |
//! | [`AnalysisRequest`] | One user-submitted unit of work |
//! | [`ResumeFile`] | Uploaded file bytes with name and content type |
//! | [`Report`] | Strict outcome: found markdown or explicit not-found |
//! | [`Advisory`] | Best-effort outcome: answer, no answer, or unavailable |
//! | [`TailoredResume`] | Tailoring result plus raw response body |
//! | [`AnalysisResponse`] | Any of the above, for generic dispatch |
//! | [`ResumeData`] | Structured resume carried in `resume_json` |

pub mod file;
pub mod outcome;
pub mod request;
pub mod resume;

pub use file::{ResumeFile, PDF_CONTENT_TYPE};
pub use outcome::{
    Advisory, AnalysisResponse, Report, TailoredResume, NO_ANALYSIS_PROVIDED, NO_REPORT_FOUND,
};
pub use request::{AnalysisRequest, Capability, FailurePolicy};
pub use resume::{ContactInfo, EducationItem, ExperienceItem, ResumeData};
