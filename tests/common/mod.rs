//! Mock backend setup shared by the integration tests.
#![allow(dead_code)]

use career_assist_client::{CareerClient, Logger, ResumeFile};
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::net::TcpListener;
use std::time::Duration;

pub const ATS_PATH: &str = "/api/ats-checker/check";
pub const HR_QA_PATH: &str = "/api/hr-qa/answer";
pub const JOB_ANALYSIS_PATH: &str = "/api/job-analysis/analyze";
pub const RESUME_BUILDER_PATH: &str = "/api/resume-builder/check";

/// Test fixture owning a mock backend.
pub struct MockBackend {
    pub server: ServerGuard,
}

impl MockBackend {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Client pointed at the mock server with logging switched off.
    pub fn client(&self) -> CareerClient {
        client_for(&self.url(), Logger::silent())
    }

    pub fn client_with_logger(&self, logger: Logger) -> CareerClient {
        client_for(&self.url(), logger)
    }

    /// POST mock answering once with a JSON body.
    pub async fn mock_json(&mut self, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", path)
            .match_header("x-request-id", Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create_async()
            .await
    }

    /// POST mock that must never be hit.
    pub async fn mock_untouched(&mut self, path: &str) -> Mock {
        self.server
            .mock("POST", path)
            .with_status(200)
            .expect(0)
            .create_async()
            .await
    }
}

pub fn client_for(base_url: &str, logger: Logger) -> CareerClient {
    CareerClient::builder()
        .base_url(base_url)
        .request_timeout(Duration::from_secs(5))
        .hr_qa_timeout(Duration::from_secs(5))
        .logger(logger)
        .no_proxy()
        .build()
        .expect("client should build")
}

pub fn resume() -> ResumeFile {
    ResumeFile::pdf("resume.pdf", b"%PDF-1.4 minimal test resume".to_vec())
}

/// Listener that accepts connections into the backlog but never answers.
pub fn silent_listener() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind silent listener");
    let addr = listener.local_addr().expect("listener address");
    (listener, format!("http://{}", addr))
}

/// Base URL for a port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}
