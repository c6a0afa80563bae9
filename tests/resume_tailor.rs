mod common;

use career_assist_client::{ErrorOrigin, Logger, ResumeFile};
use common::{resume, MockBackend, RESUME_BUILDER_PATH};
use mockito::Matcher;
use serde_json::json;

const POSTING: &str = "https://jobs.example.com/postings/4411";
const GITHUB: &str = "https://github.com/octocat";
const WRITE_UP: &str = "I maintain a tokio-based job scheduler used in production.";

#[tokio::test]
async fn test_tailor_sends_all_four_fields() {
    let mut backend = MockBackend::new().await;
    let body = json!({
        "result": "Lead with the scheduler project.",
        "resume_json": {
            "name": "Mona Lisa",
            "contact_info": {
                "email": "mona@example.com",
                "phone": "+1 555 0100",
                "github": "https://github.com/octocat"
            },
            "about_me": "Systems engineer",
            "education": [],
            "experience": [{
                "job_title": "Backend Engineer",
                "company": "Octo Corp",
                "start_date": "2021",
                "end_date": "Present",
                "achievements": ["Built the job scheduler"]
            }],
            "skills": ["Rust", "Tokio"],
            "soft_skills": []
        }
    });
    let mock = backend
        .server
        .mock("POST", RESUME_BUILDER_PATH)
        .match_header("content-type", Matcher::Regex("^multipart/form-data".into()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename="resume.pdf""#.into()),
            Matcher::Regex(format!(r#"(?s)name="job_posting_url".*{}"#, regex::escape(POSTING))),
            Matcher::Regex(format!(r#"(?s)name="github_url".*{}"#, regex::escape(GITHUB))),
            Matcher::Regex(r#"(?s)name="write_up".*tokio-based job scheduler"#.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await;

    let tailored = backend
        .client()
        .tailor_resume_and_guide(&resume(), POSTING, GITHUB, WRITE_UP)
        .await
        .unwrap();

    assert_eq!(tailored.analysis_markdown(), "Lead with the scheduler project.");
    assert_eq!(tailored.raw_response, body);
    let data = tailored.resume_data().unwrap().expect("resume_json present");
    assert_eq!(data.name, "Mona Lisa");
    assert_eq!(data.skills, vec!["Rust".to_string(), "Tokio".to_string()]);
    assert_eq!(data.experience[0].company, "Octo Corp");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_tailor_without_result_uses_placeholder() {
    let mut backend = MockBackend::new().await;
    let mock = backend
        .mock_json(RESUME_BUILDER_PATH, 200, r#"{"resume_json":null}"#)
        .await;

    let tailored = backend
        .client()
        .tailor_resume_and_guide(&resume(), POSTING, GITHUB, WRITE_UP)
        .await
        .unwrap();

    assert_eq!(tailored.analysis_markdown(), "No analysis provided.");
    assert!(tailored.resume_data().unwrap().is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_tailor_malformed_json_is_decode_error() {
    let mut backend = MockBackend::new().await;
    let mock = backend
        .mock_json(RESUME_BUILDER_PATH, 200, r#"{"result": "unterminated"#)
        .await;

    let err = backend
        .client()
        .tailor_resume_and_guide(&resume(), POSTING, GITHUB, WRITE_UP)
        .await
        .unwrap_err();

    assert_eq!(err.origin(), ErrorOrigin::Decode);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_tailor_status_error_is_strict() {
    let mut backend = MockBackend::new().await;
    let mock = backend
        .mock_json(RESUME_BUILDER_PATH, 400, r#"{"detail":"write_up too long"}"#)
        .await;

    let err = backend
        .client()
        .tailor_resume_and_guide(&resume(), POSTING, GITHUB, WRITE_UP)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.context().details.as_deref(), Some("write_up too long"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_tailor_validation_makes_no_request() {
    let mut backend = MockBackend::new().await;
    let mock = backend.mock_untouched(RESUME_BUILDER_PATH).await;
    let client = backend.client();

    let cases = [
        ("job_posting_url", "jobs.example.com", GITHUB, WRITE_UP),
        ("github_url", POSTING, "", WRITE_UP),
        ("write_up", POSTING, GITHUB, "   "),
    ];
    for (field, posting, github, write_up) in cases {
        let err = client
            .tailor_resume_and_guide(&resume(), posting, github, write_up)
            .await
            .unwrap_err();
        assert_eq!(err.origin(), ErrorOrigin::Validation);
        assert_eq!(err.context().field_path.as_deref(), Some(field));
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_tailor_bad_resume_file_makes_no_request() {
    let mut backend = MockBackend::new().await;
    let mock = backend.mock_untouched(RESUME_BUILDER_PATH).await;
    let client = backend.client();

    let empty = ResumeFile::pdf("resume.pdf", Vec::<u8>::new());
    let plain_text = ResumeFile::new("resume.txt", "text/plain", b"just text".to_vec());
    for file in [empty, plain_text] {
        let err = client
            .tailor_resume_and_guide(&file, POSTING, GITHUB, WRITE_UP)
            .await
            .unwrap_err();
        assert_eq!(err.origin(), ErrorOrigin::Validation);
        assert_eq!(err.context().field_path.as_deref(), Some("file"));
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_tailor_unreachable_backend_is_network_error() {
    let client = common::client_for(&common::closed_port_url(), Logger::silent());

    let err = client
        .tailor_resume_and_guide(&resume(), POSTING, GITHUB, WRITE_UP)
        .await
        .unwrap_err();

    assert_eq!(err.origin(), ErrorOrigin::Network);
    assert!(!err.is_timeout());
}
