//! End-to-end tests for the submission cycle.
//!
//! These run the controller against the real HTTP client and a mock
//! recommendation service.

use controller::{
    MemoryView, Phase, SubmissionController, SubmitOutcome, TriggerState, BACKEND_ERROR,
    FETCH_FAILED,
};
use model::FormInput;
use rec_client::{ClientConfig, ClientError, RecommendationClient};
use render::HtmlRenderer;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn form(query: &str, limit: &str, remote: bool, adaptive: bool) -> FormInput {
    FormInput {
        query: query.to_string(),
        limit: limit.to_string(),
        prefer_remote: remote,
        prefer_adaptive: adaptive,
    }
}

fn attach(
    server: &MockServer,
    input: FormInput,
) -> SubmissionController<MemoryView, RecommendationClient> {
    let config = ClientConfig::new(&server.uri()).expect("mock server uri is valid");
    SubmissionController::attach(
        MemoryView::new().with_input(input),
        RecommendationClient::new(config),
        HtmlRenderer,
    )
    .expect("attach failed")
}

fn assessments(n: usize) -> Value {
    let items: Vec<Value> = (1..=n)
        .map(|i| {
            json!({
                "name": format!("Assessment {i}"),
                "url": format!("https://example.com/a/{i}"),
                "duration": i * 10,
                "remote_support": "Yes",
                "adaptive_support": "No",
                "test_type": ["Knowledge & Skills"]
            })
        })
        .collect();
    json!({ "recommended_assessments": items })
}

#[tokio::test]
async fn test_request_body_and_truncation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .and(body_json(json!({
            "query": "Java developer, 40 minutes",
            "k": 2,
            "prefer_remote": true,
            "prefer_adaptive": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(assessments(3)))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctrl = attach(&server, form("  Java developer, 40 minutes ", "2", true, false));
    let outcome = ctrl.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Rendered { count: 2 }));
    let view = ctrl.view();
    assert_eq!(view.meta(), "2 assessments");
    assert!(view.results().contains("Assessment 1"));
    assert!(view.results().contains("Assessment 2"));
    assert!(!view.results().contains("Assessment 3"));
    assert!(view.results().contains("<span class=\"pill pill-yes\">Remote: Yes</span>"));
    assert!(view.results().contains("<span class=\"pill pill-no\">Adaptive: No</span>"));
    assert!(view.results().contains("10 min"));
}

#[tokio::test]
async fn test_blank_query_never_reaches_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assessments(1)))
        .expect(0)
        .mount(&server)
        .await;

    let mut ctrl = attach(&server, form(" \t ", "5", false, false));
    let outcome = ctrl.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert_eq!(
        ctrl.view().error(),
        Some("Please enter a hiring requirement first.")
    );
}

#[tokio::test]
async fn test_omitted_list_renders_zero_assessments() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let mut ctrl = attach(&server, form("anything", "", false, false));
    let outcome = ctrl.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Rendered { count: 0 }));
    assert_eq!(ctrl.view().meta(), "0 assessments");
    assert!(ctrl.view().results().contains("empty-state"));
    assert_eq!(ctrl.view().error(), None);
}

#[tokio::test]
async fn test_server_error_then_recovery() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assessments(1)))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctrl = attach(&server, form("data analyst", "10", false, true));

    let first = ctrl.submit().await;
    match first {
        SubmitOutcome::Failed(ClientError::Request { status, snippet, .. }) => {
            assert_eq!(status, 500);
            assert_eq!(snippet, "Internal Server Error");
        }
        other => panic!("expected request failure, got {other:?}"),
    }
    assert_eq!(ctrl.view().error(), Some(FETCH_FAILED));
    assert!(ctrl.view().results().contains(BACKEND_ERROR));
    assert_eq!(ctrl.view().trigger(), TriggerState::Ready);
    assert_eq!(ctrl.phase(), Phase::Idle);

    let second = ctrl.submit().await;
    assert!(matches!(second, SubmitOutcome::Rendered { count: 1 }));
    assert_eq!(ctrl.view().error(), None);
    assert_eq!(ctrl.view().meta(), "1 assessments");
    assert_eq!(
        ctrl.view().trigger_history(),
        &[
            TriggerState::Working,
            TriggerState::Ready,
            TriggerState::Working,
            TriggerState::Ready
        ]
    );
}

#[tokio::test]
async fn test_unreachable_service_shows_same_message() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ClientConfig::new(&format!("http://127.0.0.1:{port}")).unwrap();
    let mut ctrl = SubmissionController::attach(
        MemoryView::new().with_input(form("nurse", "3", false, false)),
        RecommendationClient::new(config),
        HtmlRenderer,
    )
    .unwrap();

    let outcome = ctrl.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed(ClientError::Network(_))));
    assert_eq!(ctrl.view().error(), Some(FETCH_FAILED));
    assert_eq!(ctrl.view().trigger(), TriggerState::Ready);
}

#[tokio::test]
async fn test_mixed_casing_and_missing_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommended_assessments": [
                { "name": "Casing", "remote_support": "yEs", "adaptive_support": "NO", "test_type": [] },
                {}
            ]
        })))
        .mount(&server)
        .await;

    let mut ctrl = attach(&server, form("mixed", "", false, false));
    ctrl.submit().await;

    let html = ctrl.view().results();
    assert!(html.contains("<span class=\"pill pill-yes\">Remote: yEs</span>"));
    assert!(html.contains("<span class=\"pill pill-no\">Adaptive: NO</span>"));
    assert!(html.contains("(Unnamed assessment)"));
    assert_eq!(html.matches("<span class=\"tag\">Unspecified</span>").count(), 2);
    assert_eq!(html.matches("N/A").count(), 2);
}

#[tokio::test]
async fn test_scalar_items_count_toward_the_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommended_assessments": ["junk", null, { "name": "Kept" }, { "name": "Cut" }]
        })))
        .mount(&server)
        .await;

    let mut ctrl = attach(&server, form("scalars", "2", false, false));
    let outcome = ctrl.submit().await;

    assert!(matches!(outcome, SubmitOutcome::Rendered { count: 2 }));
    assert_eq!(ctrl.view().meta(), "2 assessments");
    let html = ctrl.view().results();
    assert!(html.contains("(Unnamed assessment)"));
    assert!(html.contains("Kept"));
    assert!(!html.contains("Cut"));
}
