//! Route-level tests: the router wired to mock providers, driven without a
//! network listener.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use tower::util::ServiceExt;

use threatlens_common::fixtures::DashboardFixtures;
use threatlens_model::{
    AnomalyPrediction, HybridPrediction, MockAnomalyProvider, MockHybridProvider,
};
use threatlens_web::router::build_router;
use threatlens_web::state::AppState;

fn test_state(
    hybrid: MockHybridProvider,
    anomaly: MockAnomalyProvider,
) -> AppState {
    AppState::with_providers(
        DashboardFixtures::demo(),
        "http://127.0.0.1:8000".to_string(),
        Arc::new(hybrid),
        Arc::new(anomaly),
    )
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_dashboard_page_renders_fixtures_and_panels() {
    let app = build_router(test_state(
        MockHybridProvider::new(),
        MockAnomalyProvider::new(),
    ));

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Hybrid Threat Intelligence Dashboard"));
    assert!(html.contains("Total Threats"));
    assert!(html.contains("Live Hybrid Threat Analysis"));
    assert!(html.contains("Live Anomaly Detector"));
    assert!(html.contains("ALERT-001"));
    // Fresh session: both panels still show their prompt.
    assert!(html.contains("Enter traffic log data"));
    assert!(html.contains("Enter feature values"));
}

#[tokio::test]
async fn test_hybrid_submit_renders_green_verdict() {
    let provider = MockHybridProvider::new().with(HybridPrediction {
        verdict: "Normal Traffic".to_string(),
        anomaly_score: 0.01,
        is_known_threat: false,
    });
    let app = build_router(test_state(provider, MockAnomalyProvider::new()));

    let form = "duration=0.009&proto=tcp&service=http&conn_state=SF&orig_bytes=3\
                &resp_bytes=0&missed_bytes=2&orig_pkts=4&orig_ip_bytes=40";
    let response = app
        .oneshot(
            Request::post("/panel/hybrid")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("verdict-normal"));
    assert!(html.contains("Normal Traffic"));
    assert!(html.contains("0.0100"));
    assert!(html.contains(">No</b>"));
}

#[tokio::test]
async fn test_hybrid_submit_failure_is_contained_to_panel() {
    // Provider with no canned response fails every call.
    let app = build_router(test_state(
        MockHybridProvider::new(),
        MockAnomalyProvider::new(),
    ));

    let response = app
        .oneshot(
            Request::post("/panel/hybrid")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("duration=0.009"))
                .unwrap(),
        )
        .await
        .unwrap();

    // The page still renders; only the result region carries the error.
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Could not connect to the model."));
    assert!(html.contains("Total Threats"));
}

#[tokio::test]
async fn test_anomaly_submit_renders_red_verdict() {
    let provider = MockAnomalyProvider::new().with(AnomalyPrediction {
        is_anomaly: true,
        reconstruction_error: 0.8231,
        threshold: 0.5,
    });
    let app = build_router(test_state(MockHybridProvider::new(), provider));

    let form: String = (1..=32)
        .map(|i| format!("feature_{i}=0.5"))
        .collect::<Vec<_>>()
        .join("&");
    let response = app
        .oneshot(
            Request::post("/panel/anomaly")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Anomaly Detected"));
    assert!(html.contains("0.8231"));
    assert!(html.contains("0.5000"));
}

#[tokio::test]
async fn test_static_pages_mount() {
    for path in ["/alerts", "/reports", "/settings"] {
        let app = build_router(test_state(
            MockHybridProvider::new(),
            MockAnomalyProvider::new(),
        ));
        let response = app
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }
}
