//! Metrics recorded while serving sum requests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use metrics_exporter_prometheus::PrometheusBuilder;
use sum_service::startup::build_router;
use sum_service::AppState;
use tower::ServiceExt;

/// Send the requests through a fresh router on a current-thread runtime with a
/// thread-local recorder, and return the rendered Prometheus text.
fn render_after(requests: Vec<Request<Body>>) -> String {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();

    metrics::with_local_recorder(&recorder, || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async {
            for request in requests {
                let response = build_router(AppState::new("sum-service"))
                    .oneshot(request)
                    .await
                    .unwrap();
                assert_ne!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            }
        });
    });

    handle.render()
}

fn post(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).unwrap()
}

#[test]
fn http_metrics_use_matched_route_and_status() {
    let rendered = render_after(vec![
        post("/sums/pathVariable.postSum/1/2"),
        post("/sums/pathVariable.postSum/100/H"),
        post("/sums/pathVariable.postSum/7/8"),
    ]);

    assert!(rendered.contains(
        r#"http_requests_total{method="POST",path="/sums/pathVariable.postSum/:number_one/:number_two",status="200"} 2"#
    ));
    assert!(rendered.contains(
        r#"http_requests_total{method="POST",path="/sums/pathVariable.postSum/:number_one/:number_two",status="400"} 1"#
    ));
    assert!(rendered.contains("http_request_duration_seconds"));
    assert!(!rendered.contains("/sums/pathVariable.postSum/1/2"));
}

#[test]
fn sum_metrics_count_outcomes_per_transport() {
    let rendered = render_after(vec![
        post("/sums/pathVariable.postSum/1/2"),
        post("/sums/requestParam.postSum?numberOne=500&numberTwo=a"),
        Request::post("/sums/requestBody.postSum")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"numberOne":1000,"numberTwo":"K"}"#))
            .unwrap(),
    ]);

    assert!(rendered
        .contains(r#"sum_requests_total{transport="path_variable",outcome="computed"} 1"#));
    assert!(rendered
        .contains(r#"sum_requests_total{transport="request_param",outcome="rejected"} 1"#));
    assert!(rendered
        .contains(r#"sum_requests_total{transport="request_body",outcome="rejected"} 1"#));
}
