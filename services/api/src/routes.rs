use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use loan_decision::decision::{decision_router, DecisionEngine, IdentityCodeReader};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_decision_routes<R>(engine: Arc<DecisionEngine<R>>) -> axum::Router
where
    R: IdentityCodeReader + 'static,
{
    decision_router(engine)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let recorder = PrometheusBuilder::new().build_recorder();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        };
        with_decision_routes(Arc::new(DecisionEngine::standard())).layer(Extension(state))
    }

    async fn get(router: axum::Router, uri: &str) -> StatusCode {
        router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
            .await
            .expect("router responds")
            .status()
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(get(app(false), "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_tracks_flag() {
        assert_eq!(get(app(false), "/ready").await, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(get(app(true), "/ready").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_flips_once_listener_is_bound() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let flag = Arc::new(AtomicBool::new(false));
        let state = AppState {
            readiness: flag.clone(),
            metrics: Arc::new(recorder.handle()),
        };
        let router =
            with_decision_routes(Arc::new(DecisionEngine::standard())).layer(Extension(state));

        flag.store(true, Ordering::Release);
        assert_eq!(get(router, "/ready").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_endpoint_serves_prometheus_text() {
        assert_eq!(get(app(true), "/metrics").await, StatusCode::OK);
    }
}
