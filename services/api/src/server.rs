use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_decision_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use loan_decision::config::AppConfig;
use loan_decision::decision::{DecisionEngine, EstonianCodeReader};
use loan_decision::error::AppError;
use loan_decision::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(DecisionEngine::new(
        config.decision.clone(),
        EstonianCodeReader,
    ));

    let app = with_decision_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        min_amount = config.decision.minimum_loan_amount,
        max_amount = config.decision.maximum_loan_amount,
        "loan decision service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
