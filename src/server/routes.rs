use axum::{Router, routing::get, http::StatusCode};
use tower_http::trace::TraceLayer;
use crate::config::AppConfig;
use crate::pipeline::PipelineSender;
use crate::sources::kinesis;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub fn create_router(config: &AppConfig, pipeline_tx: PipelineSender) -> Router {
    let router = Router::new()
        .route("/-/healthz", get(health_check))
        .route("/-/ready", get(health_check));

    kinesis::register_kinesis_routes(router, &config.invocation_path, pipeline_tx)
        .layer(TraceLayer::new_for_http())
}
