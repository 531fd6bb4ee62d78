//! Stream-trigger front door: one HTTP request carries one batch of records.

pub mod handler;

use axum::{Router, routing::post};
use std::sync::Arc;
use crate::pipeline::PipelineSender;
use handler::{handle_invocation, InvocationState};

pub fn register_kinesis_routes(
    router: Router,
    invocation_path: &str,
    pipeline_tx: PipelineSender,
) -> Router {
    let state = Arc::new(InvocationState { pipeline_tx });

    let router = router.route(
        invocation_path,
        post(handle_invocation).with_state(state),
    );

    tracing::info!("Registered invocation endpoint at: {}", invocation_path);

    router
}
