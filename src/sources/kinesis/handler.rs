use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use crate::error::{AppError, Result};
use crate::pipeline::{batch::InvocationBatch, PipelineSender};

pub struct InvocationState {
    pub pipeline_tx: PipelineSender,
}

pub async fn handle_invocation(
    State(state): State<Arc<InvocationState>>,
    body: axum::body::Bytes,
) -> Result<impl IntoResponse> {
    // Step 1: Parse the stream envelope
    let batch: InvocationBatch = serde_json::from_slice(&body)?;
    let record_count = batch.len();

    // Step 2: Hand the whole batch to the pipeline
    state.pipeline_tx
        .send(batch)
        .await
        .map_err(|_| AppError::PipelineSend)?;

    tracing::info!("Accepted invocation with {} records", record_count);

    Ok(StatusCode::ACCEPTED)
}
