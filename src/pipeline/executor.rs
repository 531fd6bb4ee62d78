use crate::config::{AppConfig, SinkConfig};
use crate::error::{ConfigurationError, Result};
use crate::pipeline::batch::{InvocationBatch, StreamRecord};
use crate::pipeline::processors::{decode, transform, TypeFilter, Validator};
use crate::pipeline::sinks::{HttpClient, Publisher, ReqwestHttpClient};
use crate::pipeline::PipelineReceiver;
use std::sync::Arc;
use tracing::{debug, error, info, trace};

/// How a single record left the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Published,
    Ineligible,
    DecodeFailed,
    TransformFailed,
    Rejected,
    PublishFailed,
}

pub struct PipelineExecutor {
    sink: SinkConfig,
    filter: TypeFilter,
    validator: Validator,
    publisher: Publisher,
}

impl PipelineExecutor {
    pub fn new(sink: SinkConfig, validator: Validator, client: Arc<dyn HttpClient>) -> Self {
        Self {
            sink,
            filter: TypeFilter::default(),
            validator,
            publisher: Publisher::new(client),
        }
    }

    /// Build an executor with the reqwest transport and the configured ruleset.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let validator = Validator::load(config.schema_path.as_deref())?;
        info!(
            "Loaded schema ruleset with {} required properties",
            validator.ruleset().required().len()
        );

        let client = ReqwestHttpClient::new(config.publish_timeout())?;

        Ok(Self::new(config.sink(), validator, Arc::new(client)))
    }

    pub async fn run(self, mut receiver: PipelineReceiver) {
        info!("Pipeline executor started");

        while let Some(batch) = receiver.recv().await {
            debug!("Received batch with {} records", batch.len());

            match self.handle_invocation(&batch).await {
                Ok(()) => debug!("Invocation completed"),
                Err(_) => debug!("Invocation aborted"),
            }
        }

        info!("Pipeline executor stopped");
    }

    /// Process one batch top to bottom.
    ///
    /// A missing sink endpoint aborts before any record is read; every other
    /// failure is contained to its record.
    pub async fn handle_invocation(&self, batch: &InvocationBatch) -> std::result::Result<(), ConfigurationError> {
        let sink_url = match self.sink.endpoint() {
            Some(url) => url,
            None => {
                let err = ConfigurationError::MissingSinkUrl;
                error!("{}", err);
                return Err(err);
            }
        };

        let mut published = 0usize;
        let mut skipped = 0usize;
        let mut failed = 0usize;

        for record in &batch.records {
            match self.process_record(sink_url, record).await {
                RecordOutcome::Published => published += 1,
                RecordOutcome::Ineligible => skipped += 1,
                _ => failed += 1,
            }
        }

        debug!(
            records = batch.len(),
            published, skipped, failed, "Batch processed"
        );

        Ok(())
    }

    /// Run decode, filter, transform, validate and publish for one record.
    pub async fn process_record(&self, sink_url: &str, record: &StreamRecord) -> RecordOutcome {
        let event = match decode(record) {
            Ok(event) => event,
            Err(_) => return RecordOutcome::DecodeFailed,
        };

        if !self.filter.is_eligible(&event) {
            trace!(event_id = %event.id, event_type = %event.event_type, "Skipping event");
            return RecordOutcome::Ineligible;
        }

        let output = match transform(&event) {
            Ok(output) => output,
            Err(e) => {
                error!(event_id = %event.id, "{}", e);
                return RecordOutcome::TransformFailed;
            }
        };

        if let Err(e) = self.validator.validate(&output) {
            error!(
                event_id = %event.id,
                violations = %e.summary(),
                "invalid event data, not publishing"
            );
            return RecordOutcome::Rejected;
        }

        match self.publisher.publish(sink_url, &output).await {
            Ok(()) => RecordOutcome::Published,
            Err(e) => {
                error!(event_id = %event.id, "Error publishing event: {}", e);
                RecordOutcome::PublishFailed
            }
        }
    }
}
