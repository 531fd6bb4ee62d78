use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::error;
use crate::error::DecodeError;
use crate::pipeline::batch::StreamRecord;
use crate::pipeline::event::IncomingEvent;

/// Decode a stream record's base64 payload into an [`IncomingEvent`].
///
/// Failures are logged here and returned to the caller; they never abort the batch.
pub fn decode(record: &StreamRecord) -> Result<IncomingEvent, DecodeError> {
    decode_payload(&record.kinesis.data).map_err(|e| {
        error!(record = record.log_id(), "Failed to decode record: {}", e);
        e
    })
}

fn decode_payload(data: &str) -> Result<IncomingEvent, DecodeError> {
    let bytes = STANDARD.decode(data.trim())?;
    let text = String::from_utf8(bytes)?;
    let event = serde_json::from_str(&text)?;
    Ok(event)
}
