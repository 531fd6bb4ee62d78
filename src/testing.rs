use std::sync::Mutex;
use serde_json::Value;
use crate::error::PublishError;
use crate::pipeline::sinks::HttpClient;

/// In-memory [`HttpClient`] that records every call.
#[derive(Default)]
pub struct RecordingClient {
    calls: Mutex<Vec<(String, Value)>>,
    fail_status: Option<u16>,
}

impl RecordingClient {
    pub fn failing(status: u16) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_status: Some(status),
        }
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl HttpClient for RecordingClient {
    async fn post_json(&self, url: &str, body: &Value) -> Result<(), PublishError> {
        self.calls.lock().unwrap().push((url.to_string(), body.clone()));

        match self.fail_status {
            Some(status) => Err(PublishError::Status {
                url: url.to_string(),
                status,
            }),
            None => Ok(()),
        }
    }
}
