use serde::{Deserialize, Serialize};

/// One invocation's worth of stream records, in arrival order.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InvocationBatch {
    #[serde(rename = "Records", default)]
    pub records: Vec<StreamRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StreamRecord {
    #[serde(rename = "eventID", default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    pub kinesis: KinesisData,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KinesisData {
    /// Base64 of the UTF-8 JSON event document.
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
}

impl StreamRecord {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            event_id: None,
            kinesis: KinesisData {
                data: data.into(),
                partition_key: None,
                sequence_number: None,
            },
        }
    }

    /// Best available identifier for log lines.
    pub fn log_id(&self) -> &str {
        self.event_id
            .as_deref()
            .or(self.kinesis.sequence_number.as_deref())
            .unwrap_or("-")
    }
}

impl InvocationBatch {
    pub fn new(records: Vec<StreamRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
