#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD, Engine};
use booking_relay::error::PublishError;
use booking_relay::pipeline::batch::StreamRecord;
use booking_relay::pipeline::sinks::HttpClient;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Sink fake: records every POST and fails for selected order ids.
#[derive(Default)]
pub struct FakeSink {
    calls: Mutex<Vec<(String, Value)>>,
    failing_orders: HashSet<i64>,
}

impl FakeSink {
    pub fn failing_for(order_ids: &[i64]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing_orders: order_ids.iter().copied().collect(),
        }
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl HttpClient for FakeSink {
    async fn post_json(&self, url: &str, body: &Value) -> Result<(), PublishError> {
        self.calls.lock().unwrap().push((url.to_string(), body.clone()));

        let order_id = body["product_order_id_buyer"].as_i64().unwrap_or_default();
        if self.failing_orders.contains(&order_id) {
            return Err(PublishError::Transport {
                url: url.to_string(),
                message: "connection reset by peer".to_string(),
            });
        }
        Ok(())
    }
}

/// One captured event.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
    pub fields: BTreeMap<String, String>,
}

/// Layer that keeps the level, message and fields of every event.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<LogEntry>>>);

impl CapturedLogs {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.0.lock().unwrap().clone()
    }

    pub fn count_containing(&self, level: Level, needle: &str) -> usize {
        self.entries()
            .iter()
            .filter(|e| e.level == level && e.message.contains(needle))
            .count()
    }

    pub fn at_or_above(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| e.level <= level)
            .map(|e| e.message)
            .collect()
    }

    /// Value of `field` on every event whose message contains `needle`.
    pub fn field_of(&self, needle: &str, field: &str) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| e.message.contains(needle))
            .filter_map(|e| e.fields.get(field).cloned())
            .collect()
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: BTreeMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let rendered = format!("{:?}", value);
        if field.name() == "message" {
            self.message = rendered;
        } else {
            self.fields.insert(field.name().to_string(), rendered);
        }
    }
}

impl<S: Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.0.lock().unwrap().push(LogEntry {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

pub fn encoded_record(value: &Value) -> StreamRecord {
    StreamRecord::new(STANDARD.encode(value.to_string()))
}

pub fn booking_completed(order_id: i64, provider: &str, timestamp: i64) -> Value {
    json!({
        "id": format!("evt-{}", order_id),
        "partitionKey": format!("pk-{}", order_id),
        "timestamp": 1600000000000i64,
        "type": "booking_completed",
        "booking_completed": {
            "timestamp": timestamp,
            "product_provider": provider,
            "orderId": order_id
        }
    })
}
