use std::sync::Arc;
use tracing::info;
use crate::error::PublishError;
use crate::pipeline::event::TransformedEvent;
use super::HttpClient;

/// Delivers validated events to the sink through an injected [`HttpClient`].
#[derive(Clone)]
pub struct Publisher {
    client: Arc<dyn HttpClient>,
}

impl Publisher {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    pub async fn publish(&self, sink_url: &str, output: &TransformedEvent) -> Result<(), PublishError> {
        let body = serde_json::to_value(output)?;
        self.client.post_json(sink_url, &body).await?;

        info!(
            order_id = output.product_order_id_buyer,
            "Event published successfully"
        );
        Ok(())
    }
}
