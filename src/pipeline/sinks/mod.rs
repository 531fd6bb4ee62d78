pub mod http;
pub mod publisher;

use crate::error::PublishError;
use serde_json::Value;

pub use http::ReqwestHttpClient;
pub use publisher::Publisher;

/// Outbound HTTP capability used to deliver events.
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// POST `body` as JSON to `url`. Any non-success outcome is an error.
    async fn post_json(&self, url: &str, body: &Value) -> Result<(), PublishError>;
}
