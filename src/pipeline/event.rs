use serde::{de, Deserialize, Deserializer, Serialize};

/// Discriminant of the only event type that is forwarded.
pub const BOOKING_COMPLETED: &str = "booking_completed";

/// One decoded source record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IncomingEvent {
    pub id: String,
    #[serde(rename = "partitionKey")]
    pub partition_key: String,
    /// Producer-side timestamp. Decoded but not forwarded.
    #[serde(deserialize_with = "integral_number")]
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_completed: Option<BookingCompletedPayload>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BookingCompletedPayload {
    /// Epoch milliseconds of the business event.
    #[serde(deserialize_with = "integral_number")]
    pub timestamp: i64,
    pub product_provider: String,
    #[serde(rename = "orderId", deserialize_with = "integral_number")]
    pub order_id: i64,
}

/// Normalized shape delivered to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransformedEvent {
    pub product_order_id_buyer: i64,
    /// ISO-8601, UTC, millisecond precision.
    pub timestamp: String,
    pub product_provider_buyer: String,
}

/// Accept any JSON number with an integral value, so `1.7e12` and `12345.0`
/// decode like their integer spellings.
fn integral_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(n) = number.as_i64() {
        return Ok(n);
    }

    match number.as_f64() {
        // 2^63 itself is not representable as i64
        Some(f) if f.fract() == 0.0 && f >= -9_223_372_036_854_775_808.0 && f < 9_223_372_036_854_775_808.0 => {
            Ok(f as i64)
        }
        _ => Err(de::Error::custom(format!("expected an integral number, got {}", number))),
    }
}
