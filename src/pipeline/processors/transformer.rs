use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use crate::error::TransformError;
use crate::pipeline::event::{IncomingEvent, TransformedEvent};

/// Map an eligible event's nested booking payload into the sink's shape.
///
/// The outer event timestamp is ignored; the output carries the booking's own
/// timestamp.
pub fn transform(event: &IncomingEvent) -> Result<TransformedEvent, TransformError> {
    let payload = event
        .booking_completed
        .as_ref()
        .ok_or(TransformError::MissingPayload)?;

    Ok(TransformedEvent {
        product_order_id_buyer: payload.order_id,
        timestamp: epoch_millis_to_iso(payload.timestamp)?,
        product_provider_buyer: payload.product_provider.clone(),
    })
}

/// Render epoch milliseconds as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn epoch_millis_to_iso(millis: i64) -> Result<String, TransformError> {
    let dt: DateTime<Utc> = DateTime::from_timestamp_millis(millis)
        .ok_or(TransformError::TimestampOutOfRange(millis))?;

    // RFC 3339 only has room for four-digit, non-negative years
    if !(0..=9999).contains(&dt.year()) {
        return Err(TransformError::TimestampOutOfRange(millis));
    }

    Ok(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::event::BookingCompletedPayload;

    fn booking_event(payload: Option<BookingCompletedPayload>) -> IncomingEvent {
        IncomingEvent {
            id: "evt-1".to_string(),
            partition_key: "pk".to_string(),
            timestamp: 1,
            event_type: "booking_completed".to_string(),
            booking_completed: payload,
        }
    }

    #[test]
    fn test_transform_copies_fields() {
        let event = booking_event(Some(BookingCompletedPayload {
            timestamp: 1700000000123,
            product_provider: "Test Provider".to_string(),
            order_id: 12345,
        }));

        let out = transform(&event).unwrap();
        assert_eq!(out.product_order_id_buyer, 12345);
        assert_eq!(out.product_provider_buyer, "Test Provider");
        assert_eq!(out.timestamp, "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn test_transform_uses_nested_timestamp() {
        let mut event = booking_event(Some(BookingCompletedPayload {
            timestamp: 0,
            product_provider: "p".to_string(),
            order_id: 1,
        }));
        event.timestamp = 1700000000000;

        assert_eq!(transform(&event).unwrap().timestamp, "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_transform_missing_payload() {
        let event = booking_event(None);
        assert_eq!(transform(&event), Err(TransformError::MissingPayload));
    }

    #[test]
    fn test_timestamp_out_of_range() {
        assert_eq!(
            epoch_millis_to_iso(i64::MAX),
            Err(TransformError::TimestampOutOfRange(i64::MAX))
        );
        // Year 10000
        assert!(epoch_millis_to_iso(253_402_300_800_000).is_err());
        assert_eq!(
            epoch_millis_to_iso(253_402_300_799_999).unwrap(),
            "9999-12-31T23:59:59.999Z"
        );
    }

    #[test]
    fn test_negative_epoch_before_1970() {
        assert_eq!(epoch_millis_to_iso(-1).unwrap(), "1969-12-31T23:59:59.999Z");
    }
}
