use crate::pipeline::event::{IncomingEvent, BOOKING_COMPLETED};

/// Filter that lets through events carrying a single discriminant
pub struct TypeFilter {
    event_type: String,
}

impl TypeFilter {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
        }
    }

    pub fn is_eligible(&self, event: &IncomingEvent) -> bool {
        event.event_type == self.event_type
    }
}

impl Default for TypeFilter {
    fn default() -> Self {
        Self::new(BOOKING_COMPLETED)
    }
}
