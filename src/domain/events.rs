use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    Workshop,
    Class,
    Featured,
}

/// Offline event listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub id: String,
    pub name: String,
    pub date: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub spots_available: u32,
    /// Carried for display only; registration is not wired.
    pub is_registered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl EventItem {
    pub fn is_class(&self) -> bool {
        self.event_type == EventType::Class
    }

    /// Call-to-action label for promoted classes.
    pub fn register_label(&self) -> String {
        match &self.price {
            Some(price) => format!("Register for {}", price),
            None => "Register".to_string(),
        }
    }
}

/// Events split into promoted classes and everything else, order preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPartition<'a> {
    pub classes: Vec<&'a EventItem>,
    pub others: Vec<&'a EventItem>,
}

pub fn partition_events(events: &[EventItem]) -> EventPartition<'_> {
    let (classes, others): (Vec<&EventItem>, Vec<&EventItem>) =
        events.iter().partition(|event| event.is_class());
    EventPartition { classes, others }
}
