use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::events::UserCreatedEvent;

/// Serializable envelope for user events on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum UserEventMessage {
    UserCreated(UserCreatedMessage),
}

/// Serializable message for the UserCreated domain event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreatedMessage {
    pub event_id: String,
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&UserCreatedEvent> for UserCreatedMessage {
    fn from(event: &UserCreatedEvent) -> Self {
        Self {
            event_id: event.event_id.clone(),
            user_id: event.user_id.clone(),
            email: event.email.clone(),
            name: event.name.clone(),
            created_at: event.created_at,
        }
    }
}

impl From<&UserCreatedEvent> for UserEventMessage {
    fn from(event: &UserCreatedEvent) -> Self {
        UserEventMessage::UserCreated(UserCreatedMessage::from(event))
    }
}
