use crate::{dto::NotificationStatus, repository};
use serde::Serialize;
use serde_json::{Map, Value};
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct Notification {
    pub id: String,
    pub message: Map<String, Value>,
    pub status: NotificationStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub read_at: Option<OffsetDateTime>,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub delete_at: Option<OffsetDateTime>,
}

impl From<repository::Notification> for Notification {
    fn from(value: repository::Notification) -> Self {
        Self {
            id: value.id.to_hex(),
            message: value.message,
            status: value.status,
            created_at: value.created_at,
            read_at: value.read_at,
            delete_at: value.delete_at,
        }
    }
}
