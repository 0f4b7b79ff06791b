use crate::dto::NotificationStatus;
use bson::DateTime;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize)]
pub struct NotificationInsertEntity<'a> {
    pub message: &'a Map<String, Value>,
    pub status: NotificationStatus,
    pub created_at: DateTime,
    pub read_at: Option<DateTime>,
    pub delete_at: Option<DateTime>,
}
