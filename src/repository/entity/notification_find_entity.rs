use crate::dto::NotificationStatus;
use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize)]
pub struct NotificationFindEntity {
    pub _id: ObjectId,
    pub message: Map<String, Value>,
    pub status: NotificationStatus,
    pub created_at: DateTime,
    pub read_at: Option<DateTime>,
    pub delete_at: Option<DateTime>,
}
