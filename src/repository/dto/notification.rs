use crate::repository::entity::NotificationFindEntity;
use crate::dto::NotificationStatus;
use bson::oid::ObjectId;
use serde_json::{Map, Value};
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: ObjectId,
    pub message: Map<String, Value>,
    pub status: NotificationStatus,
    pub created_at: OffsetDateTime,
    pub read_at: Option<OffsetDateTime>,
    pub delete_at: Option<OffsetDateTime>,
}

impl From<NotificationFindEntity> for Notification {
    fn from(value: NotificationFindEntity) -> Self {
        Self {
            id: value._id,
            message: value.message,
            status: value.status,
            created_at: value.created_at.into(),
            read_at: value.read_at.map(OffsetDateTime::from),
            delete_at: value.delete_at.map(OffsetDateTime::from),
        }
    }
}
