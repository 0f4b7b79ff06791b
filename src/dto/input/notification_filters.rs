use crate::dto::NotificationStatus;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct NotificationFilters {
    pub status: Option<NotificationStatus>,
}
