//!
//! In-memory [NotificationsRepository] used by tests that need
//! a store with real state instead of mocked expectations
//!

use super::{dto::Notification, Error, NotificationsRepository};
use crate::dto::{input, NotificationStatus};
use axum::async_trait;
use bson::{oid::ObjectId, DateTime};
use serde_json::{Map, Value};
use std::collections::HashMap;
use time::OffsetDateTime;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct NotificationsRepositoryMemory {
    notifications: Mutex<HashMap<ObjectId, Notification>>,
}

impl NotificationsRepositoryMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Timestamps are kept with the millisecond precision of the database
fn stored(datetime: OffsetDateTime) -> OffsetDateTime {
    OffsetDateTime::from(DateTime::from(datetime))
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryMemory {
    async fn insert(
        &self,
        message: Map<String, Value>,
        created_at: OffsetDateTime,
    ) -> Result<Notification, Error> {
        let notification = Notification {
            id: ObjectId::new(),
            message,
            status: NotificationStatus::Unread,
            created_at: stored(created_at),
            read_at: None,
            delete_at: None,
        };

        self.notifications
            .lock()
            .await
            .insert(notification.id, notification.clone());

        Ok(notification)
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Notification>, Error> {
        Ok(self.notifications.lock().await.get(&id).cloned())
    }

    async fn find_many(
        &self,
        pagination: input::Pagination,
        filters: input::NotificationFilters,
    ) -> Result<Vec<Notification>, Error> {
        let mut notifications = self
            .notifications
            .lock()
            .await
            .values()
            .filter(|notification| {
                filters
                    .status
                    .map_or(true, |status| notification.status == status)
            })
            .cloned()
            .collect::<Vec<_>>();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let notifications = notifications
            .into_iter()
            .skip(pagination.page_size as usize * pagination.page_idx as usize)
            .take(pagination.page_size as usize)
            .collect();

        Ok(notifications)
    }

    async fn update_status_read(
        &self,
        id: ObjectId,
        read_at: OffsetDateTime,
        delete_at: OffsetDateTime,
    ) -> Result<Option<Notification>, Error> {
        let mut notifications = self.notifications.lock().await;

        match notifications.get_mut(&id) {
            Some(notification) if notification.status == NotificationStatus::Unread => {
                notification.status = NotificationStatus::Read;
                notification.read_at = Some(stored(read_at));
                notification.delete_at = Some(stored(delete_at));
                Ok(Some(notification.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<Option<Notification>, Error> {
        Ok(self.notifications.lock().await.remove(&id))
    }

    async fn delete_expired(&self, now: OffsetDateTime) -> Result<u64, Error> {
        let mut notifications = self.notifications.lock().await;

        let len_before = notifications.len();
        notifications.retain(|_, notification| {
            notification
                .delete_at
                .map_or(true, |delete_at| delete_at > now)
        });

        Ok((len_before - notifications.len()) as u64)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    fn message() -> Map<String, Value> {
        json!({ "text": "Game rescheduled" })
            .as_object()
            .cloned()
            .unwrap()
    }

    #[tokio::test]
    async fn insert_returns_stored_created_at() {
        let repository = NotificationsRepositoryMemory::new();

        let created_at = datetime!(2026-10-19 5:05:28.386728370 UTC);
        let notification = repository.insert(message(), created_at).await.unwrap();

        assert_eq!(
            notification.created_at,
            datetime!(2026-10-19 5:05:28.386 UTC)
        );
        let found = repository.find(notification.id).await.unwrap().unwrap();
        assert_eq!(found.created_at, notification.created_at);
    }

    #[tokio::test]
    async fn update_status_read_returns_stored_timestamps() {
        let repository = NotificationsRepositoryMemory::new();
        let notification = repository
            .insert(message(), OffsetDateTime::now_utc())
            .await
            .unwrap();

        let read_at = datetime!(2026-10-19 6:00:00.123456789 UTC);
        let delete_at = datetime!(2026-10-20 6:00:00.123456789 UTC);
        let updated = repository
            .update_status_read(notification.id, read_at, delete_at)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.read_at, Some(datetime!(2026-10-19 6:00:00.123 UTC)));
        assert_eq!(
            updated.delete_at,
            Some(datetime!(2026-10-20 6:00:00.123 UTC))
        );
    }
}
