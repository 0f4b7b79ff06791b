use super::{dto::Notification, error::Error};
use crate::dto::input;
use axum::async_trait;
use bson::oid::ObjectId;
use serde_json::{Map, Value};
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Inserts new notification with status unread
    ///
    async fn insert(
        &self,
        message: Map<String, Value>,
        created_at: OffsetDateTime,
    ) -> Result<Notification, Error>;

    ///
    /// Finds notification by id
    ///
    async fn find(&self, id: ObjectId) -> Result<Option<Notification>, Error>;

    ///
    /// Finds notifications matching filters.
    /// Notifications are sorted descending by creation date.
    ///
    async fn find_many(
        &self,
        pagination: input::Pagination,
        filters: input::NotificationFilters,
    ) -> Result<Vec<Notification>, Error>;

    ///
    /// Changes status from unread to read and stores when the
    /// notification should be deleted.
    ///
    /// ### Returns
    /// Updated notification or None when
    ///     - notification does not exist
    ///     - notification was already read
    ///
    async fn update_status_read(
        &self,
        id: ObjectId,
        read_at: OffsetDateTime,
        delete_at: OffsetDateTime,
    ) -> Result<Option<Notification>, Error>;

    ///
    /// Deletes notification
    ///
    /// ### Returns
    /// Deleted notification or None when notification does not exist
    ///
    async fn delete(&self, id: ObjectId) -> Result<Option<Notification>, Error>;

    ///
    /// Deletes all notifications with delete_at not later than `now`
    ///
    /// ### Returns
    /// Number of deleted notifications
    ///
    async fn delete_expired(&self, now: OffsetDateTime) -> Result<u64, Error>;
}
