use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Save new unread notification.
    ///
    /// ### Returns
    /// Created notification
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - message is missing
    ///     - message is not an object or is an empty object
    /// - [Error::ValidationMessageTooLarge] when
    ///     - serialized message is too long
    /// - [Error::DatabaseWrite] when database fails
    ///
    async fn create_notification(
        &self,
        notification: input::Notification,
    ) -> Result<output::Notification, Error>;

    ///
    /// Find notification
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when
    ///     - notification with id does not exist
    ///
    async fn find_notification(&self, id: ObjectId) -> Result<output::Notification, Error>;

    ///
    /// Find notifications that match filters,
    /// newest first
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - page_size is 0 or exceeds maximum
    ///
    async fn find_notifications(
        &self,
        pagination: input::Pagination,
        filters: input::NotificationFilters,
    ) -> Result<Vec<output::Notification>, Error>;

    ///
    /// Mark notification as read and schedule its deletion.
    /// Marking already read notification changes nothing
    /// and does not schedule another deletion.
    ///
    /// ### Returns
    /// Read notification
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when
    ///     - notification with id does not exist
    /// - [Error::DatabaseWrite] when database fails
    ///
    async fn mark_notification_read(&self, id: ObjectId) -> Result<output::Notification, Error>;

    ///
    /// Delete notification immediately
    ///
    /// ### Returns
    /// Deleted notification
    ///
    /// ### Errors
    /// - [Error::NotificationNotExist] when
    ///     - notification with id does not exist
    ///     - notification has already been deleted
    ///
    async fn delete_notification(&self, id: ObjectId) -> Result<output::Notification, Error>;
}
