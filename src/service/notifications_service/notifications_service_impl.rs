use super::{NotificationsService, NotificationsServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::NotificationsRepository,
    service::deletion_scheduler::DeletionScheduler,
};
use axum::async_trait;
use bson::oid::ObjectId;
use serde_json::{Map, Value};
use std::sync::Arc;
use time::OffsetDateTime;

pub struct NotificationsServiceImpl {
    config: NotificationsServiceConfig,
    repository: Arc<dyn NotificationsRepository>,
    deletion_scheduler: Arc<dyn DeletionScheduler>,
}

impl NotificationsServiceImpl {
    pub fn new(
        config: NotificationsServiceConfig,
        repository: Arc<dyn NotificationsRepository>,
        deletion_scheduler: Arc<dyn DeletionScheduler>,
    ) -> Self {
        Self {
            config,
            repository,
            deletion_scheduler,
        }
    }

    fn validate_message(&self, message: Option<Value>) -> Result<Map<String, Value>, Error> {
        let message = match message {
            None | Some(Value::Null) => return Err(Error::Validation("message is required")),
            Some(Value::Object(message)) => message,
            Some(_) => return Err(Error::Validation("message must be an object")),
        };

        if message.is_empty() {
            return Err(Error::Validation("message must not be empty"));
        }

        let size = serde_json::to_vec(&message)
            .map_err(|_| Error::Validation("message is not serializable"))?
            .len();
        if size > self.config.max_message_len {
            return Err(Error::ValidationMessageTooLarge {
                size,
                max_size: self.config.max_message_len,
            });
        }

        Ok(message)
    }

    fn delete_at(&self, read_at: OffsetDateTime) -> Result<OffsetDateTime, Error> {
        time::Duration::try_from(self.config.read_retention)
            .ok()
            .and_then(|retention| read_at.checked_add(retention))
            .ok_or(Error::DeletionTimeOutOfRange)
    }

    fn validate_pagination(pagination: &input::Pagination) -> Result<(), Error> {
        if pagination.page_size == 0 || pagination.page_size > input::MAX_PAGE_SIZE {
            return Err(Error::Validation("page_size must be between 1 and 100"));
        }

        Ok(())
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn create_notification(
        &self,
        notification: input::Notification,
    ) -> Result<output::Notification, Error> {
        tracing::info!("creating notification");
        tracing::trace!(?notification);

        let message = self.validate_message(notification.message)?;

        let notification = self
            .repository
            .insert(message, OffsetDateTime::now_utc())
            .await
            .map_err(Error::DatabaseWrite)?;

        tracing::info!(id = %notification.id, "created notification");

        Ok(notification.into())
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    async fn find_notification(&self, id: ObjectId) -> Result<output::Notification, Error> {
        tracing::info!("finding notification");

        let notification = self
            .repository
            .find(id)
            .await?
            .ok_or(Error::NotificationNotExist)?;

        tracing::info!("found notification");

        Ok(notification.into())
    }

    async fn find_notifications(
        &self,
        pagination: input::Pagination,
        filters: input::NotificationFilters,
    ) -> Result<Vec<output::Notification>, Error> {
        tracing::info!("finding notifications");
        tracing::trace!(?pagination, ?filters);

        Self::validate_pagination(&pagination)?;

        let notifications = self.repository.find_many(pagination, filters).await?;
        tracing::info!(count = notifications.len(), "found notifications");

        let notifications = notifications
            .into_iter()
            .map(output::Notification::from)
            .collect();

        Ok(notifications)
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    async fn mark_notification_read(&self, id: ObjectId) -> Result<output::Notification, Error> {
        tracing::info!("marking notification as read");

        let read_at = OffsetDateTime::now_utc();
        let delete_at = self.delete_at(read_at)?;

        let updated = self
            .repository
            .update_status_read(id, read_at, delete_at)
            .await
            .map_err(Error::DatabaseWrite)?;

        if let Some(notification) = updated {
            self.deletion_scheduler
                .schedule(id, self.config.read_retention)
                .await;
            tracing::info!(%delete_at, "marked notification as read");

            return Ok(notification.into());
        }

        // Nothing was updated, either the notification does not exist
        // or another request has already read it
        let notification = self
            .repository
            .find(id)
            .await
            .map_err(Error::DatabaseWrite)?
            .ok_or(Error::NotificationNotExist)?;

        tracing::info!("notification already read");

        Ok(notification.into())
    }

    #[tracing::instrument(skip_all, fields(id = %id))]
    async fn delete_notification(&self, id: ObjectId) -> Result<output::Notification, Error> {
        tracing::info!("deleting notification");

        let notification = self
            .repository
            .delete(id)
            .await?
            .ok_or(Error::NotificationNotExist)?;

        self.deletion_scheduler.cancel(id).await;

        tracing::info!("deleted notification");

        Ok(notification.into())
    }
}
