use axum::async_trait;
use bson::oid::ObjectId;
use std::time::Duration;

///
/// Service deleting notifications some time after they were read
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeletionScheduler: Send + Sync {
    ///
    /// Arms one-shot timer that deletes notification after `delay`.
    /// Timer already armed for the same notification is replaced,
    /// so at most one deletion is pending per notification.
    ///
    async fn schedule(&self, id: ObjectId, delay: Duration);

    ///
    /// Disarms timer of the notification. Does nothing when
    /// there is no timer armed for it.
    ///
    async fn cancel(&self, id: ObjectId);
}
