use super::{
    dto::Notification,
    entity::{NotificationFindEntity, NotificationInsertEntity},
    Error, NotificationsRepository,
};
use crate::dto::{input, NotificationStatus};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use serde_json::{Map, Value};
use time::OffsetDateTime;

const NOTIFICATIONS: &str = "notifications";
const INDEX_NAME_DELETE_AT: &str = "index_delete_at";
const INDEX_NAME_STATUS_CREATED_AT: &str = "index_status_created_at";

pub struct NotificationsRepositoryImpl {
    database: Database,
}

impl NotificationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == NOTIFICATIONS) {
            tracing::debug!(collection = NOTIFICATIONS, "creating collection");
            database.create_collection(NOTIFICATIONS).await?;
        }

        let collection = database.collection::<Document>(NOTIFICATIONS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_DELETE_AT.to_string()) {
            Self::create_index(&collection, INDEX_NAME_DELETE_AT, doc! { "delete_at": 1 }).await?;
            tracing::debug!(
                collection = NOTIFICATIONS,
                index = INDEX_NAME_DELETE_AT,
                "created index"
            );
        }
        if !index_names.contains(&INDEX_NAME_STATUS_CREATED_AT.to_string()) {
            Self::create_index(
                &collection,
                INDEX_NAME_STATUS_CREATED_AT,
                doc! { "status": 1, "created_at": -1 },
            )
            .await?;
            tracing::debug!(
                collection = NOTIFICATIONS,
                index = INDEX_NAME_STATUS_CREATED_AT,
                "created index"
            );
        }

        Ok(Self { database })
    }

    async fn create_index(
        collection: &Collection<Document>,
        name: &str,
        keys: Document,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().name(name.to_string()).build())
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn insert(
        &self,
        message: Map<String, Value>,
        created_at: OffsetDateTime,
    ) -> Result<Notification, Error> {
        let insert_entity = NotificationInsertEntity {
            message: &message,
            status: NotificationStatus::Unread,
            created_at: DateTime::from(created_at),
            read_at: None,
            delete_at: None,
        };

        let insert_result = self
            .database
            .collection::<NotificationInsertEntity>(NOTIFICATIONS)
            .insert_one(&insert_entity)
            .await?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            tracing::error!("invalid type of inserted '_id'");
            return Err(Error::InvalidInsertedId);
        };

        let created_at = OffsetDateTime::from(insert_entity.created_at);

        Ok(Notification {
            id,
            message,
            status: NotificationStatus::Unread,
            created_at,
            read_at: None,
            delete_at: None,
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Notification>, Error> {
        let notification = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS)
            .find_one(doc! { "_id": id })
            .await?
            .map(Notification::from);

        Ok(notification)
    }

    async fn find_many(
        &self,
        pagination: input::Pagination,
        input::NotificationFilters { status }: input::NotificationFilters,
    ) -> Result<Vec<Notification>, Error> {
        let mut filter = doc! {};
        if let Some(status) = status {
            filter.insert("status", status.as_ref());
        }

        let notifications = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS)
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .skip(pagination.page_size as u64 * pagination.page_idx as u64)
            .limit(pagination.page_size as i64)
            .await?
            .map_ok(Notification::from)
            .try_collect()
            .await?;

        Ok(notifications)
    }

    async fn update_status_read(
        &self,
        id: ObjectId,
        read_at: OffsetDateTime,
        delete_at: OffsetDateTime,
    ) -> Result<Option<Notification>, Error> {
        // Filtering on the previous status makes the transition
        // happen at most once, even for concurrent requests
        let notification = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS)
            .find_one_and_update(
                doc! {
                    "_id": id,
                    "status": NotificationStatus::Unread.as_ref(),
                },
                doc! {
                    "$set": {
                        "status": NotificationStatus::Read.as_ref(),
                        "read_at": DateTime::from(read_at),
                        "delete_at": DateTime::from(delete_at),
                    }
                },
            )
            .return_document(ReturnDocument::After)
            .await?
            .map(Notification::from);

        Ok(notification)
    }

    async fn delete(&self, id: ObjectId) -> Result<Option<Notification>, Error> {
        let notification = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS)
            .find_one_and_delete(doc! { "_id": id })
            .await?
            .map(Notification::from);

        Ok(notification)
    }

    async fn delete_expired(&self, now: OffsetDateTime) -> Result<u64, Error> {
        let delete_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .delete_many(doc! {
                "delete_at": { "$lte": DateTime::from(now) },
            })
            .await?;

        Ok(delete_result.deleted_count)
    }
}
