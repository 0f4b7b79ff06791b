use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::notifications_service::NotificationsService,
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use bson::oid::ObjectId;
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route(
            "/notifications",
            post(create_notification).get(get_notifications),
        )
        .route(
            "/notifications/:id",
            get(get_notification)
                .put(mark_notification_read)
                .delete(delete_notification),
        )
}

///
/// Identifier that is not an ObjectId can't belong to any notification
///
fn parse_id(id: &str) -> Result<ObjectId, Error> {
    ObjectId::parse_str(id).map_err(|_| Error::NotificationNotExist)
}

async fn create_notification(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    notification: Result<Json<input::Notification>, JsonRejection>,
) -> Result<(StatusCode, Json<output::Notification>), Error> {
    let Json(notification) = notification?;

    let notification = notifications_service
        .create_notification(notification)
        .await?;

    Ok((StatusCode::CREATED, Json(notification)))
}

async fn get_notifications(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    pagination: Result<Query<input::Pagination>, QueryRejection>,
    filters: Result<Query<input::NotificationFilters>, QueryRejection>,
) -> Result<Json<Vec<output::Notification>>, Error> {
    let Query(pagination) = pagination?;
    let Query(filters) = filters?;

    let notifications = notifications_service
        .find_notifications(pagination, filters)
        .await?;

    Ok(Json(notifications))
}

async fn get_notification(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path(id): Path<String>,
) -> Result<Json<output::Notification>, Error> {
    let id = parse_id(&id)?;

    let notification = notifications_service.find_notification(id).await?;

    Ok(Json(notification))
}

async fn mark_notification_read(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path(id): Path<String>,
) -> Result<Json<output::Notification>, Error> {
    let id = parse_id(&id)?;

    let notification = notifications_service.mark_notification_read(id).await?;

    Ok(Json(notification))
}

async fn delete_notification(
    State(notifications_service): State<Arc<dyn NotificationsService>>,
    Path(id): Path<String>,
) -> Result<Json<output::Notification>, Error> {
    let id = parse_id(&id)?;

    let notification = notifications_service.delete_notification(id).await?;

    Ok(Json(notification))
}
