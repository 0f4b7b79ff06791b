use super::ApplicationEnv;
use crate::{
    repository::NotificationsRepositoryImpl,
    service::{
        deletion_scheduler::{DeletionSchedulerConfig, DeletionSchedulerImpl},
        notifications_service::{
            NotificationsService, NotificationsServiceConfig, NotificationsServiceImpl,
        },
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub notifications_service: Arc<dyn NotificationsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
    pub deletion_scheduler: Arc<DeletionSchedulerImpl>,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let notifications_repository = NotificationsRepositoryImpl::new(db).await?;
    let notifications_repository = Arc::new(notifications_repository);

    tracing::info!("creating services");
    let config = DeletionSchedulerConfig {
        sweep_interval: env.sweep_interval,
    };
    let deletion_scheduler =
        DeletionSchedulerImpl::new(config, notifications_repository.clone());
    let deletion_scheduler = Arc::new(deletion_scheduler);

    let config = NotificationsServiceConfig {
        max_message_len: env.max_message_len,
        read_retention: env.read_retention,
    };
    let notifications_service = NotificationsServiceImpl::new(
        config,
        notifications_repository,
        deletion_scheduler.clone(),
    );
    let notifications_service = Arc::new(notifications_service);

    Ok((
        ApplicationState {
            notifications_service,
        },
        ApplicationStateToClose {
            db_client,
            deletion_scheduler,
        },
    ))
}
