use super::DeletionSchedulerConfig;
use crate::repository::NotificationsRepository;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::{
    sync::Notify,
    time::{interval, Interval, MissedTickBehavior},
};

///
/// Periodically deletes notifications whose persisted `delete_at` passed.
/// Picks up deletions whose timers were lost with a previous process.
///
pub struct DeletionSweep {
    repository: Arc<dyn NotificationsRepository>,
    interval: Interval,
}

impl DeletionSweep {
    pub fn new(
        config: &DeletionSchedulerConfig,
        repository: Arc<dyn NotificationsRepository>,
    ) -> Self {
        let mut interval = interval(config.sweep_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            repository,
            interval,
        }
    }

    #[tracing::instrument(name = "Deletion Sweep", skip_all)]
    pub async fn run(mut self, close_notify: Arc<Notify>) {
        tokio::select! {
            biased;

            // Wait for signal to close
            _ = close_notify.notified() => {},

            // First tick completes immediately, so the sweep also runs on startup
            _ = async { loop {
                self.interval.tick().await;
                self.sweep().await;
            }} => {}
        }

        tracing::debug!("sweep closed");
    }

    async fn sweep(&self) {
        tracing::debug!("sweep started");

        match self
            .repository
            .delete_expired(OffsetDateTime::now_utc())
            .await
        {
            Ok(deleted_count) => tracing::debug!(deleted_count, "sweep finished"),
            Err(err) => tracing::warn!(%err, "sweep failed"),
        }
    }
}
