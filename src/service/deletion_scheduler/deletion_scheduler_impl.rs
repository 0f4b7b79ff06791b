use super::{deletion_sweep::DeletionSweep, DeletionScheduler, DeletionSchedulerConfig};
use crate::repository::NotificationsRepository;
use axum::async_trait;
use bson::oid::ObjectId;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{
    sync::{Mutex, Notify},
    task::JoinHandle,
};

type ArmedTimers = Arc<Mutex<HashMap<ObjectId, ArmedTimer>>>;

struct ArmedTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

///
/// Keeps one tokio task per pending deletion and runs [DeletionSweep]
/// in the background. Timers live only in memory, the sweep relies on
/// `delete_at` persisted with the notification.
///
pub struct DeletionSchedulerImpl {
    repository: Arc<dyn NotificationsRepository>,
    timers: ArmedTimers,
    next_generation: AtomicU64,

    sweep_close_notify: Arc<Notify>,
    sweep_handle: Mutex<Option<JoinHandle<()>>>,
}

impl DeletionSchedulerImpl {
    pub fn new(
        config: DeletionSchedulerConfig,
        repository: Arc<dyn NotificationsRepository>,
    ) -> Self {
        let sweep = DeletionSweep::new(&config, repository.clone());
        let sweep_close_notify = Arc::new(Notify::new());
        let sweep_handle = tokio::spawn(sweep.run(sweep_close_notify.clone()));

        Self {
            repository,
            timers: Arc::new(Mutex::new(HashMap::new())),
            next_generation: AtomicU64::new(0),
            sweep_close_notify,
            sweep_handle: Mutex::new(Some(sweep_handle)),
        }
    }

    ///
    /// Stops the sweep and disarms all timers.
    /// Pending deletions stay persisted and are handled
    /// by the sweep of the next process.
    ///
    pub async fn close(&self) {
        tracing::debug!("closing deletion sweep");
        self.sweep_close_notify.notify_one();
        if let Some(sweep_handle) = self.sweep_handle.lock().await.take() {
            if let Err(err) = sweep_handle.await {
                tracing::error!(%err, "deletion sweep panicked");
            }
        }

        let mut timers = self.timers.lock().await;
        let disarmed_count = timers.len();
        for (_, timer) in timers.drain() {
            timer.handle.abort();
        }
        tracing::debug!(disarmed_count, "disarmed deletion timers");
    }
}

#[async_trait]
impl DeletionScheduler for DeletionSchedulerImpl {
    async fn schedule(&self, id: ObjectId, delay: Duration) {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);

        // Lock is held while spawning, so the timer can't
        // remove itself before it is registered
        let mut timers = self.timers.lock().await;
        let handle = tokio::spawn(run_timer(
            self.repository.clone(),
            self.timers.clone(),
            id,
            generation,
            delay,
        ));

        if let Some(previous) = timers.insert(id, ArmedTimer { generation, handle }) {
            previous.handle.abort();
            tracing::debug!(%id, "replaced previous deletion timer");
        }
        tracing::debug!(%id, ?delay, "armed deletion timer");
    }

    async fn cancel(&self, id: ObjectId) {
        if let Some(timer) = self.timers.lock().await.remove(&id) {
            timer.handle.abort();
            tracing::debug!(%id, "disarmed deletion timer");
        }
    }
}

#[tracing::instrument(name = "Deletion Timer", skip_all, fields(id = %id))]
async fn run_timer(
    repository: Arc<dyn NotificationsRepository>,
    timers: ArmedTimers,
    id: ObjectId,
    generation: u64,
    delay: Duration,
) {
    tokio::time::sleep(delay).await;
    tracing::debug!("deletion timer fired");

    // Nobody waits for the result, failures are only logged
    match repository.delete(id).await {
        Ok(Some(_)) => tracing::info!("deleted read notification"),
        Ok(None) => tracing::debug!("notification already deleted"),
        Err(err) => tracing::warn!(%err, "failed to delete read notification"),
    }

    let mut timers = timers.lock().await;
    if timers
        .get(&id)
        .is_some_and(|timer| timer.generation == generation)
    {
        timers.remove(&id);
    }
}
