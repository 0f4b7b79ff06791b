use std::time::Duration;

pub struct DeletionSchedulerConfig {
    pub sweep_interval: Duration,
}
