mod deletion_scheduler;
mod deletion_scheduler_impl;
mod deletion_sweep;
mod dto;

pub use deletion_scheduler::*;
pub use deletion_scheduler_impl::*;
pub use dto::DeletionSchedulerConfig;
