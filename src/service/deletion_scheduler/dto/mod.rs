mod deletion_scheduler_config;

pub use deletion_scheduler_config::*;
