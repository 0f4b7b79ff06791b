pub mod deletion_scheduler;
pub mod notifications_service;
