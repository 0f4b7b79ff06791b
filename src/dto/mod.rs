//!
//! Module with all dtos that are passed between server and its callers
//!

pub mod input;
pub mod output;

mod notification_status;

pub use notification_status::*;
