mod notification;
mod notification_filters;
mod pagination;

pub use notification::*;
pub use notification_filters::*;
pub use pagination::*;
