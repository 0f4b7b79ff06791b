use std::time::Duration;

pub struct NotificationsServiceConfig {
    pub max_message_len: usize,

    /// How long a read notification is kept before it is deleted
    pub read_retention: Duration,
}
