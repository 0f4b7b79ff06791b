use serde::{Deserialize, Serialize};
use strum::AsRefStr;

///
/// Status of a stored notification.
/// Deleted notifications have no status, they are simply absent.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationStatus {
    Unread,
    Read,
}
