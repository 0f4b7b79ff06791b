use serde::Deserialize;
use serde_json::Value;

///
/// Body of a create request. `message` stays optional here,
/// so a missing message is reported as a validation error
/// instead of a deserialization error.
///
#[derive(Debug, Deserialize)]
pub struct Notification {
    pub message: Option<Value>,
}
