use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    /// Addressed user, or `None` for a broadcast visible to everyone.
    pub recipient_id: Option<i64>,
    pub read: bool,
    pub created_ts: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct NotificationCreate {
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct NotificationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
}

/// Payload for the broadcast endpoint; the server fans the message out to
/// every recipient.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct NotificationBroadcast {
    pub title: String,
    pub message: String,
}

mod impls;
pub mod traits;
