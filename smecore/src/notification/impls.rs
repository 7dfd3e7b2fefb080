use crate::entity::Entity;
use crate::notification::*;

impl Entity for Notification {
    type Create = NotificationCreate;
    type Update = NotificationUpdate;

    const KIND: &'static str = "notification";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Notification {
    pub fn is_broadcast(&self) -> bool {
        self.recipient_id.is_none()
    }
}
