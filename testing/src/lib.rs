pub mod backend;
pub mod fixtures;

pub fn is_send_sync<T: Send + Sync>() {}
