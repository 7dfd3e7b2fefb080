pub mod notification;
pub mod state;
pub mod store;

pub use notification::NotificationStore;
pub use state::StoreSnapshot;
pub use store::EntityStore;

/// Store aliases for the entities with a plain CRUD surface.
pub type StudentStore = EntityStore<smecore::student::Student>;
pub type TeacherStore = EntityStore<smecore::teacher::Teacher>;
pub type PaymentStore = EntityStore<smecore::payment::Payment>;
pub type ReportStore = EntityStore<smecore::report::Report>;
