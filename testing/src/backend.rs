use async_trait::async_trait;
use mockall::mock;
use smecore::{
    entity::{
        EntityBackend,
        Listing,
    },
    error::BackendError,
    notification::{
        Notification,
        NotificationBroadcast,
        NotificationCreate,
        NotificationUpdate,
        traits::NotificationBackend,
    },
    payment::{
        Payment,
        PaymentCreate,
        PaymentUpdate,
    },
    query::ListQuery,
    student::{
        Student,
        StudentCreate,
        StudentUpdate,
    },
};

mock! {
    pub StudentApi {}

    #[async_trait]
    impl EntityBackend<Student> for StudentApi {
        async fn list(&self, query: &ListQuery) -> Result<Listing<Student>, BackendError>;
        async fn get(&self, id: i64) -> Result<Student, BackendError>;
        async fn create(&self, payload: &StudentCreate) -> Result<Student, BackendError>;
        async fn update(&self, id: i64, payload: &StudentUpdate) -> Result<Student, BackendError>;
        async fn delete(&self, id: i64) -> Result<(), BackendError>;
    }
}

mock! {
    pub PaymentApi {}

    #[async_trait]
    impl EntityBackend<Payment> for PaymentApi {
        async fn list(&self, query: &ListQuery) -> Result<Listing<Payment>, BackendError>;
        async fn get(&self, id: i64) -> Result<Payment, BackendError>;
        async fn create(&self, payload: &PaymentCreate) -> Result<Payment, BackendError>;
        async fn update(&self, id: i64, payload: &PaymentUpdate) -> Result<Payment, BackendError>;
        async fn delete(&self, id: i64) -> Result<(), BackendError>;
    }
}

mock! {
    pub NotificationApi {}

    #[async_trait]
    impl EntityBackend<Notification> for NotificationApi {
        async fn list(&self, query: &ListQuery) -> Result<Listing<Notification>, BackendError>;
        async fn get(&self, id: i64) -> Result<Notification, BackendError>;
        async fn create(&self, payload: &NotificationCreate) -> Result<Notification, BackendError>;
        async fn update(&self, id: i64, payload: &NotificationUpdate) -> Result<Notification, BackendError>;
        async fn delete(&self, id: i64) -> Result<(), BackendError>;
    }

    #[async_trait]
    impl NotificationBackend for NotificationApi {
        async fn mark_all_read(&self) -> Result<(), BackendError>;
        async fn clear_all(&self) -> Result<(), BackendError>;
        async fn broadcast(&self, payload: &NotificationBroadcast) -> Result<(), BackendError>;
    }
}
