use crate::entity::Entity;
use crate::payment::*;

impl Entity for Payment {
    type Create = PaymentCreate;
    type Update = PaymentUpdate;

    const KIND: &'static str = "payment";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Payment {
    pub fn is_settled(&self) -> bool {
        self.paid_ts.is_some()
    }
}
