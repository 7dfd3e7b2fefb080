use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Payment {
    pub id: i64,
    pub student_id: i64,
    /// Amount in the smallest currency unit.
    pub amount_cents: i64,
    pub status: String,
    pub reference: Option<String>,
    pub paid_ts: Option<i64>,
    pub created_ts: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PaymentCreate {
    pub student_id: i64,
    pub amount_cents: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PaymentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_ts: Option<i64>,
}

mod impls;
