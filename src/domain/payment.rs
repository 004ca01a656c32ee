use serde::{Deserialize, Serialize};

use crate::slice::{Entity, Resource};

/// One settled or attempted charge against a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTransaction {
    pub id: String,
    pub member_id: String,
    pub amount: String,
    pub status: PaymentStatus,
    pub refunded: bool,
    /// ISO timestamp of the charge attempt.
    pub created_at: String,
    /// Invoice the charge settles, when known.
    pub invoice_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentStatus {
    Settled,
    Pending,
    Failed,
}

impl Entity for PaymentTransaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for PaymentTransaction {
    const PATH: &'static str = "/api/admin/transactions";
}
