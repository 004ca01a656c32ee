use serde::{Deserialize, Serialize};

use crate::slice::{Entity, Resource};

/// A recurring payment agreement backing a membership or rental.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub member_id: String,
    pub plan_id: String,
    pub amount: String,
    pub status: SubscriptionStatus,
    /// ISO date of the next scheduled charge.
    pub next_payment_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubscriptionStatus {
    Active,
    PastDue,
    Canceled,
    Pending,
}

impl Entity for Subscription {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Subscription {
    const PATH: &'static str = "/api/admin/subscriptions";
}
