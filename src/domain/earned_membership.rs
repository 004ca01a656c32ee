use serde::{Deserialize, Serialize};

use crate::slice::{Entity, Resource};

/// A membership earned through volunteer work instead of payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedMembership {
    pub id: String,
    pub member_id: String,
    pub member_name: Option<String>,
    pub requirements: Vec<Requirement>,
}

/// One obligation on an earned membership, e.g. hours per term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub id: String,
    pub name: String,
    pub target_count: u32,
    pub current_count: u32,
    /// Reporting interval in months.
    pub term_length: u32,
}

impl Entity for EarnedMembership {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for EarnedMembership {
    const PATH: &'static str = "/api/admin/earned-memberships";
}
