use serde::{Deserialize, Serialize};

use crate::slice::{Entity, Resource};

/// A person with (or without) an active membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    /// Unix milliseconds when the current membership lapses, if any.
    pub expiration_time: Option<i64>,
    pub status: MemberStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberStatus {
    ActiveMember,
    Inactive,
    NonMember,
    Revoked,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

impl Entity for Member {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Member {
    const PATH: &'static str = "/api/admin/members";
}
