use serde::{Deserialize, Serialize};

use crate::slice::{Entity, Resource};

/// A rented locker or plot assigned to a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: String,
    /// Locker/plot number as printed on the unit.
    pub number: String,
    pub description: String,
    pub member_id: Option<String>,
    pub member_name: Option<String>,
    /// Unix milliseconds when the rental lapses.
    pub expiration: Option<i64>,
}

impl Entity for Rental {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Rental {
    const PATH: &'static str = "/api/admin/rentals";
}
