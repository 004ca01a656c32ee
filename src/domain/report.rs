use serde::{Deserialize, Serialize};

use crate::slice::{Entity, Resource};

/// A member's periodic progress report against an earned membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub earned_membership_id: String,
    /// ISO timestamp the report was filed.
    pub date: String,
    pub report_requirements: Vec<ReportRequirement>,
}

/// Progress claimed against one requirement in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequirement {
    pub id: String,
    pub requirement_id: String,
    pub reported_count: u32,
    /// Members the work was done with, for cross-checking.
    pub member_ids: Vec<String>,
}

impl Entity for Report {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Report {
    const PATH: &'static str = "/api/admin/earned-memberships/reports";
}
