//! Disaster recovery types returned and accepted by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A disaster recovery solution.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Solution {
    pub id: String,
    pub name: String,
    pub iops_tier_id: String,
    pub billing_type_id: String,
}

#[derive(Serialize, Debug, Default)]
pub struct PatchSolutionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops_tier_id: Option<String>,
}

/// A plan describing which VMs fail over to the recovery site.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FailoverPlan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
    #[serde(default)]
    pub vms: Vec<FailoverPlanVm>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FailoverPlanVm {
    pub name: String,
}

#[derive(Serialize, Debug, Default)]
pub struct StartFailoverPlanRequest {
    /// When to start. `None` starts immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug)]
pub struct ResetBackupServiceCredentialsRequest {
    pub password: String,
}
