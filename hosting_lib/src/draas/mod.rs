//! Disaster recovery: solutions, failover plans and backup services.

pub mod error;
pub mod service;
pub mod types;

pub use error::DraasError;
pub use service::DraasService;
pub use types::{
    FailoverPlan, FailoverPlanVm, PatchSolutionRequest, ResetBackupServiceCredentialsRequest,
    Solution, StartFailoverPlanRequest,
};
