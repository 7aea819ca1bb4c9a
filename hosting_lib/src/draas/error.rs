//! Error types for disaster recovery operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DraasError {
    #[error("Solution not found with ID [{id}]")]
    SolutionNotFound { id: String },
    #[error("Failover plan not found with ID [{id}]")]
    FailoverPlanNotFound { id: String },
    #[error(transparent)]
    Api(#[from] hosting_api::Error),
}
