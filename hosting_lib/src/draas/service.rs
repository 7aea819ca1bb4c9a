//! Disaster recovery service.

use hosting_api::{
    not_found_classifier, Connection, Method, Paginated, RawResponse, RequestParameters,
};

use super::error::DraasError;
use super::types::{
    FailoverPlan, PatchSolutionRequest, ResetBackupServiceCredentialsRequest, Solution,
    StartFailoverPlanRequest,
};
use crate::validation;

const SOLUTIONS_PATH: &str = "/draas/v1/solutions";

pub struct DraasService {
    conn: Connection,
}

impl DraasService {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub async fn get_solutions(
        &self,
        parameters: &RequestParameters,
    ) -> Result<Vec<Solution>, DraasError> {
        self.conn
            .get_all::<Solution, DraasError>(SOLUTIONS_PATH, parameters, None)
            .await
    }

    pub async fn get_solutions_paginated(
        &self,
        parameters: RequestParameters,
    ) -> Result<Paginated<Solution, DraasError>, DraasError> {
        self.conn.get_paginated(SOLUTIONS_PATH, parameters, None).await
    }

    pub async fn get_solution(&self, solution_id: &str) -> Result<Solution, DraasError> {
        validation::require_name(solution_id, "solution id")?;
        let not_found = solution_not_found(solution_id);
        self.conn
            .get_data::<Solution, DraasError>(&solution_path(solution_id), Some(&not_found))
            .await
    }

    pub async fn patch_solution(
        &self,
        solution_id: &str,
        req: &PatchSolutionRequest,
    ) -> Result<(), DraasError> {
        validation::require_name(solution_id, "solution id")?;
        let not_found = solution_not_found(solution_id);
        self.conn
            .send_empty::<_, DraasError>(
                Method::PATCH,
                &solution_path(solution_id),
                Some(req),
                Some(&not_found),
            )
            .await
    }

    /// Fetches every failover plan of a solution, across all pages.
    pub async fn get_solution_failover_plans(
        &self,
        solution_id: &str,
        parameters: &RequestParameters,
    ) -> Result<Vec<FailoverPlan>, DraasError> {
        validation::require_name(solution_id, "solution id")?;
        let not_found = solution_not_found(solution_id);
        self.conn
            .get_all::<FailoverPlan, DraasError>(
                &format!("{}/failover-plans", solution_path(solution_id)),
                parameters,
                Some(&not_found),
            )
            .await
    }

    pub async fn get_solution_failover_plan(
        &self,
        solution_id: &str,
        plan_id: &str,
    ) -> Result<FailoverPlan, DraasError> {
        validation::require_name(solution_id, "solution id")?;
        validation::require_name(plan_id, "failover plan id")?;
        let not_found = failover_plan_not_found(plan_id);
        self.conn
            .get_data::<FailoverPlan, DraasError>(
                &failover_plan_path(solution_id, plan_id),
                Some(&not_found),
            )
            .await
    }

    pub async fn start_solution_failover_plan(
        &self,
        solution_id: &str,
        plan_id: &str,
        req: &StartFailoverPlanRequest,
    ) -> Result<(), DraasError> {
        validation::require_name(solution_id, "solution id")?;
        validation::require_name(plan_id, "failover plan id")?;
        tracing::info!("Starting failover plan {} for solution {}", plan_id, solution_id);
        let not_found = failover_plan_not_found(plan_id);
        self.conn
            .send_empty::<_, DraasError>(
                Method::POST,
                &format!("{}/start", failover_plan_path(solution_id, plan_id)),
                Some(req),
                Some(&not_found),
            )
            .await
    }

    pub async fn stop_solution_failover_plan(
        &self,
        solution_id: &str,
        plan_id: &str,
    ) -> Result<(), DraasError> {
        validation::require_name(solution_id, "solution id")?;
        validation::require_name(plan_id, "failover plan id")?;
        tracing::info!("Stopping failover plan {} for solution {}", plan_id, solution_id);
        let not_found = failover_plan_not_found(plan_id);
        self.conn
            .send_empty::<(), DraasError>(
                Method::POST,
                &format!("{}/stop", failover_plan_path(solution_id, plan_id)),
                None,
                Some(&not_found),
            )
            .await
    }

    pub async fn reset_solution_backup_service_credentials(
        &self,
        solution_id: &str,
        req: &ResetBackupServiceCredentialsRequest,
    ) -> Result<(), DraasError> {
        validation::require_name(solution_id, "solution id")?;
        validation::require_name(&req.password, "password")?;
        let not_found = solution_not_found(solution_id);
        self.conn
            .send_empty::<_, DraasError>(
                Method::POST,
                &format!("{}/backup-service/reset-credentials", solution_path(solution_id)),
                Some(req),
                Some(&not_found),
            )
            .await
    }
}

fn solution_path(solution_id: &str) -> String {
    format!("{}/{}", SOLUTIONS_PATH, solution_id)
}

fn failover_plan_path(solution_id: &str, plan_id: &str) -> String {
    format!("{}/{}/failover-plans/{}", SOLUTIONS_PATH, solution_id, plan_id)
}

fn solution_not_found(solution_id: &str) -> impl Fn(&RawResponse) -> Option<DraasError> + Send + Sync {
    let id = solution_id.to_string();
    not_found_classifier(move || DraasError::SolutionNotFound { id: id.clone() })
}

fn failover_plan_not_found(plan_id: &str) -> impl Fn(&RawResponse) -> Option<DraasError> + Send + Sync {
    let id = plan_id.to_string();
    not_found_classifier(move || DraasError::FailoverPlanNotFound { id: id.clone() })
}
