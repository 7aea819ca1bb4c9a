use anyhow::Result;
use clap::{Args, Subcommand};
use hosting_lib::draas::StartFailoverPlanRequest;
use hosting_lib::Client;

use super::{print_page_summary, ListArgs};
use crate::output::{print_failover_plans, print_solutions, OutputFormat};

#[derive(Args)]
pub struct DraasArgs {
    #[command(subcommand)]
    pub command: DraasCommand,
}

#[derive(Subcommand)]
pub enum DraasCommand {
    /// List solutions
    Solutions(ListArgs),
    /// Show a single solution
    Solution {
        /// Solution ID
        id: String,
    },
    /// List the failover plans of a solution
    FailoverPlans {
        /// Solution ID
        solution: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Start a failover plan
    StartFailover {
        /// Solution ID
        solution: String,
        /// Failover plan ID
        plan: String,
        /// Scheduled start time (RFC 3339); starts immediately when omitted
        #[arg(long)]
        start_date: Option<String>,
    },
    /// Stop a running failover plan
    StopFailover {
        /// Solution ID
        solution: String,
        /// Failover plan ID
        plan: String,
    },
}

pub async fn run(args: &DraasArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let draas = client.draas();
    match &args.command {
        DraasCommand::Solutions(list) => {
            let parameters = list.to_parameters()?;
            if list.all {
                print_solutions(&draas.get_solutions(&parameters).await?, format)?;
            } else {
                let page = draas.get_solutions_paginated(parameters).await?;
                print_page_summary(&page);
                print_solutions(page.items(), format)?;
            }
        }
        DraasCommand::Solution { id } => {
            let solution = draas.get_solution(id).await?;
            print_solutions(&[solution], format)?;
        }
        DraasCommand::FailoverPlans { solution, list } => {
            let parameters = list.to_parameters()?;
            let plans = draas
                .get_solution_failover_plans(solution, &parameters)
                .await?;
            print_failover_plans(&plans, format)?;
        }
        DraasCommand::StartFailover {
            solution,
            plan,
            start_date,
        } => {
            let start_date = match start_date {
                Some(s) => Some(chrono::DateTime::parse_from_rfc3339(s)?.with_timezone(&chrono::Utc)),
                None => None,
            };
            draas
                .start_solution_failover_plan(
                    solution,
                    plan,
                    &StartFailoverPlanRequest { start_date },
                )
                .await?;
            eprintln!("Started failover plan {}", plan);
        }
        DraasCommand::StopFailover { solution, plan } => {
            draas.stop_solution_failover_plan(solution, plan).await?;
            eprintln!("Stopped failover plan {}", plan);
        }
    }
    Ok(())
}
