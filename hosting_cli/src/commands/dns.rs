use anyhow::Result;
use clap::{Args, Subcommand};
use hosting_lib::Client;

use super::{print_page_summary, ListArgs};
use crate::output::{print_records, print_zones, OutputFormat};

#[derive(Args)]
pub struct DnsArgs {
    #[command(subcommand)]
    pub command: DnsCommand,
}

#[derive(Subcommand)]
pub enum DnsCommand {
    /// List zones
    Zones(ListArgs),
    /// Show a single zone
    Zone {
        /// Zone name, e.g. example.com
        name: String,
    },
    /// List records in a zone
    Records {
        /// Zone name
        zone: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show a single record
    Record {
        /// Zone name
        zone: String,
        /// Record ID
        id: i64,
    },
    /// Delete a record
    DeleteRecord {
        /// Zone name
        zone: String,
        /// Record ID
        id: i64,
    },
}

pub async fn run(args: &DnsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let dns = client.dns();
    match &args.command {
        DnsCommand::Zones(list) => {
            let parameters = list.to_parameters()?;
            if list.all {
                print_zones(&dns.get_zones(&parameters).await?, format)?;
            } else {
                let page = dns.get_zones_paginated(parameters).await?;
                print_page_summary(&page);
                print_zones(page.items(), format)?;
            }
        }
        DnsCommand::Zone { name } => {
            let zone = dns.get_zone(name).await?;
            print_zones(&[zone], format)?;
        }
        DnsCommand::Records { zone, list } => {
            let parameters = list.to_parameters()?;
            if list.all {
                print_records(&dns.get_zone_records(zone, &parameters).await?, format)?;
            } else {
                let page = dns.get_zone_records_paginated(zone, parameters).await?;
                print_page_summary(&page);
                print_records(page.items(), format)?;
            }
        }
        DnsCommand::Record { zone, id } => {
            let record = dns.get_zone_record(zone, *id).await?;
            print_records(&[record], format)?;
        }
        DnsCommand::DeleteRecord { zone, id } => {
            dns.delete_zone_record(zone, *id).await?;
            eprintln!("Deleted record {} from zone {}", id, zone);
        }
    }
    Ok(())
}
