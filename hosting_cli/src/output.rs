use anyhow::Result;
use hosting_lib::account::{Contact, Credit};
use hosting_lib::dns::{Record, Zone};
use hosting_lib::draas::{FailoverPlan, Solution};
use hosting_lib::ssl::Certificate;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct ZoneRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Tabled, Serialize)]
struct RecordRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    record_type: String,
    #[tabled(rename = "Content")]
    #[serde(rename = "Content")]
    content: String,
    #[tabled(rename = "TTL")]
    #[serde(rename = "TTL")]
    ttl: String,
    #[tabled(rename = "Priority")]
    #[serde(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Updated")]
    #[serde(rename = "Updated")]
    updated_at: String,
}

#[derive(Tabled, Serialize)]
struct SolutionRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "IOPS Tier")]
    #[serde(rename = "IOPS Tier")]
    iops_tier_id: String,
    #[tabled(rename = "Billing Type")]
    #[serde(rename = "Billing Type")]
    billing_type_id: String,
}

#[derive(Tabled, Serialize)]
struct FailoverPlanRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "VMs")]
    #[serde(rename = "VMs")]
    vms: String,
}

#[derive(Tabled, Serialize)]
struct CertificateRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Common Name")]
    #[serde(rename = "Common Name")]
    common_name: String,
    #[tabled(rename = "Valid Days")]
    #[serde(rename = "Valid Days")]
    valid_days: i64,
    #[tabled(rename = "Renewal")]
    #[serde(rename = "Renewal")]
    renewal_date: String,
}

#[derive(Tabled, Serialize)]
struct ContactRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    contact_type: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
}

#[derive(Tabled, Serialize)]
struct CreditRow {
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    credit_type: String,
    #[tabled(rename = "Total")]
    #[serde(rename = "Total")]
    total: i64,
    #[tabled(rename = "Remaining")]
    #[serde(rename = "Remaining")]
    remaining: i64,
}

// -- Row builders --

fn build_zone_rows(zones: &[Zone]) -> Vec<ZoneRow> {
    zones
        .iter()
        .map(|z| ZoneRow {
            name: z.name.clone(),
            description: z.description.clone(),
        })
        .collect()
}

fn build_record_rows(records: &[Record]) -> Vec<RecordRow> {
    records
        .iter()
        .map(|r| RecordRow {
            id: r.id,
            name: r.name.clone(),
            record_type: r.record_type.to_string(),
            content: r.content.clone(),
            ttl: optional(r.ttl),
            priority: optional(r.priority),
            updated_at: r
                .updated_at
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        })
        .collect()
}

fn build_solution_rows(solutions: &[Solution]) -> Vec<SolutionRow> {
    solutions
        .iter()
        .map(|s| SolutionRow {
            id: s.id.clone(),
            name: s.name.clone(),
            iops_tier_id: s.iops_tier_id.clone(),
            billing_type_id: s.billing_type_id.clone(),
        })
        .collect()
}

fn build_failover_plan_rows(plans: &[FailoverPlan]) -> Vec<FailoverPlanRow> {
    plans
        .iter()
        .map(|p| FailoverPlanRow {
            id: p.id.clone(),
            name: p.name.clone(),
            status: p.status.clone(),
            vms: p
                .vms
                .iter()
                .map(|vm| vm.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

fn build_certificate_rows(certificates: &[Certificate]) -> Vec<CertificateRow> {
    certificates
        .iter()
        .map(|c| CertificateRow {
            id: c.id,
            name: c.name.clone(),
            status: c.status.to_string(),
            common_name: c.common_name.clone(),
            valid_days: c.valid_days,
            renewal_date: c
                .renewal_date
                .map(|d| d.date_naive().to_string())
                .unwrap_or_default(),
        })
        .collect()
}

fn build_contact_rows(contacts: &[Contact]) -> Vec<ContactRow> {
    contacts
        .iter()
        .map(|c| ContactRow {
            id: c.id,
            contact_type: c.contact_type.to_string(),
            name: c.full_name(),
        })
        .collect()
}

fn build_credit_rows(credits: &[Credit]) -> Vec<CreditRow> {
    credits
        .iter()
        .map(|c| CreditRow {
            credit_type: c.credit_type.clone(),
            total: c.total,
            remaining: c.remaining,
        })
        .collect()
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

// -- Printing --

/// Prints `items` as JSON, or as rows built by `build` for the tabular formats.
fn print_items<T, R>(items: &[T], build: fn(&[T]) -> Vec<R>, format: &OutputFormat) -> Result<()>
where
    T: Serialize,
    R: Tabled + Serialize,
{
    match format {
        OutputFormat::Json => print_json(&items),
        OutputFormat::Table => println!("{}", Table::new(build(items))),
        OutputFormat::Markdown => {
            let mut table = Table::new(build(items));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in build(items) {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

pub fn print_zones(zones: &[Zone], format: &OutputFormat) -> Result<()> {
    print_items(zones, build_zone_rows, format)
}

pub fn print_records(records: &[Record], format: &OutputFormat) -> Result<()> {
    print_items(records, build_record_rows, format)
}

pub fn print_solutions(solutions: &[Solution], format: &OutputFormat) -> Result<()> {
    print_items(solutions, build_solution_rows, format)
}

pub fn print_failover_plans(plans: &[FailoverPlan], format: &OutputFormat) -> Result<()> {
    print_items(plans, build_failover_plan_rows, format)
}

pub fn print_certificates(certificates: &[Certificate], format: &OutputFormat) -> Result<()> {
    print_items(certificates, build_certificate_rows, format)
}

pub fn print_contacts(contacts: &[Contact], format: &OutputFormat) -> Result<()> {
    print_items(contacts, build_contact_rows, format)
}

pub fn print_credits(credits: &[Credit], format: &OutputFormat) -> Result<()> {
    print_items(credits, build_credit_rows, format)
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
