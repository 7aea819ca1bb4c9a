use anyhow::Result;
use clap::{Args, Subcommand};
use hosting_lib::Client;

use super::{print_page_summary, ListArgs};
use crate::output::{print_certificates, print_json, OutputFormat};

#[derive(Args)]
pub struct SslArgs {
    #[command(subcommand)]
    pub command: SslCommand,
}

#[derive(Subcommand)]
pub enum SslCommand {
    /// List certificates
    Certificates(ListArgs),
    /// Show a single certificate
    Certificate {
        /// Certificate ID
        id: i64,
    },
    /// Download the PEM content of a certificate
    Download {
        /// Certificate ID
        id: i64,
    },
}

pub async fn run(args: &SslArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let ssl = client.ssl();
    match &args.command {
        SslCommand::Certificates(list) => {
            let parameters = list.to_parameters()?;
            if list.all {
                print_certificates(&ssl.get_certificates(&parameters).await?, format)?;
            } else {
                let page = ssl.get_certificates_paginated(parameters).await?;
                print_page_summary(&page);
                print_certificates(page.items(), format)?;
            }
        }
        SslCommand::Certificate { id } => {
            let certificate = ssl.get_certificate(*id).await?;
            print_certificates(&[certificate], format)?;
        }
        SslCommand::Download { id } => {
            let content = ssl.get_certificate_content(*id).await?;
            match format {
                OutputFormat::Json => print_json(&content),
                _ => println!("{}", content.combined),
            }
        }
    }
    Ok(())
}
