use anyhow::Result;
use clap::{Args, Subcommand};
use hosting_lib::Client;

use super::{print_page_summary, ListArgs};
use crate::output::{print_contacts, print_credits, OutputFormat};

#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand)]
pub enum AccountCommand {
    /// List contacts
    Contacts(ListArgs),
    /// Show a single contact
    Contact {
        /// Contact ID
        id: i64,
    },
    /// List remaining credits
    Credits(ListArgs),
}

pub async fn run(args: &AccountArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let account = client.account();
    match &args.command {
        AccountCommand::Contacts(list) => {
            let parameters = list.to_parameters()?;
            if list.all {
                print_contacts(&account.get_contacts(&parameters).await?, format)?;
            } else {
                let page = account.get_contacts_paginated(parameters).await?;
                print_page_summary(&page);
                print_contacts(page.items(), format)?;
            }
        }
        AccountCommand::Contact { id } => {
            let contact = account.get_contact(*id).await?;
            print_contacts(&[contact], format)?;
        }
        AccountCommand::Credits(list) => {
            let credits = account.get_credits(&list.to_parameters()?).await?;
            print_credits(&credits, format)?;
        }
    }
    Ok(())
}
