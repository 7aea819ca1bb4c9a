//! CLI subcommand implementations.

pub mod account;
pub mod dns;
pub mod draas;
pub mod ssl;

use anyhow::Result;
use clap::Args;
use hosting_lib::{Filter, Paginated, RequestParameters, Sort};

/// Filtering, sorting and paging flags shared by every list command.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Filter as property:operator=value[,value], e.g. name:lk=web* (repeatable)
    #[arg(long = "filter")]
    pub filters: Vec<String>,

    /// Sort as property[:asc|desc], e.g. name:desc (repeatable)
    #[arg(long = "sort")]
    pub sorts: Vec<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Fetch every page, starting from the first, instead of a single one
    #[arg(long, conflicts_with = "page")]
    pub all: bool,
}

impl ListArgs {
    pub fn to_parameters(&self) -> Result<RequestParameters> {
        let mut parameters = RequestParameters::new();
        for filter in &self.filters {
            parameters = parameters.with_filter(filter.parse::<Filter>()?);
        }
        for sort in &self.sorts {
            parameters = parameters.with_sort(sort.parse::<Sort>()?);
        }
        if let Some(page) = self.page {
            parameters = parameters.with_page(page);
        }
        if let Some(per_page) = self.per_page {
            parameters = parameters.with_per_page(per_page);
        }
        Ok(parameters)
    }
}

/// Prints the paging summary to stderr so it stays out of piped output.
pub fn print_page_summary<T, E>(page: &Paginated<T, E>) {
    eprintln!(
        "Page {}/{} ({} total)",
        page.current_page(),
        page.total_pages(),
        page.total_items()
    );
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct ListCli {
        #[command(flatten)]
        list: ListArgs,
    }

    #[test]
    fn list_args_build_parameters_in_order() {
        let args = ListArgs {
            filters: vec!["name:lk=web*".to_string(), "id:gt=10".to_string()],
            sorts: vec!["name:desc".to_string()],
            page: Some(2),
            per_page: Some(25),
            all: false,
        };
        let parameters = args.to_parameters().unwrap();
        assert_eq!(
            parameters.to_query_string(),
            "page=2&per_page=25&sort=name%3Adesc&name%3Alk=web*&id%3Agt=10"
        );
    }

    #[test]
    fn list_args_default_is_empty() {
        let parameters = ListArgs::default().to_parameters().unwrap();
        assert_eq!(parameters.to_query_string(), "");
    }

    #[test]
    fn list_args_reject_unknown_operator() {
        let args = ListArgs {
            filters: vec!["name:like=web".to_string()],
            ..Default::default()
        };
        assert!(args.to_parameters().is_err());
    }

    #[test]
    fn all_conflicts_with_page() {
        assert!(ListCli::try_parse_from(["hostingctl", "--all", "--page", "2"]).is_err());

        let cli = ListCli::try_parse_from(["hostingctl", "--all", "--per-page", "100"]).unwrap();
        assert!(cli.list.all);
        assert_eq!(cli.list.per_page, Some(100));
    }
}
