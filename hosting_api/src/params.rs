//! Request parameters shared by every collection endpoint: filtering,
//! sorting and the page cursor.

use std::str::FromStr;

use url::{form_urlencoded, Url};

use crate::Error;

/// Comparison applied by a [`Filter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOperator {
    /// Equal to.
    Eq,
    /// Like (wildcard match).
    Lk,
    /// Greater than.
    Gt,
    /// Less than.
    Lt,
    /// In the given set of values.
    In,
    /// Not equal to.
    Neq,
    /// Not in the given set of values.
    Nin,
    /// Not like.
    Nlk,
}
impl std::fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FilterOperator::Eq => "eq",
                FilterOperator::Lk => "lk",
                FilterOperator::Gt => "gt",
                FilterOperator::Lt => "lt",
                FilterOperator::In => "in",
                FilterOperator::Neq => "neq",
                FilterOperator::Nin => "nin",
                FilterOperator::Nlk => "nlk",
            }
        )
    }
}
impl FromStr for FilterOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eq" => Ok(FilterOperator::Eq),
            "lk" => Ok(FilterOperator::Lk),
            "gt" => Ok(FilterOperator::Gt),
            "lt" => Ok(FilterOperator::Lt),
            "in" => Ok(FilterOperator::In),
            "neq" => Ok(FilterOperator::Neq),
            "nin" => Ok(FilterOperator::Nin),
            "nlk" => Ok(FilterOperator::Nlk),
            other => Err(Error::Validation(format!(
                "unknown filter operator '{}'",
                other
            ))),
        }
    }
}

/// A single `property operator values` constraint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    pub property: String,
    pub operator: FilterOperator,
    pub values: Vec<String>,
}

impl Filter {
    pub fn new<I, V>(property: &str, operator: FilterOperator, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            property: property.to_string(),
            operator,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Shorthand for an equality filter on a single value.
    pub fn eq(property: &str, value: &str) -> Self {
        Self::new(property, FilterOperator::Eq, [value])
    }

    fn query_key(&self) -> String {
        format!("{}:{}", self.property, self.operator)
    }
}

/// Parses `property:op=v1,v2`, or `property=v` as an equality filter.
impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| Error::Validation(format!("missing '=' in filter '{}'", s)))?;
        let (property, operator) = match key.split_once(':') {
            Some((property, op)) => (property, op.parse::<FilterOperator>()?),
            None => (key, FilterOperator::Eq),
        };
        if property.is_empty() {
            return Err(Error::Validation(format!(
                "missing property in filter '{}'",
                s
            )));
        }
        Ok(Filter::new(property, operator, value.split(',')))
    }
}

/// Sort order for a [`Sort`] directive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order. This is the default.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}
impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}
impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(Error::Validation(format!(
                "unknown sort direction '{}'",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sort {
    pub property: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(property: &str) -> Self {
        Self {
            property: property.to_string(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(property: &str) -> Self {
        Self {
            property: property.to_string(),
            direction: SortDirection::Desc,
        }
    }
}

/// Parses `property` or `property:asc|desc`.
impl FromStr for Sort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (property, direction) = match s.split_once(':') {
            Some((property, dir)) => (property, dir.parse::<SortDirection>()?),
            None => (s, SortDirection::Asc),
        };
        if property.is_empty() {
            return Err(Error::Validation(format!("missing property in sort '{}'", s)));
        }
        Ok(Sort {
            property: property.to_string(),
            direction,
        })
    }
}

/// Page cursor. `None` leaves the choice to the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: non_zero(page),
            per_page: non_zero(per_page),
        }
    }
}

fn non_zero(value: u32) -> Option<u32> {
    (value > 0).then_some(value)
}

/// Filtering, sorting and pagination directives for one request.
///
/// Builder methods consume the value and return an updated copy; the
/// pagination engine clones a fresh set per page rather than mutating the
/// caller's. Filters and sorts keep their insertion order, which is the
/// order they appear in the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestParameters {
    filtering: Vec<Filter>,
    sorting: Vec<Sort>,
    pagination: Pagination,
}

impl RequestParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter. Filters on the same property are kept side by side.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filtering.push(filter);
        self
    }

    pub fn with_filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = Filter>,
    {
        self.filtering.extend(filters);
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sorting.push(sort);
        self
    }

    /// Sets the page number (1-indexed). Zero unsets it.
    pub fn with_page(mut self, page: u32) -> Self {
        self.pagination.page = non_zero(page);
        self
    }

    /// Sets the number of results per page. Zero unsets it.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.pagination.per_page = non_zero(per_page);
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Pagination::new(
            pagination.page.unwrap_or(0),
            pagination.per_page.unwrap_or(0),
        );
        self
    }

    pub fn filtering(&self) -> &[Filter] {
        &self.filtering
    }

    pub fn sorting(&self) -> &[Sort] {
        &self.sorting
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// The requested page, or `None` when unset.
    pub fn page(&self) -> Option<u32> {
        self.pagination.page
    }

    /// Query pairs in canonical order: page, per_page, sort, then filters.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.pagination.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.pagination.per_page {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        if !self.sorting.is_empty() {
            let sort = self
                .sorting
                .iter()
                .map(|s| format!("{}:{}", s.property, s.direction))
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("sort".to_string(), sort));
        }
        for filter in self.filtering.iter() {
            pairs.push((filter.query_key(), filter.values.join(",")));
        }
        pairs
    }

    /// Form-encoded query string, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_query_pairs())
            .finish()
    }

    /// Appends these parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.to_query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn test_empty_parameters() {
        assert_eq!(RequestParameters::new().to_query_string(), "");

        let url = Url::parse("https://example.com/zones").unwrap();
        assert_eq!(
            RequestParameters::new().add_to_url(&url).to_string(),
            "https://example.com/zones"
        );
    }

    #[test]
    fn test_canonical_query_string() {
        let params = RequestParameters::new()
            .with_filter(Filter::eq("status", "active"))
            .with_sort(Sort::asc("name"))
            .with_page(1)
            .with_per_page(50);

        insta::assert_snapshot!(
            params.to_query_string(),
            @"page=1&per_page=50&sort=name%3Aasc&status%3Aeq=active"
        );
        assert_eq!(params.to_query_string(), params.clone().to_query_string());
    }

    #[test]
    fn test_same_property_filters_are_kept_in_order() {
        let params = RequestParameters::new()
            .with_filter(Filter::new("id", FilterOperator::Gt, ["10"]))
            .with_filter(Filter::new("name", FilterOperator::Lk, ["web*"]))
            .with_filter(Filter::new("id", FilterOperator::Lt, ["20"]))
            .with_filter(Filter::new("id", FilterOperator::Nin, ["12", "13"]));

        insta::assert_snapshot!(
            params.to_query_string(),
            @"id%3Agt=10&name%3Alk=web*&id%3Alt=20&id%3Anin=12%2C13"
        );
        assert_eq!(params.filtering().len(), 4);
    }

    #[test]
    fn test_multiple_sorts_join_in_order() {
        let params = RequestParameters::new()
            .with_sort(Sort::desc("created_at"))
            .with_sort(Sort::asc("name"));

        insta::assert_snapshot!(
            params.to_query_string(),
            @"sort=created_at%3Adesc%2Cname%3Aasc"
        );
    }

    #[test]
    fn test_reserialising_preserves_order() {
        let params = RequestParameters::new()
            .with_filter(Filter::eq("b", "2"))
            .with_filter(Filter::eq("a", "1"))
            .with_sort(Sort::asc("z"))
            .with_sort(Sort::asc("y"));

        let rebuilt = RequestParameters::new()
            .with_filters(params.filtering().to_vec())
            .with_sort(params.sorting()[0].clone())
            .with_sort(params.sorting()[1].clone());

        assert_eq!(rebuilt, params);
        assert_eq!(rebuilt.to_query_pairs(), params.to_query_pairs());
    }

    #[test]
    fn test_with_page_returns_new_value() {
        let original = RequestParameters::new().with_filter(Filter::eq("status", "active"));
        let paged = original.clone().with_page(3);

        assert_eq!(original.page(), None);
        assert_eq!(paged.page(), Some(3));
        assert_eq!(paged.filtering(), original.filtering());
    }

    #[test]
    fn test_zero_page_is_unset() {
        let params = RequestParameters::new().with_page(0).with_per_page(0);
        assert_eq!(params.pagination(), Pagination::default());

        let params = RequestParameters::new().with_pagination(Pagination {
            page: Some(0),
            per_page: Some(25),
        });
        assert_eq!(params.page(), None);
        assert_eq!(params.to_query_string(), "per_page=25");
    }

    #[test]
    fn test_add_to_url_appends_to_existing_query() {
        let url = Url::parse("https://example.com/zones?existing=1").unwrap();
        let url = RequestParameters::new().with_page(2).add_to_url(&url);
        assert_eq!(url.query(), Some("existing=1&page=2"));
    }

    #[test]
    fn test_parse_filter() {
        let filter: Filter = "name:lk=*.example.com".parse().unwrap();
        assert_eq!(filter, Filter::new("name", FilterOperator::Lk, ["*.example.com"]));

        let filter: Filter = "status=active".parse().unwrap();
        assert_eq!(filter, Filter::eq("status", "active"));

        let filter: Filter = "id:IN=1,2,3".parse().unwrap();
        assert_eq!(filter.operator, FilterOperator::In);
        assert_eq!(filter.values, vec!["1", "2", "3"]);

        assert!("status".parse::<Filter>().is_err());
        assert!("id:between=1".parse::<Filter>().is_err());
        assert!(":eq=1".parse::<Filter>().is_err());
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!("name".parse::<Sort>().unwrap(), Sort::asc("name"));
        assert_eq!("name:desc".parse::<Sort>().unwrap(), Sort::desc("name"));
        assert_eq!("name:ASC".parse::<Sort>().unwrap(), Sort::asc("name"));
        assert!("name:sideways".parse::<Sort>().is_err());
        assert!(":asc".parse::<Sort>().is_err());
    }
}
