//! List filter arguments shared by the admin list commands

use clap::Args;

use crate::client::ListQuery;

/// Shared arguments for paged admin list commands.
///
/// Flatten this into any list command:
/// ```ignore
/// List {
///     #[command(flatten)]
///     filters: ListArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Fuzzy keyword filter
    #[arg(long, short = 'k')]
    pub keyword: Option<String>,

    /// Page number (1-indexed)
    #[arg(long, short = 'p')]
    pub page: Option<u64>,

    /// Page size
    #[arg(long, short = 'n')]
    pub size: Option<u64>,

    /// Creation-time window start (yyyy-MM-dd)
    #[arg(long)]
    pub since: Option<String>,

    /// Creation-time window end (yyyy-MM-dd)
    #[arg(long)]
    pub until: Option<String>,
}

impl ListArgs {
    /// Convert CLI args to an API list query.
    ///
    /// `default_size` comes from the configured page-size preference and is
    /// used when `--size` is not given.
    pub fn to_query(&self, default_size: u64) -> ListQuery {
        let mut query = ListQuery::new().size(self.size.unwrap_or(default_size));

        if let Some(ref keyword) = self.keyword {
            query = query.keyword(keyword.clone());
        }
        if let Some(page) = self.page {
            query = query.current(page);
        }
        if let Some(ref since) = self.since {
            query = query.start_time(since.clone());
        }
        if let Some(ref until) = self.until {
            query = query.end_time(until.clone());
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query_uses_default_size() {
        let args = ListArgs::default();
        let query = args.to_query(10);
        assert_eq!(query.size, Some(10));
        assert!(query.keyword.is_none());
    }

    #[test]
    fn test_to_query_maps_all_fields() {
        let args = ListArgs {
            keyword: Some("alice".to_string()),
            page: Some(3),
            size: Some(25),
            since: Some("2026-01-01".to_string()),
            until: Some("2026-06-30".to_string()),
        };

        let query = args.to_query(10);
        assert_eq!(query.keyword.as_deref(), Some("alice"));
        assert_eq!(query.current, Some(3));
        assert_eq!(query.size, Some(25));
        assert_eq!(query.start_time.as_deref(), Some("2026-01-01"));
        assert_eq!(query.end_time.as_deref(), Some("2026-06-30"));
    }
}
