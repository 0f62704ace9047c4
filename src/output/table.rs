//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// One-line page summary printed under list tables
pub fn page_summary(total: u64, current: u64, pages: u64) -> String {
    format!("{} total, page {}/{}", total, current, pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct TestRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "NAME")]
        name: String,
    }

    #[test]
    fn test_format_table_empty() {
        let items: Vec<TestRow> = vec![];
        let result = format_table(&items);
        assert_eq!(result, "No results found.");
    }

    #[test]
    fn test_format_table_single_row() {
        let items = vec![TestRow {
            id: "123".to_string(),
            name: "Test".to_string(),
        }];

        let result = format_table(&items);

        assert!(result.contains("ID"));
        assert!(result.contains("NAME"));
        assert!(result.contains("123"));
        assert!(result.contains("Test"));
    }

    #[test]
    fn test_format_table_uses_rounded_style() {
        let items = vec![TestRow {
            id: "1".to_string(),
            name: "Test".to_string(),
        }];

        let result = format_table(&items);

        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }

    #[test]
    fn test_page_summary() {
        assert_eq!(page_summary(41, 2, 5), "41 total, page 2/5");
        assert_eq!(page_summary(0, 1, 0), "0 total, page 1/1");
    }
}
