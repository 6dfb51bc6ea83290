//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a rounded table, or `empty_message` when there are none.
pub fn format_table<T: Tabled>(data: &[T], empty_message: &str) -> String {
    if data.is_empty() {
        return empty_message.to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct AccountRow {
        #[tabled(rename = "ACCOUNT ID")]
        account_id: String,
        #[tabled(rename = "ACTION")]
        action: String,
    }

    #[test]
    fn test_format_table_empty_uses_message() {
        let rows: Vec<AccountRow> = vec![];
        assert_eq!(
            format_table(&rows, "No inactive accounts."),
            "No inactive accounts."
        );
    }

    #[test]
    fn test_format_table_rows() {
        let rows = vec![
            AccountRow {
                account_id: "u1".to_string(),
                action: "disabled".to_string(),
            },
            AccountRow {
                account_id: "u2".to_string(),
                action: "would disable".to_string(),
            },
        ];

        let result = format_table(&rows, "");

        assert!(result.contains("ACCOUNT ID"));
        assert!(result.contains("u1"));
        assert!(result.contains("would disable"));
        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
    }
}
