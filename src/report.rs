//! Plain-text rendering of a column listing.
//!
//! ```text
//! user_profiles table columns:
//! --------------------------------------------------
//! id: uuid
//!
//! ==================================================
//! Total columns: 1
//! ```

use std::io::{self, Write};

use crate::models::TableColumns;

pub const SEPARATOR_WIDTH: usize = 50;

pub fn render(table: &TableColumns) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} table columns:\n", table.table_name));
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');

    for column in &table.columns {
        out.push_str(&format!("{}: {}\n", column.column_name, column.data_type));
    }

    out.push('\n');
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    out.push_str(&format!("Total columns: {}\n", table.len()));

    out
}

/// Writes the rendered listing in one go and flushes.
pub fn write_report<W: Write>(writer: &mut W, table: &TableColumns) -> io::Result<()> {
    writer.write_all(render(table).as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnDescriptor;

    #[test]
    fn test_separators_are_fifty_wide() {
        let rendered = render(&TableColumns::new("t", vec![]));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[1], "-".repeat(50));
        assert_eq!(lines[3], "=".repeat(50));
    }

    #[test]
    fn test_write_report_matches_render() {
        let table = TableColumns::new("t", vec![ColumnDescriptor::new("id", "integer")]);
        let mut buf = Vec::new();
        write_report(&mut buf, &table).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), render(&table));
    }
}
