/// Property-based tests using proptest
/// Tests invariants of the column listing for arbitrary tables
use proptest::prelude::*;
use schema_inspector::models::{ColumnDescriptor, TableColumns};
use schema_inspector::report::{render, SEPARATOR_WIDTH};

fn column() -> impl Strategy<Value = ColumnDescriptor> {
    (
        "[a-z_][a-z0-9_]{0,20}",
        prop::sample::select(vec![
            "integer",
            "text",
            "uuid",
            "boolean",
            "jsonb",
            "timestamp without time zone",
            "character varying",
        ]),
    )
        .prop_map(|(name, data_type)| ColumnDescriptor::new(name, data_type))
}

proptest! {
    #[test]
    fn one_line_per_column_and_matching_total(
        table in "[a-z_]{1,20}",
        columns in prop::collection::vec(column(), 0..40)
    ) {
        let n = columns.len();
        let rendered = render(&TableColumns::new(table.clone(), columns));
        let lines: Vec<&str> = rendered.lines().collect();

        // header, rule, n columns, blank, rule, total
        prop_assert_eq!(lines.len(), n + 5);
        prop_assert_eq!(lines[0].to_string(), format!("{} table columns:", table));
        prop_assert_eq!(lines[1].to_string(), "-".repeat(SEPARATOR_WIDTH));
        prop_assert_eq!(lines[n + 2], "");
        prop_assert_eq!(lines[n + 3].to_string(), "=".repeat(SEPARATOR_WIDTH));
        prop_assert_eq!(lines[n + 4].to_string(), format!("Total columns: {}", n));
        prop_assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn column_lines_follow_input_order(columns in prop::collection::vec(column(), 1..20)) {
        let rendered = render(&TableColumns::new("t", columns.clone()));
        let body: Vec<&str> = rendered.lines().skip(2).take(columns.len()).collect();

        for (line, col) in body.iter().zip(&columns) {
            prop_assert_eq!(line.to_string(), format!("{}: {}", col.column_name, col.data_type));
        }
    }
}
