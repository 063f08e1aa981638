use sqlx::FromRow;

/// One column of the inspected table, as reported by `information_schema.columns`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ColumnDescriptor {
    pub column_name: String,
    pub data_type: String,
}

impl ColumnDescriptor {
    pub fn new(column_name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            data_type: data_type.into(),
        }
    }
}

/// Columns of one table in ordinal position order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumns {
    pub table_name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl TableColumns {
    pub fn new(table_name: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            table_name: table_name.into(),
            columns,
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
