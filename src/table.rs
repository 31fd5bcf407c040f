//! In-memory record table: ordered column names plus rows of values indexed
//! by column position.

use crate::error::{DexError, Result};
use crate::parser::Value;
use crate::schema::ColumnType;

/// Column metadata carried alongside the values
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub col_type: ColumnType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<ColumnInfo>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table, checking every row has one value per column
    pub fn new(columns: Vec<ColumnInfo>, rows: Vec<Vec<Value>>) -> Result<Self> {
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(DexError::Parse {
                    row: idx as u64 + 2,
                    column: None,
                    message: format!("expected {} fields, found {}", columns.len(), row.len()),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column_type(&self, name: &str) -> Option<&ColumnType> {
        self.column_index(name).map(|idx| &self.columns[idx].col_type)
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column in row order
    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Value> + '_> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| DexError::schema(format!("missing column {:?}", name)))?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Numeric view of a column; `None` for missing cells.
    /// Fails if the column is absent or not numeric.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        match self.column_type(name) {
            None => Err(DexError::schema(format!("missing column {:?}", name))),
            Some(t) if !t.is_numeric() => Err(DexError::schema(format!(
                "column {:?} is {}, expected numeric",
                name, t
            ))),
            Some(_) => Ok(self.column(name)?.map(Value::as_f64).collect()),
        }
    }

    pub(crate) fn columns_mut(&mut self) -> &mut Vec<ColumnInfo> {
        &mut self.columns
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<Value>> {
        &mut self.rows
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::table;
    use super::*;

    #[test]
    fn test_ragged_rows_rejected() {
        let columns = vec![ColumnInfo {
            name: "a".into(),
            col_type: ColumnType::Integer,
        }];
        let result = Table::new(columns, vec![vec![Value::Integer(1), Value::Integer(2)]]);
        assert!(matches!(result, Err(DexError::Parse { row: 2, .. })));
    }

    #[test]
    fn test_numeric_column_rejects_text() {
        let t = table(&["name", "hp"], &[&["a", "10"], &["b", ""]]);
        assert_eq!(t.numeric_column("hp").unwrap(), vec![Some(10.0), None]);
        assert!(matches!(t.numeric_column("name"), Err(DexError::Schema(_))));
        assert!(matches!(t.numeric_column("speed"), Err(DexError::Schema(_))));
    }
}
