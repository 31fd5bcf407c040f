use std::collections::HashSet;

use tracing::{debug, info};

use super::columns::{FILL_COLUMN, FILL_SENTINEL, RENAMES};
use super::types::{ColumnType, Rename, Requirement};
use crate::error::{DexError, Result};
use crate::parser::Value;
use crate::table::Table;

/// Canonical form of a header: trimmed, whitespace to `_`, lower case
pub fn canonical_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Rewrite every column name into canonical form and apply the rename table.
///
/// Re-running on an already normalized table is a no-op: a rename whose
/// target is already present counts as applied. The table is left untouched
/// when any rename cannot be resolved or two names collide.
pub fn normalize_names(table: &mut Table, renames: &[Rename]) -> Result<()> {
    let mut names: Vec<String> = table.column_names().map(canonical_name).collect();

    for rename in renames {
        let source = names.iter().position(|n| n == rename.from);
        let target = names.iter().position(|n| n == rename.to);
        match (source, target) {
            (Some(idx), None) => names[idx] = rename.to.to_string(),
            (None, Some(_)) => {}
            (Some(_), Some(_)) => {
                return Err(DexError::schema(format!(
                    "cannot rename {:?} to {:?}: both columns exist",
                    rename.from, rename.to
                )))
            }
            (None, None) => {
                return Err(DexError::schema(format!(
                    "rename table references unknown column {:?}",
                    rename.from
                )))
            }
        }
    }

    let mut seen = HashSet::new();
    for name in &names {
        if !seen.insert(name.as_str()) {
            return Err(DexError::schema(format!(
                "more than one column normalizes to {:?}",
                name
            )));
        }
    }

    for (column, name) in table.columns_mut().iter_mut().zip(names) {
        if column.name != name {
            debug!(from = %column.name, to = %name, "Renamed column");
            column.name = name;
        }
    }
    Ok(())
}

/// Replace missing cells of one categorical column with a sentinel.
/// Returns the number of cells filled.
pub fn fill_missing(table: &mut Table, column: &str, sentinel: &str) -> Result<usize> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| DexError::schema(format!("missing column {:?}", column)))?;

    if table.columns()[idx].col_type != ColumnType::Text {
        return Err(DexError::schema(format!(
            "column {:?} is {}, only categorical text columns take a sentinel",
            column,
            table.columns()[idx].col_type
        )));
    }

    let mut filled = 0;
    for row in table.rows_mut() {
        if row[idx].is_missing() {
            row[idx] = Value::Text(sentinel.to_string());
            filled += 1;
        }
    }
    Ok(filled)
}

/// Check that every required column exists with a usable type
pub fn validate(table: &Table, requirements: &[Requirement]) -> Result<()> {
    for req in requirements {
        let col_type = table
            .column_type(req.name)
            .ok_or_else(|| DexError::schema(format!("missing column {:?}", req.name)))?;
        if !req.accepts(col_type) {
            return Err(DexError::schema(format!(
                "column {:?} is {}, expected {:?}",
                req.name, col_type, req.usage
            )));
        }
    }
    Ok(())
}

/// Full cleaning pass: canonical names, then the sentinel fill
pub fn normalize(mut table: Table) -> Result<Table> {
    normalize_names(&mut table, RENAMES)?;
    let filled = fill_missing(&mut table, FILL_COLUMN, FILL_SENTINEL)?;
    info!(filled, column = FILL_COLUMN, "Normalized dataset");
    Ok(table)
}
