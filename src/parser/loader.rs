use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use super::record::{infer_column_type, parse_cell};
use crate::error::{DexError, Result};
use crate::table::{ColumnInfo, Table};

pub const DEFAULT_DELIMITER: u8 = b',';

/// Load a delimited file with a header row into a typed table
pub fn load_table(path: &Path, delimiter: u8) -> Result<Table> {
    let file = File::open(path).map_err(|source| DexError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = read_table(file, delimiter).map_err(|err| match err {
        DexError::Io { source, .. } => DexError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns().len(),
        "Loaded dataset"
    );
    Ok(table)
}

/// Parse delimited text from any reader. Row and column order are kept as read.
pub fn read_table<R: Read>(reader: R, delimiter: u8) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(String::from)
        .collect();
    check_headers(&headers)?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        raw_rows.push(record.iter().map(String::from).collect());
    }

    let columns: Vec<ColumnInfo> = headers
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let col_type = infer_column_type(raw_rows.iter().map(|r| r[idx].as_str()));
            debug!(column = %name, %col_type, "Inferred column type");
            ColumnInfo { name, col_type }
        })
        .collect();

    let rows = raw_rows
        .iter()
        .map(|raw| {
            raw.iter()
                .zip(&columns)
                .map(|(cell, col)| parse_cell(cell, &col.col_type))
                .collect()
        })
        .collect();

    Table::new(columns, rows)
}

fn check_headers(headers: &[String]) -> Result<()> {
    if headers.is_empty() {
        return Err(DexError::Parse {
            row: 1,
            column: None,
            message: "missing header row".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for (idx, name) in headers.iter().enumerate() {
        if name.is_empty() {
            return Err(DexError::Parse {
                row: 1,
                column: Some(format!("#{}", idx + 1)),
                message: "empty column name".to_string(),
            });
        }
        if !seen.insert(name.as_str()) {
            return Err(DexError::Parse {
                row: 1,
                column: Some(name.clone()),
                message: "duplicate column name".to_string(),
            });
        }
    }
    Ok(())
}

fn csv_error(err: csv::Error) -> DexError {
    let row = err.position().map(|p| p.line()).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(source) => DexError::Io {
            path: Default::default(),
            source,
        },
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => DexError::Parse {
            row,
            column: None,
            message: format!("expected {} fields, found {}", expected_len, len),
        },
        csv::ErrorKind::Utf8 { err, .. } => DexError::Parse {
            row,
            column: Some(format!("#{}", err.field() + 1)),
            message: "invalid UTF-8".to_string(),
        },
        other => DexError::Parse {
            row,
            column: None,
            message: format!("{:?}", other),
        },
    }
}
