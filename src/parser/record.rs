use serde::Serialize;
use std::fmt;

use crate::schema::ColumnType;

/// A single typed cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Missing,
    Integer(i64),
    Real(f64),
    Flag(bool),
    Text(String),
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Numeric view of the cell. Flags count as 0/1.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Real(f) if f.is_finite() => Some(*f),
            Value::Flag(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => write!(f, "NaN"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{}", r),
            Value::Flag(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Infer the narrowest type that every non-empty cell of a column fits.
/// Columns with no values at all are treated as text.
pub fn infer_column_type<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnType {
    let mut integer = true;
    let mut real = true;
    let mut flag = true;
    let mut seen = false;

    for cell in cells.filter(|c| !c.is_empty()) {
        seen = true;
        if integer && cell.parse::<i64>().is_err() {
            integer = false;
        }
        if real && cell.parse::<f64>().is_err() {
            real = false;
        }
        if flag && parse_flag(cell).is_none() {
            flag = false;
        }
        if !integer && !real && !flag {
            break;
        }
    }

    match (seen, integer, real, flag) {
        (false, ..) => ColumnType::Text,
        (true, true, _, _) => ColumnType::Integer,
        (true, _, true, _) => ColumnType::Real,
        (true, _, _, true) => ColumnType::Flag,
        _ => ColumnType::Text,
    }
}

/// Convert a raw cell into a value of the column's inferred type
pub fn parse_cell(cell: &str, col_type: &ColumnType) -> Value {
    if cell.is_empty() {
        return Value::Missing;
    }

    match col_type {
        ColumnType::Integer => cell.parse().map(Value::Integer).unwrap_or(Value::Missing),
        ColumnType::Real => match cell.parse::<f64>() {
            Ok(f) if !f.is_nan() => Value::Real(f),
            _ => Value::Missing,
        },
        ColumnType::Flag => parse_flag(cell).map(Value::Flag).unwrap_or(Value::Missing),
        ColumnType::Text => Value::Text(cell.to_string()),
    }
}

fn parse_flag(cell: &str) -> Option<bool> {
    if cell.eq_ignore_ascii_case("true") {
        Some(true)
    } else if cell.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_column_type() {
        assert_eq!(infer_column_type(["1", "", "3"].into_iter()), ColumnType::Integer);
        assert_eq!(infer_column_type(["1", "2.5"].into_iter()), ColumnType::Real);
        assert_eq!(infer_column_type(["True", "false"].into_iter()), ColumnType::Flag);
        assert_eq!(infer_column_type(["Fire", "1"].into_iter()), ColumnType::Text);
        assert_eq!(infer_column_type(["", ""].into_iter()), ColumnType::Text);
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("", &ColumnType::Integer), Value::Missing);
        assert_eq!(parse_cell("42", &ColumnType::Integer), Value::Integer(42));
        assert_eq!(parse_cell("4", &ColumnType::Real), Value::Real(4.0));
        assert_eq!(parse_cell("NaN", &ColumnType::Real), Value::Missing);
        assert_eq!(parse_cell("TRUE", &ColumnType::Flag), Value::Flag(true));
        assert_eq!(parse_cell("Grass", &ColumnType::Text), Value::Text("Grass".into()));
    }

    #[test]
    fn test_flags_are_numeric() {
        assert_eq!(Value::Flag(true).as_f64(), Some(1.0));
        assert_eq!(Value::Text("x".into()).as_f64(), None);
        assert_eq!(Value::Missing.as_f64(), None);
    }
}
