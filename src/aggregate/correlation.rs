use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::Result;
use crate::stats::pearson;
use crate::table::Table;

/// A correlation entry; `Undefined` when either column has no variance
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coefficient {
    Defined(f64),
    Undefined,
}

impl Coefficient {
    pub fn value(&self) -> Option<f64> {
        match self {
            Coefficient::Defined(v) => Some(*v),
            Coefficient::Undefined => None,
        }
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::Defined(v) => write!(f, "{:.2}", v),
            Coefficient::Undefined => write!(f, "undefined"),
        }
    }
}

impl Serialize for Coefficient {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Coefficient::Defined(v) => serializer.serialize_f64(*v),
            Coefficient::Undefined => serializer.serialize_none(),
        }
    }
}

/// Square, symmetric Pearson matrix over named numeric columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// Row-major, `columns.len()` squared entries
    pub values: Vec<Coefficient>,
}

impl CorrelationMatrix {
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    pub fn at(&self, row: usize, col: usize) -> Coefficient {
        self.values[row * self.size() + col]
    }

    /// Lookup by column names; `None` if either name is not in the matrix
    pub fn get(&self, a: &str, b: &str) -> Option<Coefficient> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.at(i, j))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Coefficient]> {
        self.values.chunks(self.size().max(1))
    }
}

/// Pairwise Pearson coefficients, each pair using the rows where both
/// values are present
pub fn correlation_matrix(table: &Table, columns: &[&str]) -> Result<CorrelationMatrix> {
    let data: Vec<Vec<Option<f64>>> = columns
        .iter()
        .map(|name| table.numeric_column(name))
        .collect::<Result<_>>()?;

    let n = columns.len();
    let mut values = vec![Coefficient::Undefined; n * n];
    for i in 0..n {
        for j in i..n {
            let (xs, ys): (Vec<f64>, Vec<f64>) = data[i]
                .iter()
                .zip(&data[j])
                .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
                .unzip();
            let coefficient = match pearson(&xs, &ys) {
                Some(_) if i == j => Coefficient::Defined(1.0),
                Some(r) => Coefficient::Defined(r),
                None => Coefficient::Undefined,
            };
            values[i * n + j] = coefficient;
            values[j * n + i] = coefficient;
        }
    }

    Ok(CorrelationMatrix {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        values,
    })
}
