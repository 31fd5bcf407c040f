use std::fmt;

/// Column data type, inferred from the cells at load time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    /// True/False cells
    Flag,
    Text,
}

impl ColumnType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Real | ColumnType::Flag)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "int64"),
            ColumnType::Real => write!(f, "float64"),
            ColumnType::Flag => write!(f, "bool"),
            ColumnType::Text => write!(f, "object"),
        }
    }
}

/// What an analysis needs from a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    /// Any type; values are used as group keys
    Categorical,
    /// Integer, real or flag
    Numeric,
    /// Integer 0/1 or True/False
    Flag,
}

/// A column an analysis depends on
#[derive(Debug, Clone, Copy)]
pub struct Requirement {
    pub name: &'static str,
    pub usage: Usage,
}

impl Requirement {
    pub const fn categorical(name: &'static str) -> Self {
        Self {
            name,
            usage: Usage::Categorical,
        }
    }

    pub const fn numeric(name: &'static str) -> Self {
        Self {
            name,
            usage: Usage::Numeric,
        }
    }

    pub const fn flag(name: &'static str) -> Self {
        Self {
            name,
            usage: Usage::Flag,
        }
    }

    /// Whether a column of the given type can serve this requirement
    pub fn accepts(&self, col_type: &ColumnType) -> bool {
        match self.usage {
            Usage::Categorical => true,
            Usage::Numeric => col_type.is_numeric(),
            // 0/1 values are checked by the analysis reading the flag
            Usage::Flag => matches!(
                col_type,
                ColumnType::Integer | ColumnType::Real | ColumnType::Flag
            ),
        }
    }
}

/// Fixed source → canonical column rename
#[derive(Debug, Clone, Copy)]
pub struct Rename {
    pub from: &'static str,
    pub to: &'static str,
}

impl Rename {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }
}
