use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::Result;
use crate::parser::Value;
use crate::table::Table;

/// Group key taken from a categorical column value
#[derive(Debug, Clone)]
pub enum GroupKey {
    Missing,
    Int(i64),
    Real(f64),
    Text(String),
}

impl GroupKey {
    fn rank(&self) -> u8 {
        match self {
            GroupKey::Missing => 0,
            GroupKey::Int(_) => 1,
            GroupKey::Real(_) => 2,
            GroupKey::Text(_) => 3,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GroupKey::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Position on a numeric axis, if the key has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GroupKey::Int(i) => Some(*i as f64),
            GroupKey::Real(f) => Some(*f),
            _ => None,
        }
    }
}

impl From<&Value> for GroupKey {
    fn from(value: &Value) -> Self {
        match value {
            Value::Missing => GroupKey::Missing,
            Value::Integer(i) => GroupKey::Int(*i),
            Value::Flag(b) => GroupKey::Int(i64::from(*b)),
            Value::Real(f) if f.is_nan() => GroupKey::Missing,
            Value::Real(f) => GroupKey::Real(*f),
            Value::Text(s) => GroupKey::Text(s.clone()),
        }
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GroupKey {}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (GroupKey::Int(a), GroupKey::Int(b)) => a.cmp(b),
            (GroupKey::Real(a), GroupKey::Real(b)) => a.total_cmp(b),
            (GroupKey::Text(a), GroupKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Missing => write!(f, "NaN"),
            GroupKey::Int(i) => write!(f, "{}", i),
            GroupKey::Real(r) => write!(f, "{}", r),
            GroupKey::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Serialize for GroupKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            GroupKey::Missing => serializer.serialize_none(),
            GroupKey::Int(i) => serializer.serialize_i64(*i),
            GroupKey::Real(r) => serializer.serialize_f64(*r),
            GroupKey::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Occurrence counts, most frequent first; ties keep first-appearance order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCounts {
    pub entries: Vec<(GroupKey, usize)>,
}

impl CategoryCounts {
    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn get(&self, key: &GroupKey) -> Option<usize> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, c)| *c)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Arithmetic mean per group, in ascending key order
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMeans {
    pub means: BTreeMap<GroupKey, f64>,
}

impl GroupMeans {
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, f64)> {
        self.means.iter().map(|(k, v)| (k, *v))
    }

    pub fn get(&self, key: &GroupKey) -> Option<f64> {
        self.means.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }
}

/// Count rows per distinct value of `column`. Missing cells form their own
/// group so the counts always add up to the row count.
pub fn count_by(table: &Table, column: &str) -> Result<CategoryCounts> {
    // key -> (first row index, count)
    let mut seen: BTreeMap<GroupKey, (usize, usize)> = BTreeMap::new();
    for (idx, value) in table.column(column)?.enumerate() {
        seen.entry(GroupKey::from(value))
            .and_modify(|(_, count)| *count += 1)
            .or_insert((idx, 1));
    }

    let mut entries: Vec<(GroupKey, usize, usize)> = seen
        .into_iter()
        .map(|(key, (first, count))| (key, first, count))
        .collect();
    entries.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));

    Ok(CategoryCounts {
        entries: entries.into_iter().map(|(k, _, c)| (k, c)).collect(),
    })
}

/// Mean of `value_column` for each value of `group_column`.
///
/// Rows with a missing group or a missing value are skipped; groups left
/// without values do not appear in the result.
pub fn mean_by(table: &Table, group_column: &str, value_column: &str) -> Result<GroupMeans> {
    let values = table.numeric_column(value_column)?;
    let mut sums: BTreeMap<GroupKey, (f64, usize)> = BTreeMap::new();

    for (group, value) in table.column(group_column)?.zip(values) {
        let key = GroupKey::from(group);
        let Some(value) = value else { continue };
        if matches!(key, GroupKey::Missing) {
            continue;
        }
        let entry = sums.entry(key).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    Ok(GroupMeans {
        means: sums
            .into_iter()
            .map(|(key, (sum, n))| (key, sum / n as f64))
            .collect(),
    })
}
