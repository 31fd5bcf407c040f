use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::aggregate::{mean_by, GroupKey};
use crate::chart::{Anchor, ChartKind, ChartSpec, Colors, Series, SeriesData};
use crate::error::{DexError, Result};
use crate::schema::columns::{BASE_STAT_TOTAL, MEGA_EVOLUTION};
use crate::table::Table;

const GROUPS: [(i64, &str, &str); 2] = [
    (0, "No Mega Evolution", "gray"),
    (1, "Mega Evolution", "purple"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MegaImpact {
    /// Mean base stat total without mega evolution, if any such rows exist
    pub without_mega: Option<f64>,
    pub with_mega: Option<f64>,
}

pub fn analyze(table: &Table) -> Result<(MegaImpact, ChartSpec)> {
    check_flag_values(table, MEGA_EVOLUTION)?;
    let means = mean_by(table, MEGA_EVOLUTION, BASE_STAT_TOTAL)?;

    let mean_of = |flag: i64| {
        means
            .iter()
            .find(|(key, _)| flag_value(key) == Some(flag))
            .map(|(_, mean)| mean)
    };
    let impact = MegaImpact {
        without_mega: mean_of(0),
        with_mega: mean_of(1),
    };

    let present: Vec<(&str, &str, f64)> = GROUPS
        .iter()
        .filter_map(|(flag, label, color)| Some((*label, *color, mean_of(*flag)?)))
        .collect();

    let colors: BTreeMap<String, String> = present
        .iter()
        .map(|(label, color, _)| (label.to_string(), color.to_string()))
        .collect();
    let bars = present
        .iter()
        .map(|(label, _, mean)| (label.to_string(), *mean))
        .collect();

    let chart = present.iter().fold(
        ChartSpec::new(
            "mega_evolution_impact",
            ChartKind::Bar,
            "Impact of Mega Evolution on Base Stat Total",
        )
        .axes("", "Average Base Stat Total")
        .series(Series::new(BASE_STAT_TOTAL, SeriesData::Bars { bars }))
        .colors(Colors::Mapping(colors)),
        |spec, (label, _, mean)| {
            spec.annotate(
                Anchor::Category(label.to_string()),
                *mean,
                (mean.trunc() as i64).to_string(),
            )
        },
    );

    Ok((impact, chart))
}

/// A mega-evolution flag may take at most the two values 0 and 1
fn check_flag_values(table: &Table, column: &str) -> Result<()> {
    let distinct: BTreeSet<GroupKey> = table
        .column(column)?
        .map(GroupKey::from)
        .filter(|k| !matches!(k, GroupKey::Missing))
        .collect();

    if distinct.len() > 2 {
        return Err(DexError::schema(format!(
            "column {:?} has {} distinct values, expected at most 2",
            column,
            distinct.len()
        )));
    }
    if let Some(bad) = distinct
        .iter()
        .find(|k| !matches!(flag_value(k), Some(0 | 1)))
    {
        return Err(DexError::schema(format!(
            "column {:?} holds {}, expected 0 or 1",
            column, bad
        )));
    }
    Ok(())
}

/// Integer reading of a flag key; `1.0` counts as `1`
fn flag_value(key: &GroupKey) -> Option<i64> {
    match key {
        GroupKey::Int(i) => Some(*i),
        GroupKey::Real(f) if f.fract() == 0.0 => Some(*f as i64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::test_support::table;

    #[test]
    fn test_two_bars_labeled() {
        let t = table(
            &["mega_evolution", "base_stat_total"],
            &[&["0", "300"], &["0", "405"], &["1", "600"], &["1", "634"]],
        );
        let (impact, chart) = analyze(&t).unwrap();
        assert_eq!(impact.without_mega, Some(352.5));
        assert_eq!(impact.with_mega, Some(617.0));

        match &chart.series[0].data {
            SeriesData::Bars { bars } => {
                assert_eq!(bars[0].0, "No Mega Evolution");
                assert_eq!(bars[1].0, "Mega Evolution");
            }
            other => panic!("unexpected series data {:?}", other),
        }
        let texts: Vec<&str> = chart.annotations.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["352", "617"]);
    }

    #[test]
    fn test_real_valued_flag() {
        let t = table(
            &["mega_evolution", "base_stat_total"],
            &[&["0.0", "300"], &["0.0", "405"], &["1.0", "600"]],
        );
        let (impact, chart) = analyze(&t).unwrap();
        assert_eq!(impact.without_mega, Some(352.5));
        assert_eq!(impact.with_mega, Some(600.0));
        assert_eq!(chart.annotations.len(), 2);

        let half = table(
            &["mega_evolution", "base_stat_total"],
            &[&["0.0", "300"], &["0.5", "600"]],
        );
        assert!(matches!(analyze(&half), Err(DexError::Schema(_))));
    }

    #[test]
    fn test_three_flag_values_is_schema_error() {
        let t = table(
            &["mega_evolution", "base_stat_total"],
            &[&["0", "300"], &["1", "600"], &["2", "700"]],
        );
        assert!(matches!(analyze(&t), Err(DexError::Schema(_))));
    }

    #[test]
    fn test_non_binary_flag_is_schema_error() {
        let t = table(
            &["mega_evolution", "base_stat_total"],
            &[&["0", "300"], &["5", "600"]],
        );
        assert!(matches!(analyze(&t), Err(DexError::Schema(_))));
    }
}
