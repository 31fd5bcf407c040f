use serde::Serialize;

use super::SIGNIFICANCE_LEVEL;
use crate::aggregate::{count_by, GroupKey};
use crate::chart::{BoxSummary, ChartKind, ChartSpec, Series, SeriesData};
use crate::error::{DexError, Result};
use crate::schema::columns::{ATTACK, LEGENDARY, TYPE_1};
use crate::stats::{mean, quantile, welch_t_test, WelchTest};
use crate::table::Table;

/// Attack values of one primary type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDistribution {
    pub category: GroupKey,
    pub values: Vec<f64>,
    pub summary: Option<BoxSummary>,
}

/// Legendary against non-legendary attack
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Significance {
    pub test: WelchTest,
    pub legendary_mean: f64,
    pub non_legendary_mean: f64,
    pub legendary_count: usize,
    pub non_legendary_count: usize,
    pub significant: bool,
    pub verdict: String,
}

#[derive(Debug)]
pub struct AttackDistribution {
    /// In descending type-count order
    pub distributions: Vec<TypeDistribution>,
    /// The t-test can fail on its own while the distributions stand
    pub significance: Result<Significance>,
}

pub fn analyze(table: &Table) -> Result<(AttackDistribution, ChartSpec)> {
    let distributions = distributions_by(table, TYPE_1, ATTACK)?;
    let significance = legendary_significance(table);
    let chart = chart(&distributions);
    Ok((
        AttackDistribution {
            distributions,
            significance,
        },
        chart,
    ))
}

/// Values of `value_column` for every category of `group_column`,
/// categories ordered by descending count
pub fn distributions_by(
    table: &Table,
    group_column: &str,
    value_column: &str,
) -> Result<Vec<TypeDistribution>> {
    let counts = count_by(table, group_column)?;
    let values = table.numeric_column(value_column)?;
    let groups: Vec<GroupKey> = table.column(group_column)?.map(GroupKey::from).collect();

    Ok(counts
        .keys()
        .filter(|category| !matches!(category, GroupKey::Missing))
        .map(|category| {
            let values: Vec<f64> = groups
                .iter()
                .zip(&values)
                .filter(|(g, _)| *g == category)
                .filter_map(|(_, v)| *v)
                .collect();
            TypeDistribution {
                category: category.clone(),
                summary: box_summary(&values),
                values,
            }
        })
        .collect())
}

/// Quartiles plus whiskers at the furthest points within 1.5 IQR
pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25)?;
    let median = quantile(&sorted, 0.5)?;
    let q3 = quantile(&sorted, 0.75)?;
    let reach = 1.5 * (q3 - q1);

    let lower_whisker = sorted
        .iter()
        .copied()
        .find(|v| *v >= q1 - reach)
        .unwrap_or(q1);
    let upper_whisker = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= q3 + reach)
        .unwrap_or(q3);

    Some(BoxSummary {
        lower_whisker,
        q1,
        median,
        q3,
        upper_whisker,
    })
}

/// Welch t-test of legendary against non-legendary attack
pub fn legendary_significance(table: &Table) -> Result<Significance> {
    let flags = table.numeric_column(LEGENDARY)?;
    let attack = table.numeric_column(ATTACK)?;

    let mut legendary = Vec::new();
    let mut regular = Vec::new();
    for (flag, value) in flags.into_iter().zip(attack) {
        match (flag, value) {
            (Some(f), Some(v)) if f == 1.0 => legendary.push(v),
            (Some(f), Some(v)) if f == 0.0 => regular.push(v),
            _ => {}
        }
    }

    for (label, group) in [("legendary", &legendary), ("non-legendary", &regular)] {
        if group.len() < 2 {
            return Err(DexError::insufficient(format!(
                "{} group has {} attack observation(s), the t-test needs at least 2",
                label,
                group.len()
            )));
        }
    }

    let test = welch_t_test(&legendary, &regular)?;
    let significant = test.p_value < SIGNIFICANCE_LEVEL;
    Ok(Significance {
        test,
        legendary_mean: mean(&legendary).unwrap_or_default(),
        non_legendary_mean: mean(&regular).unwrap_or_default(),
        legendary_count: legendary.len(),
        non_legendary_count: regular.len(),
        significant,
        verdict: verdict(significant).to_string(),
    })
}

fn verdict(significant: bool) -> &'static str {
    if significant {
        "The difference in mean Attack values between Legendary and Non-Legendary \
         entries is statistically significant."
    } else {
        "There is no statistically significant difference in mean Attack values \
         between Legendary and Non-Legendary entries."
    }
}

fn chart(distributions: &[TypeDistribution]) -> ChartSpec {
    let labels: Vec<String> = distributions.iter().map(|d| d.category.to_string()).collect();
    distributions.iter().fold(
        ChartSpec::new(
            "attack_by_type_1",
            ChartKind::Box,
            "Distribution of Attack Stats by Type 1",
        )
        .axes("Attack", "Type 1")
        .y_ticks(labels),
        |spec, d| {
            spec.series(Series::new(
                d.category.to_string(),
                SeriesData::Distribution {
                    values: d.values.clone(),
                    summary: d.summary,
                },
            ))
        },
    )
}
