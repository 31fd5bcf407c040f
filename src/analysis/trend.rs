use serde::Serialize;

use crate::aggregate::{mean_by, GroupKey, GroupMeans};
use crate::chart::{Anchor, ChartKind, ChartSpec, Colors, Series, SeriesData};
use crate::error::Result;
use crate::schema::columns::{BMI, GENERATION, GENERATION_STATS};
use crate::table::Table;

const BMI_COLOR: &str = "#FAD61D";
const STAT_PALETTE: &str = "rainbow";

/// Ascending (group, mean) pairs for one value column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trend {
    pub column: String,
    pub label: String,
    pub points: Vec<(GroupKey, f64)>,
}

impl Trend {
    fn from_means(column: &str, label: &str, means: &GroupMeans) -> Self {
        Self {
            column: column.to_string(),
            label: label.to_string(),
            points: means.iter().map(|(k, v)| (k.clone(), v)).collect(),
        }
    }

    /// Numeric x positions. Non-numeric keys fall back to their position
    /// in `axis`, which the chart then labels with ticks.
    fn xy(&self, axis: &[GroupKey]) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|(key, mean)| (axis_position(key, axis), *mean))
            .collect()
    }
}

fn axis_position(key: &GroupKey, axis: &[GroupKey]) -> f64 {
    key.as_f64()
        .unwrap_or_else(|| axis.iter().position(|k| k == key).unwrap_or_default() as f64)
}

/// Tick labels, needed only when some key has no numeric position
fn axis_ticks(axis: &[GroupKey]) -> Vec<String> {
    if axis.iter().all(|k| k.as_f64().is_some()) {
        Vec::new()
    } else {
        axis.iter().map(|k| k.to_string()).collect()
    }
}

/// Mean BMI per generation
pub fn bmi_by_generation(table: &Table) -> Result<(Trend, ChartSpec)> {
    let means = mean_by(table, GENERATION, BMI)?;
    let trend = Trend::from_means(BMI, "BMI", &means);

    let axis: Vec<GroupKey> = trend.points.iter().map(|(k, _)| k.clone()).collect();
    let points = trend.xy(&axis);
    let chart = points.iter().fold(
        ChartSpec::new(
            "bmi_by_generation",
            ChartKind::Line,
            "Average BMI Trends across Generations",
        )
        .axes("Generation", "Average BMI")
        .x_ticks(axis_ticks(&axis))
        .series(Series::new("bmi", SeriesData::Xy { points: points.clone() }).color(BMI_COLOR)),
        |spec, (x, y)| spec.annotate(Anchor::Value(*x), *y, format!("{:.0}", y)),
    );

    Ok((trend, chart))
}

/// Mean of each tracked stat per generation, one subplot per stat
pub fn stats_by_generation(table: &Table) -> Result<(Vec<Trend>, ChartSpec)> {
    let trends: Vec<Trend> = GENERATION_STATS
        .iter()
        .map(|(column, label)| {
            mean_by(table, GENERATION, column).map(|m| Trend::from_means(column, label, &m))
        })
        .collect::<Result<_>>()?;

    let mut axis: Vec<GroupKey> = trends
        .iter()
        .flat_map(|t| t.points.iter().map(|(k, _)| k.clone()))
        .collect();
    axis.sort();
    axis.dedup();

    let chart = trends.iter().fold(
        ChartSpec::new(
            "stats_by_generation",
            ChartKind::MultiLine,
            "Generational Evolution of Attributes",
        )
        .axes("Generation", "Average")
        .x_ticks(axis_ticks(&axis))
        .colors(Colors::Palette(STAT_PALETTE.to_string()))
        .grid(3, 2),
        |spec, trend| {
            spec.series(Series::new(
                trend.label.clone(),
                SeriesData::Xy {
                    points: trend.xy(&axis),
                },
            ))
        },
    );

    Ok((trends, chart))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::test_support::table;

    #[test]
    fn test_bmi_trend_sorted_with_rounded_annotations() {
        let t = table(
            &["generation", "bmi"],
            &[&["2", "20.4"], &["1", "10.2"], &["1", "11.0"], &["3", "31.5"]],
        );
        let (trend, chart) = bmi_by_generation(&t).unwrap();
        let gens: Vec<i64> = trend.points.iter().filter_map(|(k, _)| k.as_i64()).collect();
        assert_eq!(gens, vec![1, 2, 3]);
        assert!((trend.points[0].1 - 10.6).abs() < 1e-9);

        let texts: Vec<&str> = chart.annotations.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["11", "20", "32"]);
        assert!(chart.labels.x_ticks.is_empty());
    }

    #[test]
    fn test_text_generations_get_ticks() {
        let t = table(&["generation", "bmi"], &[&["II", "2"], &["I", "1"]]);
        let (_, chart) = bmi_by_generation(&t).unwrap();
        assert_eq!(chart.labels.x_ticks, vec!["I", "II"]);
        match &chart.series[0].data {
            SeriesData::Xy { points } => assert_eq!(points, &vec![(0.0, 1.0), (1.0, 2.0)]),
            other => panic!("unexpected series data {:?}", other),
        }
    }

    #[test]
    fn test_six_stats_in_declared_order() {
        let t = table(
            &[
                "generation",
                "hp",
                "attack",
                "defense",
                "speed",
                "special_attack",
                "special_defense",
            ],
            &[
                &["1", "45", "49", "49", "45", "65", "65"],
                &["2", "60", "62", "63", "60", "80", "80"],
                &["1", "39", "52", "43", "65", "60", "50"],
            ],
        );
        let (trends, chart) = stats_by_generation(&t).unwrap();
        let labels: Vec<&str> = trends.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["HP", "Attack", "Defense", "Speed", "Special Attack", "Special Defense"]
        );
        assert_eq!(trends[0].points.len(), 2);
        assert_eq!(trends[0].points[0].1, 42.0);
        assert_eq!(chart.series.len(), 6);
        assert_eq!(chart.grid, Some((3, 2)));
    }
}
