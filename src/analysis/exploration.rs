use crate::aggregate::{correlation_matrix, count_by, CategoryCounts, CorrelationMatrix, GroupKey};
use crate::chart::{Anchor, ChartKind, ChartSpec, Colors, Series, SeriesData};
use crate::error::Result;
use crate::schema::columns::{CORRELATION_STATS, TYPE_1};
use crate::table::Table;

const TYPE_PALETTE: &str = "type_colors";
const HEATMAP_PALETTE: &str = "Greens";

/// How many entries fall under each primary type
pub fn type_distribution(table: &Table) -> Result<(CategoryCounts, ChartSpec)> {
    let counts = count_by(table, TYPE_1)?;
    let bars: Vec<(String, f64)> = counts
        .entries
        .iter()
        .filter(|(key, _)| !matches!(key, GroupKey::Missing))
        .map(|(key, count)| (key.to_string(), *count as f64))
        .collect();

    let chart = bars.iter().fold(
        ChartSpec::new("count_by_type_1", ChartKind::Bar, "Count by Type 1")
            .axes("Type 1", "Count")
            .series(Series::new(TYPE_1, SeriesData::Bars { bars: bars.clone() }))
            .colors(Colors::Palette(TYPE_PALETTE.to_string())),
        |spec, (label, count)| {
            spec.annotate(Anchor::Category(label.clone()), *count, count.to_string())
        },
    );

    Ok((counts, chart))
}

/// Pearson matrix over the base stats and their total
pub fn stat_correlation(table: &Table) -> Result<(CorrelationMatrix, ChartSpec)> {
    let matrix = correlation_matrix(table, CORRELATION_STATS)?;
    let cells = matrix
        .rows()
        .map(|row| row.iter().map(|c| c.value()).collect())
        .collect();

    let chart = ChartSpec::new(
        "stat_correlation",
        ChartKind::Heatmap,
        "Correlation Heatmap of Stats",
    )
    .x_ticks(matrix.columns.clone())
    .y_ticks(matrix.columns.clone())
    .series(Series::new("correlation", SeriesData::Grid { cells }))
    .colors(Colors::Palette(HEATMAP_PALETTE.to_string()));

    Ok((matrix, chart))
}
