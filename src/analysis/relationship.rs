use serde::Serialize;

use crate::aggregate::{correlation_matrix, Coefficient};
use crate::chart::{ChartKind, ChartSpec, Series, SeriesData};
use crate::error::Result;
use crate::schema::columns::{ATTACK, BASE_STAT_TOTAL};
use crate::stats::{linear_fit, LinearFit};
use crate::table::Table;

const POINT_COLOR: &str = "#4A818D";
const TREND_COLOR: &str = "red";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relationship {
    pub x: String,
    pub y: String,
    pub correlation: Coefficient,
    pub fit: LinearFit,
    /// Rows where both values are present
    pub observations: usize,
}

/// Attack against base stat total
pub fn analyze(table: &Table) -> Result<(Relationship, ChartSpec)> {
    let result = relationship(table, ATTACK, BASE_STAT_TOTAL)?;
    let chart = chart(table, &result, "Attack", "Base Stat Total")?;
    Ok((result, chart))
}

/// Pearson coefficient and least-squares line between two numeric columns
pub fn relationship(table: &Table, x: &str, y: &str) -> Result<Relationship> {
    let (xs, ys) = complete_pairs(table, x, y)?;
    let correlation = correlation_matrix(table, &[x, y])?
        .get(x, y)
        .unwrap_or(Coefficient::Undefined);
    let fit = linear_fit(&xs, &ys)?;

    Ok(Relationship {
        x: x.to_string(),
        y: y.to_string(),
        correlation,
        fit,
        observations: xs.len(),
    })
}

fn complete_pairs(table: &Table, x: &str, y: &str) -> Result<(Vec<f64>, Vec<f64>)> {
    let xs = table.numeric_column(x)?;
    let ys = table.numeric_column(y)?;
    Ok(xs
        .into_iter()
        .zip(ys)
        .filter_map(|(x, y)| Some((x?, y?)))
        .unzip())
}

fn chart(table: &Table, result: &Relationship, x_label: &str, y_label: &str) -> Result<ChartSpec> {
    let (xs, ys) = complete_pairs(table, &result.x, &result.y)?;
    let points: Vec<(f64, f64)> = xs.iter().copied().zip(ys).collect();

    let lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let trend = vec![(lo, result.fit.predict(lo)), (hi, result.fit.predict(hi))];

    Ok(ChartSpec::new(
        "attack_vs_base_stat_total",
        ChartKind::Scatter,
        format!("Relationship between {} and {}", x_label, y_label),
    )
    .axes(x_label, y_label)
    .series(Series::new(x_label, SeriesData::Xy { points }).color(POINT_COLOR))
    .series(
        Series::new(
            format!("Trend Line (Correlation: {})", result.correlation),
            SeriesData::Xy { points: trend },
        )
        .color(TREND_COLOR),
    ))
}
