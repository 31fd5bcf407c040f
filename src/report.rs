//! Console summaries. Exact layout is not load-bearing; the numbers are.

use std::fmt::Write;

use crate::aggregate::{describe, info, ColumnSummary};
use crate::analysis::{failure_reason, AnalysisKind, Finding, Outcome};
use crate::error::DexError;
use crate::table::Table;

/// Rows shown by the dataset preview
pub const HEAD_ROWS: usize = 10;

/// First `n` rows, columns padded to the widest cell
pub fn format_head(table: &Table, n: usize) -> String {
    let names: Vec<&str> = table.column_names().collect();
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .take(n)
        .map(|r| r.iter().map(|v| v.to_string()).collect())
        .collect();

    let widths: Vec<usize> = names
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            rows.iter()
                .map(|r| r[idx].len())
                .chain(std::iter::once(name.len()))
                .max()
                .unwrap_or_default()
        })
        .collect();
    let index_width = n.min(table.len()).saturating_sub(1).to_string().len();

    let mut out = String::new();
    let _ = write!(out, "{:index_width$}", "");
    for (name, width) in names.iter().zip(&widths) {
        let _ = write!(out, "  {:>width$}", name);
    }
    out.push('\n');
    for (i, row) in rows.iter().enumerate() {
        let _ = write!(out, "{:<index_width$}", i);
        for (cell, width) in row.iter().zip(&widths) {
            let _ = write!(out, "  {:>width$}", cell);
        }
        out.push('\n');
    }
    out
}

/// Entry count plus per-column non-missing count and type
pub fn format_info(table: &Table) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} entries, {} columns", table.len(), table.columns().len());
    let _ = writeln!(out, " #   {:<24} {:>14}  Dtype", "Column", "Non-Null Count");
    for (idx, col) in info(table).iter().enumerate() {
        let _ = writeln!(
            out,
            " {:<3} {:<24} {:>6} non-null  {}",
            idx, col.name, col.non_missing, col.col_type
        );
    }
    out
}

/// count / mean / std / min / quartiles / max per numeric column
pub fn format_describe(table: &Table) -> String {
    fn cell(v: Option<f64>) -> String {
        v.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "NaN".to_string())
    }

    let summaries: Vec<ColumnSummary> = describe(table);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:>7} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );
    for s in &summaries {
        let _ = writeln!(
            out,
            "{:<24} {:>7} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
            s.name,
            s.count,
            cell(s.mean),
            cell(s.std),
            cell(s.min),
            cell(s.q25),
            cell(s.median),
            cell(s.q75),
            cell(s.max)
        );
    }
    out
}

pub fn format_outcome(outcome: &Outcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", outcome.kind.description());

    match &outcome.finding {
        Finding::TypeDistribution(counts) => {
            for (key, count) in &counts.entries {
                let _ = writeln!(out, "  {:<12} {}", key, count);
            }
        }
        Finding::StatCorrelation(matrix) => {
            let _ = write!(out, "  {:<16}", "");
            for name in &matrix.columns {
                let _ = write!(out, " {:>9.9}", name);
            }
            out.push('\n');
            for (name, row) in matrix.columns.iter().zip(matrix.rows()) {
                let _ = write!(out, "  {:<16}", name);
                for c in row {
                    let _ = write!(out, " {:>9}", c.to_string());
                }
                out.push('\n');
            }
        }
        Finding::AttackVsTotal(rel) => {
            let _ = writeln!(out, "  correlation({}, {}): {}", rel.x, rel.y, rel.correlation);
            let _ = writeln!(
                out,
                "  trend line: {} = {:.4} * {} + {:.4} ({} points)",
                rel.y, rel.fit.slope, rel.x, rel.fit.intercept, rel.observations
            );
        }
        Finding::AttackByType(dist) => {
            for d in &dist.distributions {
                match &d.summary {
                    Some(s) => {
                        let _ = writeln!(
                            out,
                            "  {:<12} n={:<4} median={:.1} iqr=[{:.1}, {:.1}]",
                            d.category.to_string(),
                            d.values.len(),
                            s.median,
                            s.q1,
                            s.q3
                        );
                    }
                    None => {
                        let _ = writeln!(out, "  {:<12} n=0", d.category.to_string());
                    }
                }
            }
            let _ = writeln!(out, "  Two-sample t-test between Legendary and Non-Legendary:");
            match &dist.significance {
                Ok(sig) => {
                    let _ = writeln!(out, "  t-statistic: {}", sig.test.t_statistic);
                    let _ = writeln!(out, "  p-value: {}", sig.test.p_value);
                    let _ = writeln!(out, "  {}", sig.verdict);
                }
                Err(err) => {
                    let _ = writeln!(out, "  {}: {}", failure_reason(err), err);
                }
            }
        }
        Finding::BmiTrend(trend) => {
            for (generation, mean) in &trend.points {
                let _ = writeln!(out, "  generation {}: {:.2}", generation, mean);
            }
        }
        Finding::MegaImpact(impact) => {
            let fmt = |v: Option<f64>| v.map(|v| format!("{:.2}", v)).unwrap_or("-".to_string());
            let _ = writeln!(out, "  No Mega Evolution: {}", fmt(impact.without_mega));
            let _ = writeln!(out, "  Mega Evolution:    {}", fmt(impact.with_mega));
        }
        Finding::GenerationTrend(trends) => {
            for trend in trends {
                let points: Vec<String> = trend
                    .points
                    .iter()
                    .map(|(g, m)| format!("{}:{:.1}", g, m))
                    .collect();
                let _ = writeln!(out, "  {:<16} {}", trend.label, points.join(" "));
            }
        }
    }
    out
}

pub fn format_failure(kind: AnalysisKind, err: &DexError) -> String {
    format!(
        "== {} ==\n  {}: {}\n",
        kind.description(),
        failure_reason(err),
        err
    )
}
