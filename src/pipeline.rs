use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

use crate::analysis::{run_all, AnalysisKind};
use crate::parser::load_table;
use crate::render::ChartSink;
use crate::report::{format_describe, format_failure, format_head, format_info, format_outcome, HEAD_ROWS};
use crate::schema::normalize;
use crate::table::Table;

/// What a report run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub rows: usize,
    pub succeeded: Vec<AnalysisKind>,
    pub failed: Vec<AnalysisKind>,
    pub charts: usize,
}

/// Load the CSV and normalize its column names
pub fn load_normalized(input: &Path, delimiter: u8) -> Result<Table> {
    let table = load_table(input, delimiter)
        .with_context(|| format!("Failed to load dataset: {:?}", input))?;
    let table = normalize(table).context("Failed to normalize dataset")?;
    Ok(table)
}

/// Print the dataset preview, structure and numeric summary
pub fn print_overview(table: &Table) {
    println!("{}", format_head(table, HEAD_ROWS));
    println!("{}", format_info(table));
    println!("{}", format_describe(table));
}

/// Full pipeline: load, normalize, overview, then each analysis in order.
///
/// An analysis that fails is reported and skipped. Only input errors and
/// chart sink errors end the run.
pub fn run_report(
    input: &Path,
    delimiter: u8,
    kinds: &[AnalysisKind],
    sink: &mut dyn ChartSink,
) -> Result<ReportSummary> {
    let table = load_normalized(input, delimiter)?;
    print_overview(&table);

    let mut summary = ReportSummary {
        rows: table.len(),
        succeeded: Vec::new(),
        failed: Vec::new(),
        charts: 0,
    };

    for (kind, result) in run_all(kinds, &table) {
        match result {
            Ok(outcome) => {
                println!("{}", format_outcome(&outcome));
                for chart in &outcome.charts {
                    sink.render(chart)
                        .with_context(|| format!("Failed to render chart for {}", kind))?;
                }
                summary.succeeded.push(kind);
            }
            Err(err) => {
                warn!(analysis = %kind, error = %err, "Analysis skipped");
                println!("{}", format_failure(kind, &err));
                summary.failed.push(kind);
            }
        }
    }

    summary.charts = sink.rendered();
    info!(
        succeeded = summary.succeeded.len(),
        failed = summary.failed.len(),
        charts = summary.charts,
        "Report finished"
    );
    Ok(summary)
}
