//! The preset questions asked of the dataset.
//!
//! Every analysis reads the normalized table and returns its result together
//! with the chart specs that show it. None of them mutate the table, so they
//! can run in any order.

pub mod distribution;
pub mod exploration;
pub mod mega;
pub mod relationship;
pub mod trend;

use std::fmt;

use tracing::debug;

use crate::aggregate::{CategoryCounts, CorrelationMatrix};
use crate::chart::ChartSpec;
use crate::error::{DexError, Result};
use crate::schema::columns::*;
use crate::schema::{validate, Requirement};
use crate::table::Table;

pub use distribution::{AttackDistribution, Significance, TypeDistribution};
pub use mega::MegaImpact;
pub use relationship::Relationship;
pub use trend::Trend;

/// p-values below this are reported as significant
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    TypeDistribution,
    StatCorrelation,
    AttackVsTotal,
    AttackByType,
    BmiTrend,
    MegaImpact,
    GenerationTrend,
}

impl AnalysisKind {
    /// Run order
    pub const ALL: [AnalysisKind; 7] = [
        AnalysisKind::TypeDistribution,
        AnalysisKind::StatCorrelation,
        AnalysisKind::AttackVsTotal,
        AnalysisKind::AttackByType,
        AnalysisKind::BmiTrend,
        AnalysisKind::MegaImpact,
        AnalysisKind::GenerationTrend,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AnalysisKind::TypeDistribution => "type-distribution",
            AnalysisKind::StatCorrelation => "stat-correlation",
            AnalysisKind::AttackVsTotal => "attack-vs-total",
            AnalysisKind::AttackByType => "attack-by-type",
            AnalysisKind::BmiTrend => "bmi-trend",
            AnalysisKind::MegaImpact => "mega-impact",
            AnalysisKind::GenerationTrend => "generation-trend",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AnalysisKind::TypeDistribution => "Count of entries by primary type",
            AnalysisKind::StatCorrelation => "Correlation heatmap of the base stats",
            AnalysisKind::AttackVsTotal => "Relationship between attack and base stat total",
            AnalysisKind::AttackByType => {
                "Attack distribution by primary type, legendary t-test"
            }
            AnalysisKind::BmiTrend => "Average BMI across generations",
            AnalysisKind::MegaImpact => "Impact of mega evolution on base stat total",
            AnalysisKind::GenerationTrend => "Generational evolution of the six base stats",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Columns this analysis reads
    pub fn requirements(&self) -> Vec<Requirement> {
        match self {
            AnalysisKind::TypeDistribution => vec![Requirement::categorical(TYPE_1)],
            AnalysisKind::StatCorrelation => CORRELATION_STATS
                .iter()
                .map(|&c| Requirement::numeric(c))
                .collect(),
            AnalysisKind::AttackVsTotal => vec![
                Requirement::numeric(ATTACK),
                Requirement::numeric(BASE_STAT_TOTAL),
            ],
            AnalysisKind::AttackByType => vec![
                Requirement::categorical(TYPE_1),
                Requirement::numeric(ATTACK),
            ],
            AnalysisKind::BmiTrend => vec![
                Requirement::categorical(GENERATION),
                Requirement::numeric(BMI),
            ],
            AnalysisKind::MegaImpact => vec![
                Requirement::flag(MEGA_EVOLUTION),
                Requirement::numeric(BASE_STAT_TOTAL),
            ],
            AnalysisKind::GenerationTrend => std::iter::once(Requirement::categorical(GENERATION))
                .chain(GENERATION_STATS.iter().map(|&(c, _)| Requirement::numeric(c)))
                .collect(),
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The numbers an analysis produced
#[derive(Debug)]
pub enum Finding {
    TypeDistribution(CategoryCounts),
    StatCorrelation(CorrelationMatrix),
    AttackVsTotal(Relationship),
    AttackByType(AttackDistribution),
    BmiTrend(Trend),
    MegaImpact(MegaImpact),
    GenerationTrend(Vec<Trend>),
}

#[derive(Debug)]
pub struct Outcome {
    pub kind: AnalysisKind,
    pub finding: Finding,
    pub charts: Vec<ChartSpec>,
}

/// Validate the columns an analysis needs, then run it
pub fn run(kind: AnalysisKind, table: &Table) -> Result<Outcome> {
    validate(table, &kind.requirements())?;
    debug!(analysis = %kind, rows = table.len(), "Running analysis");

    let (finding, chart) = match kind {
        AnalysisKind::TypeDistribution => {
            let (r, c) = exploration::type_distribution(table)?;
            (Finding::TypeDistribution(r), c)
        }
        AnalysisKind::StatCorrelation => {
            let (r, c) = exploration::stat_correlation(table)?;
            (Finding::StatCorrelation(r), c)
        }
        AnalysisKind::AttackVsTotal => {
            let (r, c) = relationship::analyze(table)?;
            (Finding::AttackVsTotal(r), c)
        }
        AnalysisKind::AttackByType => {
            let (r, c) = distribution::analyze(table)?;
            (Finding::AttackByType(r), c)
        }
        AnalysisKind::BmiTrend => {
            let (r, c) = trend::bmi_by_generation(table)?;
            (Finding::BmiTrend(r), c)
        }
        AnalysisKind::MegaImpact => {
            let (r, c) = mega::analyze(table)?;
            (Finding::MegaImpact(r), c)
        }
        AnalysisKind::GenerationTrend => {
            let (r, c) = trend::stats_by_generation(table)?;
            (Finding::GenerationTrend(r), c)
        }
    };

    Ok(Outcome {
        kind,
        finding,
        charts: vec![chart],
    })
}

/// Run each analysis in turn. A failing analysis does not stop the others.
pub fn run_all(kinds: &[AnalysisKind], table: &Table) -> Vec<(AnalysisKind, Result<Outcome>)> {
    kinds.iter().map(|&kind| (kind, run(kind, table))).collect()
}

/// Short reason used when an analysis could not be computed
pub fn failure_reason(err: &DexError) -> &'static str {
    match err {
        DexError::InsufficientData(_) => "not computable",
        DexError::Schema(_) => "schema mismatch",
        DexError::Io { .. } | DexError::Parse { .. } => "input error",
    }
}
