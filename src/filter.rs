use crate::analysis::AnalysisKind;
use anyhow::{bail, Result};
use tracing::info;

/// Resolves which analyses to run based on only/skip filters.
/// The result always keeps the fixed run order.
pub fn resolve_analyses(
    only: Option<Vec<String>>,
    skip: Option<Vec<String>>,
) -> Result<Vec<AnalysisKind>> {
    match (only, skip) {
        (Some(_), Some(_)) => {
            bail!("Cannot use both --only and --skip at the same time");
        }
        (Some(only_list), None) => {
            let wanted = parse_names(&only_list)?;
            let kinds: Vec<AnalysisKind> = AnalysisKind::ALL
                .into_iter()
                .filter(|k| wanted.contains(k))
                .collect();
            info!(count = kinds.len(), "Running selected analyses");
            Ok(kinds)
        }
        (None, Some(skip_list)) => {
            let skipped = parse_names(&skip_list)?;
            let kinds: Vec<AnalysisKind> = AnalysisKind::ALL
                .into_iter()
                .filter(|k| !skipped.contains(k))
                .collect();
            info!(count = kinds.len(), skipped = skipped.len(), "Running analyses after exclusions");
            Ok(kinds)
        }
        (None, None) => {
            info!(count = AnalysisKind::ALL.len(), "Running all analyses");
            Ok(AnalysisKind::ALL.to_vec())
        }
    }
}

fn parse_names(names: &[String]) -> Result<Vec<AnalysisKind>> {
    names
        .iter()
        .map(|name| match AnalysisKind::from_name(name.trim()) {
            Some(kind) => Ok(kind),
            None => bail!(
                "Unknown analysis {:?} (see `dexstat list-analyses`)",
                name
            ),
        })
        .collect()
}
