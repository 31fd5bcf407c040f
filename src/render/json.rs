use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use super::ChartSink;
use crate::chart::ChartSpec;

/// Writes each chart spec to `<dir>/<id>.json` for an external renderer
pub struct JsonSpecSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonSpecSink {
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create chart directory: {:?}", dir))?;
        Ok(Self {
            dir: dir.to_path_buf(),
            written: Vec::new(),
        })
    }

    /// Get paths written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ChartSink for JsonSpecSink {
    fn render(&mut self, chart: &ChartSpec) -> Result<()> {
        let path = self.dir.join(format!("{}.json", chart.id));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create chart file: {:?}", path))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, chart)
            .with_context(|| format!("Failed to write chart: {}", chart.id))?;
        writer.flush().context("Failed to flush chart file")?;

        info!(chart = %chart.id, path = %path.display(), "Wrote chart spec");
        self.written.push(path);
        Ok(())
    }

    fn rendered(&self) -> usize {
        self.written.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartKind, Series, SeriesData};

    #[test]
    fn test_writes_one_file_per_chart() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = JsonSpecSink::new(&dir.path().join("charts")).unwrap();

        let spec = ChartSpec::new("bmi_by_generation", ChartKind::Line, "BMI")
            .series(Series::new("bmi", SeriesData::Xy { points: vec![(1.0, 20.0)] }));
        sink.render(&spec).unwrap();

        assert_eq!(sink.rendered(), 1);
        let text = std::fs::read_to_string(&sink.written()[0]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["id"], "bmi_by_generation");
        assert_eq!(json["kind"], "line");
    }
}
