//! Hand-off point to whatever draws the charts.
//!
//! Analyses stay pure and produce [`ChartSpec`]s; a sink decides what happens
//! to them. Pixel rendering is outside this crate.

mod json;

use anyhow::Result;

use crate::chart::ChartSpec;

pub use json::JsonSpecSink;

/// Trait for chart consumers - allows a file writer and a silent/test mode
pub trait ChartSink {
    fn render(&mut self, chart: &ChartSpec) -> Result<()>;

    /// Number of charts accepted so far
    fn rendered(&self) -> usize;
}

/// Discards every chart; used when no output directory is given
#[derive(Debug, Default)]
pub struct SilentSink {
    count: usize,
}

impl SilentSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChartSink for SilentSink {
    fn render(&mut self, _chart: &ChartSpec) -> Result<()> {
        self.count += 1;
        Ok(())
    }

    fn rendered(&self) -> usize {
        self.count
    }
}
