//! Chart specs handed to the rendering collaborator.
//!
//! A spec describes what to draw (series, axis labels, annotations, colors)
//! and nothing about how. Renderers live outside this crate; see
//! [`crate::render`] for the sinks that hand specs over.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Bar,
    Scatter,
    Box,
    Line,
    MultiLine,
    Heatmap,
}

/// Five-number summary drawn by a box plot (whiskers at 1.5 IQR)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxSummary {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SeriesData {
    /// Paired numeric coordinates
    Xy { points: Vec<(f64, f64)> },
    /// One value per category label
    Bars { bars: Vec<(String, f64)> },
    /// Raw observations for a box plot
    Distribution {
        values: Vec<f64>,
        summary: Option<BoxSummary>,
    },
    /// Row-major cells; `None` marks an undefined cell
    Grid { cells: Vec<Vec<Option<f64>>> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub data: SeriesData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Series {
    pub fn new(name: impl Into<String>, data: SeriesData) -> Self {
        Self {
            name: name.into(),
            data,
            color: None,
        }
    }

    pub fn color(self, color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Labels {
    pub x: String,
    pub y: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub x_ticks: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub y_ticks: Vec<String>,
}

/// Where an annotation is pinned on the x axis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Anchor {
    Category(String),
    Value(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub x: Anchor,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Colors {
    /// Named palette resolved by the renderer (e.g. "type_colors")
    Palette(String),
    /// Explicit color per category label
    Mapping(BTreeMap<String, String>),
    /// Colors set on the series themselves
    PerSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: String,
    pub kind: ChartKind,
    pub title: String,
    pub series: Vec<Series>,
    pub labels: Labels,
    pub annotations: Vec<Annotation>,
    pub colors: Colors,
    /// Subplot grid as (rows, columns) for multi-series figures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<(usize, usize)>,
}

impl ChartSpec {
    pub fn new(id: impl Into<String>, kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            series: Vec::new(),
            labels: Labels::default(),
            annotations: Vec::new(),
            colors: Colors::PerSeries,
            grid: None,
        }
    }

    pub fn axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.labels.x = x.into();
        self.labels.y = y.into();
        self
    }

    pub fn x_ticks(mut self, ticks: Vec<String>) -> Self {
        self.labels.x_ticks = ticks;
        self
    }

    pub fn y_ticks(mut self, ticks: Vec<String>) -> Self {
        self.labels.y_ticks = ticks;
        self
    }

    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn annotate(mut self, x: Anchor, y: f64, text: impl Into<String>) -> Self {
        self.annotations.push(Annotation {
            x,
            y,
            text: text.into(),
        });
        self
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn grid(mut self, rows: usize, columns: usize) -> Self {
        self.grid = Some((rows, columns));
        self
    }
}
