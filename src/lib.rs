pub mod aggregate;
pub mod analysis;
pub mod chart;
pub mod cli;
pub mod error;
pub mod filter;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod schema;
pub mod stats;
pub mod table;

pub use cli::{Cli, Commands};
pub use error::{DexError, Result};
pub use render::{ChartSink, JsonSpecSink, SilentSink};
pub use table::Table;
