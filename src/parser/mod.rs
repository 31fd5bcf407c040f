pub mod loader;
pub mod record;

pub use loader::*;
pub use record::*;
