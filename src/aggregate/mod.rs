//! Pure derivations over the normalized table. Nothing here writes back.

pub mod correlation;
pub mod describe;
pub mod group;

pub use correlation::*;
pub use describe::*;
pub use group::*;
