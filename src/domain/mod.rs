//! Domain layer - pure analysis logic with no I/O.

pub mod analysis;
pub mod characteristics;
pub mod foundation;
pub mod model;
