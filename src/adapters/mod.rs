//! Adapters - concrete implementations of the ports plus report writers.

pub mod insight;
pub mod report;
