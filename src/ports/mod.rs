//! Ports - trait boundaries between the engine and the outside world.

pub mod approval;
pub mod insight_provider;

pub use approval::{ApprovalGate, AutoApprove};
pub use insight_provider::{Enrichment, InsightError, InsightProvider};
