//! Application layer - the run orchestrator wiring domain logic to the ports.

mod orchestrator;

pub use orchestrator::{AnalysisOrchestrator, EngineError, RunState};
