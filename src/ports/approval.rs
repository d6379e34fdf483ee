//! Approval gate invoked once per run before analysis starts.

/// Decides whether a run may proceed after input validation.
///
/// The orchestrator presents a checklist summarizing what will be analyzed
/// and calls the gate exactly once; a rejection ends the run before any
/// analyzer executes.
pub trait ApprovalGate: Send + Sync {
    fn approve(&self, checklist: &[String]) -> bool;
}

/// Gate that approves every run. Used by non-interactive invocations.
pub struct AutoApprove;

impl ApprovalGate for AutoApprove {
    fn approve(&self, _checklist: &[String]) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_approve_always_approves() {
        assert!(AutoApprove.approve(&[]));
        assert!(AutoApprove.approve(&["item".to_string()]));
    }
}
