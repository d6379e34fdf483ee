//! Foundation value objects shared across the domain.

mod effort;
mod errors;
mod rating;
mod score;
mod severity;
mod status;
mod tier;

pub use effort::Effort;
pub use errors::ValidationError;
pub use rating::Rating;
pub use score::Score;
pub use severity::Severity;
pub use status::ComplianceStatus;
pub use tier::CriticalityTier;
