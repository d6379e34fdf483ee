//! Insight provider adapters.

mod mock;

pub use mock::{FlakyInsightProvider, StaticInsightProvider};
