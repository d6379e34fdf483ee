//! Gap analyzers and the typed registry dispatching them.
//!
//! One deterministic analyzer exists per standard characteristic tag.
//! Dispatch is keyed by `CharacteristicTag`, so unknown names degrade to a
//! `Custom` tag with no analyzer (reported `not_analyzed`) instead of being
//! matched by string.

mod cross_cutting;
mod operational;
mod structural;

pub use cross_cutting::{InteroperabilityAnalyzer, SecurityAnalyzer};
pub use operational::{
    AvailabilityAnalyzer, ElasticityAnalyzer, FaultToleranceAnalyzer, PerformanceAnalyzer,
    RecoverabilityAnalyzer, ReliabilityAnalyzer, ScalabilityAnalyzer,
};
pub use structural::{
    ConfigurabilityAnalyzer, DeployabilityAnalyzer, ExtensibilityAnalyzer,
    MaintainabilityAnalyzer, TestabilityAnalyzer,
};

use std::collections::HashMap;

use crate::domain::characteristics::{Characteristic, CharacteristicTag};
use crate::domain::model::C4Model;

use super::gap::Gap;

/// A stateless, deterministic gap analyzer for one characteristic.
///
/// Implementations inspect structural signals of the model and return gaps
/// with *base* severities; scaling by the characteristic's rating is applied
/// uniformly by the registry.
pub trait GapAnalyzer: Send + Sync {
    fn detect(&self, model: &C4Model, characteristic: &Characteristic) -> Vec<Gap>;
}

/// Typed registry mapping characteristic tags to analyzers.
pub struct AnalyzerRegistry {
    analyzers: HashMap<CharacteristicTag, Box<dyn GapAnalyzer>>,
}

impl AnalyzerRegistry {
    /// Registry with the 14 built-in analyzers.
    pub fn standard() -> Self {
        let mut analyzers: HashMap<CharacteristicTag, Box<dyn GapAnalyzer>> = HashMap::new();
        analyzers.insert(CharacteristicTag::Availability, Box::new(AvailabilityAnalyzer));
        analyzers.insert(CharacteristicTag::Performance, Box::new(PerformanceAnalyzer));
        analyzers.insert(CharacteristicTag::Scalability, Box::new(ScalabilityAnalyzer));
        analyzers.insert(CharacteristicTag::Reliability, Box::new(ReliabilityAnalyzer));
        analyzers.insert(CharacteristicTag::Recoverability, Box::new(RecoverabilityAnalyzer));
        analyzers.insert(CharacteristicTag::Elasticity, Box::new(ElasticityAnalyzer));
        analyzers.insert(CharacteristicTag::FaultTolerance, Box::new(FaultToleranceAnalyzer));
        analyzers.insert(CharacteristicTag::Maintainability, Box::new(MaintainabilityAnalyzer));
        analyzers.insert(CharacteristicTag::Testability, Box::new(TestabilityAnalyzer));
        analyzers.insert(CharacteristicTag::Deployability, Box::new(DeployabilityAnalyzer));
        analyzers.insert(CharacteristicTag::Configurability, Box::new(ConfigurabilityAnalyzer));
        analyzers.insert(CharacteristicTag::Extensibility, Box::new(ExtensibilityAnalyzer));
        analyzers.insert(CharacteristicTag::Security, Box::new(SecurityAnalyzer));
        analyzers.insert(CharacteristicTag::Interoperability, Box::new(InteroperabilityAnalyzer));
        Self { analyzers }
    }

    /// Registers an analyzer for a custom characteristic name.
    pub fn with_custom(
        mut self,
        name: impl Into<String>,
        analyzer: Box<dyn GapAnalyzer>,
    ) -> Self {
        self.analyzers
            .insert(CharacteristicTag::Custom(name.into()), analyzer);
        self
    }

    /// True when an analyzer is registered for the tag.
    pub fn has_analyzer(&self, tag: &CharacteristicTag) -> bool {
        self.analyzers.contains_key(tag)
    }

    /// Runs the analyzer for the characteristic, scaling each gap's base
    /// severity by the characteristic's rating. Returns `None` when no
    /// analyzer is registered (custom characteristic without rules).
    pub fn detect(&self, model: &C4Model, characteristic: &Characteristic) -> Option<Vec<Gap>> {
        let analyzer = self.analyzers.get(&characteristic.tag())?;
        let gaps = analyzer
            .detect(model, characteristic)
            .into_iter()
            .map(|mut gap| {
                gap.severity = gap.severity.scaled_by(characteristic.rating);
                gap
            })
            .collect();
        Some(gaps)
    }
}
