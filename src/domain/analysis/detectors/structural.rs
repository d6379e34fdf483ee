//! Analyzers for the structural characteristics.

use crate::domain::analysis::Gap;
use crate::domain::characteristics::Characteristic;
use crate::domain::foundation::Severity;
use crate::domain::model::{
    C4Model, Container, CI_CD_TECH, CONFIG_MANAGEMENT_TECH, CONTAINER_PLATFORM_TECH,
    INTEROP_API_TECH, TEST_AUTOMATION_TECH,
};

use super::GapAnalyzer;

/// Fan-in at or above this marks a container as a coupling hot spot.
const HIGH_FAN_IN: usize = 4;

fn is_opaque_monolith(model: &C4Model, container: &Container) -> bool {
    model.fan_in(&container.id) >= HIGH_FAN_IN && container.components.is_empty()
}

/// Maintainability: coupling hot spots and missing integration discipline.
pub struct MaintainabilityAnalyzer;

impl GapAnalyzer for MaintainabilityAnalyzer {
    fn detect(&self, model: &C4Model, _characteristic: &Characteristic) -> Vec<Gap> {
        let mut gaps = Vec::new();
        for container in model.containers() {
            if is_opaque_monolith(model, container) {
                gaps.push(Gap::new(
                    &container.name,
                    format!(
                        "Container '{}' has {} dependents and no modeled internal components (monolith with high fan-in)",
                        container.name,
                        model.fan_in(&container.id)
                    ),
                    Severity::Medium,
                    "Every change to this container risks breaking all of its dependents",
                ));
            }
        }
        if !model.has_tech_anywhere(CI_CD_TECH) {
            gaps.push(Gap::new(
                "Model-wide",
                "No CI/CD technology detected",
                Severity::Medium,
                "Integration problems accumulate undetected between releases",
            ));
        }
        gaps
    }
}

/// Testability: an automated test gate must exist.
pub struct TestabilityAnalyzer;

impl GapAnalyzer for TestabilityAnalyzer {
    fn detect(&self, model: &C4Model, _characteristic: &Characteristic) -> Vec<Gap> {
        let mut gaps = Vec::new();
        if !model.has_tech_anywhere(TEST_AUTOMATION_TECH) {
            gaps.push(Gap::new(
                "Model-wide",
                "No test automation technology detected",
                Severity::Medium,
                "Verification is manual and does not scale with change rate",
            ));
        }
        if !model.has_tech_anywhere(CI_CD_TECH) {
            gaps.push(Gap::new(
                "Model-wide",
                "No CI pipeline detected to run tests on every change",
                Severity::Low,
                "Even existing tests cannot gate merges",
            ));
        }
        gaps
    }
}

/// Deployability: automated, repeatable paths to production.
pub struct DeployabilityAnalyzer;

impl GapAnalyzer for DeployabilityAnalyzer {
    fn detect(&self, model: &C4Model, _characteristic: &Characteristic) -> Vec<Gap> {
        let mut gaps = Vec::new();
        if !model.has_tech_anywhere(CI_CD_TECH) {
            gaps.push(Gap::new(
                "Model-wide",
                "No deployment pipeline technology detected",
                Severity::Medium,
                "Releases are manual, slow, and unrepeatable",
            ));
        }
        if !model.has_tech_anywhere(CONTAINER_PLATFORM_TECH) {
            gaps.push(Gap::new(
                "Model-wide",
                "No containerization or infrastructure-as-code technology detected",
                Severity::Medium,
                "Environments drift apart and deployments are not reproducible",
            ));
        }
        gaps
    }
}

/// Configurability: settings must be changeable without rebuilds.
pub struct ConfigurabilityAnalyzer;

impl GapAnalyzer for ConfigurabilityAnalyzer {
    fn detect(&self, model: &C4Model, _characteristic: &Characteristic) -> Vec<Gap> {
        let mut gaps = Vec::new();
        if !model.has_tech_anywhere(CONFIG_MANAGEMENT_TECH) {
            gaps.push(Gap::new(
                "Model-wide",
                "No configuration management technology detected",
                Severity::Medium,
                "Every settings change requires a rebuild and redeploy",
            ));
        }
        gaps
    }
}

/// Extensibility: stable seams for new capabilities.
pub struct ExtensibilityAnalyzer;

impl GapAnalyzer for ExtensibilityAnalyzer {
    fn detect(&self, model: &C4Model, _characteristic: &Characteristic) -> Vec<Gap> {
        let mut gaps = Vec::new();
        for container in model.containers() {
            if is_opaque_monolith(model, container) {
                gaps.push(Gap::new(
                    &container.name,
                    format!(
                        "Container '{}' concentrates {} dependents behind no published internal structure",
                        container.name,
                        model.fan_in(&container.id)
                    ),
                    Severity::Medium,
                    "New capabilities must be patched into the monolith instead of plugged in at a seam",
                ));
            }
        }
        if !model.has_tech_anywhere(INTEROP_API_TECH) {
            gaps.push(Gap::new(
                "Model-wide",
                "No published interface technology detected (OpenAPI, gRPC, ...)",
                Severity::Low,
                "Extension points are implicit and coupling grows with each integration",
            ));
        }
        gaps
    }
}
