//! Analyzers for the operational characteristics.

use crate::domain::analysis::Gap;
use crate::domain::characteristics::Characteristic;
use crate::domain::foundation::{CriticalityTier, Severity};
use crate::domain::model::{
    C4Model, AUTOSCALING_TECH, BACKUP_TECH, CACHE_TECH, DATASTORE_TECH, MONITORING_TECH,
    QUEUE_TECH, RESILIENCE_TECH,
};

use super::GapAnalyzer;

/// Availability: mission-critical containers need a redundancy signal, and
/// outages need to be observable.
pub struct AvailabilityAnalyzer;

impl GapAnalyzer for AvailabilityAnalyzer {
    fn detect(&self, model: &C4Model, _characteristic: &Characteristic) -> Vec<Gap> {
        let mut gaps = Vec::new();
        for container in model.containers() {
            if container.tier.is_mission_critical() && !model.has_redundancy(container) {
                let severity = if container.tier == CriticalityTier::Cs1 {
                    Severity::High
                } else {
                    Severity::Medium
                };
                gaps.push(Gap::new(
                    &container.name,
                    format!(
                        "{} container '{}' has no redundancy signal (single instance, no load balancer)",
                        container.tier, container.name
                    ),
                    severity,
                    "Any single-host failure takes the service down for its full recovery time",
                ));
            }
        }
        if !model.has_tech_anywhere(MONITORING_TECH) {
            gaps.push(Gap::new(
                "Model-wide",
                "No health monitoring technology detected",
                Severity::Low,
                "Outages are discovered by users instead of alerts",
            ));
        }
        gaps
    }
}

/// Performance: hot read paths need a cache, and heavily shared containers
/// are latency bottlenecks.
pub struct PerformanceAnalyzer;

impl GapAnalyzer for PerformanceAnalyzer {
    fn detect(&self, model: &C4Model, _characteristic: &Characteristic) -> Vec<Gap> {
        let mut gaps = Vec::new();
        let has_high_traffic = model.containers().any(|c| c.tier.is_high_traffic());
        if has_high_traffic && !model.has_tech_anywhere(CACHE_TECH) {
            gaps.push(Gap::new(
                "Model-wide",
                "No caching layer detected for high-traffic containers",
                Severity::Medium,
                "Every read hits the system of record, inflating latency under load",
            ));
        }
        for container in model.containers() {
            if container.has_tech(DATASTORE_TECH) && model.fan_in(&container.id) >= 4 {
                gaps.push(Gap::new(
                    &container.name,
                    format!(
                        "Data store '{}' is a shared hot spot ({} dependents)",
                        container.name,
                        model.fan_in(&container.id)
                    ),
                    Severity::Medium,
                    "Contention on one store sets the latency floor for every dependent",
                ));
            }
        }
        gaps
    }
}

/// Scalability: load-absorbing layers and auto-scaling on high-traffic
/// containers.
pub struct ScalabilityAnalyzer;

impl GapAnalyzer for ScalabilityAnalyzer {
    fn detect(&self, model: &C4Model, _characteristic: &Characteristic) -> Vec<Gap> {
        let mut gaps = Vec::new();
        if !model.has_tech_anywhere(CACHE_TECH) && !model.has_tech_anywhere(QUEUE_TECH) {
            gaps.push(Gap::new(
                "Model-wide",
                "No caching or queueing container detected",
                Severity::Medium,
                "Load spikes hit every tier directly with nothing to absorb them",
            ));
        }
        for container in model.containers() {
            if container.tier.is_high_traffic()
                && container.instances < 2
                && !container.has_tech(AUTOSCALING_TECH)
            {
                let severity = if container.tier == CriticalityTier::Cs1 {
                    Severity::High
                } else {
                    Severity::Medium
                };
                gaps.push(Gap::new(
                    &container.name,
                    format!(
                        "High-traffic container '{}' has no auto-scaling technology and a single instance",
                        container.name
                    ),
                    severity,
                    "Capacity is fixed at one instance regardless of demand",
                ));
            }
        }
        gaps
    }
}

/// Reliability: transient-failure handling on critical dependencies and
/// error-rate visibility.
pub struct ReliabilityAnalyzer;

impl GapAnalyzer for ReliabilityAnalyzer {
    fn detect(&self, model: &C4Model, _characteristic: &Characteristic) -> Vec<Gap> {
        let mut gaps = Vec::new();
        let critical_with_deps = model
            .containers()
            .find(|c| c.tier.is_mission_critical() && model.outgoing(&c.id).next().is_some());
        if let Some(container) = critical_with_deps {
            if !model.has_tech_anywhere(RESILIENCE_TECH) {
                gaps.push(Gap::new(
                    &container.name,
                    format!(
                        "Mission-critical container '{}' calls dependencies with no retry/resilience middleware detected",
                        container.name
                    ),
                    Severity::Medium,
                    "Transient dependency faults surface directly to users",
                ));
            }
        }
        if !model.has_tech_anywhere(MONITORING_TECH) {
            gaps.push(Gap::new(
                "Model-wide",
                "No monitoring technology detected for error-rate tracking",
                Severity::Medium,
                "Reliability regressions go unnoticed until they become outages",
            ));
        }
        gaps
    }
}

/// Recoverability: stateful containers need a backup story.
pub struct RecoverabilityAnalyzer;

impl GapAnalyzer for RecoverabilityAnalyzer {
    fn detect(&self, model: &C4Model, _characteristic: &Characteristic) -> Vec<Gap> {
        let mut gaps = Vec::new();
        let model_has_backup = model.has_tech_anywhere(BACKUP_TECH);
        for container in model.containers() {
            let stateful = container.sensitive_data || container.has_tech(DATASTORE_TECH);
            if stateful && !container.has_tech(BACKUP_TECH) && !model_has_backup {
                let severity = if container.tier.is_mission_critical() || container.sensitive_data
                {
                    Severity::High
                } else {
                    Severity::Medium
                };
                gaps.push(Gap::new(
                    &container.name,
                    format!("Stateful container '{}' has no backup technology detected", container.name),
                    severity,
                    "Storage failure or operator error causes unrecoverable data loss",
                ));
            }
        }
        gaps
    }
}

/// Elasticity: capacity must follow the demand curve.
pub struct ElasticityAnalyzer;

impl GapAnalyzer for ElasticityAnalyzer {
    fn detect(&self, model: &C4Model, _characteristic: &Characteristic) -> Vec<Gap> {
        let mut gaps = Vec::new();
        let mut high_traffic = false;
        for container in model.containers() {
            if !container.tier.is_high_traffic() {
                continue;
            }
            high_traffic = true;
            if !container.has_tech(AUTOSCALING_TECH) {
                gaps.push(Gap::new(
                    &container.name,
                    format!(
                        "High-traffic container '{}' cannot scale with demand (no auto-scaling technology)",
                        container.name
                    ),
                    Severity::Medium,
                    "Demand bursts above provisioned capacity are dropped",
                ));
            }
        }
        if high_traffic && !model.has_tech_anywhere(QUEUE_TECH) {
            gaps.push(Gap::new(
                "Model-wide",
                "No queue detected to absorb bursts while capacity scales out",
                Severity::Low,
                "Work arriving during scale-out lag is lost or rejected",
            ));
        }
        gaps
    }
}

/// Fault tolerance: shared single instances and missing failure isolation.
pub struct FaultToleranceAnalyzer;

impl GapAnalyzer for FaultToleranceAnalyzer {
    fn detect(&self, model: &C4Model, _characteristic: &Characteristic) -> Vec<Gap> {
        let mut gaps = Vec::new();
        for container in model.containers() {
            if container.tier.is_mission_critical()
                && container.instances < 2
                && model.fan_in(&container.id) >= 2
            {
                gaps.push(Gap::new(
                    &container.name,
                    format!(
                        "Single-instance container '{}' is a shared dependency of {} elements",
                        container.name,
                        model.fan_in(&container.id)
                    ),
                    Severity::High,
                    "One process failure cascades into every dependent",
                ));
            }
        }
        let has_sync_calls = !model.relationships.is_empty();
        if has_sync_calls && !model.has_tech_anywhere(RESILIENCE_TECH) {
            gaps.push(Gap::new(
                "Model-wide",
                "No circuit breaker or bulkhead technology detected",
                Severity::Medium,
                "A failing dependency consumes caller resources until the failure cascades",
            ));
        }
        gaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::characteristics::CharacteristicTag;
    use crate::domain::foundation::Rating;

    fn characteristic(tag: CharacteristicTag) -> Characteristic {
        Characteristic::standard("c", &tag, Rating::High)
    }

    fn bare_cs1_model() -> C4Model {
        serde_json::from_value(serde_json::json!({
            "name": "m",
            "systems": [{
                "id": "s",
                "name": "S",
                "containers": [
                    { "id": "api", "name": "API", "tier": "CS1", "technology": ["Spring Boot"] },
                    { "id": "db", "name": "DB", "tier": "CS2", "technology": ["PostgreSQL"], "sensitiveData": true }
                ]
            }],
            "relationships": [
                { "source": "api", "target": "db", "protocol": "tcp" },
                { "source": "web", "target": "api", "protocol": "https" },
                { "source": "jobs", "target": "api", "protocol": "https" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn availability_flags_unredundant_critical_containers() {
        let model = bare_cs1_model();
        let gaps =
            AvailabilityAnalyzer.detect(&model, &characteristic(CharacteristicTag::Availability));
        let api_gap = gaps.iter().find(|g| g.area == "API").unwrap();
        assert_eq!(api_gap.severity, Severity::High);
        let db_gap = gaps.iter().find(|g| g.area == "DB").unwrap();
        assert_eq!(db_gap.severity, Severity::Medium);
        // No monitoring tech either.
        assert!(gaps.iter().any(|g| g.area == "Model-wide"));
    }

    #[test]
    fn availability_quiet_when_redundant_and_monitored() {
        let model: C4Model = serde_json::from_value(serde_json::json!({
            "name": "m",
            "systems": [{
                "id": "s",
                "name": "S",
                "containers": [
                    { "id": "api", "name": "API", "tier": "CS1", "instances": 2,
                      "technology": ["Spring Boot", "Prometheus"] }
                ]
            }],
            "relationships": []
        }))
        .unwrap();
        let gaps =
            AvailabilityAnalyzer.detect(&model, &characteristic(CharacteristicTag::Availability));
        assert!(gaps.is_empty());
    }

    #[test]
    fn scalability_flags_missing_autoscaling_and_absorption() {
        let model = bare_cs1_model();
        let gaps =
            ScalabilityAnalyzer.detect(&model, &characteristic(CharacteristicTag::Scalability));
        assert!(gaps.iter().any(|g| g.issue.contains("auto-scaling")));
        assert!(gaps.iter().any(|g| g.issue.contains("caching or queueing")));
        let api = gaps.iter().find(|g| g.area == "API").unwrap();
        assert_eq!(api.severity, Severity::High);
    }

    #[test]
    fn recoverability_flags_stateful_without_backup() {
        let model = bare_cs1_model();
        let gaps = RecoverabilityAnalyzer
            .detect(&model, &characteristic(CharacteristicTag::Recoverability));
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].area, "DB");
        assert_eq!(gaps[0].severity, Severity::High);
    }

    #[test]
    fn recoverability_accepts_model_wide_backup() {
        let mut model = bare_cs1_model();
        model.systems[0].containers[1]
            .technology
            .push("AWS Backup".to_string());
        let gaps = RecoverabilityAnalyzer
            .detect(&model, &characteristic(CharacteristicTag::Recoverability));
        assert!(gaps.is_empty());
    }

    #[test]
    fn fault_tolerance_flags_shared_single_instance() {
        let model = bare_cs1_model();
        let gaps = FaultToleranceAnalyzer
            .detect(&model, &characteristic(CharacteristicTag::FaultTolerance));
        let api = gaps.iter().find(|g| g.area == "API").unwrap();
        assert_eq!(api.severity, Severity::High);
        assert!(gaps.iter().any(|g| g.issue.contains("circuit breaker")));
    }

    #[test]
    fn reliability_and_performance_flag_missing_signals() {
        let model = bare_cs1_model();
        let rel =
            ReliabilityAnalyzer.detect(&model, &characteristic(CharacteristicTag::Reliability));
        assert!(rel.iter().any(|g| g.issue.contains("retry/resilience")));
        assert!(rel.iter().any(|g| g.issue.contains("monitoring")));

        let perf =
            PerformanceAnalyzer.detect(&model, &characteristic(CharacteristicTag::Performance));
        assert!(perf.iter().any(|g| g.issue.contains("caching")));
    }

    #[test]
    fn elasticity_flags_fixed_capacity() {
        let model = bare_cs1_model();
        let gaps =
            ElasticityAnalyzer.detect(&model, &characteristic(CharacteristicTag::Elasticity));
        assert!(gaps.iter().any(|g| g.area == "API"));
        assert!(gaps.iter().any(|g| g.issue.contains("queue")));
    }
}
