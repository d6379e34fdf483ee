//! End-to-end runs of the compliance engine over full input documents.

use std::sync::Arc;

use archgauge::adapters::insight::FlakyInsightProvider;
use archgauge::adapters::report::{json, markdown};
use archgauge::application::{AnalysisOrchestrator, EngineError};
use archgauge::config::{InsightConfig, OrchestratorConfig};
use archgauge::domain::analysis::AnalysisResult;
use archgauge::domain::characteristics::{CharacteristicsInput, STANDARD_CATALOG};
use archgauge::domain::foundation::{ComplianceStatus, Severity};
use archgauge::domain::model::C4Model;
use archgauge::ports::{AutoApprove, Enrichment};

fn orchestrator() -> AnalysisOrchestrator {
    AnalysisOrchestrator::new(
        Arc::new(AutoApprove),
        OrchestratorConfig::default(),
        InsightConfig {
            backoff_base_ms: 1,
            ..Default::default()
        },
    )
}

/// A CS1 service with no redundancy, no monitoring, nothing.
fn fragile_model() -> C4Model {
    serde_json::from_value(serde_json::json!({
        "name": "payments",
        "systems": [{
            "id": "sys",
            "name": "Payments",
            "containers": [
                { "id": "api", "name": "Payments API", "tier": "CS1", "technology": ["Spring Boot"] }
            ]
        }],
        "relationships": []
    }))
    .unwrap()
}

/// A model exhibiting every positive indicator the analyzers look for.
fn gold_model() -> C4Model {
    serde_json::from_value(serde_json::json!({
        "name": "platform",
        "systems": [{
            "id": "sys",
            "name": "Platform",
            "containers": [
                {
                    "id": "edge",
                    "name": "Edge Gateway",
                    "tier": "SL1",
                    "instances": 2,
                    "technology": ["nginx", "API Gateway", "Kubernetes", "OpenAPI"]
                },
                {
                    "id": "api",
                    "name": "API",
                    "tier": "CS1",
                    "instances": 2,
                    "technology": ["Spring Boot", "Kubernetes", "Resilience4j", "Prometheus"]
                },
                {
                    "id": "cache",
                    "name": "Cache",
                    "technology": ["Redis"]
                },
                {
                    "id": "events",
                    "name": "Events",
                    "technology": ["Kafka"]
                },
                {
                    "id": "db",
                    "name": "Orders DB",
                    "tier": "CS2",
                    "instances": 2,
                    "sensitiveData": true,
                    "technology": ["PostgreSQL", "Point-in-time snapshots", "Kubernetes"]
                },
                {
                    "id": "pipeline",
                    "name": "Delivery Pipeline",
                    "technology": ["GitHub Actions", "JUnit", "Terraform"]
                },
                {
                    "id": "config",
                    "name": "Config Service",
                    "technology": ["Consul", "Vault"]
                }
            ]
        }],
        "relationships": [
            { "source": "edge", "target": "api", "protocol": "https" },
            { "source": "api", "target": "db", "protocol": "tls" },
            { "source": "api", "target": "cache", "protocol": "tls" },
            { "source": "api", "target": "events", "protocol": "tls" }
        ]
    }))
    .unwrap()
}

fn availability_critical_input() -> CharacteristicsInput {
    serde_json::from_value(serde_json::json!({
        "project": "payments",
        "characteristics": [
            {
                "id": "c-1",
                "name": "Availability",
                "category": "operational",
                "selected": true,
                "isTop": true,
                "rating": "critical"
            }
        ],
        "topCharacteristics": ["c-1"]
    }))
    .unwrap()
}

/// All 14 standard characteristics, selected, rated high, none top.
fn full_catalog_input(project: &str) -> CharacteristicsInput {
    let characteristics: Vec<serde_json::Value> = STANDARD_CATALOG
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            serde_json::json!({
                "id": format!("c-{i}"),
                "name": entry.tag,
                "category": serde_json::to_value(entry.category).unwrap(),
                "selected": true,
                "rating": "high"
            })
        })
        .collect();
    serde_json::from_value(serde_json::json!({
        "project": project,
        "characteristics": characteristics,
        "topCharacteristics": []
    }))
    .unwrap()
}

#[tokio::test]
async fn fragile_critical_availability_scores_low() {
    let result = orchestrator()
        .run(&fragile_model(), &availability_critical_input())
        .await
        .unwrap();

    let availability = &result.analyses[0];
    assert!(availability
        .gaps
        .iter()
        .any(|g| g.severity >= Severity::High));
    let score = availability.score.unwrap();
    assert!(score.value() <= 70, "score was {score}");
    assert!(matches!(
        availability.status,
        ComplianceStatus::PartiallyCompliant | ComplianceStatus::NonCompliant
    ));
    // The no-redundancy finding is elevated to critical by the rating and
    // surfaces in the run-level critical gap list.
    assert!(!result.critical_gaps.is_empty());
    assert!(!result.top_recommendations.is_empty());
}

#[tokio::test]
async fn fully_equipped_model_is_compliant_across_the_catalog() {
    let result = orchestrator()
        .run(&gold_model(), &full_catalog_input("platform"))
        .await
        .unwrap();

    assert_eq!(result.analyses.len(), 14);
    for analysis in &result.analyses {
        assert_eq!(
            analysis.status,
            ComplianceStatus::Compliant,
            "{} had gaps: {:?}",
            analysis.characteristic,
            analysis.gaps
        );
    }
    assert!(result.overall_score.unwrap().value() >= 90);
    assert!(result.critical_gaps.is_empty());
}

#[tokio::test]
async fn custom_characteristic_is_reported_but_excluded_from_overall() {
    let input: CharacteristicsInput = serde_json::from_value(serde_json::json!({
        "project": "payments",
        "characteristics": [
            {
                "id": "c-1",
                "name": "Availability",
                "category": "operational",
                "selected": true,
                "rating": "high"
            },
            {
                "id": "c-2",
                "name": "Auditability",
                "category": "cross_cutting",
                "selected": true,
                "rating": "critical",
                "isCustom": true
            }
        ],
        "topCharacteristics": []
    }))
    .unwrap();

    let result = orchestrator().run(&fragile_model(), &input).await.unwrap();
    assert_eq!(result.analyses.len(), 2);
    let custom = &result.analyses[1];
    assert_eq!(custom.characteristic, "Auditability");
    assert_eq!(custom.status, ComplianceStatus::NotAnalyzed);
    assert!(custom.score.is_none());
    // Overall equals the Availability score alone despite the critical
    // weight of the excluded entry.
    assert_eq!(result.overall_score, result.analyses[0].score);
}

#[tokio::test]
async fn eight_top_characteristics_fail_validation() {
    let mut input = full_catalog_input("payments");
    for c in input.characteristics.iter_mut().take(8) {
        c.is_top = true;
    }
    input.top_characteristics = input
        .characteristics
        .iter()
        .take(8)
        .map(|c| c.id.clone())
        .collect();

    let err = orchestrator()
        .run(&fragile_model(), &input)
        .await
        .unwrap_err();
    match err {
        EngineError::InputValidation(e) => {
            assert!(e.violations.iter().any(|v| v.contains("Rule of 7")));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn repeated_runs_produce_byte_identical_reports() {
    let orchestrator = orchestrator();
    let model = fragile_model();
    let input = full_catalog_input("payments");

    let first = orchestrator.run(&model, &input).await.unwrap();
    let second = orchestrator.run(&model, &input).await.unwrap();
    assert_eq!(json::render(&first).unwrap(), json::render(&second).unwrap());
    assert_eq!(markdown::render(&first), markdown::render(&second));
}

#[tokio::test]
async fn result_survives_a_serde_round_trip() {
    let result = orchestrator()
        .run(&fragile_model(), &full_catalog_input("payments"))
        .await
        .unwrap();
    let serialized = serde_json::to_string(&result).unwrap();
    let back: AnalysisResult = serde_json::from_str(&serialized).unwrap();
    assert_eq!(result, back);
}

#[tokio::test]
async fn degraded_provider_isolates_the_failure_to_one_characteristic() {
    // Three scripted failures exhaust the first characteristic's retries;
    // every later call succeeds.
    let provider = Arc::new(FlakyInsightProvider::new(3, Enrichment::default()));
    let orchestrator = AnalysisOrchestrator::new(
        Arc::new(AutoApprove),
        OrchestratorConfig {
            max_concurrency: 1,
            ..Default::default()
        },
        InsightConfig {
            max_attempts: 3,
            backoff_base_ms: 1,
            ..Default::default()
        },
    )
    .with_insight_provider(provider);

    let result = orchestrator
        .run(&gold_model(), &full_catalog_input("platform"))
        .await
        .unwrap();

    let degraded: Vec<_> = result.analyses.iter().filter(|a| !a.is_analyzed()).collect();
    assert_eq!(degraded.len(), 1);
    assert_eq!(degraded[0].gaps.len(), 1);
    assert_eq!(degraded[0].gaps[0].severity, Severity::Low);
    assert_eq!(
        result.analyses.iter().filter(|a| a.is_analyzed()).count(),
        13
    );
    assert!(result.overall_score.is_some());
}

#[tokio::test]
async fn reports_are_written_to_disk() {
    let result = orchestrator()
        .run(&fragile_model(), &availability_critical_input())
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("report.json");
    let md_path = dir.path().join("report.md");
    json::write(&result, &json_path).unwrap();
    markdown::write(&result, &md_path).unwrap();

    let json_raw = std::fs::read_to_string(&json_path).unwrap();
    let parsed: AnalysisResult = serde_json::from_str(&json_raw).unwrap();
    assert_eq!(parsed, result);

    let md_raw = std::fs::read_to_string(&md_path).unwrap();
    assert!(md_raw.contains("# Architecture Compliance Report: payments"));
    assert!(md_raw.contains("Availability"));
}

#[tokio::test]
async fn yaml_characteristics_input_parses_like_json() {
    let yaml = r#"
project: payments
characteristics:
  - id: c-1
    name: Availability
    category: operational
    selected: true
    isTop: true
    rating: critical
topCharacteristics:
  - c-1
"#;
    let input: CharacteristicsInput = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(input, availability_critical_input());
}
