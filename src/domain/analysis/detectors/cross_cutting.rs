//! Analyzers for the cross-cutting characteristics.

use crate::domain::analysis::Gap;
use crate::domain::characteristics::Characteristic;
use crate::domain::foundation::Severity;
use crate::domain::model::{C4Model, AUTH_GATEWAY_TECH, INTEROP_API_TECH};

use super::GapAnalyzer;

/// Security: encrypted transport into sensitive stores, authenticated entry.
pub struct SecurityAnalyzer;

impl GapAnalyzer for SecurityAnalyzer {
    fn detect(&self, model: &C4Model, _characteristic: &Characteristic) -> Vec<Gap> {
        let mut gaps = Vec::new();
        for container in model.containers() {
            if !container.sensitive_data {
                continue;
            }
            for rel in model.incoming(&container.id) {
                if rel.is_encrypted() {
                    continue;
                }
                let transport = rel.protocol.as_deref().unwrap_or("unspecified");
                gaps.push(Gap::new(
                    &container.name,
                    format!(
                        "Relationship from '{}' to sensitive container '{}' uses an unencrypted transport ({})",
                        rel.source, container.name, transport
                    ),
                    Severity::High,
                    "Sensitive data crosses this link in the clear",
                ));
            }
        }
        if !model.has_tech_anywhere(AUTH_GATEWAY_TECH) {
            gaps.push(Gap::new(
                "Model-wide",
                "No authentication gateway or identity provider technology detected",
                Severity::Medium,
                "Callers reach internal services without a central authentication point",
            ));
        }
        gaps
    }
}

/// Interoperability: every integration carries a declared protocol and the
/// model exposes standard interfaces.
pub struct InteroperabilityAnalyzer;

impl GapAnalyzer for InteroperabilityAnalyzer {
    fn detect(&self, model: &C4Model, _characteristic: &Characteristic) -> Vec<Gap> {
        let mut gaps = Vec::new();
        for rel in &model.relationships {
            if rel.protocol.is_none() {
                gaps.push(Gap::new(
                    "Integration",
                    format!(
                        "Relationship from '{}' to '{}' declares no protocol",
                        rel.source, rel.target
                    ),
                    Severity::Low,
                    "Integration contracts are undocumented and drift silently",
                ));
            }
        }
        if !model.has_tech_anywhere(INTEROP_API_TECH) {
            gaps.push(Gap::new(
                "Model-wide",
                "No standard interface technology detected (OpenAPI, gRPC, GraphQL, ...)",
                Severity::Medium,
                "External consumers must reverse-engineer ad hoc interfaces",
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
        Characteristic::standard("c", &tag, Rating::Medium)
    }

    fn model() -> C4Model {
        serde_json::from_value(serde_json::json!({
            "name": "m",
            "systems": [{
                "id": "s",
                "name": "S",
                "containers": [
                    { "id": "api", "name": "API", "technology": ["Spring Boot"] },
                    {
                        "id": "db",
                        "name": "Orders DB",
                        "technology": ["PostgreSQL"],
                        "sensitiveData": true
                    }
                ]
            }],
            "relationships": [
                { "source": "api", "target": "db", "protocol": "tcp" },
                { "source": "web", "target": "api" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn unencrypted_link_into_sensitive_store_is_high() {
        let gaps = SecurityAnalyzer.detect(&model(), &characteristic(CharacteristicTag::Security));
        let link_gaps: Vec<_> = gaps.iter().filter(|g| g.area == "Orders DB").collect();
        assert_eq!(link_gaps.len(), 1);
        assert_eq!(link_gaps[0].severity, Severity::High);
        assert!(link_gaps[0].issue.contains("tcp"));
    }

    #[test]
    fn missing_auth_gateway_is_flagged_once() {
        let gaps = SecurityAnalyzer.detect(&model(), &characteristic(CharacteristicTag::Security));
        assert_eq!(gaps.iter().filter(|g| g.area == "Model-wide").count(), 1);
    }

    #[test]
    fn encrypted_links_and_gateway_produce_no_gaps() {
        let mut m = model();
        m.relationships[0].protocol = Some("TLS".to_string());
        m.relationships[1].protocol = Some("https".to_string());
        m.systems[0].containers[0]
            .technology
            .push("API Gateway".to_string());
        let gaps = SecurityAnalyzer.detect(&m, &characteristic(CharacteristicTag::Security));
        assert!(gaps.is_empty());
    }

    #[test]
    fn missing_protocol_flagged_per_relationship() {
        let gaps = InteroperabilityAnalyzer
            .detect(&model(), &characteristic(CharacteristicTag::Interoperability));
        let undeclared: Vec<_> = gaps.iter().filter(|g| g.area == "Integration").collect();
        assert_eq!(undeclared.len(), 1);
        assert_eq!(undeclared[0].severity, Severity::Low);
    }

    #[test]
    fn standard_interfaces_silence_the_model_wide_gap() {
        let mut m = model();
        m.systems[0].containers[0]
            .technology
            .push("OpenAPI".to_string());
        m.relationships[1].protocol = Some("https".to_string());
        let gaps = InteroperabilityAnalyzer
            .detect(&m, &characteristic(CharacteristicTag::Interoperability));
        assert!(gaps.is_empty());
    }
}
