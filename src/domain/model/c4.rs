//! C4 model types: systems, containers, components, relationships.
//!
//! The model is supplied once per run by the caller and never mutated by the
//! engine; every field is read-only from the engine's perspective.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CriticalityTier;

use super::signals::{self, LOAD_BALANCER_TECH};

/// A component inside a container.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technology: Vec<String>,
    #[serde(default)]
    pub tier: CriticalityTier,
}

/// A deployable container inside a software system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technology: Vec<String>,
    #[serde(default)]
    pub tier: CriticalityTier,
    /// Deployed instance count; a second instance is a redundancy signal.
    #[serde(default = "default_instances")]
    pub instances: u32,
    /// Marks containers holding sensitive data (drives security and
    /// recoverability checks).
    #[serde(default)]
    pub sensitive_data: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

fn default_instances() -> u32 {
    1
}

impl Container {
    /// True when any technology tag matches one of the keywords.
    pub fn has_tech(&self, keywords: &[&str]) -> bool {
        signals::tech_matches(&self.technology, keywords)
    }
}

/// A software system owning containers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareSystem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub external: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub containers: Vec<Container>,
}

/// A directed relationship between two model elements.
///
/// Source and target reference element ids at any level (system, container,
/// component).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub description: String,
    /// Protocol/transport tag, e.g. "https", "tcp", "amqp".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

impl Relationship {
    /// True when the protocol tag names an encrypted transport.
    pub fn is_encrypted(&self) -> bool {
        self.protocol
            .as_deref()
            .map(|p| {
                let p = p.to_ascii_lowercase();
                signals::ENCRYPTED_PROTOCOLS.iter().any(|e| p == *e)
            })
            .unwrap_or(false)
    }
}

/// The full C4 model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct C4Model {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub systems: Vec<SoftwareSystem>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl C4Model {
    /// Iterates every container across all systems.
    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.systems.iter().flat_map(|s| s.containers.iter())
    }

    /// Looks up a container by id.
    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers().find(|c| c.id == id)
    }

    /// Relationships whose target is the given element.
    pub fn incoming<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Relationship> + 'a {
        self.relationships.iter().filter(move |r| r.target == id)
    }

    /// Relationships whose source is the given element.
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Relationship> + 'a {
        self.relationships.iter().filter(move |r| r.source == id)
    }

    /// Number of distinct elements depending on the given element.
    pub fn fan_in(&self, id: &str) -> usize {
        let mut sources: Vec<&str> = self.incoming(id).map(|r| r.source.as_str()).collect();
        sources.sort_unstable();
        sources.dedup();
        sources.len()
    }

    /// True when any container or component technology matches the keywords.
    pub fn has_tech_anywhere(&self, keywords: &[&str]) -> bool {
        self.containers().any(|c| {
            c.has_tech(keywords)
                || c.components
                    .iter()
                    .any(|cp| signals::tech_matches(&cp.technology, keywords))
        })
    }

    /// True when the container has a detected redundancy signal: a second
    /// instance, or a load balancer routing into it.
    pub fn has_redundancy(&self, container: &Container) -> bool {
        if container.instances >= 2 {
            return true;
        }
        self.incoming(&container.id).any(|r| {
            self.container(&r.source)
                .map(|src| src.has_tech(LOAD_BALANCER_TECH))
                .unwrap_or(false)
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> C4Model {
        serde_json::from_value(serde_json::json!({
            "name": "shop",
            "systems": [{
                "id": "sys-1",
                "name": "Shop",
                "containers": [
                    {
                        "id": "web",
                        "name": "Web App",
                        "technology": ["React"],
                        "tier": "SL1"
                    },
                    {
                        "id": "api",
                        "name": "API",
                        "technology": ["Spring Boot"],
                        "tier": "CS1",
                        "instances": 2
                    },
                    {
                        "id": "lb",
                        "name": "Load Balancer",
                        "technology": ["nginx"]
                    },
                    {
                        "id": "db",
                        "name": "Orders DB",
                        "technology": ["PostgreSQL"],
                        "tier": "CS2",
                        "sensitiveData": true
                    }
                ]
            }],
            "relationships": [
                { "source": "web", "target": "api", "protocol": "https" },
                { "source": "lb", "target": "db", "protocol": "tcp" },
                { "source": "api", "target": "db", "protocol": "tcp" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn defaults_applied_on_deserialization() {
        let m = model();
        let web = m.container("web").unwrap();
        assert_eq!(web.instances, 1);
        assert!(!web.sensitive_data);
        assert!(web.components.is_empty());
    }

    #[test]
    fn redundancy_from_instance_count() {
        let m = model();
        let api = m.container("api").unwrap();
        assert!(m.has_redundancy(api));
    }

    #[test]
    fn redundancy_from_load_balancer_relationship() {
        let m = model();
        let db = m.container("db").unwrap();
        assert!(m.has_redundancy(db));
    }

    #[test]
    fn no_redundancy_without_signal() {
        let m = model();
        let web = m.container("web").unwrap();
        assert!(!m.has_redundancy(web));
    }

    #[test]
    fn fan_in_counts_distinct_sources() {
        let m = model();
        assert_eq!(m.fan_in("db"), 2);
        assert_eq!(m.fan_in("api"), 1);
        assert_eq!(m.fan_in("web"), 0);
    }

    #[test]
    fn encrypted_protocol_detection() {
        let m = model();
        let rels: Vec<_> = m.relationships.iter().collect();
        assert!(rels[0].is_encrypted());
        assert!(!rels[1].is_encrypted());
    }

    #[test]
    fn tech_search_spans_containers() {
        let m = model();
        assert!(m.has_tech_anywhere(&["postgres"]));
        assert!(!m.has_tech_anywhere(&["kafka"]));
    }
}
