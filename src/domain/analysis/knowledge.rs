//! Fixed characteristic -> pattern -> technology knowledge table.
//!
//! Each remedy carries its pattern, candidate technologies, a fixed effort,
//! and the area keywords that match it to a gap. The table is data, not
//! logic: the recommendation engine owns matching, dedup, and ordering.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::characteristics::CharacteristicTag;
use crate::domain::foundation::Effort;

use super::gap::Gap;

/// One remediation pattern with its technologies and guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remedy {
    pub pattern: &'static str,
    pub technologies: &'static [&'static str],
    pub effort: Effort,
    pub title: &'static str,
    pub description: &'static str,
    pub rationale: &'static str,
    pub trade_offs: &'static str,
    pub steps: &'static [&'static str],
    /// Lowercased keywords matched against a gap's area and issue text.
    keywords: &'static [&'static str],
}

impl Remedy {
    fn matches(&self, gap: &Gap) -> bool {
        let text = format!("{} {}", gap.area, gap.issue).to_ascii_lowercase();
        self.keywords.iter().any(|k| text.contains(k))
    }
}

static KNOWLEDGE: Lazy<HashMap<CharacteristicTag, &'static [Remedy]>> = Lazy::new(|| {
    use CharacteristicTag::*;
    let mut table: HashMap<CharacteristicTag, &'static [Remedy]> = HashMap::new();
    table.insert(Availability, AVAILABILITY);
    table.insert(Performance, PERFORMANCE);
    table.insert(Scalability, SCALABILITY);
    table.insert(Reliability, RELIABILITY);
    table.insert(Recoverability, RECOVERABILITY);
    table.insert(Elasticity, ELASTICITY);
    table.insert(FaultTolerance, FAULT_TOLERANCE);
    table.insert(Maintainability, MAINTAINABILITY);
    table.insert(Testability, TESTABILITY);
    table.insert(Deployability, DEPLOYABILITY);
    table.insert(Configurability, CONFIGURABILITY);
    table.insert(Extensibility, EXTENSIBILITY);
    table.insert(Security, SECURITY);
    table.insert(Interoperability, INTEROPERABILITY);
    table
});

/// Remedies matching the gap for the given characteristic tag.
///
/// Falls back to the tag's first remedy when no keyword matches, so every
/// gap of a standard characteristic yields at least one recommendation.
/// Custom tags have no table entry and yield none.
pub fn remedies_for(tag: &CharacteristicTag, gap: &Gap) -> Vec<&'static Remedy> {
    let Some(remedies) = KNOWLEDGE.get(tag) else {
        return Vec::new();
    };
    let matched: Vec<&'static Remedy> = remedies.iter().filter(|r| r.matches(gap)).collect();
    if matched.is_empty() {
        remedies.first().into_iter().collect()
    } else {
        matched
    }
}

const AVAILABILITY: &[Remedy] = &[
    Remedy {
        pattern: "Active-Active Redundancy",
        technologies: &["HAProxy", "Kubernetes"],
        effort: Effort::Medium,
        title: "Run redundant instances behind a load balancer",
        description: "Deploy at least two instances of the affected container and route traffic through a load balancer with health checks.",
        rationale: "A single instance is a single point of failure; redundancy removes the availability ceiling imposed by one host.",
        trade_offs: "Doubles the runtime footprint and requires the service to be stateless or to externalize session state.",
        steps: &[
            "Make the container stateless or move session state to a shared store",
            "Deploy a second instance in a separate failure domain",
            "Front both instances with a health-checking load balancer",
        ],
        keywords: &["redundancy", "instance", "single point"],
    },
    Remedy {
        pattern: "Health Monitoring",
        technologies: &["Prometheus", "Grafana"],
        effort: Effort::Low,
        title: "Add health probes and availability monitoring",
        description: "Expose liveness/readiness endpoints and alert on availability SLO breaches.",
        rationale: "Outages that are detected late last longer; probes turn silent failures into alerts.",
        trade_offs: "Adds an operational surface that itself needs maintenance.",
        steps: &[
            "Expose liveness and readiness endpoints on each container",
            "Scrape them and alert on sustained failures",
        ],
        keywords: &["monitoring", "health", "probe"],
    },
];

const PERFORMANCE: &[Remedy] = &[
    Remedy {
        pattern: "Cache-Aside",
        technologies: &["Redis", "Memcached"],
        effort: Effort::Medium,
        title: "Introduce a caching layer for hot read paths",
        description: "Add a cache-aside layer in front of the data store for the highest-traffic read paths.",
        rationale: "Repeated reads of slowly-changing data dominate latency; a cache removes them from the critical path.",
        trade_offs: "Introduces staleness and cache-invalidation complexity.",
        steps: &[
            "Identify the hottest read paths",
            "Add cache-aside reads with explicit TTLs",
            "Invalidate on writes to the cached entities",
        ],
        keywords: &["cache", "caching", "latency", "read"],
    },
    Remedy {
        pattern: "Asynchronous Processing",
        technologies: &["Kafka", "RabbitMQ"],
        effort: Effort::High,
        title: "Move slow work off the request path",
        description: "Shift long-running operations to background workers fed by a queue.",
        rationale: "Synchronous slow work holds request threads hostage and inflates tail latency.",
        trade_offs: "Callers must handle eventual completion; adds queue infrastructure.",
        steps: &[
            "Identify operations slower than the latency budget",
            "Publish them to a queue and acknowledge early",
            "Process them in dedicated workers",
        ],
        keywords: &["queue", "slow", "synchronous", "blocking"],
    },
];

const SCALABILITY: &[Remedy] = &[
    Remedy {
        pattern: "Horizontal Scaling",
        technologies: &["Kubernetes HPA", "AWS Auto Scaling"],
        effort: Effort::Medium,
        title: "Enable auto-scaling for high-traffic containers",
        description: "Run the container on a platform that scales instance count with load.",
        rationale: "Fixed capacity either wastes money at low load or falls over at peak.",
        trade_offs: "Requires statelessness and load-based metrics worth scaling on.",
        steps: &[
            "Externalize state from the container",
            "Define a scaling metric and target",
            "Configure min/max replica bounds",
        ],
        keywords: &["auto-scaling", "scaling", "traffic", "capacity"],
    },
    Remedy {
        pattern: "Queue-Based Load Leveling",
        technologies: &["Kafka", "SQS"],
        effort: Effort::Medium,
        title: "Buffer bursts through a queue",
        description: "Place a queue between producers and the overloaded consumer so bursts drain at a sustainable rate.",
        rationale: "Queues convert load spikes into latency instead of failures.",
        trade_offs: "Adds delivery semantics (at-least-once, ordering) the consumer must handle.",
        steps: &[
            "Insert a queue in front of the bottleneck service",
            "Make consumers idempotent",
            "Alert on queue depth",
        ],
        keywords: &["queue", "burst", "caching"],
    },
];

const RELIABILITY: &[Remedy] = &[
    Remedy {
        pattern: "Retry with Backoff",
        technologies: &["Resilience4j", "Istio"],
        effort: Effort::Low,
        title: "Add bounded retries to inter-service calls",
        description: "Wrap calls into critical dependencies with bounded, jittered retries.",
        rationale: "Most transient faults clear within milliseconds; retries hide them from users.",
        trade_offs: "Retries amplify load during real outages unless bounded and budgeted.",
        steps: &[
            "Classify dependency errors as transient or permanent",
            "Retry transient errors with exponential backoff and a cap",
        ],
        keywords: &["retry", "transient", "dependency", "call"],
    },
    Remedy {
        pattern: "Health Monitoring",
        technologies: &["Prometheus", "OpenTelemetry"],
        effort: Effort::Low,
        title: "Instrument error rates on critical paths",
        description: "Track success rates per dependency and alert on error budgets.",
        rationale: "Reliability regressions surface first as creeping error rates.",
        trade_offs: "Metrics cardinality needs supervision.",
        steps: &[
            "Emit success/failure counters per dependency",
            "Alert when the error budget burn rate spikes",
        ],
        keywords: &["monitoring", "error", "observability"],
    },
];

const RECOVERABILITY: &[Remedy] = &[
    Remedy {
        pattern: "Backup and Restore",
        technologies: &["pgBackRest", "AWS Backup"],
        effort: Effort::Medium,
        title: "Establish automated backups with tested restores",
        description: "Schedule automated backups for every stateful container and rehearse restores.",
        rationale: "A backup that has never been restored is a hope, not a recovery plan.",
        trade_offs: "Storage cost and restore-rehearsal time.",
        steps: &[
            "Enable automated scheduled backups",
            "Define RPO/RTO per data store",
            "Rehearse a full restore quarterly",
        ],
        keywords: &["backup", "restore", "data loss", "stateful"],
    },
    Remedy {
        pattern: "Point-in-Time Recovery",
        technologies: &["PostgreSQL PITR", "WAL archiving"],
        effort: Effort::Medium,
        title: "Enable point-in-time recovery for critical data",
        description: "Archive write-ahead logs so the store can be rolled to any instant before an incident.",
        rationale: "Daily snapshots lose up to a day of writes; PITR bounds loss to seconds.",
        trade_offs: "Log archiving adds storage and recovery complexity.",
        steps: &[
            "Enable continuous WAL/changelog archiving",
            "Verify recovery to an arbitrary timestamp in staging",
        ],
        keywords: &["point-in-time", "pitr", "mission-critical"],
    },
];

const ELASTICITY: &[Remedy] = &[
    Remedy {
        pattern: "Horizontal Scaling",
        technologies: &["Kubernetes HPA", "AWS Auto Scaling"],
        effort: Effort::Medium,
        title: "Scale on demand signals",
        description: "Drive instance counts from live demand metrics rather than static capacity planning.",
        rationale: "Elastic workloads need capacity that follows the demand curve in minutes, not planning cycles.",
        trade_offs: "Scale-up lag still needs headroom; aggressive scale-down can thrash.",
        steps: &[
            "Choose a demand metric that leads load",
            "Configure scale-out and cool-down policies",
        ],
        keywords: &["auto-scaling", "demand", "burst", "elastic"],
    },
    Remedy {
        pattern: "Queue-Based Load Leveling",
        technologies: &["SQS", "Kafka"],
        effort: Effort::Medium,
        title: "Absorb spikes in a queue while capacity catches up",
        description: "Buffer incoming work during scale-out lag so no requests are dropped.",
        rationale: "Even elastic platforms take minutes to add capacity; the queue covers the gap.",
        trade_offs: "Adds latency during bursts.",
        steps: &[
            "Queue incoming work at the ingestion edge",
            "Scale consumers on queue depth",
        ],
        keywords: &["queue", "spike"],
    },
];

const FAULT_TOLERANCE: &[Remedy] = &[
    Remedy {
        pattern: "Circuit Breaker",
        technologies: &["Resilience4j", "Envoy"],
        effort: Effort::Medium,
        title: "Break circuits to failing dependencies",
        description: "Wrap calls to each dependency in a circuit breaker that fails fast when the dependency is down.",
        rationale: "Without a breaker, one failing dependency consumes every caller thread and the failure cascades.",
        trade_offs: "Requires a degraded-mode answer for when the circuit is open.",
        steps: &[
            "Wrap dependency calls in circuit breakers",
            "Define fallback behavior per dependency",
            "Alert on open circuits",
        ],
        keywords: &["cascade", "dependency", "circuit", "breaker"],
    },
    Remedy {
        pattern: "Bulkhead",
        technologies: &["Resilience4j", "Kubernetes resource limits"],
        effort: Effort::Medium,
        title: "Isolate resource pools per dependency",
        description: "Partition threads/connections so one saturated dependency cannot starve the rest.",
        rationale: "Shared pools turn one slow dependency into whole-service unavailability.",
        trade_offs: "Static partitions can waste capacity.",
        steps: &[
            "Assign per-dependency connection and thread budgets",
            "Reject excess load per partition instead of queueing indefinitely",
        ],
        keywords: &["single instance", "isolation", "fan-in"],
    },
];

const MAINTAINABILITY: &[Remedy] = &[
    Remedy {
        pattern: "Modular Decomposition",
        technologies: &["C4 component modeling"],
        effort: Effort::High,
        title: "Decompose the high fan-in monolith",
        description: "Split the container with the highest coupling into components with explicit boundaries, then extract where boundaries prove stable.",
        rationale: "A monolith that everything depends on makes every change a cross-team negotiation.",
        trade_offs: "Decomposition is expensive and wrong cuts are worse than no cuts.",
        steps: &[
            "Model the container's internal components explicitly",
            "Stabilize interfaces between them",
            "Extract the most independently-changing component first",
        ],
        keywords: &["monolith", "fan-in", "coupling", "component"],
    },
    Remedy {
        pattern: "Continuous Integration",
        technologies: &["GitHub Actions", "GitLab CI"],
        effort: Effort::Low,
        title: "Stand up a CI pipeline",
        description: "Build and test every change automatically on a shared pipeline.",
        rationale: "Without CI, integration debt accumulates invisibly until release time.",
        trade_offs: "Pipeline maintenance becomes part of the team's work.",
        steps: &[
            "Automate build and unit tests on every push",
            "Gate merges on a green pipeline",
        ],
        keywords: &["ci/cd", "pipeline", "integration"],
    },
];

const TESTABILITY: &[Remedy] = &[
    Remedy {
        pattern: "Test Automation Pyramid",
        technologies: &["JUnit", "Testcontainers", "Playwright"],
        effort: Effort::Medium,
        title: "Build an automated test suite",
        description: "Establish unit, integration, and a thin layer of end-to-end tests wired into CI.",
        rationale: "Manual verification does not scale with change rate; automation is the only sustainable gate.",
        trade_offs: "Test code is code: it needs design and upkeep.",
        steps: &[
            "Cover core domain logic with unit tests",
            "Add integration tests at container seams",
            "Run the suite in CI on every change",
        ],
        keywords: &["test", "automation", "coverage"],
    },
];

const DEPLOYABILITY: &[Remedy] = &[
    Remedy {
        pattern: "Deployment Pipeline",
        technologies: &["GitHub Actions", "ArgoCD"],
        effort: Effort::Medium,
        title: "Automate the path to production",
        description: "Script every deployment step into a pipeline with environment promotion.",
        rationale: "Manual deployments are slow, unrepeatable, and the leading source of release incidents.",
        trade_offs: "Initial pipeline setup competes with feature work.",
        steps: &[
            "Containerize each deployable unit",
            "Automate deploys to a staging environment",
            "Promote to production from the same artifacts",
        ],
        keywords: &["ci/cd", "deploy", "pipeline", "release"],
    },
    Remedy {
        pattern: "Immutable Infrastructure",
        technologies: &["Docker", "Terraform"],
        effort: Effort::Medium,
        title: "Declare infrastructure as code",
        description: "Describe runtime infrastructure declaratively and rebuild rather than mutate.",
        rationale: "Hand-configured hosts drift until no environment matches another.",
        trade_offs: "Requires discipline to stop patching live infrastructure.",
        steps: &[
            "Capture current infrastructure in declarative templates",
            "Apply all changes through the templates only",
        ],
        keywords: &["infrastructure", "container", "docker"],
    },
];

const CONFIGURABILITY: &[Remedy] = &[
    Remedy {
        pattern: "Externalized Configuration",
        technologies: &["Consul", "AWS Parameter Store"],
        effort: Effort::Low,
        title: "Externalize configuration from deployables",
        description: "Move environment-specific settings out of build artifacts into a managed configuration source.",
        rationale: "Baked-in configuration forces a rebuild for every settings change.",
        trade_offs: "The configuration source becomes a runtime dependency.",
        steps: &[
            "Inventory settings that vary per environment",
            "Serve them from a configuration store with audit history",
        ],
        keywords: &["configuration", "config", "settings"],
    },
    Remedy {
        pattern: "Feature Flags",
        technologies: &["LaunchDarkly", "Unleash"],
        effort: Effort::Low,
        title: "Gate risky behavior behind runtime flags",
        description: "Introduce a flagging layer so behavior can change without redeploying.",
        rationale: "Decoupling release from deploy shrinks the blast radius of changes.",
        trade_offs: "Stale flags accumulate as technical debt.",
        steps: &[
            "Add a flag evaluation library to each service",
            "Adopt a flag retirement policy",
        ],
        keywords: &["feature flag", "toggle"],
    },
];

const EXTENSIBILITY: &[Remedy] = &[
    Remedy {
        pattern: "Published Interfaces",
        technologies: &["OpenAPI", "gRPC"],
        effort: Effort::Medium,
        title: "Publish stable extension interfaces",
        description: "Define versioned, documented interfaces at the seams where new capabilities plug in.",
        rationale: "Extension by patching internals couples every new feature to current implementation detail.",
        trade_offs: "Interface stability commitments slow interface evolution.",
        steps: &[
            "Identify the seams where variation is expected",
            "Publish versioned contracts for them",
        ],
        keywords: &["interface", "extension", "api", "plugin"],
    },
    Remedy {
        pattern: "Modular Decomposition",
        technologies: &["C4 component modeling"],
        effort: Effort::High,
        title: "Reduce coupling at the extension points",
        description: "Split tightly-coupled areas so new features land in one module, not five.",
        rationale: "Extensibility is a property of boundaries, and a monolith has none.",
        trade_offs: "Up-front design cost.",
        steps: &[
            "Map change hotspots from recent feature work",
            "Introduce module boundaries around them",
        ],
        keywords: &["monolith", "coupling", "fan-in"],
    },
];

const SECURITY: &[Remedy] = &[
    Remedy {
        pattern: "Encrypted Transport",
        technologies: &["TLS 1.3", "mTLS"],
        effort: Effort::Low,
        title: "Encrypt traffic into sensitive containers",
        description: "Terminate only encrypted transports (HTTPS/TLS/mTLS) on containers holding sensitive data.",
        rationale: "Plaintext hops expose credentials and personal data to anyone on the path.",
        trade_offs: "Certificate lifecycle management.",
        steps: &[
            "Enable TLS on every listener of sensitive containers",
            "Redirect or reject plaintext connections",
            "Automate certificate rotation",
        ],
        keywords: &["unencrypted", "plaintext", "protocol", "tls"],
    },
    Remedy {
        pattern: "Authentication Gateway",
        technologies: &["Keycloak", "OAuth2 Proxy"],
        effort: Effort::Medium,
        title: "Centralize authentication at a gateway",
        description: "Route external traffic through a gateway that authenticates before requests reach internal services.",
        rationale: "Per-service authentication drifts; a gateway gives one enforced policy.",
        trade_offs: "The gateway is a critical dependency and must itself be redundant.",
        steps: &[
            "Stand up an identity-aware gateway",
            "Move external ingress behind it",
            "Strip direct external routes to internal containers",
        ],
        keywords: &["authentication", "gateway", "identity"],
    },
];

const INTEROPERABILITY: &[Remedy] = &[
    Remedy {
        pattern: "Contract-First APIs",
        technologies: &["OpenAPI", "Protobuf"],
        effort: Effort::Medium,
        title: "Describe integration points with machine-readable contracts",
        description: "Publish schema contracts for every cross-system interface.",
        rationale: "Implicit interfaces make every integration a reverse-engineering project.",
        trade_offs: "Contracts must be kept honest against implementations.",
        steps: &[
            "Write contracts for existing integration points",
            "Validate implementations against contracts in CI",
        ],
        keywords: &["contract", "protocol", "interface", "integration"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Severity;

    #[test]
    fn every_standard_tag_has_remedies() {
        use crate::domain::characteristics::CharacteristicCatalog;
        let gap = Gap::new("anything", "whatever", Severity::Medium, "impact");
        for tag in CharacteristicCatalog::standard_tags() {
            assert!(
                !remedies_for(&tag, &gap).is_empty(),
                "no remedy for {tag}"
            );
        }
    }

    #[test]
    fn keyword_match_selects_specific_remedy() {
        let gap = Gap::new(
            "Orders DB",
            "Unencrypted protocol 'tcp' into sensitive container",
            Severity::High,
            "exposure",
        );
        let remedies = remedies_for(&CharacteristicTag::Security, &gap);
        assert_eq!(remedies.len(), 1);
        assert_eq!(remedies[0].pattern, "Encrypted Transport");
    }

    #[test]
    fn unmatched_gap_falls_back_to_first_remedy() {
        let gap = Gap::new("x", "y", Severity::Low, "z");
        let remedies = remedies_for(&CharacteristicTag::Security, &gap);
        assert_eq!(remedies.len(), 1);
        assert_eq!(remedies[0].pattern, "Encrypted Transport");
    }

    #[test]
    fn custom_tags_have_no_remedies() {
        let gap = Gap::new("x", "y", Severity::Low, "z");
        let tag = CharacteristicTag::Custom("Auditability".to_string());
        assert!(remedies_for(&tag, &gap).is_empty());
    }
}
