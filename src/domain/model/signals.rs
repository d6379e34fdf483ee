//! Technology and protocol keyword tables shared by the gap analyzers.
//!
//! Matching is case-insensitive substring matching over technology tags, so
//! "PostgreSQL 15" matches the "postgres" keyword.

/// Protocol tags accepted as encrypted transports (exact match, lowercased).
pub const ENCRYPTED_PROTOCOLS: &[&str] = &["https", "tls", "ssl", "grpcs", "amqps", "wss", "sftp"];

/// Load balancing / reverse proxy technologies.
pub const LOAD_BALANCER_TECH: &[&str] =
    &["load balancer", "nginx", "haproxy", "envoy", "alb", "elb", "traefik"];

/// Caching technologies.
pub const CACHE_TECH: &[&str] = &["redis", "memcached", "cache", "varnish", "hazelcast"];

/// Message queue / streaming technologies.
pub const QUEUE_TECH: &[&str] =
    &["kafka", "rabbitmq", "sqs", "queue", "nats", "pulsar", "event bus", "kinesis"];

/// Auto-scaling platforms and annotations.
pub const AUTOSCALING_TECH: &[&str] =
    &["auto-scaling", "autoscaling", "kubernetes", "k8s", "ecs", "fargate", "lambda", "hpa"];

/// Resilience middleware (retries, circuit breakers, bulkheads).
pub const RESILIENCE_TECH: &[&str] =
    &["circuit breaker", "resilience4j", "hystrix", "istio", "service mesh", "bulkhead", "polly"];

/// Observability / health monitoring technologies.
pub const MONITORING_TECH: &[&str] =
    &["prometheus", "grafana", "datadog", "cloudwatch", "new relic", "monitoring", "opentelemetry"];

/// Backup and disaster recovery technologies.
pub const BACKUP_TECH: &[&str] =
    &["backup", "snapshot", "point-in-time", "pitr", "disaster recovery", "replica"];

/// CI/CD pipeline technologies.
pub const CI_CD_TECH: &[&str] = &[
    "jenkins",
    "github actions",
    "gitlab ci",
    "ci/cd",
    "circleci",
    "argo",
    "teamcity",
    "azure devops",
];

/// Test automation technologies.
pub const TEST_AUTOMATION_TECH: &[&str] =
    &["junit", "pytest", "jest", "cypress", "selenium", "playwright", "test automation", "testcontainers"];

/// Configuration management technologies.
pub const CONFIG_MANAGEMENT_TECH: &[&str] = &[
    "consul",
    "vault",
    "config server",
    "parameter store",
    "feature flag",
    "launchdarkly",
    "etcd",
    "app config",
];

/// Container/IaC deployment platforms.
pub const CONTAINER_PLATFORM_TECH: &[&str] =
    &["docker", "kubernetes", "k8s", "helm", "terraform", "cloudformation", "pulumi", "ansible"];

/// Authentication gateway technologies.
pub const AUTH_GATEWAY_TECH: &[&str] = &[
    "api gateway",
    "oauth",
    "oidc",
    "keycloak",
    "auth0",
    "cognito",
    "identity provider",
    "gateway",
    "zitadel",
];

/// Standard interoperability interface technologies.
pub const INTEROP_API_TECH: &[&str] =
    &["openapi", "swagger", "grpc", "graphql", "rest", "soap", "avro", "protobuf"];

/// Datastore technologies (used by recoverability checks).
pub const DATASTORE_TECH: &[&str] = &[
    "postgres",
    "mysql",
    "mongodb",
    "database",
    "dynamodb",
    "cassandra",
    "oracle",
    "sql server",
    "elasticsearch",
    "s3",
];

/// True when any tag contains any keyword, case-insensitively.
pub fn tech_matches(tags: &[String], keywords: &[&str]) -> bool {
    tags.iter().any(|tag| {
        let tag = tag.to_ascii_lowercase();
        keywords.iter().any(|k| tag.contains(k))
    })
}
