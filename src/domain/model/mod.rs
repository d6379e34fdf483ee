//! Read-only C4 architecture model consumed by the engine.

mod c4;
mod signals;

pub use c4::{C4Model, Component, Container, Relationship, SoftwareSystem};
pub use signals::{
    tech_matches, AUTH_GATEWAY_TECH, AUTOSCALING_TECH, BACKUP_TECH, CACHE_TECH, CI_CD_TECH,
    CONFIG_MANAGEMENT_TECH, CONTAINER_PLATFORM_TECH, DATASTORE_TECH, ENCRYPTED_PROTOCOLS,
    INTEROP_API_TECH, LOAD_BALANCER_TECH, MONITORING_TECH, QUEUE_TECH, RESILIENCE_TECH,
    TEST_AUTOMATION_TECH,
};
