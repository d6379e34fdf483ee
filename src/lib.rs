//! Archgauge - Architecture Characteristics Compliance Engine
//!
//! Evaluates a read-only C4 architecture model against a prioritized set of
//! architecture quality characteristics, producing per-characteristic
//! compliance scores, detected gaps, and prioritized remediation
//! recommendations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
