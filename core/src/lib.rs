//! AuditLens core: synthetic audit dataset, risk classification,
//! groupwise aggregation and flat-file reporting.

pub mod aggregator;
pub mod chart;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod record;
pub mod reporter;
pub mod risk;
pub mod rng;
pub mod synthesizer;
pub mod types;
