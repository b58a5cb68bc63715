//! Shared primitive types used across the report pipeline.

/// Sequential audit identifier. The first record is 1.
pub type AuditId = u64;

/// A timestamp on the synthetic audit schedule.
pub type AuditTimestamp = chrono::NaiveDateTime;
