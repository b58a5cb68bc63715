//! Audit clock: issues the synthetic audit timestamps.

use crate::{
    error::{AuditError, AuditResult},
    types::AuditTimestamp,
};
use chrono::{Duration, NaiveDate};

/// 2023-01-01 00:00:00, the first audit on the schedule.
pub fn default_epoch() -> AuditTimestamp {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Convert a configured hour count into a positive interval.
pub fn interval_from_hours(hours: i64) -> AuditResult<Duration> {
    match Duration::try_hours(hours) {
        Some(interval) if interval > Duration::zero() => Ok(interval),
        _ => Err(AuditError::InvalidInterval { hours }),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditClock {
    /// None once the schedule has run past the representable range.
    next:     Option<AuditTimestamp>,
    interval: Duration,
    issued:   u64,
}

impl AuditClock {
    pub fn new(epoch: AuditTimestamp, interval: Duration) -> AuditResult<Self> {
        if interval <= Duration::zero() {
            return Err(AuditError::InvalidInterval {
                hours: interval.num_hours(),
            });
        }
        Ok(Self {
            next: Some(epoch),
            interval,
            issued: 0,
        })
    }

    pub fn hourly(epoch: AuditTimestamp) -> Self {
        Self {
            next: Some(epoch),
            interval: Duration::hours(1),
            issued: 0,
        }
    }

    /// Return the next timestamp and step the schedule by one interval.
    /// The first call returns the epoch itself. Overflow is only an error
    /// when an out-of-range timestamp would actually be issued.
    pub fn tick(&mut self) -> AuditResult<AuditTimestamp> {
        let current = self
            .next
            .ok_or(AuditError::ScheduleOverflow { issued: self.issued })?;
        self.next = current.checked_add_signed(self.interval);
        self.issued += 1;
        Ok(current)
    }

    pub fn issued(&self) -> u64 {
        self.issued
    }
}
