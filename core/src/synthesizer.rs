//! Dataset synthesizer: builds the fake audit population.
//!
//! Every field owns its own RNG stream (see rng.rs), so the value drawn
//! for record N of one field never depends on how many draws another
//! field consumed.

use crate::{
    clock::AuditClock,
    error::AuditResult,
    record::{AuditOutcome, AuditRecord, BusinessSegment, Product},
    rng::{FieldRng, FieldSlot, RngBank},
    types::AuditTimestamp,
};
use chrono::Duration;

pub const RISK_SCORE_RANGE: (f64, f64) = (0.0, 100.0);
pub const EFFECTIVENESS_RANGE: (f64, f64) = (50.0, 100.0);
pub const PASS_PROBABILITY: f64 = 0.75;

pub struct DatasetSynthesizer {
    clock:         AuditClock,
    segment:       FieldRng,
    product:       FieldRng,
    risk_score:    FieldRng,
    effectiveness: FieldRng,
    result:        FieldRng,
    next_id:       u64,
}

impl DatasetSynthesizer {
    pub fn new(bank: &RngBank, epoch: AuditTimestamp, interval: Duration) -> AuditResult<Self> {
        Ok(Self {
            clock:         AuditClock::new(epoch, interval)?,
            segment:       bank.for_field(FieldSlot::BusinessSegment),
            product:       bank.for_field(FieldSlot::Product),
            risk_score:    bank.for_field(FieldSlot::RiskScore),
            effectiveness: bank.for_field(FieldSlot::OperatingEffectiveness),
            result:        bank.for_field(FieldSlot::AuditResult),
            next_id:       1,
        })
    }

    /// Draw the next record. Fails only when the timestamp schedule
    /// runs past the representable date range.
    pub fn next_record(&mut self) -> AuditResult<AuditRecord> {
        let id = self.next_id;
        self.next_id += 1;

        let result = if self.result.chance(PASS_PROBABILITY) {
            AuditOutcome::Pass
        } else {
            AuditOutcome::Fail
        };

        Ok(AuditRecord {
            id,
            business_segment: self.segment.pick(&BusinessSegment::ALL),
            audited_at: self.clock.tick()?,
            product: self.product.pick(&Product::ALL),
            risk_score: self.risk_score.uniform(RISK_SCORE_RANGE.0, RISK_SCORE_RANGE.1),
            operating_effectiveness: self
                .effectiveness
                .uniform(EFFECTIVENESS_RANGE.0, EFFECTIVENESS_RANGE.1),
            result,
        })
    }

    pub fn synthesize(&mut self, count: usize) -> AuditResult<Vec<AuditRecord>> {
        let records = (0..count)
            .map(|_| self.next_record())
            .collect::<AuditResult<Vec<_>>>()?;
        log::debug!(
            "Synthesized {} records (ids {}..={})",
            records.len(),
            records.first().map(|r| r.id).unwrap_or(0),
            records.last().map(|r| r.id).unwrap_or(0),
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::default_epoch;

    fn synth(seed: u64, count: usize) -> Vec<AuditRecord> {
        DatasetSynthesizer::new(&RngBank::new(seed), default_epoch(), Duration::hours(1))
            .unwrap()
            .synthesize(count)
            .unwrap()
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let records = synth(42, 50);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.id, i as u64 + 1);
        }
    }

    #[test]
    fn timestamps_strictly_increase_by_one_hour() {
        let records = synth(42, 50);
        assert_eq!(records[0].audited_at, default_epoch());
        for pair in records.windows(2) {
            assert_eq!(pair[1].audited_at - pair[0].audited_at, Duration::hours(1));
        }
    }

    #[test]
    fn numeric_fields_within_ranges() {
        for r in synth(3, 2_000) {
            assert!((0.0..100.0).contains(&r.risk_score), "risk_score {}", r.risk_score);
            assert!(
                (50.0..100.0).contains(&r.operating_effectiveness),
                "operating_effectiveness {}",
                r.operating_effectiveness
            );
        }
    }

    #[test]
    fn fail_rate_near_one_quarter() {
        let records = synth(42, 1000);
        let failed = records.iter().filter(|r| r.failed()).count();
        // 1000 Bernoulli(0.25) draws: mean 250, sd ~13.7
        assert!((180..=320).contains(&failed), "Unexpected fail count {failed}");
    }

    #[test]
    fn every_category_appears_in_canonical_run() {
        let records = synth(42, 1000);
        for s in BusinessSegment::ALL {
            assert!(records.iter().any(|r| r.business_segment == s), "{s} missing");
        }
        for p in Product::ALL {
            assert!(records.iter().any(|r| r.product == p), "{p} missing");
        }
    }

    #[test]
    fn schedule_overflow_is_an_error() {
        let mut synth = DatasetSynthesizer::new(
            &RngBank::new(42),
            default_epoch(),
            Duration::hours(100_000_000),
        )
        .unwrap();
        let err = synth.synthesize(1000).unwrap_err();
        assert!(
            matches!(err, crate::error::AuditError::ScheduleOverflow { .. }),
            "Expected schedule overflow, got {err:?}"
        );
    }

    #[test]
    fn zero_count_yields_empty_dataset() {
        assert!(synth(42, 0).is_empty());
    }
}
