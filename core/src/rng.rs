//! Seeded random streams for the dataset synthesizer.
//!
//! The run seed lives in one RngBank. Every column of the audit dataset
//! draws from its own FieldRng, keyed by a FieldSlot mixed into the seed,
//! so one column's values never shift when another column draws more or
//! fewer numbers. No platform RNG is used anywhere in the pipeline.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Random stream feeding one column of the dataset.
pub struct FieldRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl FieldRng {
    /// Stream for `slot_index` under `master_seed`.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Top 53 bits of the next word, scaled into [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Index in [0, n). Only used with small category lists.
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Roll a float in [lo, hi). Redraws the rare roll that rounds up to `hi`.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        assert!(lo < hi, "uniform range is empty: [{lo}, {hi})");
        loop {
            let value = lo + (hi - lo) * self.next_f64();
            if value < hi {
                return value;
            }
        }
    }

    /// Pick one element uniformly.
    pub fn pick<T: Copy>(&mut self, choices: &[T]) -> T {
        let index = self.next_u64_below(choices.len() as u64) as usize;
        choices[index]
    }
}

/// Owns the run seed and builds the column streams from it.
#[derive(Debug, Clone, Copy)]
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_field(&self, slot: FieldSlot) -> FieldRng {
        FieldRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Column identities mixed into the seed. The discriminants are part of
/// the dataset's reproducibility: changing one changes that column for
/// every seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum FieldSlot {
    BusinessSegment = 0,
    Product = 1,
    RiskScore = 2,
    OperatingEffectiveness = 3,
    AuditResult = 4,
}

impl FieldSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BusinessSegment => "business_segment",
            Self::Product => "product",
            Self::RiskScore => "risk_score",
            Self::OperatingEffectiveness => "operating_effectiveness",
            Self::AuditResult => "audit_result",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let bank = RngBank::new(42);
        let mut a = bank.for_field(FieldSlot::RiskScore);
        let mut b = bank.for_field(FieldSlot::RiskScore);

        for _ in 0..100 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn slots_get_distinct_streams() {
        let bank = RngBank::new(42);
        let mut risk = bank.for_field(FieldSlot::RiskScore);
        let mut effectiveness = bank.for_field(FieldSlot::OperatingEffectiveness);

        let a: Vec<f64> = (0..10).map(|_| risk.next_f64()).collect();
        let b: Vec<f64> = (0..10).map(|_| effectiveness.next_f64()).collect();
        assert_ne!(a, b, "Two slots produced the same stream");
    }

    #[test]
    fn uniform_stays_in_half_open_range() {
        let mut rng = RngBank::new(7).for_field(FieldSlot::OperatingEffectiveness);
        for _ in 0..10_000 {
            let v = rng.uniform(50.0, 100.0);
            assert!((50.0..100.0).contains(&v), "Out of range: {v}");
        }
    }

    #[test]
    fn pick_only_returns_choices() {
        let mut rng = RngBank::new(7).for_field(FieldSlot::Product);
        let choices = ['a', 'b', 'c', 'd'];
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let c = rng.pick(&choices);
            let idx = choices.iter().position(|x| *x == c).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "Not every choice was drawn: {seen:?}");
    }

    #[test]
    fn stream_names_follow_slots() {
        let bank = RngBank::new(1);
        assert_eq!(bank.for_field(FieldSlot::AuditResult).name, "audit_result");
        assert_eq!(bank.seed(), 1);
    }
}
