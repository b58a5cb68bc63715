//! Aggregator: per-product KPIs and per-segment risk aggregation.
//!
//! Both reductions group with a BTreeMap keyed on the category enum, so
//! rows come out in label order and only categories present in the
//! data produce a row.

use crate::{
    record::{AuditRecord, BusinessSegment, Product},
    risk::RiskRating,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── Public types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductKpi {
    pub product: Product,
    pub total_audits: u64,
    pub failed_audits: u64,
    pub avg_risk_score: f64,
    pub avg_operating_effectiveness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentRiskAggregate {
    pub business_segment: BusinessSegment,
    pub high_risk_count: u64,
    pub medium_risk_count: u64,
    pub low_risk_count: u64,
    pub avg_operating_effectiveness: f64,
}

impl SegmentRiskAggregate {
    pub fn total(&self) -> u64 {
        self.high_risk_count + self.medium_risk_count + self.low_risk_count
    }
}

// ── Accumulators ─────────────────────────────────────────────────────────────

#[derive(Default)]
struct ProductAcc {
    count: u64,
    failed: u64,
    risk_score_sum: f64,
    effectiveness_sum: f64,
}

#[derive(Default)]
struct SegmentAcc {
    high: u64,
    medium: u64,
    low: u64,
    effectiveness_sum: f64,
}

// ── Reductions ───────────────────────────────────────────────────────────────

pub fn product_kpis(records: &[AuditRecord]) -> Vec<ProductKpi> {
    let mut groups: BTreeMap<Product, ProductAcc> = BTreeMap::new();
    for r in records {
        let acc = groups.entry(r.product).or_default();
        acc.count += 1;
        if r.failed() {
            acc.failed += 1;
        }
        acc.risk_score_sum += r.risk_score;
        acc.effectiveness_sum += r.operating_effectiveness;
    }

    groups
        .into_iter()
        .map(|(product, acc)| {
            let n = acc.count as f64;
            ProductKpi {
                product,
                total_audits: acc.count,
                failed_audits: acc.failed,
                avg_risk_score: acc.risk_score_sum / n,
                avg_operating_effectiveness: acc.effectiveness_sum / n,
            }
        })
        .collect()
}

pub fn segment_risk(records: &[AuditRecord]) -> Vec<SegmentRiskAggregate> {
    let mut groups: BTreeMap<BusinessSegment, SegmentAcc> = BTreeMap::new();
    for r in records {
        let acc = groups.entry(r.business_segment).or_default();
        match r.risk_rating() {
            RiskRating::HighRisk => acc.high += 1,
            RiskRating::MediumRisk => acc.medium += 1,
            RiskRating::LowRisk => acc.low += 1,
        }
        acc.effectiveness_sum += r.operating_effectiveness;
    }

    groups
        .into_iter()
        .map(|(business_segment, acc)| {
            let n = (acc.high + acc.medium + acc.low) as f64;
            SegmentRiskAggregate {
                business_segment,
                high_risk_count: acc.high,
                medium_risk_count: acc.medium,
                low_risk_count: acc.low,
                avg_operating_effectiveness: acc.effectiveness_sum / n,
            }
        })
        .collect()
}
