//! CSV reporter: writes the three report tables.
//!
//! Floats are written with FLOAT_PRECISION fixed decimals and timestamps
//! with TIMESTAMP_FORMAT, so identical inputs give byte-identical files.
//! Files are overwritten in place; there is no atomic-write guarantee.

use crate::{
    aggregator::{ProductKpi, SegmentRiskAggregate},
    error::AuditResult,
    record::{AuditOutcome, AuditRecord, BusinessSegment, Product},
    risk::RiskRating,
    types::{AuditId, AuditTimestamp},
};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

pub const AUDIT_DATA_FILE: &str = "audit_data.csv";
pub const PRODUCT_KPI_FILE: &str = "Product_KPIs_Report.csv";
pub const RISK_AGGREGATION_FILE: &str = "Risk_Aggregation_Report.csv";

pub const FLOAT_PRECISION: usize = 6;
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn fixed<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{value:.prec$}", prec = FLOAT_PRECISION))
}

fn timestamp<S: Serializer>(value: &AuditTimestamp, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&value.format(TIMESTAMP_FORMAT))
}

// ── Row schemas ──────────────────────────────────────────────────────────────

pub const AUDIT_DATA_HEADER: [&str; 8] = [
    "AuditID",
    "BusinessSegment",
    "AuditDate",
    "Product",
    "RiskScore",
    "OperatingEffectiveness",
    "AuditResult",
    "RiskRating",
];

pub const PRODUCT_KPI_HEADER: [&str; 5] = [
    "Product",
    "TotalAudits",
    "FailedAudits",
    "AvgRiskScore",
    "AvgOperatingEffectiveness",
];

pub const RISK_AGGREGATION_HEADER: [&str; 5] = [
    "BusinessSegment",
    "HighRiskCount",
    "MediumRiskCount",
    "LowRiskCount",
    "AvgOperatingEffectiveness",
];

// Field order must match the matching *_HEADER constant.

#[derive(Serialize)]
struct AuditRow {
    audit_id: AuditId,
    business_segment: BusinessSegment,
    #[serde(serialize_with = "timestamp")]
    audit_date: AuditTimestamp,
    product: Product,
    #[serde(serialize_with = "fixed")]
    risk_score: f64,
    #[serde(serialize_with = "fixed")]
    operating_effectiveness: f64,
    audit_result: AuditOutcome,
    risk_rating: RiskRating,
}

impl From<&AuditRecord> for AuditRow {
    fn from(r: &AuditRecord) -> Self {
        Self {
            audit_id: r.id,
            business_segment: r.business_segment,
            audit_date: r.audited_at,
            product: r.product,
            risk_score: r.risk_score,
            operating_effectiveness: r.operating_effectiveness,
            audit_result: r.result,
            risk_rating: r.risk_rating(),
        }
    }
}

#[derive(Serialize)]
struct ProductKpiRow {
    product: Product,
    total_audits: u64,
    failed_audits: u64,
    #[serde(serialize_with = "fixed")]
    avg_risk_score: f64,
    #[serde(serialize_with = "fixed")]
    avg_operating_effectiveness: f64,
}

impl From<&ProductKpi> for ProductKpiRow {
    fn from(k: &ProductKpi) -> Self {
        Self {
            product: k.product,
            total_audits: k.total_audits,
            failed_audits: k.failed_audits,
            avg_risk_score: k.avg_risk_score,
            avg_operating_effectiveness: k.avg_operating_effectiveness,
        }
    }
}

#[derive(Serialize)]
struct SegmentRiskRow {
    business_segment: BusinessSegment,
    high_risk_count: u64,
    medium_risk_count: u64,
    low_risk_count: u64,
    #[serde(serialize_with = "fixed")]
    avg_operating_effectiveness: f64,
}

impl From<&SegmentRiskAggregate> for SegmentRiskRow {
    fn from(a: &SegmentRiskAggregate) -> Self {
        Self {
            business_segment: a.business_segment,
            high_risk_count: a.high_risk_count,
            medium_risk_count: a.medium_risk_count,
            low_risk_count: a.low_risk_count,
            avg_operating_effectiveness: a.avg_operating_effectiveness,
        }
    }
}

// ── Writers ──────────────────────────────────────────────────────────────────

/// The header is written explicitly so an empty table still gets one.
fn write_rows<R: Serialize>(
    path: &Path,
    header: &[&str],
    rows: impl IntoIterator<Item = R>,
) -> AuditResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(header)?;
    let mut written = 0usize;
    for row in rows {
        writer.serialize(row)?;
        written += 1;
    }
    writer.flush()?;
    log::debug!("Wrote {written} rows to {}", path.display());
    Ok(())
}

pub fn write_audit_data(dir: &Path, records: &[AuditRecord]) -> AuditResult<PathBuf> {
    let path = dir.join(AUDIT_DATA_FILE);
    write_rows(&path, &AUDIT_DATA_HEADER, records.iter().map(AuditRow::from))?;
    Ok(path)
}

pub fn write_product_kpis(dir: &Path, kpis: &[ProductKpi]) -> AuditResult<PathBuf> {
    let path = dir.join(PRODUCT_KPI_FILE);
    write_rows(&path, &PRODUCT_KPI_HEADER, kpis.iter().map(ProductKpiRow::from))?;
    Ok(path)
}

pub fn write_segment_risk(dir: &Path, aggregates: &[SegmentRiskAggregate]) -> AuditResult<PathBuf> {
    let path = dir.join(RISK_AGGREGATION_FILE);
    write_rows(&path, &RISK_AGGREGATION_HEADER, aggregates.iter().map(SegmentRiskRow::from))?;
    Ok(path)
}
