//! The report engine: runs the three stages once, in order.
//!
//! EXECUTION ORDER (fixed, never reordered):
//!   1. Synthesizer   seeded audit records
//!   2. Aggregator    product KPIs, segment risk aggregation
//!   3. Reporter      CSV tables, then charts
//!
//! RULES:
//!   - Each stage completes before the next begins.
//!   - All randomness flows through the RngBank.
//!   - The aggregator and reporter never mutate the records.

use crate::{
    aggregator::{self, ProductKpi, SegmentRiskAggregate},
    chart,
    clock::interval_from_hours,
    config::ReportConfig,
    error::AuditResult,
    record::AuditRecord,
    reporter,
    risk::RiskRating,
    rng::RngBank,
    synthesizer::DatasetSynthesizer,
};
use std::path::PathBuf;

/// Everything the reporter consumes, held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTables {
    pub records:      Vec<AuditRecord>,
    pub product_kpis: Vec<ProductKpi>,
    pub segment_risk: Vec<SegmentRiskAggregate>,
}

impl ReportTables {
    /// Run both reductions over an existing record set.
    pub fn from_records(records: Vec<AuditRecord>) -> Self {
        let product_kpis = aggregator::product_kpis(&records);
        let segment_risk = aggregator::segment_risk(&records);
        Self {
            records,
            product_kpis,
            segment_risk,
        }
    }

    pub fn failed_count(&self) -> usize {
        self.records.iter().filter(|r| r.failed()).count()
    }

    pub fn rating_count(&self, rating: RiskRating) -> usize {
        self.records.iter().filter(|r| r.risk_rating() == rating).count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub seed:         u64,
    pub record_count: usize,
    pub failed:       usize,
    pub high_risk:    usize,
    pub medium_risk:  usize,
    pub low_risk:     usize,
    pub artifacts:    Vec<PathBuf>,
}

pub struct ReportEngine {
    pub config: ReportConfig,
    rng_bank:   RngBank,
}

impl ReportEngine {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            rng_bank: RngBank::new(config.seed),
            config,
        }
    }

    /// Stage 1 only. Fails on an interval or schedule that leaves the
    /// representable date range.
    pub fn synthesize(&self) -> AuditResult<Vec<AuditRecord>> {
        let interval = interval_from_hours(self.config.interval_hours)?;
        DatasetSynthesizer::new(&self.rng_bank, self.config.epoch, interval)?
            .synthesize(self.config.record_count)
    }

    /// Stages 1 and 2. Touches no files.
    pub fn build_tables(&self) -> AuditResult<ReportTables> {
        log::info!(
            "Synthesizing {} audit records (seed {})",
            self.config.record_count,
            self.rng_bank.seed()
        );
        let records = self.synthesize()?;

        let tables = ReportTables::from_records(records);
        log::info!(
            "Aggregated {} products and {} business segments",
            tables.product_kpis.len(),
            tables.segment_risk.len()
        );
        Ok(tables)
    }

    /// All three stages. Writes into `config.output_dir`, creating it if needed.
    pub fn run(&self) -> AuditResult<(ReportTables, RunSummary)> {
        let tables = self.build_tables()?;
        let artifacts = self.write_reports(&tables)?;

        let summary = RunSummary {
            seed:         self.config.seed,
            record_count: tables.records.len(),
            failed:       tables.failed_count(),
            high_risk:    tables.rating_count(RiskRating::HighRisk),
            medium_risk:  tables.rating_count(RiskRating::MediumRisk),
            low_risk:     tables.rating_count(RiskRating::LowRisk),
            artifacts,
        };
        Ok((tables, summary))
    }

    /// Stage 3.
    pub fn write_reports(&self, tables: &ReportTables) -> AuditResult<Vec<PathBuf>> {
        let dir = self.config.output_dir.as_path();
        std::fs::create_dir_all(dir)?;

        let mut artifacts = vec![
            reporter::write_audit_data(dir, &tables.records)?,
            reporter::write_product_kpis(dir, &tables.product_kpis)?,
            reporter::write_segment_risk(dir, &tables.segment_risk)?,
        ];

        if !self.config.render_charts {
            log::info!("Chart rendering disabled");
        } else if tables.records.is_empty() {
            log::warn!("No audit records; skipping charts");
        } else {
            artifacts.push(chart::render_product_dashboard(dir, &tables.product_kpis)?);
            artifacts.push(chart::render_risk_aggregation(dir, &tables.segment_risk)?);
        }

        log::info!("Wrote {} report artifacts to {}", artifacts.len(), dir.display());
        Ok(artifacts)
    }
}
