use crate::{
    clock::{default_epoch, interval_from_hours},
    types::AuditTimestamp,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_RECORD_COUNT: usize = 1000;

/// Run parameters for one report. Every field has a default, so a
/// config file only needs the keys it wants to change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    pub seed: u64,
    pub record_count: usize,
    pub epoch: AuditTimestamp,
    pub interval_hours: i64,
    pub output_dir: PathBuf,
    pub render_charts: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            record_count: DEFAULT_RECORD_COUNT,
            epoch: default_epoch(),
            interval_hours: 1,
            output_dir: PathBuf::from("."),
            render_charts: true,
        }
    }
}

impl ReportConfig {
    /// Load from a JSON file.
    /// In tests, use ReportConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ReportConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid report config {path}: {e}"))?;
        interval_from_hours(config.interval_hours)
            .map_err(|e| anyhow::anyhow!("Invalid report config {path}: {e}"))?;
        Ok(config)
    }

    /// Small config for unit tests: default seed, 100 records, no charts.
    pub fn default_test() -> Self {
        Self {
            record_count: 100,
            render_charts: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_the_canonical_run() {
        let config = ReportConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.record_count, 1000);
        assert_eq!(config.interval_hours, 1);
        assert_eq!(config.epoch.to_string(), "2023-01-01 00:00:00");
        assert!(config.render_charts);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "seed": 7, "render_charts": false }}"#).unwrap();

        let config = ReportConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.seed, 7);
        assert!(!config.render_charts);
        assert_eq!(config.record_count, DEFAULT_RECORD_COUNT);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ReportConfig::load("/nonexistent/auditlens.json").unwrap_err();
        assert!(
            err.to_string().contains("/nonexistent/auditlens.json"),
            "Error should mention the path: {err}"
        );
    }

    fn load_json(json: &str) -> anyhow::Result<ReportConfig> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();
        ReportConfig::load(file.path().to_str().unwrap())
    }

    #[test]
    fn non_positive_interval_rejected() {
        assert!(load_json(r#"{ "interval_hours": 0 }"#).is_err());
        assert!(load_json(r#"{ "interval_hours": -3 }"#).is_err());
    }

    #[test]
    fn interval_beyond_duration_range_rejected() {
        let err = load_json(r#"{ "interval_hours": 9223372036854775807 }"#).unwrap_err();
        assert!(
            err.to_string().contains("interval"),
            "Error should mention the interval: {err}"
        );
    }

    #[test]
    fn large_but_valid_interval_accepted() {
        let config = load_json(r#"{ "interval_hours": 100000000 }"#).unwrap();
        assert_eq!(config.interval_hours, 100_000_000);
    }
}
