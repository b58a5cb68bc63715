//! Risk rating bands over operating effectiveness.
//!
//! Bands are half-open and closed on the lower end:
//!   [.., 60)   High Risk
//!   [60, 80)   Medium Risk
//!   [80, ..)   Low Risk

use serde::{Deserialize, Serialize};
use std::fmt;

/// Effectiveness below this is High Risk.
pub const MEDIUM_RISK_FLOOR: f64 = 60.0;
/// Effectiveness at or above this is Low Risk.
pub const LOW_RISK_FLOOR: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskRating {
    #[serde(rename = "High Risk")]
    HighRisk,
    #[serde(rename = "Medium Risk")]
    MediumRisk,
    #[serde(rename = "Low Risk")]
    LowRisk,
}

impl RiskRating {
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighRisk => "High Risk",
            Self::MediumRisk => "Medium Risk",
            Self::LowRisk => "Low Risk",
        }
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an operating effectiveness score. Total over every f64;
/// NaN compares false against both floors and lands in Low Risk.
pub fn risk_rating(operating_effectiveness: f64) -> RiskRating {
    if operating_effectiveness < MEDIUM_RISK_FLOOR {
        RiskRating::HighRisk
    } else if operating_effectiveness < LOW_RISK_FLOOR {
        RiskRating::MediumRisk
    } else {
        RiskRating::LowRisk
    }
}
