//! Fixed-schema audit record and its categorical fields.
//!
//! Variants are declared in label order, so the derived `Ord` sorts
//! report rows the same way their labels sort.

use crate::{
    risk::{risk_rating, RiskRating},
    types::{AuditId, AuditTimestamp},
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BusinessSegment {
    Corporate,
    #[serde(rename = "Investment Banking")]
    InvestmentBanking,
    Retail,
    #[serde(rename = "Wealth Management")]
    WealthManagement,
}

impl BusinessSegment {
    /// Draw order used by the synthesizer.
    pub const ALL: [BusinessSegment; 4] = [
        Self::Retail,
        Self::Corporate,
        Self::WealthManagement,
        Self::InvestmentBanking,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Corporate => "Corporate",
            Self::InvestmentBanking => "Investment Banking",
            Self::Retail => "Retail",
            Self::WealthManagement => "Wealth Management",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Product {
    Insurance,
    Investment,
    Loan,
    Mortgage,
}

impl Product {
    /// Draw order used by the synthesizer.
    pub const ALL: [Product; 4] = [Self::Loan, Self::Investment, Self::Insurance, Self::Mortgage];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Insurance => "Insurance",
            Self::Investment => "Investment",
            Self::Loan => "Loan",
            Self::Mortgage => "Mortgage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditOutcome {
    Pass,
    Fail,
}

impl AuditOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(BusinessSegment, Product, AuditOutcome);

/// One synthetic audit observation.
///
/// The risk rating is not a field: it is always recomputed from
/// `operating_effectiveness` through [`AuditRecord::risk_rating`].
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRecord {
    pub id:                      AuditId,
    pub business_segment:        BusinessSegment,
    pub audited_at:              AuditTimestamp,
    pub product:                 Product,
    pub risk_score:              f64,
    pub operating_effectiveness: f64,
    pub result:                  AuditOutcome,
}

impl AuditRecord {
    pub fn risk_rating(&self) -> RiskRating {
        risk_rating(self.operating_effectiveness)
    }

    pub fn failed(&self) -> bool {
        self.result == AuditOutcome::Fail
    }
}
