//! Risk band boundaries over operating effectiveness.

use auditlens_core::risk::{risk_rating, RiskRating, LOW_RISK_FLOOR, MEDIUM_RISK_FLOOR};

#[test]
fn boundaries_belong_to_the_higher_band() {
    assert_eq!(risk_rating(60.0), RiskRating::MediumRisk);
    assert_eq!(risk_rating(80.0), RiskRating::LowRisk);
    assert_eq!(risk_rating(59.999), RiskRating::HighRisk);
    assert_eq!(risk_rating(79.999_999), RiskRating::MediumRisk);
}

#[test]
fn just_below_each_floor_stays_in_lower_band() {
    let below_medium = f64::from_bits(MEDIUM_RISK_FLOOR.to_bits() - 1);
    let below_low = f64::from_bits(LOW_RISK_FLOOR.to_bits() - 1);
    assert_eq!(risk_rating(below_medium), RiskRating::HighRisk);
    assert_eq!(risk_rating(below_low), RiskRating::MediumRisk);
}

#[test]
fn sweep_matches_band_definition() {
    // 50.00 .. 99.99 in steps of 0.01
    for step in 0..5_000 {
        let e = 50.0 + step as f64 / 100.0;
        let expected = if e < 60.0 {
            RiskRating::HighRisk
        } else if e < 80.0 {
            RiskRating::MediumRisk
        } else {
            RiskRating::LowRisk
        };
        assert_eq!(risk_rating(e), expected, "Wrong band for effectiveness {e}");
    }
}

#[test]
fn total_outside_generated_range() {
    assert_eq!(risk_rating(f64::NEG_INFINITY), RiskRating::HighRisk);
    assert_eq!(risk_rating(0.0), RiskRating::HighRisk);
    assert_eq!(risk_rating(150.0), RiskRating::LowRisk);
    assert_eq!(risk_rating(f64::INFINITY), RiskRating::LowRisk);
}

#[test]
fn rating_is_pure() {
    for e in [55.0, 65.0, 85.0, 59.9] {
        assert_eq!(risk_rating(e), risk_rating(e));
    }
}

#[test]
fn labels_match_report_text() {
    assert_eq!(RiskRating::HighRisk.to_string(), "High Risk");
    assert_eq!(RiskRating::MediumRisk.to_string(), "Medium Risk");
    assert_eq!(RiskRating::LowRisk.to_string(), "Low Risk");
}
