//! Period-relative risk classification.
//!
//! Thresholds are fractions of the period's maximum score: above 70% is
//! high, above 30% is medium, anything else is low. All five maxima are
//! divisible by 10, so `max * 7 / 10` and `max * 3 / 10` are exact in
//! integer arithmetic and a score exactly equal to a threshold falls into
//! the lower bucket.

use crime_risk_analysis_models::{DEFAULT_MAX_SCORE, Period, RiskLevel};

/// Classifies an activity score against the given period's maximum.
///
/// `None` classifies against the [`DEFAULT_MAX_SCORE`] fallback maximum,
/// for scores with no known period.
#[must_use]
pub fn classify_risk(score: i64, period: Option<Period>) -> RiskLevel {
    let max_score = period.map_or(DEFAULT_MAX_SCORE, Period::max_score);
    let high_threshold = max_score * 7 / 10;
    let medium_threshold = max_score * 3 / 10;

    if score > high_threshold {
        RiskLevel::High
    } else if score > medium_threshold {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_high_boundary_is_exclusive() {
        // night max 300 000 -> high threshold exactly 210 000
        assert_eq!(
            classify_risk(210_001, Some(Period::Night)),
            RiskLevel::High
        );
        assert_eq!(
            classify_risk(210_000, Some(Period::Night)),
            RiskLevel::Medium
        );
    }

    #[test]
    fn night_medium_boundary_is_exclusive() {
        // night max 300 000 -> medium threshold exactly 90 000
        assert_eq!(
            classify_risk(90_001, Some(Period::Night)),
            RiskLevel::Medium
        );
        assert_eq!(classify_risk(90_000, Some(Period::Night)), RiskLevel::Low);
    }

    #[test]
    fn dawn_thresholds() {
        // dawn max 128 000 -> 89 600 / 38 400
        assert_eq!(classify_risk(89_601, Some(Period::Dawn)), RiskLevel::High);
        assert_eq!(classify_risk(89_600, Some(Period::Dawn)), RiskLevel::Medium);
        assert_eq!(classify_risk(38_401, Some(Period::Dawn)), RiskLevel::Medium);
        assert_eq!(classify_risk(38_400, Some(Period::Dawn)), RiskLevel::Low);
    }

    #[test]
    fn no_period_uses_default_maximum() {
        // default max 200 000 -> 140 000 / 60 000
        assert_eq!(classify_risk(140_001, None), RiskLevel::High);
        assert_eq!(classify_risk(140_000, None), RiskLevel::Medium);
        assert_eq!(classify_risk(60_001, None), RiskLevel::Medium);
        assert_eq!(classify_risk(60_000, None), RiskLevel::Low);
    }

    #[test]
    fn zero_score_is_low_everywhere() {
        for &period in Period::all() {
            assert_eq!(classify_risk(0, Some(period)), RiskLevel::Low);
        }
        assert_eq!(classify_risk(0, None), RiskLevel::Low);
    }
}
