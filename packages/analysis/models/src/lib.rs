#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Risk report types for criminal activity analysis.
//!
//! These types are serialized to JSON for the CLI output. The wire form
//! uses `camelCase` field names and lowercase enum values, matching the
//! upstream API's conventions.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Maximum score used to classify a score with no known period.
pub const DEFAULT_MAX_SCORE: i64 = 200_000;

/// One of the four fixed times of day over which criminal activity is
/// scored.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Period {
    /// Early morning hours before sunrise.
    Dawn,
    /// Sunrise to midday.
    Morning,
    /// Midday to sunset.
    Afternoon,
    /// Sunset onward.
    Night,
}

impl Period {
    /// Returns the maximum activity score observed for this period,
    /// used as the denominator for risk thresholds.
    #[must_use]
    pub const fn max_score(self) -> i64 {
        match self {
            Self::Dawn => 128_000,
            Self::Morning => 185_000,
            Self::Afternoon => 165_000,
            Self::Night => 300_000,
        }
    }

    /// Returns all periods in report order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Dawn, Self::Morning, Self::Afternoon, Self::Night]
    }
}

/// Ordinal risk classification derived from a score relative to a
/// period-specific maximum.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    /// Score at or below 30% of the period maximum.
    Low,
    /// Score above 30% and at or below 70% of the period maximum.
    Medium,
    /// Score above 70% of the period maximum.
    High,
}

impl RiskLevel {
    /// Returns the uppercase display label for this risk level.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// Risk report for a single time period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodReport {
    /// The time period this report covers.
    pub period: Period,
    /// Raw activity score from the upstream API.
    pub score: i64,
    /// Upstream rank/percentile value, passed through unmodified.
    pub position: i64,
    /// Risk classification for this period.
    pub risk_level: RiskLevel,
    /// Uppercase display label for the risk classification.
    pub risk_label: String,
}

impl PeriodReport {
    /// Builds a report for one period, deriving the display label from the
    /// risk level.
    #[must_use]
    pub fn new(period: Period, score: i64, position: i64, risk_level: RiskLevel) -> Self {
        Self {
            period,
            score,
            position,
            risk_level,
            risk_label: risk_level.label().to_string(),
        }
    }
}

/// A crime type as returned by the types endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeTypeInfo {
    /// Numeric crime type ID.
    pub id: i64,
    /// Human-readable description.
    pub description: String,
    /// Severity score assigned by the upstream API.
    pub score: i64,
}

impl CrimeTypeInfo {
    /// Synthetic placeholder used when a crime type lookup fails.
    #[must_use]
    pub fn fallback(id: i64) -> Self {
        Self {
            id,
            description: format!("Crime Type #{id}"),
            score: 1,
        }
    }
}

/// One entry in the ranked top-crimes list, with counts summed across all
/// four periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCrimeEntry {
    /// Numeric crime type ID.
    pub id: i64,
    /// Human-readable crime type name.
    pub name: String,
    /// Severity score for this crime type.
    pub severity: i64,
    /// Total occurrence count across all periods.
    pub count: i64,
}

/// Location details echoed back from the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    /// The address string that was analyzed.
    pub query: String,
    /// Coordinates array passed through verbatim from the upstream
    /// response; `[null, null]` when absent.
    pub coordinates: serde_json::Value,
    /// Latitude (upstream `y`), if provided.
    pub latitude: Option<f64>,
    /// Longitude (upstream `x`), if provided.
    pub longitude: Option<f64>,
}

/// Period-level analysis plus the overall risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    /// Risk classification for the highest-scoring period.
    pub overall_risk: RiskLevel,
    /// Uppercase display label for the overall risk.
    pub overall_risk_label: String,
    /// The period with the strictly highest score; `None` only if no
    /// period was examined.
    pub highest_risk_period: Option<Period>,
    /// Reports for all four periods, in fixed order.
    pub periods: Vec<PeriodReport>,
}

/// The complete risk report printed on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Always `true` on a successful analysis.
    pub success: bool,
    /// Location details for the analyzed address.
    pub location: LocationSummary,
    /// Period-level and overall risk assessment.
    pub analysis: AnalysisSummary,
    /// Up to ten crime types ranked by aggregated occurrence count.
    pub top_crimes: Vec<TopCrimeEntry>,
    /// Advisory strings derived from the top crimes and overall risk.
    pub recommendations: Vec<String>,
}

/// User-visible error categories for the CLI error envelope.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Missing or invalid configuration (e.g. no API key).
    ConfigurationError,
    /// Any HTTP, network, or decode failure from the analysis call.
    ApiError,
    /// Catch-all for failures outside the other categories.
    UnexpectedError,
}

/// The error envelope printed to stderr on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    /// Always `false`.
    pub success: bool,
    /// Error category.
    pub error: ErrorKind,
    /// Human-readable failure description.
    pub message: String,
}

impl ErrorReport {
    /// Builds an error envelope for the given kind and message.
    #[must_use]
    pub fn new(error: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_are_reported_in_fixed_order() {
        assert_eq!(
            Period::all(),
            &[
                Period::Dawn,
                Period::Morning,
                Period::Afternoon,
                Period::Night
            ]
        );
    }

    #[test]
    fn period_max_scores() {
        assert_eq!(Period::Dawn.max_score(), 128_000);
        assert_eq!(Period::Morning.max_score(), 185_000);
        assert_eq!(Period::Afternoon.max_score(), 165_000);
        assert_eq!(Period::Night.max_score(), 300_000);
    }

    #[test]
    fn period_wire_form_is_lowercase() {
        assert_eq!(
            serde_json::to_value(Period::Dawn).unwrap(),
            serde_json::json!("dawn")
        );
        assert_eq!("night".parse::<Period>().unwrap(), Period::Night);
    }

    #[test]
    fn risk_label_is_uppercase_projection() {
        assert_eq!(RiskLevel::Low.label(), "LOW");
        assert_eq!(RiskLevel::Medium.label(), "MEDIUM");
        assert_eq!(RiskLevel::High.label(), "HIGH");
    }

    #[test]
    fn period_report_derives_label() {
        let report = PeriodReport::new(Period::Night, 250_000, 3, RiskLevel::High);
        assert_eq!(report.risk_label, "HIGH");
    }

    #[test]
    fn fallback_crime_type_is_synthetic() {
        let info = CrimeTypeInfo::fallback(42);
        assert_eq!(info.id, 42);
        assert_eq!(info.description, "Crime Type #42");
        assert_eq!(info.score, 1);
    }

    #[test]
    fn error_kind_wire_form_is_snake_case() {
        let report = ErrorReport::new(ErrorKind::ConfigurationError, "missing key");
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["error"], "configuration_error");
        assert_eq!(value["success"], false);
    }

    #[test]
    fn report_serializes_camel_case() {
        let summary = AnalysisSummary {
            overall_risk: RiskLevel::High,
            overall_risk_label: RiskLevel::High.label().to_string(),
            highest_risk_period: Some(Period::Night),
            periods: Vec::new(),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["overallRisk"], "high");
        assert_eq!(value["overallRiskLabel"], "HIGH");
        assert_eq!(value["highestRiskPeriod"], "night");
    }
}
