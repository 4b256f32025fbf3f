//! Safety recommendations derived from the ranked crime list.
//!
//! Each keyword group is an independent, non-exclusive check against the
//! combined top-crime names; matches append in a fixed order. The upstream
//! data mixes Portuguese and English crime names, so both spellings are
//! matched.

use crime_risk_analysis_models::{RiskLevel, TopCrimeEntry};

const PHONE_KEYWORDS: &[&str] = &["celular", "celphone", "phone", "telefone"];
const TRANSIT_KEYWORDS: &[&str] = &["transporte", "transport", "ônibus", "bus", "metrô", "metro"];
const VEHICLE_KEYWORDS: &[&str] = &["veículo", "vehicle", "carro", "car", "moto"];
const PEDESTRIAN_KEYWORDS: &[&str] = &["pedestre", "pedestrian", "transeunte"];
const THEFT_KEYWORDS: &[&str] = &["roubo", "robbery", "furto", "theft"];

const PHONE_ADVICE: &str =
    "Avoid using your phone openly on the street; keep it out of sight near corners and transit stops.";
const TRANSIT_ADVICE: &str =
    "Stay alert at bus and metro stops, especially while waiting alone or during off-peak hours.";
const VEHICLE_ADVICE: &str =
    "Keep vehicle doors locked and windows up when stopped, and don't leave belongings visible inside.";
const PEDESTRIAN_ADVICE: &str =
    "Prefer busy, well-lit streets when walking and stay aware of your surroundings.";
const THEFT_ADVICE: &str =
    "Keep valuables concealed and carry only what you need.";
const EXTREME_CAUTION_ADVICE: &str =
    "High criminal activity reported for this location. Exercise extreme caution, particularly during the highest-risk period.";
const GENERAL_AWARENESS_ADVICE: &str =
    "Moderate criminal activity reported for this location. Stay aware of your surroundings.";
const DEFAULT_ADVICE: &str =
    "No specific risk patterns identified. Follow standard urban safety practices.";

/// Derives ordered advisory strings from the top crimes and overall risk.
///
/// Keyword checks run in a fixed order and each appends at most one
/// string; the overall-risk advisory follows, and an empty result is
/// replaced with a single generic advisory. Between one and six strings
/// are returned.
#[must_use]
pub fn recommendations(top_crimes: &[TopCrimeEntry], overall_risk: RiskLevel) -> Vec<String> {
    let haystack = top_crimes
        .iter()
        .map(|crime| crime.name.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let checks: &[(&[&str], &str)] = &[
        (PHONE_KEYWORDS, PHONE_ADVICE),
        (TRANSIT_KEYWORDS, TRANSIT_ADVICE),
        (VEHICLE_KEYWORDS, VEHICLE_ADVICE),
        (PEDESTRIAN_KEYWORDS, PEDESTRIAN_ADVICE),
        (THEFT_KEYWORDS, THEFT_ADVICE),
    ];

    let mut advice = Vec::new();
    for &(keywords, text) in checks {
        if keywords.iter().any(|keyword| haystack.contains(keyword)) {
            advice.push(text.to_string());
        }
    }

    match overall_risk {
        RiskLevel::High => advice.push(EXTREME_CAUTION_ADVICE.to_string()),
        RiskLevel::Medium => advice.push(GENERAL_AWARENESS_ADVICE.to_string()),
        RiskLevel::Low => {}
    }

    if advice.is_empty() {
        advice.push(DEFAULT_ADVICE.to_string());
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crime(name: &str) -> TopCrimeEntry {
        TopCrimeEntry {
            id: 1,
            name: name.to_string(),
            severity: 3,
            count: 10,
        }
    }

    #[test]
    fn phone_theft_at_high_risk_appends_in_check_order() {
        let advice = recommendations(&[crime("Furto de Celular")], RiskLevel::High);
        assert_eq!(
            advice,
            vec![
                PHONE_ADVICE.to_string(),
                THEFT_ADVICE.to_string(),
                EXTREME_CAUTION_ADVICE.to_string(),
            ]
        );
    }

    #[test]
    fn empty_top_crimes_at_low_risk_yields_single_default() {
        let advice = recommendations(&[], RiskLevel::Low);
        assert_eq!(advice, vec![DEFAULT_ADVICE.to_string()]);
    }

    #[test]
    fn matching_is_case_insensitive_and_accented() {
        let advice = recommendations(&[crime("Roubo em ÔNIBUS")], RiskLevel::Low);
        assert_eq!(
            advice,
            vec![TRANSIT_ADVICE.to_string(), THEFT_ADVICE.to_string()]
        );
    }

    #[test]
    fn keywords_match_across_joined_names() {
        let advice = recommendations(
            &[crime("Roubo de veículo"), crime("Atropelamento de pedestre")],
            RiskLevel::Medium,
        );
        assert_eq!(
            advice,
            vec![
                VEHICLE_ADVICE.to_string(),
                PEDESTRIAN_ADVICE.to_string(),
                THEFT_ADVICE.to_string(),
                GENERAL_AWARENESS_ADVICE.to_string(),
            ]
        );
    }

    #[test]
    fn medium_risk_alone_yields_general_awareness() {
        let advice = recommendations(&[crime("Homicídio")], RiskLevel::Medium);
        assert_eq!(advice, vec![GENERAL_AWARENESS_ADVICE.to_string()]);
    }
}
