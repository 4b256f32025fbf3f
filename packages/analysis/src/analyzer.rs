//! Location analysis orchestration and aggregation.
//!
//! One POST to the analysis endpoint yields per-period scores and crime
//! occurrence lists; everything after that is a deterministic walk over
//! the decoded response: classify each period, track the highest-scoring
//! one, sum occurrence counts per crime type, rank them, resolve names,
//! and derive recommendations.

use crime_risk_analysis_models::{
    AnalysisReport, AnalysisSummary, LocationSummary, Period, PeriodReport, RiskLevel,
    TopCrimeEntry,
};
use crime_risk_client::{ApiClient, ClientError};
use serde_json::Value;

use crate::classify::classify_risk;
use crate::recommend::recommendations;
use crate::resolver::{CrimeTypeCache, resolve_crime_type};

/// Path of the analysis endpoint.
pub const ANALYZE_PATH: &str = "/api/v1/criminal/activity-analysis/analyze";

/// Maximum number of entries in the ranked top-crimes list.
const TOP_CRIMES_LIMIT: usize = 10;

/// Everything extracted in one pass over the response `content` object.
struct ContentScan {
    /// Reports for all four periods, in fixed order.
    periods: Vec<PeriodReport>,
    /// Period with the strictly highest score; first period wins ties.
    highest_period: Option<Period>,
    /// Score of the highest-risk period.
    highest_score: i64,
    /// Occurrence counts summed per crime type ID, in first-encounter
    /// order.
    crime_counts: Vec<(i64, i64)>,
}

/// Analyzes criminal activity for an address.
///
/// POSTs the address to the analysis endpoint, then aggregates the
/// response into an [`AnalysisReport`]. Crime type lookups go through
/// `cache` and are resolved sequentially; their failures are recovered
/// internally and never surface here.
///
/// # Errors
///
/// Returns [`ClientError`] if the analysis request itself fails.
pub async fn analyze_location(
    client: &ApiClient,
    cache: &mut CrimeTypeCache,
    address: &str,
) -> Result<AnalysisReport, ClientError> {
    log::info!("analyzing criminal activity for {address:?}");
    let response = client.post_json(ANALYZE_PATH, address.to_string()).await?;
    Ok(build_report(client, cache, address, &response).await)
}

/// Builds the full report from a decoded analysis response.
async fn build_report(
    client: &ApiClient,
    cache: &mut CrimeTypeCache,
    address: &str,
    response: &Value,
) -> AnalysisReport {
    let scan = scan_content(&response["content"]);
    let ranked = rank_crimes(scan.crime_counts);

    let mut top_crimes = Vec::with_capacity(ranked.len());
    for (id, count) in ranked {
        let info = resolve_crime_type(client, cache, id).await;
        top_crimes.push(TopCrimeEntry {
            id,
            name: info.description,
            severity: info.score,
            count,
        });
    }

    let overall_risk = scan.highest_period.map_or(RiskLevel::Low, |period| {
        classify_risk(scan.highest_score, Some(period))
    });

    log::info!(
        "{address:?}: overall risk {overall_risk}, {} distinct crime type(s)",
        top_crimes.len(),
    );

    let recommendations = recommendations(&top_crimes, overall_risk);

    let location = &response["location"];
    AnalysisReport {
        success: true,
        location: LocationSummary {
            query: address.to_string(),
            coordinates: location
                .get("coordinates")
                .cloned()
                .unwrap_or_else(|| serde_json::json!([null, null])),
            latitude: location["y"].as_f64(),
            longitude: location["x"].as_f64(),
        },
        analysis: AnalysisSummary {
            overall_risk,
            overall_risk_label: overall_risk.label().to_string(),
            highest_risk_period: scan.highest_period,
            periods: scan.periods,
        },
        top_crimes,
        recommendations,
    }
}

/// Walks the four fixed periods in order, classifying each and
/// aggregating occurrence counts.
///
/// A missing period sub-object is treated as empty (score 0, position 0,
/// no occurrences), so the report always contains all four periods. The
/// highest-score tracking starts from a −1 sentinel with a strict
/// comparison, so the first period always seeds the maximum and later
/// periods only take over on a strictly greater score.
fn scan_content(content: &Value) -> ContentScan {
    let mut periods = Vec::with_capacity(Period::all().len());
    let mut highest_period: Option<Period> = None;
    let mut highest_score: i64 = -1;
    let mut crime_counts: Vec<(i64, i64)> = Vec::new();

    for &period in Period::all() {
        let period_data = &content[period.as_ref()];
        let score = period_data["score"].as_i64().unwrap_or(0);
        let position = period_data["scorePosition"].as_i64().unwrap_or(0);
        let risk = classify_risk(score, Some(period));
        periods.push(PeriodReport::new(period, score, position, risk));

        if score > highest_score {
            highest_score = score;
            highest_period = Some(period);
        }

        if let Some(occurrences) = period_data["occurrencesWithinCriminalDangerZones"].as_array() {
            for occurrence in occurrences {
                let crime_type = occurrence["crimeType"].as_i64().unwrap_or(0);
                let count = occurrence["count"].as_i64().unwrap_or(0);
                match crime_counts.iter_mut().find(|(id, _)| *id == crime_type) {
                    Some((_, total)) => *total += count,
                    None => crime_counts.push((crime_type, count)),
                }
            }
        }
    }

    ContentScan {
        periods,
        highest_period,
        highest_score,
        crime_counts,
    }
}

/// Ranks aggregated counts descending and keeps the top entries.
///
/// The sort is stable, so crime types with equal counts keep their
/// first-encounter order.
fn rank_crimes(mut counts: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_CRIMES_LIMIT);
    counts
}
