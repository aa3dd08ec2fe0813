//! Feature-importance ranking for the dashboard chart.

use crate::api::FeatureImportance;
use crate::config::PLOT_CONFIG;

/// One feature with its display name and model weight, post-ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedFeature {
    pub name: String,
    pub weight: f64,
}

/// Turn a raw column name into its chart label: the first underscore becomes
/// a space, the first "price" substring is dropped, surrounding whitespace
/// trimmed. "close_price" -> "close", "volume_rel_avg" -> "volume rel_avg".
pub fn display_name(raw: &str) -> String {
    raw.replacen('_', " ", 1)
        .replacen("price", "", 1)
        .trim()
        .to_string()
}

/// Rank features descending by weight and keep the top
/// `PLOT_CONFIG.top_feature_count`. The sort is stable, so features with
/// equal weights keep their arrival order. Mismatched parallel arrays are
/// truncated to the shorter length.
pub fn rank_features(importance: &FeatureImportance) -> Vec<RankedFeature> {
    let mut ranked: Vec<RankedFeature> = importance
        .features
        .iter()
        .zip(importance.importance.iter())
        .map(|(f, &w)| RankedFeature {
            name: display_name(f),
            weight: w,
        })
        .collect();

    ranked.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(PLOT_CONFIG.top_feature_count);
    ranked
}
