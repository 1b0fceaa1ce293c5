//! Radar chart series for the factor breakdown.

use serde::{Deserialize, Serialize};

use crate::models::FactorScores;

/// Dataset label shown in the chart legend.
pub const CHART_DATASET_LABEL: &str = "건강 요소 점수";

/// Suggested lower bound of the radial scale.
pub const CHART_SUGGESTED_MIN: f64 = -1.0;

/// Suggested upper bound of the radial scale.
pub const CHART_SUGGESTED_MAX: f64 = 1.0;

/// Labeled numeric series handed to the chart renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RadarChartSeries {
    pub label: String,
    /// Axis labels, in chart order
    pub labels: Vec<String>,
    /// Signed score per axis
    pub values: Vec<f64>,
    pub suggested_min: f64,
    pub suggested_max: f64,
}

impl RadarChartSeries {
    pub fn from_scores(scores: &FactorScores) -> Self {
        let (labels, values): (Vec<String>, Vec<f64>) = scores
            .iter()
            .map(|(category, value)| (category.label().to_string(), value))
            .unzip();

        Self {
            label: CHART_DATASET_LABEL.to_string(),
            labels,
            values,
            suggested_min: CHART_SUGGESTED_MIN,
            suggested_max: CHART_SUGGESTED_MAX,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
