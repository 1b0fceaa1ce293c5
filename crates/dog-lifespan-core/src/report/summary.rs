//! Assessment report for the result screen.

use serde::{Deserialize, Serialize};

use crate::models::{
    Assessment, EstimationResult, FactorCategory, Sentiment, WeightStatus,
};

use super::chart::RadarChartSeries;

/// Static care advice shown under every result.
pub const CARE_ADVICE: &str = "정기적인 운동과 균형 잡힌 식사, 스트레스 관리가 수명 연장에 중요한 역할을 합니다. \
특히 예방접종과 정기검진을 통한 건강관리가 필수적입니다.";

/// Everything the result screen shows for one assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Report metadata
    pub metadata: ReportMetadata,
    /// Estimated life expectancy in years (one decimal)
    pub life_expectancy_years: f64,
    /// Typical lifespan of the breed
    pub average_lifespan: f64,
    /// Per-category rows, in chart order
    pub factors: Vec<FactorRow>,
    /// Weight status, when the breed has a weight reference
    pub weight_status: Option<WeightStatus>,
    /// Radar chart input
    pub chart: RadarChartSeries,
    /// Static advice text
    pub advice: String,
}

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub assessment_id: String,
    pub breed: String,
    pub breed_found: bool,
    /// Computation timestamp
    pub computed_at: String,
    /// Export timestamp
    pub exported_at: String,
}

/// One factor line ("운동 — 긍정적").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactorRow {
    pub category: FactorCategory,
    pub label: String,
    pub score: f64,
    pub sentiment: Sentiment,
    pub sentiment_label: String,
}

impl FactorRow {
    pub fn rows_for(result: &EstimationResult) -> Vec<FactorRow> {
        result
            .factor_scores
            .iter()
            .map(|(category, score)| {
                let sentiment = Sentiment::from_score(score);
                FactorRow {
                    category,
                    label: category.label().to_string(),
                    score,
                    sentiment,
                    sentiment_label: sentiment.label().to_string(),
                }
            })
            .collect()
    }
}

impl AssessmentReport {
    /// Build the report for an assessment.
    pub fn from_assessment(assessment: &Assessment) -> Self {
        let breakdown = &assessment.breakdown;
        Self {
            metadata: ReportMetadata {
                assessment_id: assessment.assessment_id.clone(),
                breed: assessment.profile.breed.clone(),
                breed_found: breakdown.breed_found,
                computed_at: assessment.computed_at.clone(),
                exported_at: chrono::Utc::now().to_rfc3339(),
            },
            life_expectancy_years: breakdown.result.life_expectancy_years,
            average_lifespan: breakdown.average_lifespan,
            factors: FactorRow::rows_for(&breakdown.result),
            weight_status: breakdown.weight_status.clone(),
            chart: RadarChartSeries::from_scores(&breakdown.result.factor_scores),
            advice: CARE_ADVICE.to_string(),
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export factor rows to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        // Header
        csv.push_str("assessment_id,breed,life_expectancy_years,category,score,sentiment\n");

        for row in &self.factors {
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                escape_csv(&self.metadata.assessment_id),
                escape_csv(&self.metadata.breed),
                self.life_expectancy_years,
                row.category.as_str(),
                row.score,
                row.sentiment.as_str(),
            ));
        }

        csv
    }
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
