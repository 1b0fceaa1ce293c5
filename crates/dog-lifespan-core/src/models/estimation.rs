//! Estimation output models.

use serde::{Deserialize, Serialize};

use super::breed::{AgeBracket, WeightRange};

/// Weight classification against the breed's expected range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightStatusKind {
    Normal,
    Overweight,
    Underweight,
}

impl WeightStatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightStatusKind::Normal => "normal",
            WeightStatusKind::Overweight => "overweight",
            WeightStatusKind::Underweight => "underweight",
        }
    }
}

/// Weight status with the texts shown next to the weight field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightStatus {
    pub status: WeightStatusKind,
    /// Short label (e.g. "정상 체중")
    pub status_text: String,
    /// Current weight compared with the breed range
    pub info_text: String,
    /// Effect of the status on life expectancy
    pub impact_text: String,
    /// Bracket the range was selected for
    pub bracket: AgeBracket,
    /// Range the weight was judged against
    pub range: WeightRange,
}

/// The five lifestyle categories, in chart order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FactorCategory {
    Exercise,
    Nutrition,
    Healthcare,
    Stress,
    Environment,
}

impl FactorCategory {
    pub const ALL: [FactorCategory; 5] = [
        FactorCategory::Exercise,
        FactorCategory::Nutrition,
        FactorCategory::Healthcare,
        FactorCategory::Stress,
        FactorCategory::Environment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FactorCategory::Exercise => "exercise",
            FactorCategory::Nutrition => "nutrition",
            FactorCategory::Healthcare => "healthcare",
            FactorCategory::Stress => "stress",
            FactorCategory::Environment => "environment",
        }
    }

    /// Label shown on the chart axis.
    pub fn label(&self) -> &'static str {
        match self {
            FactorCategory::Exercise => "운동",
            FactorCategory::Nutrition => "영양",
            FactorCategory::Healthcare => "건강관리",
            FactorCategory::Stress => "스트레스",
            FactorCategory::Environment => "생활환경",
        }
    }
}

/// Display sentiment derived from the sign of a factor score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "긍정적",
            Sentiment::Neutral => "중립적",
            Sentiment::Negative => "부정적",
        }
    }
}

/// Signed score per lifestyle category. Always exactly five entries.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FactorScores {
    pub exercise: f64,
    pub nutrition: f64,
    pub healthcare: f64,
    pub stress: f64,
    pub environment: f64,
}

impl FactorScores {
    pub fn get(&self, category: FactorCategory) -> f64 {
        match category {
            FactorCategory::Exercise => self.exercise,
            FactorCategory::Nutrition => self.nutrition,
            FactorCategory::Healthcare => self.healthcare,
            FactorCategory::Stress => self.stress,
            FactorCategory::Environment => self.environment,
        }
    }

    /// Categories with their scores, in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (FactorCategory, f64)> + '_ {
        FactorCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Sum of all five category scores.
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, score)| score).sum()
    }

    pub fn sentiment(&self, category: FactorCategory) -> Sentiment {
        Sentiment::from_score(self.get(category))
    }
}

/// Estimated life expectancy and the factor breakdown behind it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EstimationResult {
    /// Rounded to one decimal place
    pub life_expectancy_years: f64,
    pub factor_scores: FactorScores,
}

/// Every term that went into an estimate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstimationBreakdown {
    /// Whether the breed was found in the catalog
    pub breed_found: bool,
    /// Default base plus the breed adjustment
    pub base_age: f64,
    /// Breed's typical lifespan (fallback when the breed is unknown)
    pub average_lifespan: f64,
    pub factor_total: f64,
    pub weight_adjustment: f64,
    pub health_adjustment: f64,
    pub genetic_adjustment: f64,
    pub skin_adjustment: f64,
    /// Absent when the breed has no weight reference
    pub weight_status: Option<WeightStatus>,
    pub result: EstimationResult,
}

impl EstimationBreakdown {
    /// Sum of the direct penalties (weight, health, genetic, skin).
    pub fn penalty_total(&self) -> f64 {
        self.weight_adjustment + self.health_adjustment + self.genetic_adjustment + self.skin_adjustment
    }
}
