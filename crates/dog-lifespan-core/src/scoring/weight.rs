//! Weight status classification against breed reference ranges.
//!
//! A weight more than 10% below the bracket minimum is underweight, more than
//! 10% above the bracket maximum is overweight. The boundaries themselves are
//! normal.

use crate::catalog::{BreedCatalog, CatalogResult};
use crate::models::{AgeBracket, WeightRange, WeightStatus, WeightStatusKind};

/// Fraction of the range minimum below which a dog is underweight.
pub const UNDERWEIGHT_FACTOR: f64 = 0.9;

/// Multiple of the range maximum above which a dog is overweight.
pub const OVERWEIGHT_FACTOR: f64 = 1.1;

/// Classifier for a dog's weight given its breed and age.
pub struct WeightClassifier<'a> {
    catalog: &'a BreedCatalog,
}

impl<'a> WeightClassifier<'a> {
    /// Create a new classifier over a catalog.
    pub fn new(catalog: &'a BreedCatalog) -> Self {
        Self { catalog }
    }

    /// Classify a weight.
    ///
    /// Fails with `CatalogError::UnknownBreed` when the breed has no
    /// reference entry; there is no species-wide default range.
    pub fn classify(&self, breed: &str, weight_kg: f64, age_years: f64) -> CatalogResult<WeightStatus> {
        let reference = self.catalog.lookup(breed)?;
        let bracket = AgeBracket::from_age(age_years);
        let range = reference.weights.for_bracket(bracket);

        Ok(build_status(
            &reference.name,
            weight_kg,
            bracket,
            range,
            classify_against(weight_kg, range),
        ))
    }
}

/// Pure threshold rule.
pub fn classify_against(weight_kg: f64, range: WeightRange) -> WeightStatusKind {
    if weight_kg < range.min_kg * UNDERWEIGHT_FACTOR {
        WeightStatusKind::Underweight
    } else if weight_kg > range.max_kg * OVERWEIGHT_FACTOR {
        WeightStatusKind::Overweight
    } else {
        WeightStatusKind::Normal
    }
}

fn build_status(
    breed: &str,
    weight_kg: f64,
    bracket: AgeBracket,
    range: WeightRange,
    status: WeightStatusKind,
) -> WeightStatus {
    let range_text = range.display();
    let (status_text, info_text, impact_text) = match status {
        WeightStatusKind::Underweight => (
            "저체중",
            format!("현재 체중 {weight_kg}kg은 {breed}의 적정 체중 {range_text}kg보다 낮습니다."),
            "저체중은 면역력 저하로 기대 수명에 영향을 줄 수 있습니다.",
        ),
        WeightStatusKind::Overweight => (
            "과체중",
            format!("현재 체중 {weight_kg}kg은 {breed}의 적정 체중 {range_text}kg보다 높습니다."),
            "과체중은 기대 수명을 1-2년 단축시킬 수 있습니다.",
        ),
        WeightStatusKind::Normal => (
            "정상 체중",
            format!("현재 체중 {weight_kg}kg은 {breed}의 적정 체중 범위 {range_text}kg 내에 있습니다."),
            "정상 체중 유지는 건강한 수명을 위해 중요합니다.",
        ),
    };

    WeightStatus {
        status,
        status_text: status_text.to_string(),
        info_text,
        impact_text: impact_text.to_string(),
        bracket,
        range,
    }
}
