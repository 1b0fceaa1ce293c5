//! Life expectancy scoring engine.
//!
//! Pipeline: Breed baseline → Factor scores → Weight/health/genetic/skin penalties → Rounding

mod factors;
mod weight;

pub use factors::*;
pub use weight::*;

use crate::catalog::{BreedCatalog, CatalogError};
use crate::models::{
    DogProfile, EstimationBreakdown, EstimationResult, GeneticHistory, HealthStatus,
    SkinCondition, WeightStatusKind,
};

/// Base lifespan before breed adjustment, and the fallback for unknown breeds.
pub const DEFAULT_BASE_LIFESPAN_YEARS: f64 = 12.0;

/// Main estimator that coordinates the full pipeline.
pub struct LifeExpectancyEstimator<'a> {
    catalog: &'a BreedCatalog,
    classifier: WeightClassifier<'a>,
    scorer: FactorScorer,
}

impl<'a> LifeExpectancyEstimator<'a> {
    /// Create a new estimator.
    pub fn new(catalog: &'a BreedCatalog) -> Self {
        Self {
            catalog,
            classifier: WeightClassifier::new(catalog),
            scorer: FactorScorer::new(),
        }
    }

    /// Estimate life expectancy for a profile.
    pub fn estimate(&self, profile: &DogProfile) -> EstimationResult {
        self.estimate_detailed(profile).result
    }

    /// Estimate life expectancy, keeping every intermediate term.
    ///
    /// Never fails: an unknown breed falls back to the default baseline and
    /// contributes no weight adjustment.
    pub fn estimate_detailed(&self, profile: &DogProfile) -> EstimationBreakdown {
        // Step 1: Breed baseline
        let (breed_found, base_age, average_lifespan) = match self.catalog.get(&profile.breed) {
            Some(reference) => (
                true,
                DEFAULT_BASE_LIFESPAN_YEARS + reference.adjustment,
                reference.lifespan_years,
            ),
            None => {
                tracing::warn!(
                    "Breed {:?} not in catalog, using default baseline of {} years",
                    profile.breed,
                    DEFAULT_BASE_LIFESPAN_YEARS
                );
                (false, DEFAULT_BASE_LIFESPAN_YEARS, DEFAULT_BASE_LIFESPAN_YEARS)
            }
        };

        // Step 2: Lifestyle factors
        let factor_scores = self.scorer.score(profile);
        let factor_total = factor_scores.total();

        // Step 3: Weight status
        let weight_status = match self
            .classifier
            .classify(&profile.breed, profile.weight_kg, profile.age_years)
        {
            Ok(status) => Some(status),
            Err(CatalogError::UnknownBreed { .. }) => None,
            Err(e) => {
                tracing::warn!("Weight classification skipped: {}", e);
                None
            }
        };
        let weight_adjustment = weight_status
            .as_ref()
            .map(|s| weight_adjustment(s.status))
            .unwrap_or(0.0);

        // Step 4: Direct health penalties
        let health_adjustment = health_adjustment(profile.health);
        let genetic_adjustment = genetic_adjustment(profile.genetic);
        let skin_adjustment = skin_adjustment(profile.skin);

        let raw = base_age
            + factor_total
            + weight_adjustment
            + health_adjustment
            + genetic_adjustment
            + skin_adjustment;
        let life_expectancy_years = round_to_tenth(raw);

        tracing::debug!(
            "Estimated {} years for {} (base {}, factors {:.1}, raw {})",
            life_expectancy_years,
            profile.breed,
            base_age,
            factor_total,
            raw
        );

        EstimationBreakdown {
            breed_found,
            base_age,
            average_lifespan,
            factor_total,
            weight_adjustment,
            health_adjustment,
            genetic_adjustment,
            skin_adjustment,
            weight_status,
            result: EstimationResult {
                life_expectancy_years,
                factor_scores,
            },
        }
    }

    /// Get the weight classifier for direct access.
    pub fn classifier(&self) -> &WeightClassifier<'a> {
        &self.classifier
    }

    /// Get the factor scorer for direct access.
    pub fn scorer(&self) -> &FactorScorer {
        &self.scorer
    }
}

pub fn weight_adjustment(status: WeightStatusKind) -> f64 {
    match status {
        WeightStatusKind::Normal => 0.0,
        WeightStatusKind::Underweight => -0.5,
        WeightStatusKind::Overweight => -1.5,
    }
}

pub fn health_adjustment(health: HealthStatus) -> f64 {
    match health {
        HealthStatus::Healthy => 0.0,
        HealthStatus::Minor => -0.5,
        HealthStatus::Chronic => -1.5,
    }
}

/// An unknown family history carries no penalty, same as "no".
pub fn genetic_adjustment(genetic: GeneticHistory) -> f64 {
    match genetic {
        GeneticHistory::Yes => -1.0,
        GeneticHistory::No | GeneticHistory::Unknown => 0.0,
    }
}

pub fn skin_adjustment(skin: SkinCondition) -> f64 {
    match skin {
        SkinCondition::None => 0.0,
        SkinCondition::Mild => -0.3,
        SkinCondition::Severe => -0.8,
    }
}

/// Round to one decimal place, halves rounding up (towards +∞).
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Nearest integer with exact ties going towards +∞.
fn round_half_up(value: f64) -> f64 {
    if value - value.floor() == 0.5 {
        value.ceil()
    } else {
        value.round()
    }
}
