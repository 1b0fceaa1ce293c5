//! Dog Lifespan Core Library
//!
//! Life expectancy estimation for dogs from breed reference data and
//! lifestyle answers.
//!
//! # Architecture
//!
//! ```text
//!   Form answers ──► DogProfile (closed enums)
//!                        │
//!                        ▼
//!              LifeExpectancyEstimator
//!          ┌─────────────┼──────────────────┐
//!          │             │                  │
//!          ▼             ▼                  ▼
//!    BreedCatalog   WeightClassifier   FactorScorer
//!    (baseline)     (weight penalty)   (5 categories)
//!          └─────────────┼──────────────────┘
//!                        │
//!        base + factors + penalties → round to 0.1
//!                        │
//!                        ▼
//!                AssessmentSession ──► Report (chart series, advice, JSON/CSV)
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Immutable breed reference table with typed lookups
//! - [`models`]: Domain types (DogProfile, BreedReference, EstimationResult, etc.)
//! - [`scoring`]: Weight classifier, factor scorer and estimator
//! - [`session`]: Holds the current assessment, replaced on each submission
//! - [`report`]: Radar chart series and result reports

pub mod catalog;
pub mod models;
pub mod report;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use catalog::{BreedCatalog, CatalogError};
pub use models::{
    AgeBracket, Assessment, BreedReference, DogProfile, EstimationBreakdown, EstimationResult,
    FactorCategory, FactorScores, Sentiment, WeightRange, WeightStatus, WeightStatusKind,
};
pub use report::{AssessmentReport, RadarChartSeries};
pub use scoring::{FactorScorer, LifeExpectancyEstimator, WeightClassifier};
pub use session::AssessmentSession;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use models::ProfileError;
use session::SessionError;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum DogLifespanError {
    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Unknown breed: {0}")]
    UnknownBreed(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<CatalogError> for DogLifespanError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::UnknownBreed { name, suggestions } if suggestions.is_empty() => {
                DogLifespanError::UnknownBreed(name)
            }
            CatalogError::UnknownBreed { name, suggestions } => DogLifespanError::UnknownBreed(
                format!("{} (did you mean: {})", name, suggestions.join(", ")),
            ),
            other => DogLifespanError::CatalogError(other.to_string()),
        }
    }
}

impl From<ProfileError> for DogLifespanError {
    fn from(e: ProfileError) -> Self {
        DogLifespanError::InvalidInput(e.to_string())
    }
}

impl From<SessionError> for DogLifespanError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::Profile(e) => e.into(),
            SessionError::Catalog(e) => e.into(),
            SessionError::NoAssessment => {
                DogLifespanError::NotFound(SessionError::NoAssessment.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for DogLifespanError {
    fn from(e: serde_json::Error) -> Self {
        DogLifespanError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for DogLifespanError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        DogLifespanError::InvalidInput(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open the built-in breed catalog.
#[uniffi::export]
pub fn open_builtin_catalog() -> Result<Arc<DogLifespanCore>, DogLifespanError> {
    let catalog = BreedCatalog::builtin()?;
    Ok(DogLifespanCore::with_catalog(catalog))
}

/// Open a breed catalog from a JSON document.
#[uniffi::export]
pub fn open_catalog_json(json: String) -> Result<Arc<DogLifespanCore>, DogLifespanError> {
    let catalog = BreedCatalog::from_json(&json)?;
    Ok(DogLifespanCore::with_catalog(catalog))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe session wrapper for FFI.
#[derive(uniffi::Object)]
pub struct DogLifespanCore {
    session: Arc<Mutex<AssessmentSession>>,
}

impl DogLifespanCore {
    fn with_catalog(catalog: BreedCatalog) -> Arc<Self> {
        Arc::new(Self {
            session: Arc::new(Mutex::new(AssessmentSession::new(Arc::new(catalog)))),
        })
    }
}

#[uniffi::export]
impl DogLifespanCore {
    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Version label of the loaded catalog.
    pub fn catalog_version(&self) -> Result<String, DogLifespanError> {
        let session = self.session.lock()?;
        Ok(session.catalog().version().to_string())
    }

    /// SHA-256 fingerprint of the loaded catalog.
    pub fn catalog_fingerprint(&self) -> Result<String, DogLifespanError> {
        let session = self.session.lock()?;
        Ok(session.catalog().fingerprint().to_string())
    }

    /// Breed names in dropdown order.
    pub fn list_breeds(&self) -> Result<Vec<String>, DogLifespanError> {
        let session = self.session.lock()?;
        Ok(session.catalog().breed_names().map(String::from).collect())
    }

    /// Get a breed reference by name.
    pub fn get_breed(&self, name: String) -> Result<Option<FfiBreedReference>, DogLifespanError> {
        let session = self.session.lock()?;
        Ok(session.catalog().get(&name).map(|b| b.clone().into()))
    }

    /// Known breed names closest to `name`.
    pub fn suggest_breeds(&self, name: String, limit: u32) -> Result<Vec<String>, DogLifespanError> {
        let session = self.session.lock()?;
        Ok(session.catalog().suggest(&name, limit as usize))
    }

    // =========================================================================
    // Estimation Operations
    // =========================================================================

    /// Weight status hint for the form, recomputed on each call.
    pub fn preview_weight_status(
        &self,
        breed: String,
        weight_kg: f64,
        age_years: f64,
    ) -> Result<FfiWeightStatus, DogLifespanError> {
        let session = self.session.lock()?;
        let status = session.preview_weight(&breed, weight_kg, age_years)?;
        Ok(status.into())
    }

    /// Estimate without touching the current assessment.
    pub fn estimate(&self, profile: FfiDogProfile) -> Result<FfiEstimationResult, DogLifespanError> {
        let profile = DogProfile::try_from(profile)?;
        let session = self.session.lock()?;
        let result = session.estimator().estimate(&profile);
        Ok(result.into())
    }

    /// Validate, estimate and make the result the current assessment.
    pub fn submit_profile(&self, profile: FfiDogProfile) -> Result<FfiAssessment, DogLifespanError> {
        let profile = DogProfile::try_from(profile)?;
        let mut session = self.session.lock()?;
        let assessment = session.submit(profile)?;
        Ok(assessment.into())
    }

    /// The assessment currently on display.
    pub fn current_assessment(&self) -> Result<Option<FfiAssessment>, DogLifespanError> {
        let session = self.session.lock()?;
        Ok(session.current().map(|a| a.into()))
    }

    /// Drop the current assessment.
    pub fn clear_assessment(&self) -> Result<(), DogLifespanError> {
        let mut session = self.session.lock()?;
        session.clear();
        Ok(())
    }

    // =========================================================================
    // Report Operations
    // =========================================================================

    /// Radar chart series for the current assessment.
    pub fn radar_chart(&self) -> Result<FfiRadarChart, DogLifespanError> {
        let session = self.session.lock()?;
        let report = session.report()?;
        Ok(report.chart.into())
    }

    /// Export the current assessment report as JSON.
    pub fn export_report_json(&self) -> Result<String, DogLifespanError> {
        let session = self.session.lock()?;
        let report = session.report()?;
        Ok(report.to_json()?)
    }

    /// Export the current assessment factors as CSV.
    pub fn export_report_csv(&self) -> Result<String, DogLifespanError> {
        let session = self.session.lock()?;
        let report = session.report()?;
        Ok(report.to_csv())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe weight range.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiWeightRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

impl From<WeightRange> for FfiWeightRange {
    fn from(range: WeightRange) -> Self {
        Self {
            min_kg: range.min_kg,
            max_kg: range.max_kg,
        }
    }
}

/// FFI-safe breed reference.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBreedReference {
    pub name: String,
    pub puppy: FfiWeightRange,
    pub adult: FfiWeightRange,
    pub senior: FfiWeightRange,
    pub lifespan_years: f64,
    pub adjustment: f64,
}

impl From<BreedReference> for FfiBreedReference {
    fn from(breed: BreedReference) -> Self {
        Self {
            name: breed.name,
            puppy: breed.weights.puppy.into(),
            adult: breed.weights.adult.into(),
            senior: breed.weights.senior.into(),
            lifespan_years: breed.lifespan_years,
            adjustment: breed.adjustment,
        }
    }
}

/// FFI-safe dog profile, using the form's wire strings for answers.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDogProfile {
    pub breed: String,
    pub age_years: f64,
    pub weight_kg: f64,
    pub gender: String,
    pub neutered: String,
    pub birth_experience: Option<String>,
    /// Whole minutes; fractional form input is rounded by the caller
    pub exercise_minutes_per_week: u32,
    pub diet: String,
    pub vaccination: String,
    pub health: String,
    pub dental: String,
    pub skin_disease: String,
    pub genetic: String,
    pub checkup: String,
    pub supplements: String,
    pub hygiene: String,
    pub stress: String,
    pub training: String,
}

impl TryFrom<FfiDogProfile> for DogProfile {
    type Error = ProfileError;

    fn try_from(p: FfiDogProfile) -> Result<Self, Self::Error> {
        let birth_experience = match p.birth_experience.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(value.parse()?),
        };

        Ok(DogProfile {
            breed: p.breed.trim().to_string(),
            age_years: p.age_years,
            weight_kg: p.weight_kg,
            gender: p.gender.parse()?,
            neuter_status: p.neutered.parse()?,
            birth_experience,
            exercise_minutes_per_week: p.exercise_minutes_per_week,
            diet: p.diet.parse()?,
            vaccination: p.vaccination.parse()?,
            health: p.health.parse()?,
            dental: p.dental.parse()?,
            skin: p.skin_disease.parse()?,
            genetic: p.genetic.parse()?,
            checkup: p.checkup.parse()?,
            supplements: p.supplements.parse()?,
            hygiene: p.hygiene.parse()?,
            stress: p.stress.parse()?,
            training: p.training.parse()?,
        })
    }
}

/// FFI-safe weight status.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiWeightStatus {
    pub status: String,
    pub status_text: String,
    pub info_text: String,
    pub impact_text: String,
    pub bracket: String,
    pub range: FfiWeightRange,
}

impl From<WeightStatus> for FfiWeightStatus {
    fn from(status: WeightStatus) -> Self {
        Self {
            status: status.status.as_str().to_string(),
            status_text: status.status_text,
            info_text: status.info_text,
            impact_text: status.impact_text,
            bracket: status.bracket.as_str().to_string(),
            range: status.range.into(),
        }
    }
}

/// FFI-safe factor score with its display sentiment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFactorScore {
    pub category: String,
    pub label: String,
    pub score: f64,
    pub sentiment: String,
    pub sentiment_label: String,
}

fn ffi_factors(scores: &FactorScores) -> Vec<FfiFactorScore> {
    scores
        .iter()
        .map(|(category, score)| {
            let sentiment = Sentiment::from_score(score);
            FfiFactorScore {
                category: category.as_str().to_string(),
                label: category.label().to_string(),
                score,
                sentiment: sentiment.as_str().to_string(),
                sentiment_label: sentiment.label().to_string(),
            }
        })
        .collect()
}

/// FFI-safe estimation result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiEstimationResult {
    pub life_expectancy_years: f64,
    pub factors: Vec<FfiFactorScore>,
}

impl From<EstimationResult> for FfiEstimationResult {
    fn from(result: EstimationResult) -> Self {
        Self {
            life_expectancy_years: result.life_expectancy_years,
            factors: ffi_factors(&result.factor_scores),
        }
    }
}

/// FFI-safe assessment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAssessment {
    pub assessment_id: String,
    pub computed_at: String,
    pub breed: String,
    pub breed_found: bool,
    pub life_expectancy_years: f64,
    pub average_lifespan: f64,
    pub factors: Vec<FfiFactorScore>,
    pub weight_status: Option<FfiWeightStatus>,
}

impl From<&Assessment> for FfiAssessment {
    fn from(assessment: &Assessment) -> Self {
        let breakdown = &assessment.breakdown;
        Self {
            assessment_id: assessment.assessment_id.clone(),
            computed_at: assessment.computed_at.clone(),
            breed: assessment.profile.breed.clone(),
            breed_found: breakdown.breed_found,
            life_expectancy_years: breakdown.result.life_expectancy_years,
            average_lifespan: breakdown.average_lifespan,
            factors: ffi_factors(&breakdown.result.factor_scores),
            weight_status: breakdown.weight_status.clone().map(|s| s.into()),
        }
    }
}

/// FFI-safe radar chart series.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRadarChart {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub suggested_min: f64,
    pub suggested_max: f64,
}

impl From<RadarChartSeries> for FfiRadarChart {
    fn from(series: RadarChartSeries) -> Self {
        Self {
            label: series.label,
            labels: series.labels,
            values: series.values,
            suggested_min: series.suggested_min,
            suggested_max: series.suggested_max,
        }
    }
}
