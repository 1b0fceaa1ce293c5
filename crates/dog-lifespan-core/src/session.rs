//! Assessment session: holds the assessment currently on display.
//!
//! Recalculation is explicit. A new submission computes a fresh assessment
//! and replaces the previous one; nothing is recomputed behind the caller's
//! back when individual answers change.

use std::sync::Arc;

use thiserror::Error;

use crate::catalog::{BreedCatalog, CatalogError, CatalogResult};
use crate::models::{Assessment, DogProfile, ProfileError, WeightStatus};
use crate::report::AssessmentReport;
use crate::scoring::LifeExpectancyEstimator;

/// Session errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Invalid profile: {0}")]
    Profile(#[from] ProfileError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("No assessment has been submitted")]
    NoAssessment,
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Single-user session over an immutable catalog.
pub struct AssessmentSession {
    catalog: Arc<BreedCatalog>,
    current: Option<Assessment>,
}

impl AssessmentSession {
    /// Create a session with no assessment.
    pub fn new(catalog: Arc<BreedCatalog>) -> Self {
        Self {
            catalog,
            current: None,
        }
    }

    pub fn catalog(&self) -> &BreedCatalog {
        &self.catalog
    }

    /// Estimator bound to this session's catalog.
    pub fn estimator(&self) -> LifeExpectancyEstimator<'_> {
        LifeExpectancyEstimator::new(&self.catalog)
    }

    /// Weight status hint shown while the form is being filled in.
    pub fn preview_weight(&self, breed: &str, weight_kg: f64, age_years: f64) -> CatalogResult<WeightStatus> {
        self.estimator().classifier().classify(breed, weight_kg, age_years)
    }

    /// Validate and assess a submitted profile, replacing the current assessment.
    ///
    /// On validation failure the previous assessment stays in place.
    pub fn submit(&mut self, profile: DogProfile) -> SessionResult<&Assessment> {
        profile.validate()?;

        let breakdown = self.estimator().estimate_detailed(&profile);
        let assessment = Assessment::new(profile, breakdown);

        tracing::debug!(
            "Assessment {} replaces {:?}",
            assessment.assessment_id,
            self.current.as_ref().map(|a| a.assessment_id.as_str())
        );

        Ok(&*self.current.insert(assessment))
    }

    /// The assessment currently on display.
    pub fn current(&self) -> Option<&Assessment> {
        self.current.as_ref()
    }

    /// Drop the current assessment.
    pub fn clear(&mut self) -> Option<Assessment> {
        self.current.take()
    }

    /// Display report for the current assessment.
    pub fn report(&self) -> SessionResult<AssessmentReport> {
        self.current
            .as_ref()
            .map(AssessmentReport::from_assessment)
            .ok_or(SessionError::NoAssessment)
    }
}
