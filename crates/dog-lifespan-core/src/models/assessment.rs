//! Assessment records held for display.

use serde::{Deserialize, Serialize};

use super::estimation::{EstimationBreakdown, EstimationResult};
use super::profile::DogProfile;

/// One submitted profile together with its computed estimate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assessment {
    /// Unique assessment ID
    pub assessment_id: String,
    /// Computation timestamp (RFC 3339)
    pub computed_at: String,
    /// The profile as submitted
    pub profile: DogProfile,
    /// Full estimate breakdown
    pub breakdown: EstimationBreakdown,
}

impl Assessment {
    /// Wrap a computed breakdown with a fresh ID and timestamp.
    pub fn new(profile: DogProfile, breakdown: EstimationBreakdown) -> Self {
        Self {
            assessment_id: uuid::Uuid::new_v4().to_string(),
            computed_at: chrono::Utc::now().to_rfc3339(),
            profile,
            breakdown,
        }
    }

    pub fn result(&self) -> &EstimationResult {
        &self.breakdown.result
    }

    pub fn life_expectancy_years(&self) -> f64 {
        self.breakdown.result.life_expectancy_years
    }
}
