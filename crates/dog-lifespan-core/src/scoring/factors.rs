//! Lifestyle factor scoring.
//!
//! Each category is a small decision table over the profile answers:
//! - Exercise: weekly minutes (>300: +1.0, >150: +0.5, <60: -0.5)
//! - Nutrition: diet type plus supplements
//! - Healthcare: vaccination, checkups and dental care
//! - Stress: stress level
//! - Environment: hygiene and training

use super::round_to_tenth;
use crate::models::{
    Checkup, DentalCare, Diet, DogProfile, FactorScores, Hygiene, StressLevel, Supplements,
    TrainingFrequency, Vaccination,
};

/// Weekly minutes above which exercise earns the full bonus.
const EXERCISE_HIGH_MINUTES: u32 = 300;

/// Weekly minutes above which exercise earns the partial bonus.
const EXERCISE_MODERATE_MINUTES: u32 = 150;

/// Weekly minutes below which exercise is penalized.
const EXERCISE_LOW_MINUTES: u32 = 60;

/// Scorer for the five lifestyle categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactorScorer;

impl FactorScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score every category for a profile.
    ///
    /// Category scores are kept to one decimal so summed table entries do not
    /// carry float noise into charts and exports.
    pub fn score(&self, profile: &DogProfile) -> FactorScores {
        FactorScores {
            exercise: round_to_tenth(exercise_score(profile.exercise_minutes_per_week)),
            nutrition: round_to_tenth(nutrition_score(profile.diet, profile.supplements)),
            healthcare: round_to_tenth(healthcare_score(
                profile.vaccination,
                profile.checkup,
                profile.dental,
            )),
            stress: round_to_tenth(stress_score(profile.stress)),
            environment: round_to_tenth(environment_score(profile.hygiene, profile.training)),
        }
    }
}

pub fn exercise_score(minutes_per_week: u32) -> f64 {
    if minutes_per_week > EXERCISE_HIGH_MINUTES {
        1.0
    } else if minutes_per_week > EXERCISE_MODERATE_MINUTES {
        0.5
    } else if minutes_per_week < EXERCISE_LOW_MINUTES {
        -0.5
    } else {
        0.0
    }
}

pub fn nutrition_score(diet: Diet, supplements: Supplements) -> f64 {
    let diet_score = match diet {
        Diet::DogFood => 0.5,
        Diet::Mixed => 0.0,
        Diet::HumanFood => -0.5,
    };
    let supplement_score = match supplements {
        Supplements::Yes => 0.3,
        Supplements::No => 0.0,
    };
    diet_score + supplement_score
}

pub fn healthcare_score(vaccination: Vaccination, checkup: Checkup, dental: DentalCare) -> f64 {
    let vaccination_score = match vaccination {
        Vaccination::Regular => 0.5,
        Vaccination::Never => -0.5,
    };
    let checkup_score = match checkup {
        Checkup::Regular => 0.5,
        Checkup::Rarely => -0.3,
    };
    let dental_score = match dental {
        DentalCare::Regular => 0.3,
        DentalCare::Sometimes => 0.0,
        DentalCare::Never => -0.3,
    };
    vaccination_score + checkup_score + dental_score
}

pub fn stress_score(stress: StressLevel) -> f64 {
    match stress {
        StressLevel::Low => 0.5,
        StressLevel::Medium => 0.0,
        StressLevel::High => -0.5,
    }
}

pub fn environment_score(hygiene: Hygiene, training: TrainingFrequency) -> f64 {
    let hygiene_score = match hygiene {
        Hygiene::Regular => 0.3,
        Hygiene::Rarely => -0.3,
    };
    let training_score = match training {
        TrainingFrequency::Often => 0.4,
        TrainingFrequency::Sometimes => 0.2,
        TrainingFrequency::Never => -0.2,
    };
    hygiene_score + training_score
}
