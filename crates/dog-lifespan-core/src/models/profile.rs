//! Dog profile models (the submitted form answers).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accepted age range at the form boundary, in years.
pub const AGE_RANGE_YEARS: (f64, f64) = (0.0, 25.0);

/// Accepted weight range at the form boundary, in kg.
pub const WEIGHT_RANGE_KG: (f64, f64) = (0.5, 100.0);

/// Accepted weekly exercise range at the form boundary, in minutes.
pub const EXERCISE_RANGE_MINUTES: (u32, u32) = (0, 1000);

/// Profile construction and validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Missing answer for {0}")]
    MissingAnswer(&'static str),

    #[error("Invalid answer for {field}: {value:?}")]
    InvalidAnswer { field: &'static str, value: String },

    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

pub type ProfileResult<T> = Result<T, ProfileError>;

/// Declares a closed set of form answers together with their wire strings.
///
/// Parsing trims surrounding whitespace and ignores case.
macro_rules! answer_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Form field this answer belongs to.
            pub const FIELD: &'static str = $field;

            /// Every accepted answer, in form order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire string as submitted by the form.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ProfileError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase();
                if normalized.is_empty() {
                    return Err(ProfileError::MissingAnswer($field));
                }
                match normalized.as_str() {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(ProfileError::InvalidAnswer {
                        field: $field,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

answer_enum! {
    /// Sex of the dog.
    Gender, "gender" {
        Male => "male",
        Female => "female",
    }
}

answer_enum! {
    /// Whether the dog has been neutered or spayed.
    NeuterStatus, "neutered" {
        Neutered => "yes",
        Intact => "no",
    }
}

answer_enum! {
    /// Number of litters (intact females only).
    BirthExperience, "birthExperience" {
        None => "none",
        Once => "once",
        Multiple => "multiple",
    }
}

answer_enum! {
    /// Main food source.
    Diet, "diet" {
        DogFood => "dog-food",
        HumanFood => "human-food",
        Mixed => "mixed",
    }
}

answer_enum! {
    Vaccination, "vaccination" {
        Regular => "regular",
        Never => "never",
    }
}

answer_enum! {
    /// Current overall health.
    HealthStatus, "health" {
        Healthy => "healthy",
        Minor => "minor",
        Chronic => "chronic",
    }
}

answer_enum! {
    DentalCare, "dental" {
        Regular => "regular",
        Sometimes => "sometimes",
        Never => "never",
    }
}

answer_enum! {
    /// Skin disease severity.
    SkinCondition, "skinDisease" {
        None => "none",
        Mild => "mild",
        Severe => "severe",
    }
}

answer_enum! {
    /// Family history of genetic disease.
    GeneticHistory, "genetic" {
        Yes => "yes",
        No => "no",
        Unknown => "unknown",
    }
}

answer_enum! {
    /// Veterinary checkups (regular = at least once a year).
    Checkup, "checkup" {
        Regular => "regular",
        Rarely => "rarely",
    }
}

answer_enum! {
    Supplements, "supplements" {
        Yes => "yes",
        No => "no",
    }
}

answer_enum! {
    /// Bathing and grooming routine.
    Hygiene, "hygiene" {
        Regular => "regular",
        Rarely => "rarely",
    }
}

answer_enum! {
    StressLevel, "stress" {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

answer_enum! {
    /// Training and cognitive stimulation.
    TrainingFrequency, "training" {
        Often => "often",
        Sometimes => "sometimes",
        Never => "never",
    }
}

/// The full answer set for one dog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DogProfile {
    /// Breed name (key into the breed catalog)
    pub breed: String,
    /// Age in years
    pub age_years: f64,
    /// Weight in kg
    pub weight_kg: f64,
    pub gender: Gender,
    pub neuter_status: NeuterStatus,
    /// Only meaningful for intact females
    pub birth_experience: Option<BirthExperience>,
    /// Average exercise per week, in whole minutes
    pub exercise_minutes_per_week: u32,
    pub diet: Diet,
    pub vaccination: Vaccination,
    pub health: HealthStatus,
    pub dental: DentalCare,
    pub skin: SkinCondition,
    pub genetic: GeneticHistory,
    pub checkup: Checkup,
    pub supplements: Supplements,
    pub hygiene: Hygiene,
    pub stress: StressLevel,
    pub training: TrainingFrequency,
}

impl DogProfile {
    /// Whether the form asks about birth experience for this dog.
    pub fn asks_birth_experience(&self) -> bool {
        self.gender == Gender::Female && self.neuter_status == NeuterStatus::Intact
    }

    /// Birth experience, ignored unless the dog is an intact female.
    pub fn effective_birth_experience(&self) -> Option<BirthExperience> {
        if self.asks_birth_experience() {
            self.birth_experience
        } else {
            None
        }
    }

    /// Form-boundary checks: breed present and numeric answers within range.
    ///
    /// The estimator never calls this; it accepts any well-formed profile.
    pub fn validate(&self) -> ProfileResult<()> {
        if self.breed.trim().is_empty() {
            return Err(ProfileError::MissingAnswer("breed"));
        }
        check_range("age", self.age_years, AGE_RANGE_YEARS)?;
        check_range("weight", self.weight_kg, WEIGHT_RANGE_KG)?;
        check_range(
            "exercise",
            self.exercise_minutes_per_week as f64,
            (
                EXERCISE_RANGE_MINUTES.0 as f64,
                EXERCISE_RANGE_MINUTES.1 as f64,
            ),
        )?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> ProfileResult<()> {
    // NaN fails both comparisons and is rejected too
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ProfileError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
