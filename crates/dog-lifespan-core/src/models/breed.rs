//! Breed reference models.

use serde::{Deserialize, Serialize};

/// Age at which a dog stops being a puppy, in years.
pub const ADULT_AGE_YEARS: f64 = 1.0;

/// Age at which a dog is considered a senior, in years.
pub const SENIOR_AGE_YEARS: f64 = 7.0;

/// Life stage used to pick the expected weight range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AgeBracket {
    Puppy,
    Adult,
    Senior,
}

impl AgeBracket {
    /// Derive the bracket from an age in years.
    pub fn from_age(age_years: f64) -> Self {
        if age_years < ADULT_AGE_YEARS {
            AgeBracket::Puppy
        } else if age_years >= SENIOR_AGE_YEARS {
            AgeBracket::Senior
        } else {
            AgeBracket::Adult
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBracket::Puppy => "puppy",
            AgeBracket::Adult => "adult",
            AgeBracket::Senior => "senior",
        }
    }
}

/// Expected weight range in kilograms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightRange {
    #[serde(rename = "min")]
    pub min_kg: f64,
    #[serde(rename = "max")]
    pub max_kg: f64,
}

impl WeightRange {
    pub fn new(min_kg: f64, max_kg: f64) -> Self {
        Self { min_kg, max_kg }
    }

    /// A range is usable when both bounds are positive and ordered.
    pub fn is_valid(&self) -> bool {
        self.min_kg > 0.0 && self.min_kg <= self.max_kg
    }

    /// Display form used in weight status texts (e.g. "2-4").
    pub fn display(&self) -> String {
        format!("{}-{}", self.min_kg, self.max_kg)
    }
}

/// Weight ranges for each age bracket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BracketWeights {
    pub puppy: WeightRange,
    pub adult: WeightRange,
    pub senior: WeightRange,
}

impl BracketWeights {
    pub fn for_bracket(&self, bracket: AgeBracket) -> WeightRange {
        match bracket {
            AgeBracket::Puppy => self.puppy,
            AgeBracket::Adult => self.adult,
            AgeBracket::Senior => self.senior,
        }
    }
}

/// Static reference record for one breed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreedReference {
    /// Breed name - unique key in the catalog
    pub name: String,
    /// Expected weight per age bracket
    pub weights: BracketWeights,
    /// Typical lifespan for the breed in years
    pub lifespan_years: f64,
    /// Offset applied to the default 12-year base lifespan
    #[serde(default)]
    pub adjustment: f64,
}

impl BreedReference {
    /// Expected weight range for a dog of the given age.
    pub fn weight_range_for_age(&self, age_years: f64) -> WeightRange {
        self.weights.for_bracket(AgeBracket::from_age(age_years))
    }
}
