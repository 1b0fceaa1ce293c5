//! Breed reference catalog.
//!
//! The catalog is an immutable table keyed by breed name. The built-in table
//! ships as an embedded JSON document; callers can load their own document
//! with [`BreedCatalog::from_json`] to version the data independently of the
//! scoring logic.

mod matcher;

pub use matcher::*;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::models::{AgeBracket, BreedReference};

/// Embedded reference table.
const BUILTIN_CATALOG_JSON: &str = include_str!("breeds.json");

/// Number of suggestions attached to an unknown-breed error.
const MAX_SUGGESTIONS: usize = 3;

/// Catalog errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Unknown breed: {name}")]
    UnknownBreed {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("Duplicate breed in catalog: {0}")]
    DuplicateBreed(String),

    #[error("Invalid catalog entry {breed}: {reason}")]
    InvalidEntry { breed: String, reason: String },

    #[error("Catalog parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Serialized form of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogDocument {
    /// Data version label
    pub version: String,
    pub breeds: Vec<BreedReference>,
}

/// Immutable breed reference table.
#[derive(Debug, Clone)]
pub struct BreedCatalog {
    version: String,
    fingerprint: String,
    breeds: Vec<BreedReference>,
    index: HashMap<String, usize>,
}

impl BreedCatalog {
    /// Load the embedded reference table.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    /// Load a catalog from a JSON document.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Build a catalog from an already-parsed document.
    pub fn from_document(document: CatalogDocument) -> CatalogResult<Self> {
        let fingerprint = hash_document(&document)?;
        let mut index = HashMap::with_capacity(document.breeds.len());

        for (position, breed) in document.breeds.iter().enumerate() {
            validate_entry(breed)?;
            let key = breed.name.trim().to_string();
            if index.insert(key, position).is_some() {
                return Err(CatalogError::DuplicateBreed(breed.name.clone()));
            }
        }

        tracing::debug!(
            "Loaded breed catalog {} ({} breeds, fingerprint {})",
            document.version,
            document.breeds.len(),
            &fingerprint[..12]
        );

        Ok(Self {
            version: document.version,
            fingerprint,
            breeds: document.breeds,
            index,
        })
    }

    /// Look up a breed by name.
    ///
    /// Surrounding whitespace is ignored; otherwise the name must match
    /// exactly. Unknown names fail with [`CatalogError::UnknownBreed`]
    /// carrying the closest known names.
    pub fn lookup(&self, name: &str) -> CatalogResult<&BreedReference> {
        self.get(name).ok_or_else(|| CatalogError::UnknownBreed {
            name: name.to_string(),
            suggestions: self.suggest(name, MAX_SUGGESTIONS),
        })
    }

    /// Look up a breed, returning `None` when absent.
    pub fn get(&self, name: &str) -> Option<&BreedReference> {
        self.index
            .get(name.trim())
            .and_then(|&position| self.breeds.get(position))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name.trim())
    }

    /// Known breed names most similar to `name`.
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<String> {
        rank_similar(name, self.breed_names(), limit)
    }

    /// Breed names in document order (form dropdown order).
    pub fn breed_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.breeds.iter().map(|b| b.name.as_str())
    }

    pub fn breeds(&self) -> &[BreedReference] {
        &self.breeds
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// SHA-256 of the canonical catalog JSON.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Serialize back to a document.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            version: self.version.clone(),
            breeds: self.breeds.clone(),
        }
    }
}

fn validate_entry(breed: &BreedReference) -> CatalogResult<()> {
    let invalid = |reason: String| CatalogError::InvalidEntry {
        breed: breed.name.clone(),
        reason,
    };

    if breed.name.trim().is_empty() {
        return Err(invalid("empty breed name".into()));
    }
    for bracket in [AgeBracket::Puppy, AgeBracket::Adult, AgeBracket::Senior] {
        let range = breed.weights.for_bracket(bracket);
        if !range.is_valid() {
            return Err(invalid(format!(
                "{} weight range {} is not a positive ordered range",
                bracket.as_str(),
                range.display()
            )));
        }
    }
    if breed.lifespan_years.is_nan() || breed.lifespan_years <= 0.0 {
        return Err(invalid(format!("lifespan {} must be positive", breed.lifespan_years)));
    }
    if !breed.adjustment.is_finite() {
        return Err(invalid("adjustment must be finite".into()));
    }
    Ok(())
}

/// SHA-256 over the canonical serialization of a document.
fn hash_document(document: &CatalogDocument) -> CatalogResult<String> {
    let canonical = serde_json::to_string(document)?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BracketWeights, WeightRange};

    fn breed(name: &str, adult: (f64, f64)) -> BreedReference {
        let range = WeightRange::new(adult.0, adult.1);
        BreedReference {
            name: name.into(),
            weights: BracketWeights {
                puppy: range,
                adult: range,
                senior: range,
            },
            lifespan_years: 13.0,
            adjustment: 0.0,
        }
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = BreedCatalog::builtin().unwrap();
        assert!(catalog.len() >= 50);
        assert!(!catalog.version().is_empty());
        assert_eq!(catalog.fingerprint().len(), 64);
    }

    #[test]
    fn test_builtin_reference_values() {
        let catalog = BreedCatalog::builtin().unwrap();

        let chihuahua = catalog.lookup("치와와").unwrap();
        assert_eq!(chihuahua.adjustment, 2.0);
        assert_eq!(chihuahua.lifespan_years, 17.0);

        let maltese = catalog.lookup("말티즈").unwrap();
        assert_eq!(maltese.adjustment, 1.0);
        assert_eq!(maltese.weights.adult, WeightRange::new(2.0, 4.0));

        assert_eq!(catalog.lookup("포메라니안").unwrap().adjustment, 1.0);
    }

    #[test]
    fn test_only_small_breeds_carry_adjustment() {
        let catalog = BreedCatalog::builtin().unwrap();
        let mut adjusted: Vec<(&str, f64)> = catalog
            .breeds()
            .iter()
            .filter(|b| b.adjustment != 0.0)
            .map(|b| (b.name.as_str(), b.adjustment))
            .collect();
        adjusted.sort_by(|a, b| a.0.cmp(b.0));

        assert_eq!(
            adjusted,
            vec![("말티즈", 1.0), ("치와와", 2.0), ("포메라니안", 1.0)]
        );
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        let catalog = BreedCatalog::builtin().unwrap();
        assert!(catalog.lookup("  말티즈 ").is_ok());
        assert!(catalog.contains("진돗개\n"));
    }

    #[test]
    fn test_lookup_unknown_breed_suggests() {
        let catalog = BreedCatalog::builtin().unwrap();
        match catalog.lookup("말티스") {
            Err(CatalogError::UnknownBreed { name, suggestions }) => {
                assert_eq!(name, "말티스");
                assert_eq!(suggestions.first().map(String::as_str), Some("말티즈"));
                assert!(suggestions.len() <= MAX_SUGGESTIONS);
            }
            other => panic!("expected UnknownBreed, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_unknown_without_similar_names() {
        let catalog = BreedCatalog::builtin().unwrap();
        match catalog.lookup("xyzzy") {
            Err(CatalogError::UnknownBreed { suggestions, .. }) => assert!(suggestions.is_empty()),
            other => panic!("expected UnknownBreed, got {:?}", other),
        }
    }

    #[test]
    fn test_breed_names_in_document_order() {
        let document = CatalogDocument {
            version: "test".into(),
            breeds: vec![breed("B", (1.0, 2.0)), breed("A", (3.0, 4.0))],
        };
        let catalog = BreedCatalog::from_document(document).unwrap();
        let names: Vec<&str> = catalog.breed_names().collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_duplicate_breed_rejected() {
        let document = CatalogDocument {
            version: "test".into(),
            breeds: vec![breed("A", (1.0, 2.0)), breed("A", (3.0, 4.0))],
        };
        assert_eq!(
            BreedCatalog::from_document(document).unwrap_err(),
            CatalogError::DuplicateBreed("A".into())
        );
    }

    #[test]
    fn test_invalid_range_rejected() {
        let document = CatalogDocument {
            version: "test".into(),
            breeds: vec![breed("A", (5.0, 2.0))],
        };
        assert!(matches!(
            BreedCatalog::from_document(document),
            Err(CatalogError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn test_invalid_lifespan_rejected() {
        let mut entry = breed("A", (1.0, 2.0));
        entry.lifespan_years = 0.0;
        let document = CatalogDocument {
            version: "test".into(),
            breeds: vec![entry],
        };
        assert!(matches!(
            BreedCatalog::from_document(document),
            Err(CatalogError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            BreedCatalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let a = BreedCatalog::from_document(CatalogDocument {
            version: "v1".into(),
            breeds: vec![breed("A", (1.0, 2.0))],
        })
        .unwrap();
        let same = BreedCatalog::from_json(&serde_json::to_string(&a.to_document()).unwrap()).unwrap();
        let changed = BreedCatalog::from_document(CatalogDocument {
            version: "v1".into(),
            breeds: vec![breed("A", (1.0, 2.5))],
        })
        .unwrap();

        assert_eq!(a.fingerprint(), same.fingerprint());
        assert_ne!(a.fingerprint(), changed.fingerprint());
    }
}
