//! Make/model catalog loaded from TOML

use std::fs;
use std::path::Path;

use serde::Deserialize;

use autocare_types::{ReferenceError, Result};

/// Year range offered when a make/model is not in the catalog
const FALLBACK_YEAR_START: i32 = 1970;
const FALLBACK_YEAR_END: i32 = 2026;

/// Container for parsing vehicle_catalog.toml
#[derive(Debug, Deserialize)]
struct VehicleCatalogConfig {
    models: Vec<CatalogModel>,
}

/// One catalog row: a model and the years it was sold
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogModel {
    pub make: String,
    pub model: String,
    pub year_start: i32,
    pub year_end: i32,
}

/// Result of a year-range lookup for a make/model pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearLookup {
    /// The pair is in the catalog; range is inclusive
    Catalog { year_start: i32, year_end: i32 },
    /// Unknown pair; the generic fallback range is offered instead
    Fallback { year_start: i32, year_end: i32 },
}

impl YearLookup {
    /// All years in the range, ascending
    pub fn years(&self) -> Vec<i32> {
        let (start, end) = match *self {
            YearLookup::Catalog { year_start, year_end }
            | YearLookup::Fallback { year_start, year_end } => (year_start, year_end),
        };
        (start..=end).collect()
    }

    /// Whether this lookup fell back to the generic range
    pub fn is_fallback(&self) -> bool {
        matches!(self, YearLookup::Fallback { .. })
    }
}

/// Make/model reference catalog in declaration order
#[derive(Debug)]
pub struct VehicleCatalog {
    models: Vec<CatalogModel>,
}

impl VehicleCatalog {
    /// Load a vehicle catalog from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ReferenceError::NotFound(format!("{}: {}", path.display(), e)))?;
        Self::load_from_str(&content)
    }

    /// Load a vehicle catalog from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: VehicleCatalogConfig = toml::from_str(toml_content).map_err(|e| {
            ReferenceError::ParseError(format!("Failed to parse vehicle catalog: {}", e))
        })?;
        let catalog = Self { models: config.models };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        for entry in &self.models {
            if entry.make.trim().is_empty() || entry.model.trim().is_empty() {
                return Err(ReferenceError::Invalid(
                    "catalog entry with empty make or model".to_string(),
                )
                .into());
            }
            if entry.year_start > entry.year_end {
                return Err(ReferenceError::Invalid(format!(
                    "catalog entry '{} {}' has an inverted year range",
                    entry.make, entry.model
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Distinct makes, sorted alphabetically
    pub fn makes(&self) -> Vec<&str> {
        let mut makes: Vec<&str> = self.models.iter().map(|m| m.make.as_str()).collect();
        makes.sort_unstable();
        makes.dedup();
        makes
    }

    /// Catalog models, optionally filtered by make and by a year the model
    /// range must cover. Declaration order is preserved.
    pub fn models(&self, make: Option<&str>, year: Option<i32>) -> Vec<&CatalogModel> {
        self.models
            .iter()
            .filter(|m| make.map_or(true, |wanted| m.make == wanted))
            .filter(|m| year.map_or(true, |y| m.year_start <= y && y <= m.year_end))
            .collect()
    }

    /// Year range for a make/model pair.
    ///
    /// Unknown pairs get the generic fallback range rather than an error, so
    /// owners of uncatalogued vehicles can still register them.
    pub fn years(&self, make: &str, model: &str) -> YearLookup {
        match self.models.iter().find(|m| m.make == make && m.model == model) {
            Some(entry) => YearLookup::Catalog {
                year_start: entry.year_start,
                year_end: entry.year_end,
            },
            None => YearLookup::Fallback {
                year_start: FALLBACK_YEAR_START,
                year_end: FALLBACK_YEAR_END,
            },
        }
    }

    /// Get the total number of catalog entries
    pub fn count(&self) -> usize {
        self.models.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOML: &str = r#"
[[models]]
make = "Toyota"
model = "Corolla"
year_start = 1998
year_end = 2026

[[models]]
make = "Toyota"
model = "Camry"
year_start = 2002
year_end = 2024

[[models]]
make = "Honda"
model = "Civic"
year_start = 1995
year_end = 2026
"#;

    fn catalog() -> VehicleCatalog {
        VehicleCatalog::load_from_str(TEST_TOML).unwrap()
    }

    #[test]
    fn test_makes_sorted_and_distinct() {
        assert_eq!(catalog().makes(), vec!["Honda", "Toyota"]);
    }

    #[test]
    fn test_models_filtered_by_make() {
        let catalog = catalog();
        let models = catalog.models(Some("Toyota"), None);
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].model, "Corolla");
        assert_eq!(models[1].model, "Camry");
    }

    #[test]
    fn test_models_filtered_by_year() {
        // 1996 only falls inside the Civic range
        let catalog = catalog();
        let models = catalog.models(None, Some(1996));
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].model, "Civic");
    }

    #[test]
    fn test_years_for_known_model() {
        let lookup = catalog().years("Toyota", "Camry");
        assert_eq!(lookup, YearLookup::Catalog { year_start: 2002, year_end: 2024 });
        assert!(!lookup.is_fallback());
        assert_eq!(lookup.years().len(), 23);
    }

    #[test]
    fn test_years_for_unknown_model_falls_back() {
        let lookup = catalog().years("Lada", "Niva");
        assert!(lookup.is_fallback());
        let years = lookup.years();
        assert_eq!(years.first(), Some(&1970));
        assert_eq!(years.last(), Some(&2026));
    }

    #[test]
    fn test_rejects_inverted_year_range() {
        let toml = r#"
[[models]]
make = "Toyota"
model = "Corolla"
year_start = 2026
year_end = 1998
"#;
        assert!(VehicleCatalog::load_from_str(toml).is_err());
    }
}
