//! Make/model catalog queries

use autocare_infra::reference::{CatalogModel, YearLookup};
use autocare_types::Result;

use crate::config::Config;
use crate::repository::load_vehicle_catalog;

/// Distinct catalog makes, sorted alphabetically
pub fn catalog_makes(config: &Config) -> Result<Vec<String>> {
    let catalog = load_vehicle_catalog(config)?;
    Ok(catalog.makes().into_iter().map(str::to_string).collect())
}

/// Catalog models, optionally filtered by make and model year
pub fn catalog_models(
    config: &Config,
    make: Option<&str>,
    year: Option<i32>,
) -> Result<Vec<CatalogModel>> {
    let catalog = load_vehicle_catalog(config)?;
    Ok(catalog.models(make, year).into_iter().cloned().collect())
}

/// Year range for a make/model pair; unknown pairs fall back to the
/// generic range
pub fn catalog_years(config: &Config, make: &str, model: &str) -> Result<YearLookup> {
    let catalog = load_vehicle_catalog(config)?;
    Ok(catalog.years(make, model))
}
