//! Maintenance schedule catalog loaded from TOML

use std::fs;
use std::path::Path;

use serde::Deserialize;

use autocare_domain::model::{MaintenanceRule, VehicleSnapshot};
use autocare_types::{ReferenceError, Result};

/// Container for parsing schedules.toml
#[derive(Debug, Deserialize)]
struct ScheduleCatalogConfig {
    rules: Vec<MaintenanceRule>,
}

/// Maintenance rules in catalog order
#[derive(Debug)]
pub struct ScheduleCatalog {
    rules: Vec<MaintenanceRule>,
}

impl ScheduleCatalog {
    /// Load a schedule catalog from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ReferenceError::NotFound(format!("{}: {}", path.display(), e))
        })?;
        Self::load_from_str(&content)
    }

    /// Load a schedule catalog from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: ScheduleCatalogConfig = toml::from_str(toml_content).map_err(|e| {
            ReferenceError::ParseError(format!("Failed to parse schedule catalog: {}", e))
        })?;
        let catalog = Self { rules: config.rules };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        for rule in &self.rules {
            if rule.service_type.trim().is_empty() {
                return Err(
                    ReferenceError::Invalid("rule with empty service type".to_string()).into(),
                );
            }
            if rule.interval_km <= 0 {
                return Err(ReferenceError::Invalid(format!(
                    "rule '{}' must have a positive km interval",
                    rule.service_type
                ))
                .into());
            }
            if rule.interval_months == 0 {
                return Err(ReferenceError::Invalid(format!(
                    "rule '{}' must have a positive month interval",
                    rule.service_type
                ))
                .into());
            }
            if rule.year_start > rule.year_end {
                return Err(ReferenceError::Invalid(format!(
                    "rule '{}' has an inverted year range",
                    rule.service_type
                ))
                .into());
            }
            if rule.cost.min > rule.cost.max {
                return Err(ReferenceError::Invalid(format!(
                    "rule '{}' has an inverted cost range",
                    rule.service_type
                ))
                .into());
            }
        }
        Ok(())
    }

    /// All rules in catalog order
    pub fn rules(&self) -> &[MaintenanceRule] {
        &self.rules
    }

    /// Rules matching the vehicle; catalog order is preserved
    pub fn matching_rules(&self, vehicle: &VehicleSnapshot) -> Vec<MaintenanceRule> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(vehicle))
            .cloned()
            .collect()
    }

    /// Get the total number of rules
    pub fn count(&self) -> usize {
        self.rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOML: &str = r#"
[[rules]]
service_type = "oil_change"
year_start = 1970
year_end = 2030
interval_km = 5000
interval_months = 6
description = "Engine oil and filter change"
cost = { min = 30, max = 70 }
difficulty = "easy"
critical = true

[[rules]]
service_type = "timing_belt"
make = "Toyota"
model = "Corolla"
year_start = 1998
year_end = 2015
interval_km = 100000
interval_months = 60
description = "Timing belt replacement"
cost = { min = 400, max = 900 }
difficulty = "professional"
critical = true

[[rules]]
service_type = "tire_rotation"
year_start = 1970
year_end = 2030
interval_km = 10000
interval_months = 12
description = "Rotate tires front to back"
cost = { min = 20, max = 50 }
difficulty = "easy"
"#;

    fn corolla(year: i32) -> VehicleSnapshot {
        VehicleSnapshot {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year,
            current_km: 50000,
        }
    }

    #[test]
    fn test_load_from_str() {
        let catalog = ScheduleCatalog::load_from_str(TEST_TOML).unwrap();
        assert_eq!(catalog.count(), 3);
        assert_eq!(catalog.rules()[0].service_type, "oil_change");
        assert!(!catalog.rules()[2].critical);
    }

    #[test]
    fn test_matching_rules_applies_filters() {
        let catalog = ScheduleCatalog::load_from_str(TEST_TOML).unwrap();
        // 2010 Corolla gets the scoped timing belt rule
        let matched = catalog.matching_rules(&corolla(2010));
        assert_eq!(matched.len(), 3);
        // 2020 Corolla is outside the timing belt years
        let matched = catalog.matching_rules(&corolla(2020));
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|r| r.service_type != "timing_belt"));
    }

    #[test]
    fn test_matching_preserves_catalog_order() {
        let catalog = ScheduleCatalog::load_from_str(TEST_TOML).unwrap();
        let matched = catalog.matching_rules(&corolla(2010));
        let order: Vec<&str> = matched.iter().map(|r| r.service_type.as_str()).collect();
        assert_eq!(order, vec!["oil_change", "timing_belt", "tire_rotation"]);
    }

    #[test]
    fn test_rejects_zero_km_interval() {
        let toml = r#"
[[rules]]
service_type = "oil_change"
year_start = 1970
year_end = 2030
interval_km = 0
interval_months = 6
description = "Engine oil and filter change"
cost = { min = 30, max = 70 }
"#;
        assert!(ScheduleCatalog::load_from_str(toml).is_err());
    }

    #[test]
    fn test_rejects_inverted_year_range() {
        let toml = r#"
[[rules]]
service_type = "oil_change"
year_start = 2030
year_end = 1970
interval_km = 5000
interval_months = 6
description = "Engine oil and filter change"
cost = { min = 30, max = 70 }
"#;
        assert!(ScheduleCatalog::load_from_str(toml).is_err());
    }

    #[test]
    fn test_missing_file_is_a_reference_error() {
        let result = ScheduleCatalog::load_from_file(Path::new("/nonexistent/schedules.toml"));
        assert!(result.is_err());
    }
}
