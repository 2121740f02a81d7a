//! Maintenance rule type definitions

use serde::{Deserialize, Serialize};

use autocare_types::{CostRange, Difficulty};

use super::vehicle::VehicleSnapshot;

/// One rule from the maintenance schedule catalog. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRule {
    /// Service type key (e.g., "oil_change")
    pub service_type: String,
    /// Manufacturer filter; None matches any make
    #[serde(default)]
    pub make: Option<String>,
    /// Model filter; None matches any model
    #[serde(default)]
    pub model: Option<String>,
    /// First model year covered (inclusive)
    pub year_start: i32,
    /// Last model year covered (inclusive)
    pub year_end: i32,
    /// Distance interval in km
    pub interval_km: i64,
    /// Time interval in months
    pub interval_months: u32,
    /// Human-readable description
    pub description: String,
    /// Estimated cost range
    pub cost: CostRange,
    /// Difficulty tier
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Whether the service is safety-critical
    #[serde(default)]
    pub critical: bool,
}

impl MaintenanceRule {
    /// Whether this rule applies to the given vehicle.
    ///
    /// A missing make or model acts as a wildcard; year bounds are
    /// inclusive; string comparison is exact and case-sensitive.
    pub fn matches(&self, vehicle: &VehicleSnapshot) -> bool {
        let make_ok = self.make.as_deref().map_or(true, |m| m == vehicle.make);
        let model_ok = self.model.as_deref().map_or(true, |m| m == vehicle.model);
        make_ok && model_ok && self.year_start <= vehicle.year && vehicle.year <= self.year_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(make: Option<&str>, model: Option<&str>, year_start: i32, year_end: i32) -> MaintenanceRule {
        MaintenanceRule {
            service_type: "oil_change".to_string(),
            make: make.map(str::to_string),
            model: model.map(str::to_string),
            year_start,
            year_end,
            interval_km: 5000,
            interval_months: 6,
            description: "Engine oil and filter change".to_string(),
            cost: CostRange { min: 30, max: 70 },
            difficulty: Difficulty::Easy,
            critical: true,
        }
    }

    fn corolla_2018() -> VehicleSnapshot {
        VehicleSnapshot {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2018,
            current_km: 40000,
        }
    }

    #[test]
    fn test_wildcard_rule_matches_any_vehicle() {
        assert!(rule(None, None, 1970, 2030).matches(&corolla_2018()));
    }

    #[test]
    fn test_make_filter() {
        assert!(rule(Some("Toyota"), None, 1970, 2030).matches(&corolla_2018()));
        assert!(!rule(Some("Honda"), None, 1970, 2030).matches(&corolla_2018()));
    }

    #[test]
    fn test_model_filter() {
        assert!(rule(Some("Toyota"), Some("Corolla"), 1970, 2030).matches(&corolla_2018()));
        assert!(!rule(Some("Toyota"), Some("Camry"), 1970, 2030).matches(&corolla_2018()));
    }

    #[test]
    fn test_year_bounds_inclusive() {
        assert!(rule(None, None, 2018, 2018).matches(&corolla_2018()));
        assert!(!rule(None, None, 2019, 2030).matches(&corolla_2018()));
        assert!(!rule(None, None, 1970, 2017).matches(&corolla_2018()));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(!rule(Some("toyota"), None, 1970, 2030).matches(&corolla_2018()));
    }
}
