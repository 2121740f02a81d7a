//! Initial maintenance schedule projection

use chrono::{DateTime, Duration, Utc};

use autocare_types::ProjectedService;

use crate::model::{MaintenanceRule, VehicleSnapshot};

use super::DAYS_PER_MONTH;

/// Project the first due point of every rule for a newly registered vehicle.
///
/// Due distance is the current odometer plus the rule's interval; due date is
/// the registration time plus `interval_months` 30-day months. Critical rules
/// come first; within each group the catalog order is kept.
///
/// This is a one-shot registration summary. It does not reset accrual: later
/// due-status checks still count distance from the vehicle's origin until a
/// service is logged.
pub fn project_initial_schedule(
    vehicle: &VehicleSnapshot,
    rules: &[MaintenanceRule],
    registered_at: DateTime<Utc>,
) -> Vec<ProjectedService> {
    let mut ordered: Vec<&MaintenanceRule> = rules.iter().collect();
    ordered.sort_by_key(|rule| !rule.critical);
    ordered
        .into_iter()
        .map(|rule| ProjectedService {
            service_type: rule.service_type.clone(),
            due_km: vehicle.current_km + rule.interval_km,
            due_date: registered_at
                + Duration::days(DAYS_PER_MONTH * i64::from(rule.interval_months)),
            interval_km: rule.interval_km,
            description: rule.description.clone(),
            cost: rule.cost,
            difficulty: rule.difficulty,
            critical: rule.critical,
        })
        .collect()
}
