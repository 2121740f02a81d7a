//! Maintenance due-status calculation

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use autocare_types::{DueStatus, ServiceFact, Urgency};

use crate::model::{MaintenanceRule, VehicleSnapshot};

use super::DAYS_PER_MONTH;

/// Maximum number of due-status entries reported per vehicle
pub const MAX_DUE_ITEMS: usize = 10;

/// Compute the due status of every rule against the vehicle.
///
/// `history` maps service type to the latest known service facts. Rules
/// without history accrue distance from the vehicle's origin (last km
/// defaults to 0) and no time (elapsed months default to 0). Months use the
/// schedule's 30-day approximation.
///
/// The result is sorted most urgent first; the sort is stable, so rules of
/// equal urgency keep their catalog order. At most [MAX_DUE_ITEMS] entries
/// are returned.
pub fn compute_due_statuses(
    vehicle: &VehicleSnapshot,
    rules: &[MaintenanceRule],
    history: &HashMap<String, ServiceFact>,
    now: DateTime<Utc>,
) -> Vec<DueStatus> {
    let mut statuses: Vec<DueStatus> = rules
        .iter()
        .map(|rule| due_status_for_rule(vehicle, rule, history.get(&rule.service_type), now))
        .collect();
    statuses.sort_by_key(|s| s.urgency.rank());
    statuses.truncate(MAX_DUE_ITEMS);
    statuses
}

fn due_status_for_rule(
    vehicle: &VehicleSnapshot,
    rule: &MaintenanceRule,
    last: Option<&ServiceFact>,
    now: DateTime<Utc>,
) -> DueStatus {
    let last_km = last.map(|fact| fact.km).unwrap_or(0);
    let km_remaining = rule.interval_km - (vehicle.current_km - last_km);

    let months_elapsed = match last {
        Some(fact) => {
            let days = (now.date_naive() - fact.date).num_days();
            days as f64 / DAYS_PER_MONTH as f64
        }
        None => 0.0,
    };
    let months_remaining = f64::from(rule.interval_months) - months_elapsed;

    DueStatus {
        service_type: rule.service_type.clone(),
        km_remaining,
        // urgency is classified on the raw value; only the stored field is rounded
        months_remaining: round1(months_remaining),
        urgency: Urgency::classify(km_remaining, months_remaining),
        description: rule.description.clone(),
        cost: rule.cost,
        difficulty: rule.difficulty,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
