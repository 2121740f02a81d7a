//! Boundary validation for user-supplied values
//!
//! The decision engines assume well-formed numeric input; everything coming
//! in from the CLI or an import file is checked here first.

use chrono::NaiveDate;

use autocare_types::{Error, Result};

/// Model years accepted at registration
const YEAR_MIN: i32 = 1900;
const YEAR_MAX: i32 = 2100;

/// Reject negative odometer values
pub fn validate_km(km: i64) -> Result<()> {
    if km < 0 {
        return Err(Error::InvalidInput(format!(
            "odometer reading must not be negative (got {})",
            km
        )));
    }
    Ok(())
}

/// Reject model years outside the accepted window
pub fn validate_year(year: i32) -> Result<()> {
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return Err(Error::InvalidInput(format!(
            "model year must be between {} and {} (got {})",
            YEAR_MIN, YEAR_MAX, year
        )));
    }
    Ok(())
}

/// Reject service dates in the future
pub fn validate_service_date(date: NaiveDate, today: NaiveDate) -> Result<()> {
    if date > today {
        return Err(Error::InvalidInput(format!(
            "service date {} is in the future",
            date
        )));
    }
    Ok(())
}

/// Reject negative costs
pub fn validate_cost(cost: f64) -> Result<()> {
    if !cost.is_finite() || cost < 0.0 {
        return Err(Error::InvalidInput(format!(
            "cost must be a non-negative number (got {})",
            cost
        )));
    }
    Ok(())
}

/// Reject empty or whitespace-only identifiers (make, model, service type)
pub fn validate_name(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_km_bounds() {
        assert!(validate_km(0).is_ok());
        assert!(validate_km(250000).is_ok());
        assert!(validate_km(-1).is_err());
    }

    #[test]
    fn test_year_window() {
        assert!(validate_year(1900).is_ok());
        assert!(validate_year(2100).is_ok());
        assert!(validate_year(1899).is_err());
        assert!(validate_year(2101).is_err());
    }

    #[test]
    fn test_service_date_not_in_future() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert!(validate_service_date(today, today).is_ok());
        assert!(validate_service_date(today.pred_opt().unwrap(), today).is_ok());
        assert!(validate_service_date(today.succ_opt().unwrap(), today).is_err());
    }

    #[test]
    fn test_cost_bounds() {
        assert!(validate_cost(0.0).is_ok());
        assert!(validate_cost(199.99).is_ok());
        assert!(validate_cost(-0.01).is_err());
        assert!(validate_cost(f64::NAN).is_err());
    }

    #[test]
    fn test_names_must_be_nonempty() {
        assert!(validate_name("make", "Toyota").is_ok());
        assert!(validate_name("make", "  ").is_err());
    }
}
