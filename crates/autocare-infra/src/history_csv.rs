//! CSV loader for bulk service-history import
//!
//! Accepts UTF-8 CSV files exported from other maintenance trackers.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use autocare_types::ServiceEvent;

#[derive(Error, Debug)]
pub enum HistoryCsvError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid date format in row {row}: {value}")]
    InvalidDate { row: usize, value: String },

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Empty service type in row {row}")]
    EmptyServiceType { row: usize },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Load service events for one vehicle from a CSV file
///
/// Expected CSV header:
/// `service_type,date,km_reading[,cost][,workshop][,notes]`
///
/// Every imported event is stamped with `logged_at` and the given vehicle
/// id. Row validation is strict: a single bad row fails the whole import so
/// partial histories are never written.
pub fn load_service_events<P: AsRef<Path>>(
    path: P,
    vehicle_id: &str,
    logged_at: DateTime<Utc>,
) -> Result<Vec<ServiceEvent>, HistoryCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    validate_headers(&headers)?;

    let mut events = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2; // header is row 1

        events.push(parse_record(&record, row_num, vehicle_id, logged_at)?);
    }

    Ok(events)
}

fn validate_headers(headers: &csv::StringRecord) -> Result<(), HistoryCsvError> {
    let required = ["service_type", "date", "km_reading"];

    for col in required {
        if !headers.iter().any(|h| h == col) {
            return Err(HistoryCsvError::MissingColumn(col.to_string()));
        }
    }

    Ok(())
}

fn parse_record(
    record: &csv::StringRecord,
    row_num: usize,
    vehicle_id: &str,
    logged_at: DateTime<Utc>,
) -> Result<ServiceEvent, HistoryCsvError> {
    let service_type = record.get(0).unwrap_or("").to_string();
    if service_type.is_empty() {
        return Err(HistoryCsvError::EmptyServiceType { row: row_num });
    }

    let date = parse_date(record.get(1).unwrap_or(""), row_num)?;
    let km_reading = parse_km(record.get(2).unwrap_or(""), row_num)?;

    let cost = record
        .get(3)
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
        .map(|s| parse_cost(s, row_num))
        .transpose()?;

    let workshop = record
        .get(4)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let notes = record
        .get(5)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let mut event = ServiceEvent::new(
        vehicle_id.to_string(),
        service_type,
        km_reading,
        date,
        logged_at,
    );
    event.cost = cost;
    event.workshop = workshop;
    event.notes = notes;

    Ok(event)
}

fn parse_date(s: &str, row: usize) -> Result<NaiveDate, HistoryCsvError> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d"];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(HistoryCsvError::InvalidDate {
        row,
        value: s.to_string(),
    })
}

fn parse_km(s: &str, row: usize) -> Result<i64, HistoryCsvError> {
    let cleaned = s.trim().replace(',', "");
    let invalid = || HistoryCsvError::InvalidNumber {
        row,
        column: "km_reading".to_string(),
        value: s.to_string(),
    };

    let km: i64 = cleaned.parse().map_err(|_| invalid())?;
    if km < 0 {
        return Err(invalid());
    }
    Ok(km)
}

fn parse_cost(s: &str, row: usize) -> Result<f64, HistoryCsvError> {
    let cleaned = s.trim().replace(',', "");
    let invalid = || HistoryCsvError::InvalidNumber {
        row,
        column: "cost".to_string(),
        value: s.to_string(),
    };

    let cost: f64 = cleaned.parse().map_err(|_| invalid())?;
    if cost < 0.0 {
        return Err(invalid());
    }
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_csv(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_full_rows() {
        let (_dir, path) = write_csv(
            "service_type,date,km_reading,cost,workshop,notes\n\
             oil_change,2025-07-01,35000,45.50,QuickLube,synthetic\n\
             tire_rotation,2025/10/15,38000,,,\n",
        );
        let events = load_service_events(&path, "v1", Utc::now()).unwrap();
        assert_eq!(events.len(), 2);

        assert_eq!(events[0].service_type, "oil_change");
        assert_eq!(events[0].km_reading, 35000);
        assert_eq!(events[0].cost, Some(45.5));
        assert_eq!(events[0].workshop.as_deref(), Some("QuickLube"));
        assert_eq!(events[0].notes.as_deref(), Some("synthetic"));
        assert_eq!(events[0].vehicle_id, "v1");

        // slash date format, optional columns empty
        assert_eq!(
            events[1].date_performed,
            NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()
        );
        assert!(events[1].cost.is_none());
        assert!(events[1].workshop.is_none());
    }

    #[test]
    fn test_short_rows_without_optional_columns() {
        let (_dir, path) = write_csv(
            "service_type,date,km_reading\n\
             brake_inspection,2026-01-05,41000\n",
        );
        let events = load_service_events(&path, "v1", Utc::now()).unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].cost.is_none());
    }

    #[test]
    fn test_missing_required_column() {
        let (_dir, path) = write_csv("service_type,km_reading\noil_change,35000\n");
        let err = load_service_events(&path, "v1", Utc::now()).unwrap_err();
        assert!(matches!(err, HistoryCsvError::MissingColumn(col) if col == "date"));
    }

    #[test]
    fn test_bad_date_reports_row() {
        let (_dir, path) = write_csv(
            "service_type,date,km_reading\n\
             oil_change,2025-07-01,35000\n\
             oil_change,July 1st,40000\n",
        );
        let err = load_service_events(&path, "v1", Utc::now()).unwrap_err();
        assert!(matches!(err, HistoryCsvError::InvalidDate { row: 3, .. }));
    }

    #[test]
    fn test_negative_km_rejected() {
        let (_dir, path) = write_csv("service_type,date,km_reading\noil_change,2025-07-01,-5\n");
        let err = load_service_events(&path, "v1", Utc::now()).unwrap_err();
        assert!(matches!(err, HistoryCsvError::InvalidNumber { row: 2, .. }));
    }

    #[test]
    fn test_km_with_thousands_separator() {
        let (_dir, path) = write_csv("service_type,date,km_reading\noil_change,2025-07-01,\"35,000\"\n");
        let events = load_service_events(&path, "v1", Utc::now()).unwrap();
        assert_eq!(events[0].km_reading, 35000);
    }
}
