//! Core types for maintenance tracking and symptom diagnostics

use serde::{Deserialize, Serialize};

/// Urgency tier for a due maintenance item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Interval already exceeded (km or months)
    Overdue,
    /// Less than 1000 km or 1 month remaining
    Critical,
    /// Less than 3000 km or 3 months remaining
    Soon,
    /// Everything else
    Upcoming,
}

impl Urgency {
    /// Classify remaining distance/time into a tier.
    ///
    /// Precedence is fixed: overdue, then critical, then soon. The first
    /// matching condition wins, so `km_remaining = -500` is overdue even
    /// when plenty of months remain.
    pub fn classify(km_remaining: i64, months_remaining: f64) -> Self {
        match (km_remaining, months_remaining) {
            (km, m) if km <= 0 || m <= 0.0 => Urgency::Overdue,
            (km, m) if km < 1000 || m < 1.0 => Urgency::Critical,
            (km, m) if km < 3000 || m < 3.0 => Urgency::Soon,
            _ => Urgency::Upcoming,
        }
    }

    /// Sort rank, most urgent first
    pub fn rank(&self) -> u8 {
        match self {
            Urgency::Overdue => 0,
            Urgency::Critical => 1,
            Urgency::Soon => 2,
            Urgency::Upcoming => 3,
        }
    }

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Overdue => "overdue",
            Urgency::Critical => "critical",
            Urgency::Soon => "soon",
            Urgency::Upcoming => "upcoming",
        }
    }
}

/// Severity tier for a diagnostic result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

/// Difficulty tier for a service or repair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Professional,
    #[default]
    Unknown,
}

impl Difficulty {
    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Professional => "professional",
            Difficulty::Unknown => "unknown",
        }
    }
}

/// Estimated cost range in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: u32,
    pub max: u32,
}

impl std::fmt::Display for CostRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}-${}", self.min, self.max)
    }
}

/// Vehicle registered in the local store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredVehicle {
    /// Unique identifier
    pub id: String,
    /// Manufacturer name (e.g., "Toyota")
    pub make: String,
    /// Model name (e.g., "Corolla")
    pub model: String,
    /// Model year
    pub year: i32,
    /// Vehicle identification number (optional)
    #[serde(default)]
    pub vin: Option<String>,
    /// Engine type (e.g., "1.8L I4") (optional)
    #[serde(default)]
    pub engine_type: Option<String>,
    /// Transmission type (e.g., "CVT") (optional)
    #[serde(default)]
    pub transmission: Option<String>,
    /// Latest known odometer value in km
    pub current_km: i64,
    /// When registered
    pub registered_at: chrono::DateTime<chrono::Utc>,
    /// When the odometer was last explicitly submitted
    #[serde(default)]
    pub last_km_update: Option<chrono::DateTime<chrono::Utc>>,
}

impl RegisteredVehicle {
    pub fn new(
        make: String,
        model: String,
        year: i32,
        current_km: i64,
        registered_at: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            make,
            model,
            year,
            vin: None,
            engine_type: None,
            transmission: None,
            current_km,
            registered_at,
            last_km_update: None,
        }
    }

    pub fn with_vin(mut self, vin: String) -> Self {
        self.vin = Some(vin);
        self
    }

    pub fn with_drivetrain(
        mut self,
        engine_type: Option<String>,
        transmission: Option<String>,
    ) -> Self {
        self.engine_type = engine_type;
        self.transmission = transmission;
        self
    }

    /// Display name like "2018 Toyota Corolla"
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

/// Most recent service facts for one service type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFact {
    /// Latest recorded service date
    pub date: chrono::NaiveDate,
    /// Highest recorded odometer reading at service time
    pub km: i64,
}

/// One logged maintenance event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEvent {
    /// Unique identifier
    pub id: String,
    /// Owning vehicle id
    pub vehicle_id: String,
    /// Service type key (e.g., "oil_change")
    pub service_type: String,
    /// Odometer reading at service time in km
    pub km_reading: i64,
    /// Date the service was performed
    pub date_performed: chrono::NaiveDate,
    /// Cost paid (optional)
    #[serde(default)]
    pub cost: Option<f64>,
    /// Workshop name (optional)
    #[serde(default)]
    pub workshop: Option<String>,
    /// Free-form notes (optional)
    #[serde(default)]
    pub notes: Option<String>,
    /// When the event was logged
    pub logged_at: chrono::DateTime<chrono::Utc>,
}

impl ServiceEvent {
    pub fn new(
        vehicle_id: String,
        service_type: String,
        km_reading: i64,
        date_performed: chrono::NaiveDate,
        logged_at: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            vehicle_id,
            service_type,
            km_reading,
            date_performed,
            cost: None,
            workshop: None,
            notes: None,
            logged_at,
        }
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_workshop(mut self, workshop: String) -> Self {
        self.workshop = Some(workshop);
        self
    }

    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }
}

/// One submitted odometer reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OdometerReading {
    /// Unique identifier
    pub id: String,
    /// Owning vehicle id
    pub vehicle_id: String,
    /// Odometer value in km
    pub km_reading: i64,
    /// When the reading was submitted
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}

impl OdometerReading {
    pub fn new(
        vehicle_id: String,
        km_reading: i64,
        recorded_at: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            vehicle_id,
            km_reading,
            recorded_at,
        }
    }
}

/// Due status of one maintenance rule against a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueStatus {
    /// Service type key
    pub service_type: String,
    /// Signed km remaining until due (negative = overdue)
    pub km_remaining: i64,
    /// Signed months remaining until due, rounded to one decimal
    pub months_remaining: f64,
    /// Urgency tier
    pub urgency: Urgency,
    /// Human-readable service description
    pub description: String,
    /// Estimated cost range
    pub cost: CostRange,
    /// Difficulty tier
    pub difficulty: Difficulty,
}

/// Projected first due point for one maintenance rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedService {
    /// Service type key
    pub service_type: String,
    /// Absolute odometer value at which the service falls due
    pub due_km: i64,
    /// Calendar date at which the service falls due
    pub due_date: chrono::DateTime<chrono::Utc>,
    /// Distance interval backing the projection
    pub interval_km: i64,
    /// Human-readable service description
    pub description: String,
    /// Estimated cost range
    pub cost: CostRange,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Whether the rule is safety-critical
    pub critical: bool,
}

/// Vehicle summary echoed in diagnostic results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub make: String,
    pub model: String,
    pub year: i32,
}

/// One candidate cause produced by the symptom classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Vehicle system (e.g., "engine")
    pub system: String,
    /// Matched symptom key (e.g., "overheating")
    pub symptom: String,
    /// Candidate cause
    pub cause: String,
    /// Confidence in [0, 1]
    pub confidence: f64,
}

/// Where a repair guide came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideSource {
    /// Exact cause match in the repair guide table
    Catalog,
    /// No match; generic inspection guide substituted
    Generic,
}

/// Repair guidance attached to a diagnostic result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairAdvice {
    /// Ordered repair steps
    pub steps: Vec<String>,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Rough wall-clock estimate (e.g., "1-2 hours")
    pub estimated_time: String,
    /// Estimated cost range
    pub estimated_cost: CostRange,
    /// Catalog match or generic fallback
    pub source: GuideSource,
}

/// Full outcome of one symptom analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    /// Vehicle the analysis was run against
    pub vehicle: VehicleInfo,
    /// Highest-confidence finding
    pub primary: Finding,
    /// Up to five findings, confidence descending
    pub findings: Vec<Finding>,
    /// Mean confidence over all findings, rounded to two decimals
    pub confidence: f64,
    /// Severity tier derived from the primary finding
    pub severity: Severity,
    /// Repair guidance for the primary cause
    pub advice: RepairAdvice,
}

/// Persisted record of one diagnostic run. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// Unique identifier
    pub id: String,
    /// Owning vehicle id
    pub vehicle_id: String,
    /// Symptom tokens as submitted
    pub symptoms: Vec<String>,
    /// Free-text description as submitted
    pub description: String,
    /// The analysis outcome
    pub result: DiagnosticResult,
    /// When the analysis ran
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl DiagnosticReport {
    pub fn new(
        vehicle_id: String,
        symptoms: Vec<String>,
        description: String,
        result: DiagnosticResult,
        created_at: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            vehicle_id,
            symptoms,
            description,
            result,
            created_at,
        }
    }
}
