//! Domain services: the maintenance and diagnostic decision engines

pub mod advisor;
pub mod classifier;
pub mod due;
pub mod projection;

pub use advisor::{analyze_symptoms, derive_severity, MAX_FINDINGS};
pub use classifier::{build_symptom_text, classify_symptoms, classify_text};
pub use due::{compute_due_statuses, MAX_DUE_ITEMS};
pub use projection::project_initial_schedule;

/// Days per month used by all schedule arithmetic
pub(crate) const DAYS_PER_MONTH: i64 = 30;
