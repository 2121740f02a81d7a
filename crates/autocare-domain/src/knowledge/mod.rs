//! Injected reference knowledge for the diagnostic engine
//!
//! Both tables are read-only configuration supplied by the caller; the
//! engines never embed their contents.

pub mod repair_guides;
pub mod symptom_kb;

pub use repair_guides::RepairGuideTable;
pub use symptom_kb::{SymptomEntry, SymptomKnowledgeBase, SystemEntry};
