//! Severity derivation and diagnostic assembly

use rand::Rng;

use autocare_types::{DiagnosticResult, Finding, Severity};

use crate::knowledge::{RepairGuideTable, SymptomKnowledgeBase};
use crate::model::VehicleSnapshot;

use super::classifier::{build_symptom_text, classify_text};

/// Systems that can escalate to high severity
const HIGH_SEVERITY_SYSTEMS: [&str; 2] = ["engine", "brakes"];

/// Systems that default to medium severity
const MEDIUM_SEVERITY_SYSTEMS: [&str; 3] = ["engine", "brakes", "transmission"];

/// Tokens that escalate an engine or brake issue to high severity
const ALARM_TOKENS: [&str; 3] = ["overheating", "knocking", "grinding"];

/// Maximum number of findings reported in a diagnostic result
pub const MAX_FINDINGS: usize = 5;

/// Derive severity from the primary finding's system and the symptom text.
///
/// Only the primary finding is consulted; secondary findings never raise
/// severity. An alarm token escalates to high only when the primary system
/// is engine or brakes: a transmission issue stays medium even when the
/// text mentions grinding.
pub fn derive_severity(primary_system: &str, text: &str) -> Severity {
    let alarmed = ALARM_TOKENS.iter().any(|token| text.contains(token));
    if alarmed && HIGH_SEVERITY_SYSTEMS.contains(&primary_system) {
        Severity::High
    } else if MEDIUM_SEVERITY_SYSTEMS.contains(&primary_system) {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Run the full diagnostic pipeline against one vehicle.
///
/// Classifies the symptom text, derives severity from the primary finding,
/// and attaches repair advice for the primary cause. The aggregate
/// confidence is the mean over every finding the classifier produced, not
/// just the reported top [MAX_FINDINGS], rounded to two decimals.
pub fn analyze_symptoms<R: Rng>(
    vehicle: &VehicleSnapshot,
    kb: &SymptomKnowledgeBase,
    guides: &RepairGuideTable,
    symptoms: &[String],
    description: &str,
    rng: &mut R,
) -> DiagnosticResult {
    let text = build_symptom_text(symptoms, description);
    // classify_text always yields at least the fallback finding
    let findings = classify_text(kb, &text, rng);

    let confidence = mean_confidence(&findings);
    let primary = findings[0].clone();
    let severity = derive_severity(&primary.system, &text);
    let advice = guides.advice_for(&primary.cause);

    let mut top = findings;
    top.truncate(MAX_FINDINGS);

    DiagnosticResult {
        vehicle: vehicle.info(),
        primary,
        findings: top,
        confidence,
        severity,
        advice,
    }
}

fn mean_confidence(findings: &[Finding]) -> f64 {
    let sum: f64 = findings.iter().map(|f| f.confidence).sum();
    round2(sum / findings.len() as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
