//! Symptom classification against the knowledge base

use rand::Rng;

use autocare_types::Finding;

use crate::knowledge::SymptomKnowledgeBase;

/// Confidence bounds for knowledge-base matches
const MATCH_CONFIDENCE_MIN: f64 = 0.70;
const MATCH_CONFIDENCE_MAX: f64 = 0.95;

/// Confidence assigned to the fallback finding
const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Build the lowercased text scanned by the classifier and the advisor.
///
/// Symptom tokens are joined with single spaces, then the free-text
/// description is appended.
pub fn build_symptom_text(symptoms: &[String], description: &str) -> String {
    let mut parts: Vec<&str> = symptoms.iter().map(String::as_str).collect();
    parts.push(description);
    parts.join(" ").to_lowercase()
}

/// Classify symptom input into candidate-cause findings.
///
/// Convenience wrapper over [classify_text] that builds the symptom text
/// first.
pub fn classify_symptoms<R: Rng>(
    kb: &SymptomKnowledgeBase,
    symptoms: &[String],
    description: &str,
    rng: &mut R,
) -> Vec<Finding> {
    classify_text(kb, &build_symptom_text(symptoms, description), rng)
}

/// Classify pre-built symptom text into candidate-cause findings.
///
/// Symptom keys match as plain substrings of the text, so a key can also
/// match inside a longer word; this coarse heuristic is part of the
/// contract. Every cause of a matched row becomes one finding with a
/// confidence drawn uniformly from [MATCH_CONFIDENCE_MIN, MATCH_CONFIDENCE_MAX]
/// using the injected generator.
///
/// Always returns at least one finding: when nothing matches, a single
/// generic fallback finding is produced. The result is sorted by confidence
/// descending; the sort is stable, so equal confidences keep discovery
/// order.
pub fn classify_text<R: Rng>(kb: &SymptomKnowledgeBase, text: &str, rng: &mut R) -> Vec<Finding> {
    let mut findings = Vec::new();
    for system in kb.systems() {
        for symptom in &system.symptoms {
            if text.contains(symptom.key.as_str()) {
                for cause in &symptom.causes {
                    findings.push(Finding {
                        system: system.name.clone(),
                        symptom: symptom.key.clone(),
                        cause: cause.clone(),
                        confidence: rng.gen_range(MATCH_CONFIDENCE_MIN..=MATCH_CONFIDENCE_MAX),
                    });
                }
            }
        }
    }
    if findings.is_empty() {
        findings.push(fallback_finding());
    }
    findings.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    findings
}

fn fallback_finding() -> Finding {
    Finding {
        system: "general".to_string(),
        symptom: "unspecified".to_string(),
        cause: "Needs inspection".to_string(),
        confidence: FALLBACK_CONFIDENCE,
    }
}
