//! Symptom knowledge base: system -> symptom key -> candidate causes

use serde::Deserialize;

use autocare_types::{ReferenceError, Result};

/// Two-level symptom lookup table.
///
/// Entry order is preserved from the source document; the classifier scans
/// systems and their symptom rows in declaration order, which fixes the
/// discovery order of equal-confidence findings.
#[derive(Debug, Clone, Deserialize)]
pub struct SymptomKnowledgeBase {
    systems: Vec<SystemEntry>,
}

/// One vehicle system and its symptom rows
#[derive(Debug, Clone, Deserialize)]
pub struct SystemEntry {
    /// System name (e.g., "engine")
    pub name: String,
    /// Symptom rows in declaration order
    pub symptoms: Vec<SymptomEntry>,
}

/// One symptom key and its candidate causes
#[derive(Debug, Clone, Deserialize)]
pub struct SymptomEntry {
    /// Lowercase key matched as a substring of the symptom text
    pub key: String,
    /// Candidate causes in declaration order
    pub causes: Vec<String>,
}

impl SymptomKnowledgeBase {
    /// Parse a knowledge base from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let kb: SymptomKnowledgeBase = toml::from_str(content).map_err(|e| {
            ReferenceError::ParseError(format!("Failed to parse symptom knowledge base: {}", e))
        })?;
        kb.validate()?;
        Ok(kb)
    }

    fn validate(&self) -> Result<()> {
        if self.systems.is_empty() {
            return Err(
                ReferenceError::Invalid("knowledge base defines no systems".to_string()).into(),
            );
        }
        for system in &self.systems {
            if system.name.trim().is_empty() {
                return Err(
                    ReferenceError::Invalid("system with empty name".to_string()).into(),
                );
            }
            for symptom in &system.symptoms {
                if symptom.key.trim().is_empty() {
                    return Err(ReferenceError::Invalid(format!(
                        "empty symptom key under system '{}'",
                        system.name
                    ))
                    .into());
                }
                if symptom.key != symptom.key.to_lowercase() {
                    return Err(ReferenceError::Invalid(format!(
                        "symptom key '{}' must be lowercase; keys are matched against lowercased text",
                        symptom.key
                    ))
                    .into());
                }
                if symptom.causes.is_empty() {
                    return Err(ReferenceError::Invalid(format!(
                        "symptom '{}' lists no causes",
                        symptom.key
                    ))
                    .into());
                }
            }
        }
        Ok(())
    }

    /// Systems in declaration order
    pub fn systems(&self) -> &[SystemEntry] {
        &self.systems
    }

    /// Total number of symptom rows across all systems
    pub fn symptom_count(&self) -> usize {
        self.systems.iter().map(|s| s.symptoms.len()).sum()
    }
}
