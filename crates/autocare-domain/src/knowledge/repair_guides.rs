//! Repair guide table keyed by exact cause string

use serde::Deserialize;

use autocare_types::{CostRange, Difficulty, GuideSource, ReferenceError, RepairAdvice, Result};

/// Lookup table mapping diagnosed causes to repair guidance.
///
/// Causes match by exact string equality against the classifier's cause
/// text. Anything without an entry resolves to the mandatory `fallback`
/// guide, flagged as [GuideSource::Generic] in the produced advice.
#[derive(Debug, Clone, Deserialize)]
pub struct RepairGuideTable {
    #[serde(default)]
    guides: Vec<GuideEntry>,
    fallback: FallbackGuide,
}

/// One cause-specific guide
#[derive(Debug, Clone, Deserialize)]
struct GuideEntry {
    cause: String,
    steps: Vec<String>,
    difficulty: Difficulty,
    time: String,
    cost: CostRange,
}

/// The guide substituted when no cause matches
#[derive(Debug, Clone, Deserialize)]
struct FallbackGuide {
    steps: Vec<String>,
    difficulty: Difficulty,
    time: String,
    cost: CostRange,
}

impl RepairGuideTable {
    /// Parse a repair guide table from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: RepairGuideTable = toml::from_str(content).map_err(|e| {
            ReferenceError::ParseError(format!("Failed to parse repair guides: {}", e))
        })?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<()> {
        for guide in &self.guides {
            if guide.cause.trim().is_empty() {
                return Err(
                    ReferenceError::Invalid("repair guide with empty cause".to_string()).into(),
                );
            }
            if guide.steps.is_empty() {
                return Err(ReferenceError::Invalid(format!(
                    "repair guide '{}' lists no steps",
                    guide.cause
                ))
                .into());
            }
            if guide.cost.min > guide.cost.max {
                return Err(ReferenceError::Invalid(format!(
                    "repair guide '{}' has an inverted cost range",
                    guide.cause
                ))
                .into());
            }
            let duplicates = self.guides.iter().filter(|g| g.cause == guide.cause).count();
            if duplicates > 1 {
                return Err(ReferenceError::Invalid(format!(
                    "duplicate repair guide for cause '{}'",
                    guide.cause
                ))
                .into());
            }
        }
        if self.fallback.steps.is_empty() {
            return Err(
                ReferenceError::Invalid("fallback guide lists no steps".to_string()).into(),
            );
        }
        if self.fallback.cost.min > self.fallback.cost.max {
            return Err(ReferenceError::Invalid(
                "fallback guide has an inverted cost range".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Resolve repair advice for a diagnosed cause
    pub fn advice_for(&self, cause: &str) -> RepairAdvice {
        match self.guides.iter().find(|g| g.cause == cause) {
            Some(guide) => RepairAdvice {
                steps: guide.steps.clone(),
                difficulty: guide.difficulty,
                estimated_time: guide.time.clone(),
                estimated_cost: guide.cost,
                source: GuideSource::Catalog,
            },
            None => RepairAdvice {
                steps: self.fallback.steps.clone(),
                difficulty: self.fallback.difficulty,
                estimated_time: self.fallback.time.clone(),
                estimated_cost: self.fallback.cost,
                source: GuideSource::Generic,
            },
        }
    }

    /// Number of cause-specific guides
    pub fn guide_count(&self) -> usize {
        self.guides.len()
    }

    /// Covered causes in declaration order
    pub fn causes(&self) -> impl Iterator<Item = &str> {
        self.guides.iter().map(|g| g.cause.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOML: &str = r#"
[[guides]]
cause = "Worn pads"
steps = ["Remove wheel", "Inspect caliper", "Replace pads", "Bed in brakes"]
difficulty = "easy"
time = "1-2 hours"
cost = { min = 50, max = 200 }

[fallback]
steps = ["Inspect component", "Consult manual", "Consider professional service"]
difficulty = "unknown"
time = "Unknown"
cost = { min = 100, max = 1000 }
"#;

    #[test]
    fn test_known_cause_uses_catalog_guide() {
        let table = RepairGuideTable::from_toml_str(TEST_TOML).unwrap();
        let advice = table.advice_for("Worn pads");
        assert_eq!(advice.source, GuideSource::Catalog);
        assert_eq!(advice.difficulty, Difficulty::Easy);
        assert_eq!(advice.estimated_time, "1-2 hours");
        assert_eq!(advice.estimated_cost, CostRange { min: 50, max: 200 });
        assert_eq!(advice.steps.len(), 4);
    }

    #[test]
    fn test_unknown_cause_falls_back_to_generic() {
        let table = RepairGuideTable::from_toml_str(TEST_TOML).unwrap();
        let advice = table.advice_for("Flux capacitor drift");
        assert_eq!(advice.source, GuideSource::Generic);
        assert_eq!(advice.difficulty, Difficulty::Unknown);
        assert_eq!(advice.estimated_time, "Unknown");
        assert_eq!(advice.estimated_cost, CostRange { min: 100, max: 1000 });
        assert_eq!(advice.steps.len(), 3);
    }

    #[test]
    fn test_cause_match_is_exact() {
        let table = RepairGuideTable::from_toml_str(TEST_TOML).unwrap();
        assert_eq!(table.advice_for("worn pads").source, GuideSource::Generic);
        assert_eq!(table.advice_for("Worn pads ").source, GuideSource::Generic);
    }

    #[test]
    fn test_rejects_duplicate_cause() {
        let toml = r#"
[[guides]]
cause = "Worn pads"
steps = ["Replace pads"]
difficulty = "easy"
time = "1 hour"
cost = { min = 50, max = 200 }

[[guides]]
cause = "Worn pads"
steps = ["Replace pads again"]
difficulty = "easy"
time = "1 hour"
cost = { min = 50, max = 200 }

[fallback]
steps = ["Inspect component"]
difficulty = "unknown"
time = "Unknown"
cost = { min = 100, max = 1000 }
"#;
        assert!(RepairGuideTable::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_rejects_inverted_cost_range() {
        let toml = r#"
[fallback]
steps = ["Inspect component"]
difficulty = "unknown"
time = "Unknown"
cost = { min = 1000, max = 100 }
"#;
        assert!(RepairGuideTable::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_table_without_guides_still_loads() {
        let toml = r#"
[fallback]
steps = ["Inspect component"]
difficulty = "unknown"
time = "Unknown"
cost = { min = 100, max = 1000 }
"#;
        let table = RepairGuideTable::from_toml_str(toml).unwrap();
        assert_eq!(table.guide_count(), 0);
        assert_eq!(table.advice_for("anything").source, GuideSource::Generic);
    }
}
