//! File loaders for the diagnostic knowledge tables

use std::fs;
use std::path::Path;

use autocare_domain::knowledge::{RepairGuideTable, SymptomKnowledgeBase};
use autocare_types::{ReferenceError, Result};

/// Load the symptom knowledge base from a TOML file
pub fn load_symptom_kb(path: &Path) -> Result<SymptomKnowledgeBase> {
    let content = fs::read_to_string(path)
        .map_err(|e| ReferenceError::NotFound(format!("{}: {}", path.display(), e)))?;
    SymptomKnowledgeBase::from_toml_str(&content)
}

/// Load the repair guide table from a TOML file
pub fn load_repair_guides(path: &Path) -> Result<RepairGuideTable> {
    let content = fs::read_to_string(path)
        .map_err(|e| ReferenceError::NotFound(format!("{}: {}", path.display(), e)))?;
    RepairGuideTable::from_toml_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KB_TOML: &str = r#"
[[systems]]
name = "engine"

[[systems.symptoms]]
key = "overheating"
causes = ["Coolant leak"]
"#;

    const GUIDES_TOML: &str = r#"
[fallback]
steps = ["Inspect component", "Consult manual", "Consider professional service"]
difficulty = "unknown"
time = "Unknown"
cost = { min = 100, max = 1000 }
"#;

    #[test]
    fn test_load_symptom_kb_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("symptom_kb.toml");
        fs::write(&path, KB_TOML).unwrap();
        let kb = load_symptom_kb(&path).unwrap();
        assert_eq!(kb.symptom_count(), 1);
    }

    #[test]
    fn test_load_repair_guides_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repair_guides.toml");
        fs::write(&path, GUIDES_TOML).unwrap();
        let guides = load_repair_guides(&path).unwrap();
        assert_eq!(guides.guide_count(), 0);
    }

    #[test]
    fn test_missing_files_are_reference_errors() {
        assert!(load_symptom_kb(Path::new("/nonexistent/kb.toml")).is_err());
        assert!(load_repair_guides(Path::new("/nonexistent/guides.toml")).is_err());
    }
}
