//! Bundled default reference data
//!
//! Written to the reference directory on first use so users can edit the
//! catalogs and knowledge tables without touching the code. Existing files
//! are never overwritten.

use std::fs;
use std::path::Path;

use autocare_types::Result;

pub const DEFAULT_SCHEDULES: &str = include_str!("../reference/schedules.toml");
pub const DEFAULT_SYMPTOM_KB: &str = include_str!("../reference/symptom_kb.toml");
pub const DEFAULT_REPAIR_GUIDES: &str = include_str!("../reference/repair_guides.toml");
pub const DEFAULT_VEHICLE_CATALOG: &str = include_str!("../reference/vehicle_catalog.toml");

/// File names under the reference directory
pub const SCHEDULES_FILE: &str = "schedules.toml";
pub const SYMPTOM_KB_FILE: &str = "symptom_kb.toml";
pub const REPAIR_GUIDES_FILE: &str = "repair_guides.toml";
pub const VEHICLE_CATALOG_FILE: &str = "vehicle_catalog.toml";

/// Seed the reference directory with bundled defaults for any missing file
pub fn ensure_reference_files(reference_dir: &Path) -> Result<()> {
    fs::create_dir_all(reference_dir)?;

    let files = [
        (SCHEDULES_FILE, DEFAULT_SCHEDULES),
        (SYMPTOM_KB_FILE, DEFAULT_SYMPTOM_KB),
        (REPAIR_GUIDES_FILE, DEFAULT_REPAIR_GUIDES),
        (VEHICLE_CATALOG_FILE, DEFAULT_VEHICLE_CATALOG),
    ];

    for (name, content) in files {
        let path = reference_dir.join(name);
        if !path.exists() {
            fs::write(&path, content)?;
        }
    }

    Ok(())
}
