//! # File I/O Module
//!
//! Reading analysis inputs and saving report files. The engine itself never
//! touches the filesystem; these helpers exist for the CLI and other callers.
//!
//! - **Atomic saves**: Write to `<file>.tmp`, sync, rename over the target
//! - **Version validation**: Saved reports carry a schema version
//!
//! ## File Format
//!
//! Inputs are plain `RotorFractureInput` JSON. Reports are a JSON envelope
//! with the schema version, a UTC timestamp, the input and the result.
//!
//! ## Example
//!
//! ```rust,no_run
//! use frac_core::calculations::rotor::calculate;
//! use frac_core::file_io::{load_input, save_report, SavedReport};
//! use std::path::Path;
//!
//! let input = load_input(Path::new("rotor.json"))?;
//! let result = calculate(&input)?;
//! save_report(&SavedReport::new(input, result), Path::new("rotor_report.json"))?;
//! # Ok::<(), frac_core::errors::CalcError>(())
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::rotor::{RotorFractureInput, RotorFractureResult};
use crate::errors::{CalcError, CalcResult};

/// Report file schema version
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Saved analysis: input, result and provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedReport {
    /// Schema version the report was written with
    pub version: String,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    pub input: RotorFractureInput,
    pub result: RotorFractureResult,
}

impl SavedReport {
    /// Wrap an input and its result, stamped with the current time
    pub fn new(input: RotorFractureInput, result: RotorFractureResult) -> Self {
        SavedReport {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            input,
            result,
        }
    }
}

fn read_file(path: &Path) -> CalcResult<String> {
    let mut file = File::open(path).map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Temp file next to the target: `report.json` → `report.json.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Load an analysis input from a JSON file.
///
/// # Returns
///
/// * `Err(CalcError::SerializationError)` - Invalid JSON or missing fields
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_input(path: &Path) -> CalcResult<RotorFractureInput> {
    let contents = read_file(path)?;
    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid input JSON in {}: {}", path.display(), e),
    })
}

/// Save a report with an atomic write.
///
/// Writes to a temp file, syncs it to disk, then renames it over `path`, so
/// a crash mid-save never leaves a truncated report.
pub fn save_report(report: &SavedReport, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = temp_path_for(path);

    let mut tmp_file = File::create(&tmp_path)
        .map_err(|e| CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .write_all(json.as_bytes())
        .map_err(|e| CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .sync_all()
        .map_err(|e| CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string()))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a saved report, checking its schema version.
///
/// # Returns
///
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_report(path: &Path) -> CalcResult<SavedReport> {
    let contents = read_file(path)?;
    let report: SavedReport = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid report JSON in {}: {}", path.display(), e),
    })?;

    validate_version(&report.version)?;

    Ok(report)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor version is not readable
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::rotor::{calculate, AnalysisConfig, LoadCase};
    use crate::geometry::{Crack, CrackOrientation, CrackType, RotorGeometry};
    use crate::materials::MaterialSource;
    use std::env::temp_dir;

    fn temp_file(name: &str) -> PathBuf {
        temp_dir().join(format!("spinfrac_test_{}_{}.json", name, std::process::id()))
    }

    fn input() -> RotorFractureInput {
        RotorFractureInput {
            label: "Test rotor".to_string(),
            material: MaterialSource::preset("GFRP"),
            geometry: RotorGeometry::annular_disk(0.03, 0.15, 0.02),
            crack: Crack::new(0.05, 0.0005, CrackType::Surface, CrackOrientation::Radial),
            load: LoadCase { speed_rpm: 15_000.0 },
            config: AnalysisConfig::default(),
        }
    }

    #[test]
    fn test_temp_path() {
        assert_eq!(
            temp_path_for(Path::new("/tmp/report.json")),
            Path::new("/tmp/report.json.tmp")
        );
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_file("roundtrip");
        let input = input();
        let result = calculate(&input).unwrap();
        let report = SavedReport::new(input, result);

        save_report(&report, &path).unwrap();
        assert!(!temp_path_for(&path).exists());

        let loaded = load_report(&path).unwrap();
        assert_eq!(loaded.input, report.input);
        assert_eq!(loaded.result.label, "Test rotor");
        assert_eq!(loaded.result.status, report.result.status);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_input_with_defaults() {
        let path = temp_file("input");
        let json = r#"{
            "material": { "source": "preset", "name": "CFRP" },
            "geometry": { "geometry_type": "solid_disk", "outer_radius_m": 0.15, "thickness_m": 0.02 },
            "crack": { "location_radius_m": 0.1, "initial_size_m": 0.0005, "crack_type": "edge", "orientation": "radial" },
            "load": { "speed_rpm": 20000 }
        }"#;
        fs::write(&path, json).unwrap();

        let loaded = load_input(&path).unwrap();
        assert_eq!(loaded.config, AnalysisConfig::default());
        assert_eq!(loaded.label, "");
        assert_eq!(loaded.geometry.inner_radius_m, 0.0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_json() {
        let path = temp_file("invalid");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_input(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let err = load_input(Path::new("/nonexistent/spinfrac/input.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
