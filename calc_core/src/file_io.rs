//! # File I/O Module
//!
//! Reads section inputs and solver settings from JSON, and writes reports.
//!
//! - **Atomic saves**: Write to `<name>.tmp`, sync, rename to prevent a
//!   half-written report replacing a good one
//! - **Validation on load**: inputs and settings are checked before use
//!
//! ## Example
//!
//! ```rust,no_run
//! use calc_core::file_io::{load_section_input, save_report};
//! use calc_core::report::{CalculationReport, ReportHeader};
//! use calc_core::settings::SolverSettings;
//! use std::path::Path;
//!
//! let input = load_section_input(Path::new("beam.json"))?;
//! let report = CalculationReport::calculate(ReportHeader::default(), input, &SolverSettings::default())?;
//! save_report(&report.render(), Path::new("beam_report.txt"))?;
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::calculations::flexure::SectionInput;
use crate::errors::{CalcError, CalcResult};
use crate::settings::SolverSettings;

fn read_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

/// Load a section input from a JSON file and validate it.
///
/// # Returns
///
/// * `Ok(SectionInput)` - Parsed and valid input
/// * `Err(CalcError::SerializationError)` - Invalid JSON or missing fields
/// * `Err(CalcError::InvalidInput)` - A value violates a constraint
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_section_input(path: &Path) -> CalcResult<SectionInput> {
    let input: SectionInput = read_json(path)?;
    input.validate()?;
    log::debug!("Loaded section '{}' from {}", input.label, path.display());
    Ok(input)
}

/// Load solver settings from a JSON file. Omitted keys take their defaults.
pub fn load_settings(path: &Path) -> CalcResult<SolverSettings> {
    let settings: SolverSettings = read_json(path)?;
    settings.validate()?;
    Ok(settings)
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Save report text to a file using atomic write.
///
/// Writes to `<path>.tmp`, syncs, then renames over `path`.
pub fn save_report(text: &str, path: &Path) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(text.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    log::info!("Report saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("flexcap_test_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_tmp_path_keeps_extension() {
        let tmp = tmp_path_for(Path::new("/jobs/b1_report.txt"));
        assert_eq!(tmp, Path::new("/jobs/b1_report.txt.tmp"));
    }

    #[test]
    fn test_load_section_input() {
        let path = temp_path("input.json");
        let json = serde_json::to_string_pretty(&SectionInput::default()).unwrap();
        fs::write(&path, json).unwrap();

        let loaded = load_section_input(&path).unwrap();
        assert_eq!(loaded, SectionInput::default());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_section_input() {
        let path = temp_path("bad_input.json");
        let input = SectionInput {
            width_mm: -300.0,
            ..SectionInput::default()
        };
        fs::write(&path, serde_json::to_string(&input).unwrap()).unwrap();

        let err = load_section_input(&path).unwrap_err();
        assert!(err.is_input_error());

        fs::write(&path, "{ not json").unwrap();
        let err = load_section_input(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_settings(&temp_path("does_not_exist.json")).unwrap_err();
        assert!(matches!(err, CalcError::FileError { ref operation, .. } if operation == "open"));
    }

    #[test]
    fn test_load_partial_settings() {
        let path = temp_path("settings.json");
        fs::write(&path, r#"{ "strict": true, "max_iterations": 80 }"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert!(settings.strict);
        assert_eq!(settings.max_iterations, 80);
        assert_eq!(settings.tolerance_n, SolverSettings::default().tolerance_n);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("report.txt");
        save_report("NZS 3101 BEAM FLEXURAL CAPACITY CALCULATION REPORT\n", &path).unwrap();

        assert!(!tmp_path_for(&path).exists());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("NZS 3101"));

        // Overwrites an existing report
        save_report("second\n", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");

        let _ = fs::remove_file(&path);
    }
}
