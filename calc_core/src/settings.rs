//! # Solver Settings
//!
//! Numerical settings for the stress-block bisection. The defaults reproduce
//! the reference procedure exactly (search from 1.0 mm, 60 iterations,
//! 0.01 N residual tolerance) and should only be changed for studies.
//!
//! Settings serialize to JSON so a front end can keep them next to its
//! section inputs:
//!
//! ```rust
//! use calc_core::settings::SolverSettings;
//!
//! let settings: SolverSettings = serde_json::from_str(r#"{ "strict": true }"#).unwrap();
//! assert!(settings.strict);
//! assert_eq!(settings.max_iterations, 60);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Lower bound of the stress-block search interval (mm)
pub const DEFAULT_LOWER_BOUND_MM: f64 = 1.0;

/// Bisection iteration budget
pub const DEFAULT_MAX_ITERATIONS: u32 = 60;

/// Early-exit tolerance on |Cc + Cs - T| (N)
pub const DEFAULT_TOLERANCE_N: f64 = 1e-2;

/// Neutral-axis depths below this are invalid trials (mm)
pub const DEFAULT_MIN_NEUTRAL_AXIS_MM: f64 = 1e-9;

/// Bisection settings for the flexural capacity solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Lower bound of the stress-block depth search (mm)
    pub lower_bound_mm: f64,

    /// Maximum number of bisection iterations
    pub max_iterations: u32,

    /// Residual force tolerance for early exit (N)
    pub tolerance_n: f64,

    /// Smallest admissible neutral-axis depth during a trial (mm)
    pub min_neutral_axis_mm: f64,

    /// Reject non-authoritative results instead of flagging them
    pub strict: bool,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            lower_bound_mm: DEFAULT_LOWER_BOUND_MM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance_n: DEFAULT_TOLERANCE_N,
            min_neutral_axis_mm: DEFAULT_MIN_NEUTRAL_AXIS_MM,
            strict: false,
        }
    }
}

impl SolverSettings {
    /// Default settings with strict checking turned on.
    pub fn strict() -> Self {
        SolverSettings {
            strict: true,
            ..Self::default()
        }
    }

    /// Validate settings.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.lower_bound_mm.is_finite() || self.lower_bound_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "lower_bound_mm",
                self.lower_bound_mm.to_string(),
                "Search lower bound must be a positive finite length",
            ));
        }
        if self.max_iterations == 0 {
            return Err(CalcError::invalid_input(
                "max_iterations",
                "0",
                "At least one bisection iteration is required",
            ));
        }
        if !self.tolerance_n.is_finite() || self.tolerance_n <= 0.0 {
            return Err(CalcError::invalid_input(
                "tolerance_n",
                self.tolerance_n.to_string(),
                "Tolerance must be a positive finite force",
            ));
        }
        if !self.min_neutral_axis_mm.is_finite() || self.min_neutral_axis_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "min_neutral_axis_mm",
                self.min_neutral_axis_mm.to_string(),
                "Minimum neutral-axis depth must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_procedure() {
        let settings = SolverSettings::default();
        assert_eq!(settings.lower_bound_mm, 1.0);
        assert_eq!(settings.max_iterations, 60);
        assert_eq!(settings.tolerance_n, 0.01);
        assert!(!settings.strict);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: SolverSettings = serde_json::from_str(r#"{ "max_iterations": 80 }"#).unwrap();
        assert_eq!(settings.max_iterations, 80);
        assert_eq!(settings.tolerance_n, DEFAULT_TOLERANCE_N);
    }

    #[test]
    fn test_invalid_settings() {
        let settings = SolverSettings {
            max_iterations: 0,
            ..SolverSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = SolverSettings {
            tolerance_n: -1.0,
            ..SolverSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_strict_constructor() {
        assert!(SolverSettings::strict().strict);
    }
}
