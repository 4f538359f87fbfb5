//! Concrete Stress Block (NZS 3101)
//!
//! Equivalent rectangular stress-block parameters for ultimate-strength
//! flexural design. The stress block has intensity α₁·f'c over a depth
//! a = β₁·c measured from the extreme compression fibre.
//!
//! ## Code Values
//!
//! | f'c (MPa)  | α₁                               | β₁                               |
//! |------------|----------------------------------|----------------------------------|
//! | ≤ 30       | 0.85                             | 0.85                             |
//! | 30 – 55    | 0.85                             | 0.85 − 0.008(f'c − 30), ≥ 0.65   |
//! | > 55       | 0.85 − 0.004(f'c − 55), ≥ 0.75   | 0.65                             |
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::concrete::StressBlockFactors;
//!
//! let factors = StressBlockFactors::nzs3101(40.0).unwrap();
//! assert_eq!(factors.alpha1, 0.85);
//! assert!((factors.beta1 - 0.77).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Ultimate compressive strain at the extreme concrete fibre
pub const ULTIMATE_CONCRETE_STRAIN: f64 = 0.003;

/// Stress-block factors α₁ and β₁
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressBlockFactors {
    /// Stress intensity factor α₁
    pub alpha1: f64,
    /// Depth factor β₁ (a = β₁·c)
    pub beta1: f64,
}

impl StressBlockFactors {
    /// Factors for the given concrete strength.
    pub fn nzs3101(fc_mpa: f64) -> CalcResult<Self> {
        if !fc_mpa.is_finite() || fc_mpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "fc_mpa",
                fc_mpa.to_string(),
                "Concrete strength must be a positive number",
            ));
        }

        let alpha1 = if fc_mpa <= 55.0 {
            0.85
        } else {
            (0.85 - 0.004 * (fc_mpa - 55.0)).max(0.75)
        };

        let beta1 = if fc_mpa <= 30.0 {
            0.85
        } else {
            (0.85 - 0.008 * (fc_mpa - 30.0)).max(0.65)
        };

        Ok(StressBlockFactors { alpha1, beta1 })
    }
}

impl Default for StressBlockFactors {
    fn default() -> Self {
        StressBlockFactors {
            alpha1: 0.85,
            beta1: 0.85,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_strength_concrete() {
        let factors = StressBlockFactors::nzs3101(25.0).unwrap();
        assert_eq!(factors, StressBlockFactors::default());
    }

    #[test]
    fn test_beta1_reduces_above_30() {
        let factors = StressBlockFactors::nzs3101(50.0).unwrap();
        assert_eq!(factors.alpha1, 0.85);
        assert!((factors.beta1 - 0.69).abs() < 1e-12);
    }

    #[test]
    fn test_lower_limits() {
        let factors = StressBlockFactors::nzs3101(100.0).unwrap();
        assert_eq!(factors.alpha1, 0.75);
        assert_eq!(factors.beta1, 0.65);
    }

    #[test]
    fn test_alpha1_reduces_above_55() {
        let factors = StressBlockFactors::nzs3101(65.0).unwrap();
        assert!((factors.alpha1 - 0.81).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_strength() {
        assert!(StressBlockFactors::nzs3101(0.0).is_err());
        assert!(StressBlockFactors::nzs3101(f64::NAN).is_err());
    }
}
