//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## SI Units (Primary)
//!
//! Section calculations run in the unscaled millimetre/MPa system used by
//! NZS 3101 worked examples:
//! - Length: millimetres (mm)
//! - Stress: megapascals (MPa = N/mm²)
//! - Force: newtons (N), reported in kilonewtons (kN)
//! - Moment: newton-millimetres (N·mm), reported in kilonewton-metres (kN·m)
//!
//! The equilibrium residual is evaluated in newtons, so the solver
//! tolerance of 0.01 is a force in N.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{KilonewtonMeters, Kilonewtons, NewtonMillimeters, Newtons};
//!
//! let tension: Kilonewtons = Newtons(301_592.9).into();
//! assert!((tension.0 - 301.5929).abs() < 1e-9);
//!
//! let moment: KilonewtonMeters = NewtonMillimeters(114.0e6).into();
//! assert_eq!(moment.0, 114.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Mul;

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

/// Moment in kilonewton-metres (1 kN·m = 1e6 N·mm)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMeters(pub f64);

impl From<NewtonMillimeters> for KilonewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        KilonewtonMeters(nmm.0 / 1e6)
    }
}

// ============================================================================
// Scaling
// ============================================================================

impl Mul<f64> for KilonewtonMeters {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        KilonewtonMeters(self.0 * rhs)
    }
}
