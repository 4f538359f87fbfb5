//! # Flexural Section Formulas
//!
//! Formulas for the ultimate-strength flexural capacity of a rectangular
//! reinforced concrete section with the equivalent rectangular stress block.
//!
//! ```text
//!        b
//!   ┌─────────┐  ── compression face
//!   │ ░░░░░░░ │  a = β₁c   (stress block, intensity α₁f'c)
//!   │  o o o  │  d'        (compression steel As,c)
//!   │- - - - -│  c         (neutral axis)
//!   │         │
//!   │  o o o  │  d         (tension steel As,t)
//!   └─────────┘
//! ```
//!
//! ## Notation
//!
//! - `a` = stress-block depth (mm), `c` = neutral-axis depth (mm)
//! - `d`, `d'` = depths to tension and compression steel centroids (mm)
//! - `f'c`, `f_y`, `E_s` = material strengths and steel modulus (MPa)
//! - `ε_cu` = ultimate concrete strain, `ε_sc` = compression steel strain
//!
//! Forces come out in N, moments in N·mm unless the name says otherwise.
//! Expressions are evaluated in a fixed order so results are reproducible
//! bit-for-bit.
//!
//! ## References
//!
//! - NZS 3101:2006 Part 1, Section 9 (Beams and one-way slabs)

use std::f64::consts::PI;

use crate::units::{KilonewtonMeters, NewtonMillimeters};

// =============================================================================
// SECTION GEOMETRY
// =============================================================================

/// Total area of a group of identical bars, n·π·Ø²/4
///
/// # Example
/// ```rust
/// use calc_core::equations::flexure::bar_group_area;
///
/// // 3 Ø16 bars
/// let area = bar_group_area(3, 16.0);
/// assert!((area - 603.186).abs() < 0.001);
/// ```
#[inline]
pub fn bar_group_area(count: u32, diameter_mm: f64) -> f64 {
    count as f64 * PI * diameter_mm.powi(2) / 4.0
}

/// Effective depth to the tension steel centroid, d = h − cover − Ø_t/2
///
/// # Example
/// ```rust
/// use calc_core::equations::flexure::effective_depth;
///
/// assert_eq!(effective_depth(450.0, 40.0, 16.0), 402.0);
/// ```
#[inline]
pub fn effective_depth(depth_mm: f64, cover_mm: f64, tension_dia_mm: f64) -> f64 {
    depth_mm - cover_mm - tension_dia_mm / 2.0
}

/// Depth to the compression steel centroid, d' = cover + Ø_c/2
///
/// Returns 0 when there are no compression bars.
///
/// # Example
/// ```rust
/// use calc_core::equations::flexure::compression_steel_depth;
///
/// assert_eq!(compression_steel_depth(40.0, 3, 10.0), 45.0);
/// assert_eq!(compression_steel_depth(40.0, 0, 10.0), 0.0);
/// ```
#[inline]
pub fn compression_steel_depth(cover_mm: f64, compression_count: u32, compression_dia_mm: f64) -> f64 {
    if compression_count > 0 {
        cover_mm + compression_dia_mm / 2.0
    } else {
        0.0
    }
}

// =============================================================================
// STRAIN COMPATIBILITY
// =============================================================================

/// Neutral-axis depth from stress-block depth, c = a/β₁
#[inline]
pub fn neutral_axis_depth(a_mm: f64, beta1: f64) -> f64 {
    a_mm / beta1
}

/// Compression steel strain from similar triangles, ε_sc = ε_cu(c − d')/c
///
/// Negative when the steel sits below the neutral axis (c < d'). The value
/// is not clamped.
///
/// # Example
/// ```rust
/// use calc_core::equations::flexure::compression_steel_strain;
///
/// let eps = compression_steel_strain(0.003, 90.0, 45.0);
/// assert!((eps - 0.0015).abs() < 1e-15);
/// ```
#[inline]
pub fn compression_steel_strain(eps_cu: f64, c_mm: f64, d_prime_mm: f64) -> f64 {
    eps_cu * (c_mm - d_prime_mm) / c_mm
}

/// Elastic steel stress capped at yield, f_s = min(E_s·ε, f_y)
///
/// Only the upper (yield) limit applies; negative strains give negative
/// stresses of any magnitude.
///
/// # Example
/// ```rust
/// use calc_core::equations::flexure::capped_steel_stress;
///
/// assert_eq!(capped_steel_stress(200_000.0, 0.001, 500.0), 200.0);
/// assert_eq!(capped_steel_stress(200_000.0, 0.01, 500.0), 500.0);
/// ```
#[inline]
pub fn capped_steel_stress(es_mpa: f64, strain: f64, fy_mpa: f64) -> f64 {
    (es_mpa * strain).min(fy_mpa)
}

// =============================================================================
// FORCES
// =============================================================================

/// Concrete compression force, C_c = α₁·f'c·b·a (N)
///
/// # Example
/// ```rust
/// use calc_core::equations::flexure::concrete_compression_force;
///
/// let cc = concrete_compression_force(0.85, 25.0, 300.0, 100.0);
/// assert!((cc - 637_500.0).abs() < 1e-6);
/// ```
#[inline]
pub fn concrete_compression_force(alpha1: f64, fc_mpa: f64, width_mm: f64, a_mm: f64) -> f64 {
    alpha1 * fc_mpa * width_mm * a_mm
}

/// Steel force, F = A_s·f_s (N)
#[inline]
pub fn steel_force(area_mm2: f64, stress_mpa: f64) -> f64 {
    area_mm2 * stress_mpa
}

/// Force equilibrium residual, F(a) = C_c + C_s − T (N)
///
/// Zero at the solution; positive when the compression zone is too deep.
#[inline]
pub fn equilibrium_residual(cc_n: f64, cs_n: f64, t_n: f64) -> f64 {
    cc_n + cs_n - t_n
}

// =============================================================================
// MOMENT CAPACITY
// =============================================================================

/// Nominal moment about the tension steel, M_n = C_c(d − a/2) + C_s(d − d') (kN·m)
///
/// # Example
/// ```rust
/// use calc_core::equations::flexure::nominal_moment;
///
/// // Cc = 300 kN at lever arm 380 mm, no compression steel
/// let mn = nominal_moment(300_000.0, 40.0, 400.0, 0.0, 0.0);
/// assert!((mn.0 - 114.0).abs() < 1e-9);
/// ```
#[inline]
pub fn nominal_moment(cc_n: f64, a_mm: f64, d_mm: f64, cs_n: f64, d_prime_mm: f64) -> KilonewtonMeters {
    NewtonMillimeters(cc_n * (d_mm - a_mm / 2.0) + cs_n * (d_mm - d_prime_mm)).into()
}

/// Design moment, φM_n (kN·m)
#[inline]
pub fn design_moment(phi: f64, mn: KilonewtonMeters) -> KilonewtonMeters {
    mn * phi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_steel_above_neutral_axis() {
        // c = 2d' gives half the ultimate strain
        let eps = compression_steel_strain(0.003, 100.0, 50.0);
        assert!((eps - 0.0015).abs() < 1e-15);
    }

    #[test]
    fn test_compression_steel_below_neutral_axis() {
        let eps = compression_steel_strain(0.003, 20.0, 45.0);
        assert!(eps < 0.0);
        // Negative stress is not floored
        let fs = capped_steel_stress(200_000.0, eps, 500.0);
        assert!(fs < -500.0);
    }

    #[test]
    fn test_steel_stress_cap() {
        assert_eq!(capped_steel_stress(1e12, 0.002, 500.0), 500.0);
    }

    #[test]
    fn test_equilibrium_residual_sign() {
        assert!(equilibrium_residual(100.0, 20.0, 150.0) < 0.0);
        assert!(equilibrium_residual(140.0, 20.0, 150.0) > 0.0);
    }

    #[test]
    fn test_design_moment() {
        let phi_mn = design_moment(0.85, KilonewtonMeters(100.0));
        assert!((phi_mn.0 - 85.0).abs() < 1e-12);
    }

    #[test]
    fn test_neutral_axis_depth() {
        assert!((neutral_axis_depth(85.0, 0.85) - 100.0).abs() < 1e-12);
    }
}
