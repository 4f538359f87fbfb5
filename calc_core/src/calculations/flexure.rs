//! # Beam Flexural Capacity (NZS 3101)
//!
//! Nominal and design moment capacity of a singly or doubly reinforced
//! rectangular concrete section using the equivalent rectangular stress block.
//!
//! ## Method
//!
//! 1. Reinforcement areas, effective depths and the tension force
//!    T = As,t·f_y are computed once.
//! 2. The stress-block depth `a` is found by bisection on the force
//!    residual F(a) = Cc + Cs − T over [1.0 mm, h], at most 60 iterations,
//!    stopping as soon as |F| < 0.01 N.
//! 3. Neutral axis, compression steel strain/stress and forces at the final
//!    `a` give M_n = Cc(d − a/2) + Cs(d − d') and φM_n.
//!
//! ## Assumptions
//!
//! - Tension steel yields (T = As,t·f_y is not checked against strain)
//! - One layer of tension bars, at most one layer of compression bars
//! - Compression steel stress is capped at +f_y only
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use calc_core::calculations::flexure::{solve, SectionInput};
//!
//! // 300 x 450 beam, 3 Ø16 bottom, 3 Ø10 top
//! let input = SectionInput::default();
//! let result = solve(&input).unwrap();
//!
//! assert!(result.convergence.is_authoritative());
//! println!("a = {:.2} mm", result.stress_block_depth_mm);
//! println!("φMn = {:.2} kN·m", result.design_moment_knm);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::flexure::{
    capped_steel_stress, compression_steel_depth, compression_steel_strain,
    concrete_compression_force, design_moment, effective_depth, equilibrium_residual,
    neutral_axis_depth, nominal_moment, steel_force,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{BarGroup, ULTIMATE_CONCRETE_STRAIN};
use crate::settings::SolverSettings;

/// Strength reduction factor for flexure
pub const FLEXURE_PHI: f64 = 0.85;

fn default_phi() -> f64 {
    FLEXURE_PHI
}

fn default_eps_cu() -> f64 {
    ULTIMATE_CONCRETE_STRAIN
}

/// Input parameters for a rectangular reinforced concrete section.
///
/// Lengths in mm, strengths and modulus in MPa.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "width_mm": 300.0,
///   "depth_mm": 450.0,
///   "cover_mm": 40.0,
///   "fc_mpa": 25.0,
///   "fy_mpa": 500.0,
///   "es_mpa": 200000.0,
///   "alpha1": 0.85,
///   "beta1": 0.85,
///   "n_tension": 3,
///   "dia_tension_mm": 16.0,
///   "n_compression": 3,
///   "dia_compression_mm": 10.0
/// }
/// ```
///
/// `phi` and `eps_cu` default to 0.85 and 0.003 when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionInput {
    /// User label for this section (e.g., "B-1", "Transfer beam at grid C")
    #[serde(default)]
    pub label: String,

    /// Section width b (mm)
    pub width_mm: f64,

    /// Overall depth h (mm)
    pub depth_mm: f64,

    /// Cover to the bar surface (mm)
    pub cover_mm: f64,

    /// Concrete compressive strength f'c (MPa)
    pub fc_mpa: f64,

    /// Reinforcement yield strength f_y (MPa)
    pub fy_mpa: f64,

    /// Reinforcement modulus of elasticity E_s (MPa)
    pub es_mpa: f64,

    /// Stress-block intensity factor α₁
    pub alpha1: f64,

    /// Stress-block depth factor β₁
    pub beta1: f64,

    /// Number of tension bars
    pub n_tension: u32,

    /// Tension bar diameter (mm)
    pub dia_tension_mm: f64,

    /// Number of compression bars (0 for a singly reinforced section)
    #[serde(default)]
    pub n_compression: u32,

    /// Compression bar diameter (mm)
    #[serde(default)]
    pub dia_compression_mm: f64,

    /// Strength reduction factor φ
    #[serde(default = "default_phi")]
    pub phi: f64,

    /// Ultimate concrete compressive strain ε_cu
    #[serde(default = "default_eps_cu")]
    pub eps_cu: f64,
}

impl Default for SectionInput {
    fn default() -> Self {
        SectionInput {
            label: "B-1".to_string(),
            width_mm: 300.0,
            depth_mm: 450.0,
            cover_mm: 40.0,
            fc_mpa: 25.0,
            fy_mpa: 500.0,
            es_mpa: 200_000.0,
            alpha1: 0.85,
            beta1: 0.85,
            n_tension: 3,
            dia_tension_mm: 16.0,
            n_compression: 3,
            dia_compression_mm: 10.0,
            phi: FLEXURE_PHI,
            eps_cu: ULTIMATE_CONCRETE_STRAIN,
        }
    }
}

fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"))
    }
}

fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

fn require_factor(field: &str, value: f64) -> CalcResult<()> {
    require_positive(field, value, "Factor must be greater than zero")?;
    if value > 1.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Factor cannot exceed 1.0"));
    }
    Ok(())
}

impl SectionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width_mm", self.width_mm, "Width must be positive")?;
        require_positive("depth_mm", self.depth_mm, "Depth must be positive")?;
        require_finite("cover_mm", self.cover_mm)?;
        if self.cover_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "cover_mm",
                self.cover_mm.to_string(),
                "Cover cannot be negative",
            ));
        }
        require_positive("fc_mpa", self.fc_mpa, "Concrete strength must be positive")?;
        require_positive("fy_mpa", self.fy_mpa, "Yield strength must be positive")?;
        require_positive("es_mpa", self.es_mpa, "Steel modulus must be positive")?;
        require_positive("alpha1", self.alpha1, "Stress-block factor must be greater than zero")?;
        require_positive("beta1", self.beta1, "Stress-block factor must be greater than zero")?;
        require_factor("phi", self.phi)?;
        require_positive("eps_cu", self.eps_cu, "Ultimate strain must be positive")?;

        if self.n_tension == 0 {
            return Err(CalcError::invalid_input(
                "n_tension",
                "0",
                "At least one tension bar is required",
            ));
        }
        require_positive("dia_tension_mm", self.dia_tension_mm, "Tension bar diameter must be positive")?;

        require_finite("dia_compression_mm", self.dia_compression_mm)?;
        if self.dia_compression_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "dia_compression_mm",
                self.dia_compression_mm.to_string(),
                "Compression bar diameter cannot be negative",
            ));
        }

        if self.effective_depth_mm() <= 0.0 {
            return Err(CalcError::invalid_input(
                "cover_mm",
                self.cover_mm.to_string(),
                "Cover plus half the tension bar diameter must be less than the overall depth",
            ));
        }
        Ok(())
    }

    /// True when compression bars are present
    pub fn has_compression_steel(&self) -> bool {
        !self.compression_bars().is_empty()
    }

    /// Tension reinforcement as a bar group
    pub fn tension_bars(&self) -> BarGroup {
        BarGroup::new(self.n_tension, self.dia_tension_mm)
    }

    /// Compression reinforcement as a bar group
    pub fn compression_bars(&self) -> BarGroup {
        BarGroup::new(self.n_compression, self.dia_compression_mm)
    }

    /// Effective depth d (mm)
    pub fn effective_depth_mm(&self) -> f64 {
        effective_depth(self.depth_mm, self.cover_mm, self.dia_tension_mm)
    }

    /// Compression steel depth d' (mm), 0 without compression bars
    pub fn compression_steel_depth_mm(&self) -> f64 {
        compression_steel_depth(self.cover_mm, self.n_compression, self.dia_compression_mm)
    }
}

/// Internal forces for one trial stress-block depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumState {
    /// Trial stress-block depth a (mm)
    pub a_mm: f64,
    /// Neutral-axis depth c = a/β₁ (mm)
    pub c_mm: f64,
    /// Compression steel strain ε_sc
    pub eps_sc: f64,
    /// Compression steel stress f_sc (MPa)
    pub fs_c_mpa: f64,
    /// Concrete compression force Cc (N)
    pub cc_n: f64,
    /// Compression steel force Cs (N)
    pub cs_n: f64,
    /// Residual Cc + Cs − T (N)
    pub residual_n: f64,
}

/// How the bisection ended.
///
/// Only `Converged` results satisfy equilibrium; the other variants still
/// carry numbers but they should not be presented as a capacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum Convergence {
    /// |F(a)| fell below the tolerance
    Converged { iterations: u32 },
    /// The root was bracketed but the iteration budget ran out first
    IterationLimit { iterations: u32 },
    /// F(1.0) and F(h) have the same sign, so no root lies in the interval
    Unbracketed {
        iterations: u32,
        residual_low_n: f64,
        residual_high_n: f64,
    },
}

impl Convergence {
    /// True when equilibrium was satisfied within tolerance
    pub fn is_authoritative(&self) -> bool {
        matches!(self, Convergence::Converged { .. })
    }

    /// Bisection iterations performed
    pub fn iterations(&self) -> u32 {
        match *self {
            Convergence::Converged { iterations }
            | Convergence::IterationLimit { iterations }
            | Convergence::Unbracketed { iterations, .. } => iterations,
        }
    }

    /// One-line explanation for warnings and reports
    pub fn describe(&self) -> String {
        match *self {
            Convergence::Converged { iterations } => {
                format!("equilibrium satisfied after {} iterations", iterations)
            }
            Convergence::IterationLimit { iterations } => format!(
                "equilibrium not reached within {} iterations; result is approximate",
                iterations
            ),
            Convergence::Unbracketed {
                residual_low_n,
                residual_high_n,
                ..
            } => {
                let kind = if residual_high_n < 0.0 {
                    "section is over-reinforced for this depth (Cc + Cs < T even at a = h)"
                } else {
                    "compression exceeds tension at the smallest trial depth"
                };
                format!(
                    "no equilibrium root between the search bounds (F_low = {:.2} N, F_high = {:.2} N): {}",
                    residual_low_n, residual_high_n, kind
                )
            }
        }
    }
}

/// Results from the flexural capacity calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "tension_steel_area_mm2": 603.19,
///   "compression_steel_area_mm2": 235.62,
///   "effective_depth_mm": 402.0,
///   "compression_steel_depth_mm": 45.0,
///   "tension_force_n": 301592.89,
///   "stress_block_depth_mm": 44.29,
///   "neutral_axis_depth_mm": 52.10,
///   "compression_steel_strain": 0.000409,
///   "compression_steel_stress_mpa": 81.78,
///   "concrete_force_n": 282324.14,
///   "compression_steel_force_n": 19268.76,
///   "residual_n": 0.0043,
///   "nominal_moment_knm": 114.12,
///   "design_moment_knm": 97.00,
///   "convergence": { "status": "Converged", "iterations": 25 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    /// Tension steel area As,t (mm²)
    pub tension_steel_area_mm2: f64,

    /// Compression steel area As,c (mm²)
    pub compression_steel_area_mm2: f64,

    /// Effective depth d (mm)
    pub effective_depth_mm: f64,

    /// Compression steel depth d' (mm)
    pub compression_steel_depth_mm: f64,

    /// Tension force T = As,t·f_y (N)
    pub tension_force_n: f64,

    /// Equivalent stress-block depth a (mm)
    pub stress_block_depth_mm: f64,

    /// Neutral-axis depth c (mm)
    pub neutral_axis_depth_mm: f64,

    /// Compression steel strain ε_sc
    pub compression_steel_strain: f64,

    /// Compression steel stress f_sc (MPa)
    pub compression_steel_stress_mpa: f64,

    /// Concrete compression force Cc (N)
    pub concrete_force_n: f64,

    /// Compression steel force Cs (N)
    pub compression_steel_force_n: f64,

    /// Final equilibrium residual Cc + Cs − T (N)
    pub residual_n: f64,

    /// Nominal moment capacity M_n (kN·m)
    pub nominal_moment_knm: f64,

    /// Design moment capacity φM_n (kN·m)
    pub design_moment_knm: f64,

    /// Bisection outcome
    pub convergence: Convergence,
}

impl CapacityResult {
    /// Return the result only if equilibrium was satisfied.
    pub fn verified(self) -> CalcResult<Self> {
        if self.convergence.is_authoritative() {
            Ok(self)
        } else {
            Err(CalcError::degenerate_equilibrium(self.convergence.describe()))
        }
    }
}

/// Quantities fixed for the whole bisection.
struct PreparedSection<'a> {
    input: &'a SectionInput,
    as_t: f64,
    as_c: f64,
    d: f64,
    d_prime: f64,
    t: f64,
    min_c: f64,
}

impl<'a> PreparedSection<'a> {
    fn new(input: &'a SectionInput, settings: &SolverSettings) -> Self {
        let as_t = input.tension_bars().area_mm2();
        PreparedSection {
            input,
            as_t,
            as_c: input.compression_bars().area_mm2(),
            d: input.effective_depth_mm(),
            d_prime: input.compression_steel_depth_mm(),
            t: steel_force(as_t, input.fy_mpa),
            min_c: settings.min_neutral_axis_mm,
        }
    }

    /// Internal forces for a trial stress-block depth.
    fn trial(&self, a_mm: f64) -> CalcResult<EquilibriumState> {
        let input = self.input;
        let c_mm = neutral_axis_depth(a_mm, input.beta1);
        // Also rejects NaN
        if !(c_mm >= self.min_c) {
            return Err(CalcError::degenerate_equilibrium(format!(
                "neutral axis depth {} mm at a = {} mm is too small to evaluate strain",
                c_mm, a_mm
            )));
        }

        let (eps_sc, fs_c_mpa) = if input.has_compression_steel() {
            let eps = compression_steel_strain(input.eps_cu, c_mm, self.d_prime);
            (eps, capped_steel_stress(input.es_mpa, eps, input.fy_mpa))
        } else {
            (0.0, 0.0)
        };

        let cc_n = concrete_compression_force(input.alpha1, input.fc_mpa, input.width_mm, a_mm);
        let cs_n = steel_force(self.as_c, fs_c_mpa);

        Ok(EquilibriumState {
            a_mm,
            c_mm,
            eps_sc,
            fs_c_mpa,
            cc_n,
            cs_n,
            residual_n: equilibrium_residual(cc_n, cs_n, self.t),
        })
    }

    /// Bisection on F(a) over [lower bound, h].
    fn bisect(&self, settings: &SolverSettings) -> CalcResult<(EquilibriumState, Convergence)> {
        let mut a_low = settings.lower_bound_mm;
        let mut a_high = self.input.depth_mm;

        let residual_low_n = self.trial(a_low)?.residual_n;
        let residual_high_n = self.trial(a_high)?.residual_n;
        let bracketed = residual_low_n * residual_high_n < 0.0;
        if !bracketed {
            log::warn!(
                "Section '{}': F({}) = {:.3} N and F({}) = {:.3} N do not bracket a root",
                self.input.label,
                a_low,
                residual_low_n,
                a_high,
                residual_high_n
            );
        }

        let mut last: Option<EquilibriumState> = None;
        let mut iterations = 0;
        for iteration in 1..=settings.max_iterations {
            let a_mid = 0.5 * (a_low + a_high);
            let f_low = self.trial(a_low)?.residual_n;
            let mid = self.trial(a_mid)?;

            if f_low * mid.residual_n < 0.0 {
                a_high = a_mid;
            } else {
                a_low = a_mid;
            }

            log::debug!(
                "bisection {:>2}: a = {:.6} mm, F = {:.4} N, interval [{:.6}, {:.6}]",
                iteration,
                a_mid,
                mid.residual_n,
                a_low,
                a_high
            );

            iterations = iteration;
            last = Some(mid);
            if mid.residual_n.abs() < settings.tolerance_n {
                break;
            }
        }

        let state = last.ok_or_else(|| CalcError::Internal {
            message: "Bisection performed no iterations".to_string(),
        })?;

        let convergence = if state.residual_n.abs() < settings.tolerance_n {
            Convergence::Converged { iterations }
        } else if !bracketed {
            Convergence::Unbracketed {
                iterations,
                residual_low_n,
                residual_high_n,
            }
        } else {
            Convergence::IterationLimit { iterations }
        };

        Ok((state, convergence))
    }
}

/// Calculate the flexural capacity with the default solver settings.
///
/// # Returns
///
/// * `Ok(CapacityResult)` - Calculation results; check `convergence` before
///   presenting the capacity as authoritative
/// * `Err(CalcError)` - If inputs are invalid or a trial is degenerate
pub fn solve(input: &SectionInput) -> CalcResult<CapacityResult> {
    solve_with(input, &SolverSettings::default())
}

/// Calculate the flexural capacity with explicit solver settings.
///
/// With `settings.strict`, a non-authoritative bisection is returned as
/// `CalcError::DegenerateEquilibrium` instead of a flagged result.
pub fn solve_with(input: &SectionInput, settings: &SolverSettings) -> CalcResult<CapacityResult> {
    settings.validate()?;
    input.validate()?;
    if input.depth_mm <= settings.lower_bound_mm {
        return Err(CalcError::invalid_input(
            "depth_mm",
            input.depth_mm.to_string(),
            format!(
                "Depth must exceed the stress-block search lower bound of {} mm",
                settings.lower_bound_mm
            ),
        ));
    }

    let section = PreparedSection::new(input, settings);
    let (state, convergence) = section.bisect(settings)?;

    if !convergence.is_authoritative() {
        log::warn!("Section '{}': {}", input.label, convergence.describe());
        if settings.strict {
            return Err(CalcError::degenerate_equilibrium(convergence.describe()));
        }
    }

    let mn = nominal_moment(state.cc_n, state.a_mm, section.d, state.cs_n, section.d_prime);
    let phi_mn = design_moment(input.phi, mn);
    if !mn.0.is_finite() {
        return Err(CalcError::degenerate_equilibrium(format!(
            "moment capacity is not finite (Mn = {})",
            mn.0
        )));
    }

    Ok(CapacityResult {
        tension_steel_area_mm2: section.as_t,
        compression_steel_area_mm2: section.as_c,
        effective_depth_mm: section.d,
        compression_steel_depth_mm: section.d_prime,
        tension_force_n: section.t,
        stress_block_depth_mm: state.a_mm,
        neutral_axis_depth_mm: state.c_mm,
        compression_steel_strain: state.eps_sc,
        compression_steel_stress_mpa: state.fs_c_mpa,
        concrete_force_n: state.cc_n,
        compression_steel_force_n: state.cs_n,
        residual_n: state.residual_n,
        nominal_moment_knm: mn.0,
        design_moment_knm: phi_mn.0,
        convergence,
    })
}
