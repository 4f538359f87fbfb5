//! # Materials
//!
//! Concrete and reinforcing steel helpers for flexural calculations.
//!
//! - [`concrete`] - NZS 3101 rectangular stress-block factors
//! - [`reinforcement`] - Bar groups, areas and yield strain
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::{BarGroup, StressBlockFactors};
//!
//! let factors = StressBlockFactors::nzs3101(25.0).unwrap();
//! let tension = BarGroup::new(3, 16.0);
//! println!("α₁ = {}, As = {:.0} mm²", factors.alpha1, tension.area_mm2());
//! ```

pub mod concrete;
pub mod reinforcement;

pub use concrete::{StressBlockFactors, ULTIMATE_CONCRETE_STRAIN};
pub use reinforcement::{yield_strain, BarGroup};
