//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `solve(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`flexure`] - Flexural capacity of a rectangular reinforced concrete beam (NZS 3101)
//! - [`input_fields`] - Field declarations and text parsing for section input

pub mod flexure;
pub mod input_fields;

// Re-export commonly used types
pub use flexure::{
    solve, solve_with, CapacityResult, Convergence, EquilibriumState, SectionInput, FLEXURE_PHI,
};
pub use input_fields::{FieldKind, FieldSpec, INPUT_FIELDS};
