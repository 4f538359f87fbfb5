//! # calc_core - Reinforced Concrete Flexure Engine
//!
//! `calc_core` is the computational heart of Flexcap. It computes the flexural
//! capacity of rectangular reinforced concrete beams to NZS 3101 using the
//! equivalent rectangular stress block, and builds the calculation report a
//! designer files with the job. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Honest Results**: A solve that misses equilibrium says so
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{solve, SectionInput};
//!
//! let result = solve(&SectionInput::default()).unwrap();
//! assert!((result.design_moment_knm - 97.00).abs() < 0.01);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Section input, capacity solver, input field declarations
//! - [`equations`] - Flexure formulas and the NZS 3101 equation registry
//! - [`materials`] - Concrete stress-block factors and reinforcing bars
//! - [`report`] - Result summary, text report, last-outcome tracking
//! - [`settings`] - Solver settings
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON loading and atomic report saves

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod report;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{solve, solve_with, CapacityResult, Convergence, SectionInput};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_section_input, load_settings, save_report};
pub use report::{CalculationReport, LastCalculation, ReportHeader, ResultSummary};
pub use settings::SolverSettings;
