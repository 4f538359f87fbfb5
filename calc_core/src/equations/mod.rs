//! # Flexural Design Equations
//!
//! This module contains the section mechanics used by the capacity solver.
//! Having equations in one place enables:
//! - Easy verification against NZS 3101
//! - Documentation of assumptions and sign conventions
//! - An auditable list of equations for calculation reports
//!
//! ## Modules
//!
//! - [`flexure`] - Rectangular stress-block formulas (geometry, strains, forces, moments)
//! - [`registry`] - Equation metadata and tracking for report references
//!
//! ## Sign Conventions
//!
//! - **Strain**: Positive in compression
//! - **Compression steel stress**: Positive in compression, capped at f_y
//! - **Equilibrium residual**: Positive when compression exceeds tension
//!
//! ## References
//!
//! - NZS 3101:2006 Concrete Structures Standard, Part 1

pub mod flexure;
pub mod registry;

// Re-export commonly used items
pub use flexure::{
    bar_group_area,
    capped_steel_stress,
    compression_steel_depth,
    compression_steel_strain,
    concrete_compression_force,
    design_moment,
    effective_depth,
    equilibrium_residual,
    neutral_axis_depth,
    nominal_moment,
    steel_force,
};

pub use registry::{
    flexure_calculation_equations,
    generate_equations_markdown,
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
};
