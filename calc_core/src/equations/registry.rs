//! # Equation Registry
//!
//! Central registry of all equations used in the flexural capacity calculation.
//! Each equation has metadata including code references, formulas, and variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for report references and audit trails
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::equations::registry::{Equation, EquationUsage};
//!
//! // Track equation usage during report generation
//! let usage = EquationUsage::new(Equation::NominalMoment, "Moment capacity");
//!
//! // Get metadata for the equations appendix
//! let meta = Equation::NominalMoment.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a structural engineering code or standard.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// NZS 3101 - Concrete Structures Standard
    Nzs3101 {
        part: u8,
        clause: &'static str,
    },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Nzs3101 { part, clause } => {
                format!("NZS 3101: Part {} Clause {}", part, clause)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Nzs3101 { .. } => "NZS 3101",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the appendix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Stress-block parameters (α₁, β₁)
    StressBlock,
    /// Effective depths and reinforcement areas
    SectionGeometry,
    /// Plane-sections strain distribution and steel stress
    StrainCompatibility,
    /// Internal forces and their balance
    Equilibrium,
    /// Nominal and design moment
    MomentCapacity,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::StressBlock => "Stress Block",
            EquationCategory::SectionGeometry => "Section Geometry",
            EquationCategory::StrainCompatibility => "Strain Compatibility",
            EquationCategory::Equilibrium => "Equilibrium",
            EquationCategory::MomentCapacity => "Moment Capacity",
        }
    }

    /// Sort order for the appendix (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::StressBlock => 1,
            EquationCategory::SectionGeometry => 2,
            EquationCategory::StrainCompatibility => 3,
            EquationCategory::Equilibrium => 4,
            EquationCategory::MomentCapacity => 5,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "a", "d'", "f'c")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "mm", "MPa", "kN·m")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for an equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Nominal Moment Capacity")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text (human-readable)
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping in appendix
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation (for linking)
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used in the flexural capacity calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// α₁ and β₁ from f'c
    StressBlockFactors,
    /// As = n·π·Ø²/4
    BarGroupArea,
    /// d = h − cover − Ø_t/2
    EffectiveDepth,
    /// d' = cover + Ø_c/2
    CompressionSteelDepth,
    /// c = a/β₁
    NeutralAxisDepth,
    /// ε_sc = ε_cu(c − d')/c
    CompressionSteelStrain,
    /// f_sc = min(E_s·ε_sc, f_y)
    CompressionSteelStress,
    /// ε_y = f_y/E_s
    YieldStrain,
    /// T = As,t·f_y
    TensionForce,
    /// Cc = α₁f'c·b·a
    ConcreteCompressionForce,
    /// Cs = As,c·f_sc
    CompressionSteelForce,
    /// Cc + Cs = T
    ForceEquilibrium,
    /// Mn = Cc(d − a/2) + Cs(d − d')
    NominalMoment,
    /// φMn
    DesignMoment,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::StressBlockFactors => EquationMetadata {
                name: "Stress Block Factors",
                description: "Intensity and depth factors of the equivalent rectangular stress block",
                formula_plain: "alpha1 = 0.85 - 0.004(f'c - 55) >= 0.75, beta1 = 0.85 - 0.008(f'c - 30) >= 0.65",
                reference: CodeReference::Nzs3101 { part: 1, clause: "9.4.1.3" },
                variables: vec![
                    Variable::new("α₁", "Stress intensity factor", "-"),
                    Variable::new("β₁", "Stress block depth factor", "-"),
                    Variable::new("f'c", "Specified concrete compressive strength", "MPa"),
                ],
                assumptions: vec!["α₁ = 0.85 for f'c ≤ 55 MPa", "β₁ = 0.85 for f'c ≤ 30 MPa"],
                category: EquationCategory::StressBlock,
                source_module: "materials/concrete.rs",
                source_function: "StressBlockFactors::nzs3101",
            },

            Equation::BarGroupArea => EquationMetadata {
                name: "Reinforcement Area",
                description: "Total area of a group of identical bars",
                formula_plain: "As = n * pi * dia^2 / 4",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("n", "Number of bars", "-"),
                    Variable::new("Ø", "Bar diameter", "mm"),
                    Variable::new("As", "Steel area", "mm²"),
                ],
                assumptions: vec!["Nominal bar diameter"],
                category: EquationCategory::SectionGeometry,
                source_module: "equations/flexure.rs",
                source_function: "bar_group_area",
            },

            Equation::EffectiveDepth => EquationMetadata {
                name: "Effective Depth",
                description: "Depth from the compression face to the tension steel centroid",
                formula_plain: "d = h - cover - dia_t / 2",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("d", "Effective depth", "mm"),
                    Variable::new("h", "Overall depth", "mm"),
                    Variable::new("Ø_t", "Tension bar diameter", "mm"),
                ],
                assumptions: vec!["Single layer of tension bars", "Cover measured to the bar surface"],
                category: EquationCategory::SectionGeometry,
                source_module: "equations/flexure.rs",
                source_function: "effective_depth",
            },

            Equation::CompressionSteelDepth => EquationMetadata {
                name: "Compression Steel Depth",
                description: "Depth from the compression face to the compression steel centroid",
                formula_plain: "d' = cover + dia_c / 2",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("d'", "Compression steel depth", "mm"),
                    Variable::new("Ø_c", "Compression bar diameter", "mm"),
                ],
                assumptions: vec!["Single layer of compression bars", "d' = 0 without compression bars"],
                category: EquationCategory::SectionGeometry,
                source_module: "equations/flexure.rs",
                source_function: "compression_steel_depth",
            },

            Equation::NeutralAxisDepth => EquationMetadata {
                name: "Neutral Axis Depth",
                description: "Depth of the neutral axis from the stress-block depth",
                formula_plain: "c = a / beta1",
                reference: CodeReference::Nzs3101 { part: 1, clause: "9.4.1.2" },
                variables: vec![
                    Variable::new("c", "Neutral axis depth", "mm"),
                    Variable::new("a", "Stress block depth", "mm"),
                ],
                assumptions: vec!["Rectangular stress block"],
                category: EquationCategory::StrainCompatibility,
                source_module: "equations/flexure.rs",
                source_function: "neutral_axis_depth",
            },

            Equation::CompressionSteelStrain => EquationMetadata {
                name: "Compression Steel Strain",
                description: "Strain at the compression steel from a linear strain profile",
                formula_plain: "eps_sc = eps_cu * (c - d') / c",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("ε_sc", "Compression steel strain", "-"),
                    Variable::new("ε_cu", "Ultimate concrete strain", "-"),
                ],
                assumptions: vec!["Plane sections remain plane", "Perfect bond", "Not clamped when c < d'"],
                category: EquationCategory::StrainCompatibility,
                source_module: "equations/flexure.rs",
                source_function: "compression_steel_strain",
            },

            Equation::CompressionSteelStress => EquationMetadata {
                name: "Compression Steel Stress",
                description: "Elastic-perfectly-plastic steel stress limited to yield",
                formula_plain: "f_sc = min(Es * eps_sc, fy)",
                reference: CodeReference::Nzs3101 { part: 1, clause: "9.5.1" },
                variables: vec![
                    Variable::new("f_sc", "Compression steel stress", "MPa"),
                    Variable::new("E_s", "Steel modulus of elasticity", "MPa"),
                    Variable::new("f_y", "Steel yield strength", "MPa"),
                ],
                assumptions: vec!["Upper limit f_y only"],
                category: EquationCategory::StrainCompatibility,
                source_module: "equations/flexure.rs",
                source_function: "capped_steel_stress",
            },

            Equation::YieldStrain => EquationMetadata {
                name: "Steel Yield Strain",
                description: "Strain at which the reinforcement yields",
                formula_plain: "eps_y = fy / Es",
                reference: CodeReference::Nzs3101 { part: 1, clause: "9.5.1" },
                variables: vec![
                    Variable::new("ε_y", "Yield strain", "-"),
                    Variable::new("f_y", "Steel yield strength", "MPa"),
                    Variable::new("E_s", "Steel modulus of elasticity", "MPa"),
                ],
                assumptions: vec!["Bilinear steel stress-strain curve"],
                category: EquationCategory::StrainCompatibility,
                source_module: "materials/reinforcement.rs",
                source_function: "yield_strain",
            },

            Equation::TensionForce => EquationMetadata {
                name: "Tension Force",
                description: "Force in the tension reinforcement",
                formula_plain: "T = As_t * fy",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("T", "Tension force", "N"),
                    Variable::new("As,t", "Tension steel area", "mm²"),
                ],
                assumptions: vec!["Tension steel at yield (not verified by strain)"],
                category: EquationCategory::Equilibrium,
                source_module: "equations/flexure.rs",
                source_function: "steel_force",
            },

            Equation::ConcreteCompressionForce => EquationMetadata {
                name: "Concrete Compression Force",
                description: "Resultant of the rectangular concrete stress block",
                formula_plain: "Cc = alpha1 * f'c * b * a",
                reference: CodeReference::Nzs3101 { part: 1, clause: "9.4.1.2" },
                variables: vec![
                    Variable::new("C_c", "Concrete compression force", "N"),
                    Variable::new("b", "Section width", "mm"),
                    Variable::new("a", "Stress block depth", "mm"),
                ],
                assumptions: vec!["Rectangular section", "Concrete tensile strength ignored"],
                category: EquationCategory::Equilibrium,
                source_module: "equations/flexure.rs",
                source_function: "concrete_compression_force",
            },

            Equation::CompressionSteelForce => EquationMetadata {
                name: "Compression Steel Force",
                description: "Force in the compression reinforcement",
                formula_plain: "Cs = As_c * f_sc",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("C_s", "Compression steel force", "N"),
                    Variable::new("As,c", "Compression steel area", "mm²"),
                ],
                assumptions: vec!["Concrete displaced by the bars not deducted"],
                category: EquationCategory::Equilibrium,
                source_module: "equations/flexure.rs",
                source_function: "steel_force",
            },

            Equation::ForceEquilibrium => EquationMetadata {
                name: "Force Equilibrium",
                description: "Stress-block depth found by bisection on the force residual",
                formula_plain: "Cc + Cs - T = 0",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("F(a)", "Equilibrium residual", "N"),
                ],
                assumptions: vec![
                    "Search interval 1.0 mm to h",
                    "At most 60 iterations, stop when |F| < 0.01 N",
                ],
                category: EquationCategory::Equilibrium,
                source_module: "calculations/flexure.rs",
                source_function: "solve_with",
            },

            Equation::NominalMoment => EquationMetadata {
                name: "Nominal Moment Capacity",
                description: "Moment of the compression forces about the tension steel",
                formula_plain: "Mn = Cc(d - a/2) + Cs(d - d')",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("M_n", "Nominal moment capacity", "kN·m"),
                    Variable::new("d", "Effective depth", "mm"),
                ],
                assumptions: vec!["Moments taken about the tension steel centroid"],
                category: EquationCategory::MomentCapacity,
                source_module: "equations/flexure.rs",
                source_function: "nominal_moment",
            },

            Equation::DesignMoment => EquationMetadata {
                name: "Design Moment Capacity",
                description: "Nominal capacity reduced by the strength reduction factor",
                formula_plain: "phiMn = phi * Mn",
                reference: CodeReference::Nzs3101 { part: 1, clause: "9.3.1" },
                variables: vec![
                    Variable::new("ϕ", "Strength reduction factor for flexure", "-"),
                    Variable::new("ϕM_n", "Design moment capacity", "kN·m"),
                ],
                assumptions: vec!["ϕ = 0.85 for flexure"],
                category: EquationCategory::MomentCapacity,
                source_module: "equations/flexure.rs",
                source_function: "design_moment",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in appendix order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![
            StressBlock,
            SectionGeometry,
            StrainCompatibility,
            Equilibrium,
            MomentCapacity,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::StressBlockFactors,
    // Geometry
    Equation::BarGroupArea,
    Equation::EffectiveDepth,
    Equation::CompressionSteelDepth,
    // Strains and stresses
    Equation::NeutralAxisDepth,
    Equation::CompressionSteelStrain,
    Equation::CompressionSteelStress,
    Equation::YieldStrain,
    // Forces
    Equation::TensionForce,
    Equation::ConcreteCompressionForce,
    Equation::CompressionSteelForce,
    Equation::ForceEquilibrium,
    // Capacity
    Equation::NominalMoment,
    Equation::DesignMoment,
];

/// Equations applied to a section, in calculation order.
///
/// Compression-steel equations are left out for singly reinforced sections.
pub fn flexure_calculation_equations(has_compression_steel: bool) -> Vec<Equation> {
    let mut equations = vec![
        Equation::EffectiveDepth,
        Equation::BarGroupArea,
        Equation::TensionForce,
        Equation::ConcreteCompressionForce,
        Equation::ForceEquilibrium,
        Equation::NeutralAxisDepth,
    ];
    if has_compression_steel {
        equations.insert(1, Equation::CompressionSteelDepth);
        equations.extend([
            Equation::CompressionSteelStrain,
            Equation::CompressionSteelStress,
            Equation::CompressionSteelForce,
        ]);
    }
    equations.extend([Equation::NominalMoment, Equation::DesignMoment]);
    equations
}

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where/why it was used (e.g., "Step 3: equilibrium")
    pub context: String,
    /// Optional: the member label this equation was applied to
    pub member_label: Option<String>,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            member_label: None,
        }
    }

    /// Create usage record with member label
    pub fn for_member(equation: Equation, context: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            member_label: Some(label.into()),
        }
    }
}

/// Collector for equation usage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Record equation usage for a specific member
    pub fn record_for_member(&mut self, equation: Equation, context: impl Into<String>, label: impl Into<String>) {
        self.usages.push(EquationUsage::for_member(equation, context, label));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used (deduplicated, first-use order)
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category for the appendix
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }

    /// Plain-text "List of Equations" appendix for a text report.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calc_core::equations::registry::{Equation, EquationTracker};
    ///
    /// let mut tracker = EquationTracker::new();
    /// tracker.record(Equation::NominalMoment, "Moment capacity");
    ///
    /// let text = tracker.generate_appendix_text();
    /// assert!(text.contains("Nominal Moment Capacity"));
    /// ```
    pub fn generate_appendix_text(&self) -> String {
        let mut output = String::from("LIST OF EQUATIONS\n");

        let by_category = self.by_category();
        if by_category.is_empty() {
            output.push_str("No equations recorded.\n");
            return output;
        }

        for (category, equations) in by_category {
            output.push_str(&format!("\n{}\n", category.display_name()));
            for equation in equations {
                let meta = equation.metadata();
                output.push_str(&format!(
                    "  {}: {}  [{}]\n",
                    meta.name,
                    meta.formula_plain,
                    meta.reference.citation()
                ));
            }
        }

        output
    }
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate a complete EQUATIONS.md file for documentation.
///
/// # Example
///
/// ```rust
/// use calc_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Flexcap Equations Reference"));
/// assert!(markdown.contains("Moment Capacity"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Flexcap Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists all formulas used in the beam flexural capacity calculation.
Each equation includes its formula, code reference, source location, and assumptions.

## Units

| Quantity | Unit |
|----------|------|
| Length | mm |
| Stress, modulus | MPa |
| Force | N (reported in kN) |
| Moment | kN·m |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 14);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source", eq);
        }

        let moment = Equation::NominalMoment.metadata();
        assert!(moment.formula_plain.contains("Cc(d - a/2)"));
    }

    #[test]
    fn test_code_reference_citation() {
        let reference = CodeReference::Nzs3101 { part: 1, clause: "9.3.1" };
        assert_eq!(reference.citation(), "NZS 3101: Part 1 Clause 9.3.1");
        assert_eq!(reference.short_form(), "NZS 3101");
        assert_eq!(CodeReference::Mechanics.citation(), "Fundamental Mechanics");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::NominalMoment, "Step 6");
        tracker.record(Equation::DesignMoment, "Step 6");
        tracker.record_for_member(Equation::NominalMoment, "Step 6", "B-1");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(tracker.unique_equations().len(), 2);
        assert_eq!(tracker.usages()[2].member_label.as_deref(), Some("B-1"));
    }

    #[test]
    fn test_by_category_sorted() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::DesignMoment, "test");
        tracker.record(Equation::EffectiveDepth, "test");
        tracker.record(Equation::ConcreteCompressionForce, "test");

        let cats: Vec<_> = tracker.by_category().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            cats,
            vec![
                EquationCategory::SectionGeometry,
                EquationCategory::Equilibrium,
                EquationCategory::MomentCapacity,
            ]
        );
    }

    #[test]
    fn test_singly_reinforced_equation_set() {
        let equations = flexure_calculation_equations(false);
        assert!(equations.contains(&Equation::ForceEquilibrium));
        assert!(!equations.contains(&Equation::CompressionSteelStrain));
        assert!(!equations.contains(&Equation::CompressionSteelDepth));
        assert_eq!(equations.last(), Some(&Equation::DesignMoment));
    }

    #[test]
    fn test_doubly_reinforced_equation_set() {
        let equations = flexure_calculation_equations(true);
        assert!(equations.contains(&Equation::CompressionSteelDepth));
        assert!(equations.contains(&Equation::CompressionSteelStress));
        assert!(equations.contains(&Equation::CompressionSteelForce));
    }

    #[test]
    fn test_empty_appendix() {
        let text = EquationTracker::new().generate_appendix_text();
        assert!(text.contains("No equations recorded"));
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("Auto-generated from source code"));
        for category in Equation::all_categories() {
            assert!(
                markdown.contains(&format!("## {}", category.display_name())),
                "Missing category {:?}",
                category
            );
        }
        assert!(markdown.contains("NZS 3101: Part 1 Clause 9.4.1.2"));
        assert!(markdown.contains("**Total Equations:** 14"));
        assert!(markdown.contains("**Categories:** 5"));
    }
}
