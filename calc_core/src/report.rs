//! # Calculation Reports
//!
//! Turns a solved section into the text a designer files with the job:
//!
//! - [`ResultSummary`] - the five headline values at two decimals
//! - [`CalculationReport`] - INPUT DATA, REFERENCES, CALCULATIONS, CONCLUSION
//! - [`LastCalculation`] - the most recent outcome held by a front end,
//!   which decides whether a report can be exported
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::flexure::SectionInput;
//! use calc_core::report::{CalculationReport, ReportHeader};
//! use calc_core::settings::SolverSettings;
//!
//! let report = CalculationReport::calculate(
//!     ReportHeader::default(),
//!     SectionInput::default(),
//!     &SolverSettings::default(),
//! ).unwrap();
//!
//! let text = report.render();
//! assert!(text.contains("Design moment capacity = 97.00 kN·m"));
//! ```

use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calculations::flexure::{solve_with, CapacityResult, SectionInput};
use crate::equations::registry::{flexure_calculation_equations, Equation, EquationTracker};
use crate::errors::{CalcError, CalcResult};
use crate::materials::yield_strain;
use crate::settings::SolverSettings;
use crate::units::{Kilonewtons, Newtons};

pub const REPORT_TITLE: &str = "NZS 3101 BEAM FLEXURAL CAPACITY CALCULATION REPORT";

/// Job details printed above the input data. Blank fields are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportHeader {
    #[serde(default)]
    pub engineer: String,
    #[serde(default)]
    pub job_id: String,
    pub date: NaiveDate,
}

impl Default for ReportHeader {
    fn default() -> Self {
        ReportHeader {
            engineer: String::new(),
            job_id: String::new(),
            date: Local::now().date_naive(),
        }
    }
}

impl ReportHeader {
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>) -> Self {
        ReportHeader {
            engineer: engineer.into(),
            job_id: job_id.into(),
            ..Default::default()
        }
    }
}

/// Headline values shown after a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub stress_block_depth_mm: f64,
    pub neutral_axis_depth_mm: f64,
    pub compression_steel_stress_mpa: f64,
    pub nominal_moment_knm: f64,
    pub design_moment_knm: f64,
    /// Present when the solver did not reach equilibrium
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ResultSummary {
    pub fn from_result(result: &CapacityResult) -> Self {
        ResultSummary {
            stress_block_depth_mm: result.stress_block_depth_mm,
            neutral_axis_depth_mm: result.neutral_axis_depth_mm,
            compression_steel_stress_mpa: result.compression_steel_stress_mpa,
            nominal_moment_knm: result.nominal_moment_knm,
            design_moment_knm: result.design_moment_knm,
            warning: (!result.convergence.is_authoritative()).then(|| result.convergence.describe()),
        }
    }

    /// The five headline lines, in display order
    pub fn lines(&self) -> [String; 5] {
        [
            format!("Equivalent stress-block depth a = {:.2} mm", self.stress_block_depth_mm),
            format!("Neutral axis depth c = {:.2} mm", self.neutral_axis_depth_mm),
            format!("Compression steel stress = {:.2} MPa", self.compression_steel_stress_mpa),
            format!("Nominal moment Mn = {:.2} kN·m", self.nominal_moment_knm),
            format!("Design moment φMn = {:.2} kN·m", self.design_moment_knm),
        ]
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))?;
        if let Some(warning) = &self.warning {
            write!(f, "\nWarning: {}", warning)?;
        }
        Ok(())
    }
}

fn step_context(equation: Equation) -> &'static str {
    match equation {
        Equation::StressBlockFactors | Equation::YieldStrain => "References",
        Equation::EffectiveDepth | Equation::CompressionSteelDepth => "Step 1: effective depths",
        Equation::BarGroupArea => "Step 2: reinforcement areas",
        Equation::TensionForce | Equation::ForceEquilibrium | Equation::NeutralAxisDepth => {
            "Step 3: equilibrium of forces"
        }
        Equation::CompressionSteelStrain | Equation::CompressionSteelStress => {
            "Step 4: compression steel"
        }
        Equation::ConcreteCompressionForce | Equation::CompressionSteelForce => "Step 5: forces",
        Equation::NominalMoment | Equation::DesignMoment => "Step 6: moment capacity",
    }
}

/// A solved section with everything needed to print its report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationReport {
    pub header: ReportHeader,
    pub input: SectionInput,
    pub result: CapacityResult,
    pub equations: EquationTracker,
}

impl CalculationReport {
    /// Assemble a report from an already solved section.
    pub fn new(header: ReportHeader, input: SectionInput, result: CapacityResult) -> Self {
        let mut equations = EquationTracker::new();
        let mut applied = vec![Equation::StressBlockFactors, Equation::YieldStrain];
        applied.extend(flexure_calculation_equations(input.has_compression_steel()));
        for equation in applied {
            if input.label.is_empty() {
                equations.record(equation, step_context(equation));
            } else {
                equations.record_for_member(equation, step_context(equation), input.label.clone());
            }
        }

        CalculationReport {
            header,
            input,
            result,
            equations,
        }
    }

    /// Solve the section and build its report.
    pub fn calculate(
        header: ReportHeader,
        input: SectionInput,
        settings: &SolverSettings,
    ) -> CalcResult<Self> {
        let result = solve_with(&input, settings)?;
        Ok(Self::new(header, input, result))
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::from_result(&self.result)
    }

    fn reference_lines(&self) -> Vec<String> {
        let cite = |equation: Equation| equation.metadata().reference.citation();
        vec![
            format!("• {} - α₁, β₁ values", cite(Equation::StressBlockFactors)),
            format!("• {} - rectangular-stress-block", cite(Equation::ConcreteCompressionForce)),
            format!("• {} - ϕ factors for flexure", cite(Equation::DesignMoment)),
            format!(
                "• {} - steel strain ε_y = f_y / E_s = {:.5}",
                cite(Equation::YieldStrain),
                yield_strain(self.input.fy_mpa, self.input.es_mpa)
            ),
        ]
    }

    /// Render the report as plain text.
    pub fn render(&self) -> String {
        let input = &self.input;
        let r = &self.result;
        let kn = |force: f64| Kilonewtons::from(Newtons(force)).0;
        let warning = (!r.convergence.is_authoritative()).then(|| r.convergence.describe());

        let mut lines: Vec<String> = vec![REPORT_TITLE.to_string(), "-".repeat(50)];
        if !input.label.is_empty() {
            lines.push(format!("Member: {}", input.label));
        }
        if !self.header.engineer.is_empty() {
            lines.push(format!("Engineer: {}", self.header.engineer));
        }
        if !self.header.job_id.is_empty() {
            lines.push(format!("Job: {}", self.header.job_id));
        }
        lines.push(format!("Date: {}", self.header.date.format("%Y-%m-%d")));

        lines.push(String::new());
        lines.push("INPUT DATA".to_string());
        lines.push(format!("Width (b) = {:.1} mm", input.width_mm));
        lines.push(format!("Depth (h) = {:.1} mm", input.depth_mm));
        lines.push(format!("Cover = {:.1} mm", input.cover_mm));
        lines.push(format!(
            "f'c = {:.1} MPa, fy = {:.1} MPa, Es = {:.0} MPa",
            input.fc_mpa, input.fy_mpa, input.es_mpa
        ));
        lines.push(format!("Tension bars: {}", input.tension_bars()));
        lines.push(format!("Compression bars: {}", input.compression_bars()));
        lines.push(format!(
            "α₁ = {:.2}, β₁ = {:.2}, ϕ = {:.2}",
            input.alpha1, input.beta1, input.phi
        ));

        lines.push(String::new());
        lines.push("REFERENCES".to_string());
        lines.extend(self.reference_lines());

        lines.push(String::new());
        lines.push("CALCULATIONS".to_string());
        lines.push("1. Effective depths:".to_string());
        lines.push(format!("   d = h − cover − Øt/2 = {:.1} mm", r.effective_depth_mm));
        lines.push(format!("   d′ = cover + Øc/2 = {:.1} mm", r.compression_steel_depth_mm));
        lines.push("2. Reinforcement areas:".to_string());
        lines.push(format!("   As,t = {:.2} mm²", r.tension_steel_area_mm2));
        lines.push(format!("   As,c = {:.2} mm²", r.compression_steel_area_mm2));
        lines.push("3. Equilibrium of forces:".to_string());
        lines.push(format!("   T = As,t·f_y = {:.2} kN", kn(r.tension_force_n)));
        lines.push(format!(
            "   Solving Cc + Cs = T by bisection → a = {:.2} mm",
            r.stress_block_depth_mm
        ));
        lines.push(format!("   ⇒ Neutral axis c = a/β₁ = {:.2} mm", r.neutral_axis_depth_mm));
        if let Some(warning) = &warning {
            lines.push(format!("   WARNING: {}", warning));
        }
        lines.push(format!(
            "4. Compression steel strain ε_sc = {:.6} → f_sc = {:.2} MPa",
            r.compression_steel_strain, r.compression_steel_stress_mpa
        ));
        lines.push("5. Forces:".to_string());
        lines.push(format!("   Cc = α₁ f′c b a = {:.2} kN", kn(r.concrete_force_n)));
        lines.push(format!("   Cs = As,c f_sc = {:.2} kN", kn(r.compression_steel_force_n)));
        lines.push("6. Moment capacity:".to_string());
        lines.push("   M_n = Cc (d − a/2) + Cs (d − d′)".to_string());
        lines.push(format!("       = {:.2} kN·m", r.nominal_moment_knm));
        lines.push(format!("   Design strength (ϕ = {:.2}):", input.phi));
        lines.push(format!("   ϕ M_n = {:.2} kN·m", r.design_moment_knm));

        lines.push(String::new());
        lines.push("CONCLUSION".to_string());
        lines.push(format!("Design moment capacity = {:.2} kN·m", r.design_moment_knm));
        lines.push("(Use in comparison with factored design moment M_u)".to_string());
        if warning.is_some() {
            lines.push("NOT VERIFIED: equilibrium was not satisfied, do not use this capacity".to_string());
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Render the report followed by the list of equations applied.
    pub fn render_with_equations(&self) -> String {
        format!("{}\n{}", self.render(), self.equations.generate_appendix_text())
    }
}

impl fmt::Display for CalculationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Outcome of the most recent calculation in a session.
#[derive(Debug, Clone, Default)]
pub enum LastCalculation {
    /// Nothing calculated yet
    #[default]
    None,
    Failed(CalcError),
    Succeeded(Box<CalculationReport>),
}

impl LastCalculation {
    /// Replace the previous outcome with a new one.
    pub fn record(outcome: CalcResult<CalculationReport>) -> Self {
        match outcome {
            Ok(report) => LastCalculation::Succeeded(Box::new(report)),
            Err(err) => LastCalculation::Failed(err),
        }
    }

    /// The report to export, if the last calculation succeeded.
    pub fn exportable(&self) -> CalcResult<&CalculationReport> {
        match self {
            LastCalculation::Succeeded(report) => Ok(&**report),
            LastCalculation::None | LastCalculation::Failed(_) => Err(CalcError::NothingToExport),
        }
    }

    /// Text for the result area: the summary, or the error message.
    pub fn display_text(&self) -> String {
        match self {
            LastCalculation::None => String::new(),
            LastCalculation::Failed(err) => format!("Error: {}", err),
            LastCalculation::Succeeded(report) => report.summary().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_header() -> ReportHeader {
        ReportHeader {
            engineer: "J. Tane".to_string(),
            job_id: "26-014".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        }
    }

    fn reference_report() -> CalculationReport {
        CalculationReport::calculate(fixed_header(), SectionInput::default(), &SolverSettings::default())
            .unwrap()
    }

    #[test]
    fn test_summary_lines() {
        let summary = reference_report().summary();
        assert_eq!(
            summary.lines(),
            [
                "Equivalent stress-block depth a = 44.29 mm".to_string(),
                "Neutral axis depth c = 52.10 mm".to_string(),
                "Compression steel stress = 81.78 MPa".to_string(),
                "Nominal moment Mn = 114.12 kN·m".to_string(),
                "Design moment φMn = 97.00 kN·m".to_string(),
            ]
        );
        assert!(summary.warning.is_none());
        assert!(!summary.to_string().contains("Warning"));
    }

    #[test]
    fn test_report_sections_in_order() {
        let text = reference_report().render();
        let positions: Vec<usize> = [REPORT_TITLE, "INPUT DATA", "REFERENCES", "CALCULATIONS", "CONCLUSION"]
            .iter()
            .map(|heading| text.find(heading).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_report_numbers() {
        let text = reference_report().render();
        for expected in [
            "Member: B-1",
            "Engineer: J. Tane",
            "Job: 26-014",
            "Date: 2026-03-02",
            "f'c = 25.0 MPa, fy = 500.0 MPa, Es = 200000 MPa",
            "Tension bars: 3 Ø16.0 mm",
            "Compression bars: 3 Ø10.0 mm",
            "NZS 3101: Part 1 Clause 9.4.1.3 - α₁, β₁ values",
            "NZS 3101: Part 1 Clause 9.5.1 - steel strain ε_y = f_y / E_s = 0.00250",
            "d = h − cover − Øt/2 = 402.0 mm",
            "d′ = cover + Øc/2 = 45.0 mm",
            "As,t = 603.19 mm²",
            "As,c = 235.62 mm²",
            "T = As,t·f_y = 301.59 kN",
            "a = 44.29 mm",
            "ε_sc = 0.000409 → f_sc = 81.78 MPa",
            "Cc = α₁ f′c b a = 282.32 kN",
            "Cs = As,c f_sc = 19.27 kN",
            "= 114.12 kN·m",
            "ϕ M_n = 97.00 kN·m",
            "Design moment capacity = 97.00 kN·m",
        ] {
            assert!(text.contains(expected), "missing line: {}", expected);
        }
        assert!(!text.contains("WARNING"));
    }

    #[test]
    fn test_bar_diameters_keep_all_digits() {
        let input = SectionInput {
            n_tension: 4,
            dia_tension_mm: 12.25,
            ..SectionInput::default()
        };
        let report = CalculationReport::calculate(fixed_header(), input, &SolverSettings::default()).unwrap();
        let text = report.render();
        assert!(text.contains("Tension bars: 4 Ø12.25 mm"));
        assert!(text.contains("Compression bars: 3 Ø10.0 mm"));
    }

    #[test]
    fn test_blank_header_fields_omitted() {
        let input = SectionInput {
            label: String::new(),
            ..SectionInput::default()
        };
        let report = CalculationReport::calculate(ReportHeader::default(), input, &SolverSettings::default())
            .unwrap();
        let text = report.render();
        assert!(!text.contains("Member:"));
        assert!(!text.contains("Engineer:"));
        assert!(text.contains("Date:"));
    }

    #[test]
    fn test_unverified_result_is_marked() {
        let input = SectionInput {
            n_tension: 10,
            dia_tension_mm: 32.0,
            ..SectionInput::default()
        };
        let report = CalculationReport::calculate(fixed_header(), input, &SolverSettings::default()).unwrap();
        let text = report.render();
        assert!(text.contains("WARNING: no equilibrium root"));
        assert!(text.contains("NOT VERIFIED"));
        assert!(report.summary().to_string().contains("Warning:"));
    }

    #[test]
    fn test_equations_recorded() {
        let report = reference_report();
        let unique = report.equations.unique_equations();
        assert!(unique.contains(&Equation::CompressionSteelStress));
        assert!(unique.contains(&Equation::DesignMoment));
        assert!(report.equations.usages().iter().all(|u| u.member_label.as_deref() == Some("B-1")));

        let with_appendix = report.render_with_equations();
        assert!(with_appendix.contains("LIST OF EQUATIONS"));

        let singly = SectionInput {
            n_compression: 0,
            ..SectionInput::default()
        };
        let report = CalculationReport::calculate(fixed_header(), singly, &SolverSettings::default()).unwrap();
        assert!(!report.equations.unique_equations().contains(&Equation::CompressionSteelStrain));
    }

    #[test]
    fn test_last_calculation_export() {
        let last = LastCalculation::default();
        assert_eq!(last.exportable().unwrap_err(), CalcError::NothingToExport);
        assert!(last.display_text().is_empty());

        let input = SectionInput {
            n_tension: 0,
            ..SectionInput::default()
        };
        let last = LastCalculation::record(CalculationReport::calculate(
            fixed_header(),
            input,
            &SolverSettings::default(),
        ));
        assert!(matches!(last.exportable(), Err(CalcError::NothingToExport)));
        assert!(last.display_text().starts_with("Error: Invalid input for 'n_tension'"));

        let last = LastCalculation::record(Ok(reference_report()));
        assert!(last.exportable().is_ok());
        assert!(last.display_text().starts_with("Equivalent stress-block depth a = 44.29 mm"));
    }

    #[test]
    fn test_report_json() {
        let report = reference_report();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"date\":\"2026-03-02\""));
        let parsed: CalculationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.render(), report.render());
    }
}
