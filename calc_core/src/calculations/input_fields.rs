//! Input field declarations for front ends.
//!
//! Front ends (CLI prompts, forms, JSON tools) collect the twelve section
//! values as text. This module declares each field once, with its label,
//! unit, default and kind, and turns the collected strings into a
//! [`SectionInput`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::flexure::SectionInput;
use crate::errors::{CalcError, CalcResult};

/// How a field value must be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Whole number of bars
    Integer,
    /// Any finite decimal number
    Real,
}

/// Declaration of one input field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Key matching the `SectionInput` field name
    pub key: &'static str,
    /// Human-readable prompt label
    pub label: &'static str,
    /// Display unit, empty for dimensionless values
    pub unit: &'static str,
    /// Default value as shown to the user
    pub default: &'static str,
    pub kind: FieldKind,
}

const fn real(key: &'static str, label: &'static str, unit: &'static str, default: &'static str) -> FieldSpec {
    FieldSpec { key, label, unit, default, kind: FieldKind::Real }
}

const fn integer(key: &'static str, label: &'static str, default: &'static str) -> FieldSpec {
    FieldSpec { key, label, unit: "", default, kind: FieldKind::Integer }
}

/// The section input fields, in prompt order.
pub static INPUT_FIELDS: [FieldSpec; 12] = [
    real("width_mm", "Width b (mm)", "mm", "300"),
    real("depth_mm", "Depth h (mm)", "mm", "450"),
    real("cover_mm", "Cover (mm)", "mm", "40"),
    real("fc_mpa", "f'c (MPa)", "MPa", "25"),
    real("fy_mpa", "fy (MPa)", "MPa", "500"),
    real("es_mpa", "Es (MPa)", "MPa", "200000"),
    real("alpha1", "α₁", "", "0.85"),
    real("beta1", "β₁", "", "0.85"),
    integer("n_tension", "# tension bars", "3"),
    real("dia_tension_mm", "Tension bar Ø (mm)", "mm", "16"),
    integer("n_compression", "# compression bars", "3"),
    real("dia_compression_mm", "Compression bar Ø (mm)", "mm", "10"),
];

fn parse_real(decl: &FieldSpec, raw: &str) -> CalcResult<f64> {
    let value: f64 = raw.parse().map_err(|_| {
        CalcError::invalid_input(decl.key, raw, format!("{} must be a number", decl.label))
    })?;
    if !value.is_finite() {
        return Err(CalcError::invalid_input(decl.key, raw, "Value must be a finite number"));
    }
    Ok(value)
}

fn parse_count(decl: &FieldSpec, raw: &str) -> CalcResult<u32> {
    raw.parse().map_err(|_| {
        CalcError::invalid_input(
            decl.key,
            raw,
            format!("{} must be a non-negative whole number", decl.label),
        )
    })
}

impl SectionInput {
    /// Build an input from text values keyed by field key.
    ///
    /// Every key in [`INPUT_FIELDS`] must be present and non-blank.
    /// `phi` and `eps_cu` keep their fixed values. The result is not
    /// validated; `solve` does that.
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use calc_core::calculations::flexure::SectionInput;
    /// use calc_core::calculations::input_fields::INPUT_FIELDS;
    ///
    /// let values: HashMap<String, String> = INPUT_FIELDS
    ///     .iter()
    ///     .map(|f| (f.key.to_string(), f.default.to_string()))
    ///     .collect();
    /// let input = SectionInput::from_field_values("B-1", &values).unwrap();
    /// assert_eq!(input, SectionInput::default());
    /// ```
    pub fn from_field_values(label: &str, values: &HashMap<String, String>) -> CalcResult<Self> {
        let mut input = SectionInput {
            label: label.to_string(),
            ..SectionInput::default()
        };

        for decl in INPUT_FIELDS.iter() {
            let raw = values
                .get(decl.key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| CalcError::missing_field(decl.key))?;

            match decl.kind {
                FieldKind::Integer => {
                    let count = parse_count(decl, raw)?;
                    match decl.key {
                        "n_tension" => input.n_tension = count,
                        "n_compression" => input.n_compression = count,
                        other => {
                            return Err(CalcError::Internal {
                                message: format!("Unmapped integer field '{}'", other),
                            })
                        }
                    }
                }
                FieldKind::Real => {
                    let value = parse_real(decl, raw)?;
                    let slot = match decl.key {
                        "width_mm" => &mut input.width_mm,
                        "depth_mm" => &mut input.depth_mm,
                        "cover_mm" => &mut input.cover_mm,
                        "fc_mpa" => &mut input.fc_mpa,
                        "fy_mpa" => &mut input.fy_mpa,
                        "es_mpa" => &mut input.es_mpa,
                        "alpha1" => &mut input.alpha1,
                        "beta1" => &mut input.beta1,
                        "dia_tension_mm" => &mut input.dia_tension_mm,
                        "dia_compression_mm" => &mut input.dia_compression_mm,
                        other => {
                            return Err(CalcError::Internal {
                                message: format!("Unmapped real field '{}'", other),
                            })
                        }
                    };
                    *slot = value;
                }
            }
        }

        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> HashMap<String, String> {
        INPUT_FIELDS
            .iter()
            .map(|f| (f.key.to_string(), f.default.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_match_section_default() {
        let input = SectionInput::from_field_values("B-1", &defaults()).unwrap();
        assert_eq!(input, SectionInput::default());
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, a) in INPUT_FIELDS.iter().enumerate() {
            for b in INPUT_FIELDS.iter().skip(i + 1) {
                assert_ne!(a.key, b.key);
            }
        }
        assert!(INPUT_FIELDS.iter().all(|f| f.key != "phi" && f.key != "eps_cu"));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut values = defaults();
        values.insert("width_mm".into(), "  250.5 ".into());
        let input = SectionInput::from_field_values("", &values).unwrap();
        assert_eq!(input.width_mm, 250.5);
    }

    #[test]
    fn test_missing_and_blank_fields() {
        let mut values = defaults();
        values.remove("fy_mpa");
        let err = SectionInput::from_field_values("", &values).unwrap_err();
        assert!(matches!(err, CalcError::MissingField { ref field } if field == "fy_mpa"));

        let mut values = defaults();
        values.insert("cover_mm".into(), "   ".into());
        let err = SectionInput::from_field_values("", &values).unwrap_err();
        assert!(matches!(err, CalcError::MissingField { ref field } if field == "cover_mm"));
    }

    #[test]
    fn test_non_numeric_values() {
        let mut values = defaults();
        values.insert("fc_mpa".into(), "twenty".into());
        let err = SectionInput::from_field_values("", &values).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("fc_mpa"));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        for raw in ["inf", "NaN", "-infinity"] {
            let mut values = defaults();
            values.insert("es_mpa".into(), raw.into());
            assert!(SectionInput::from_field_values("", &values).is_err(), "{}", raw);
        }
    }

    #[test]
    fn test_bar_counts_must_be_whole() {
        for raw in ["3.5", "-1", "three"] {
            let mut values = defaults();
            values.insert("n_tension".into(), raw.into());
            let err = SectionInput::from_field_values("", &values).unwrap_err();
            assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "n_tension"));
        }
    }
}
