//! Reinforcing Bars
//!
//! A bar group is a single layer of identical bars. Beams here carry at most
//! one tension group and one compression group.

use serde::{Deserialize, Serialize};

use crate::equations::flexure::bar_group_area;

/// A group of identical reinforcing bars.
///
/// ```rust
/// use calc_core::materials::reinforcement::BarGroup;
///
/// let bars = BarGroup::new(3, 16.0);
/// assert!((bars.area_mm2() - 603.19).abs() < 0.01);
/// assert_eq!(bars.to_string(), "3 Ø16.0 mm");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGroup {
    /// Number of bars
    pub count: u32,
    /// Bar diameter (mm)
    pub diameter_mm: f64,
}

impl BarGroup {
    pub fn new(count: u32, diameter_mm: f64) -> Self {
        BarGroup { count, diameter_mm }
    }

    /// Total area n·π·Ø²/4 (mm²)
    pub fn area_mm2(&self) -> f64 {
        bar_group_area(self.count, self.diameter_mm)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Diameter keeps every significant digit, e.g. "3 Ø16.0 mm", "4 Ø12.25 mm".
impl std::fmt::Display for BarGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Ø{:?} mm", self.count, self.diameter_mm)
    }
}

/// Steel yield strain ε_y = f_y / E_s
pub fn yield_strain(fy_mpa: f64, es_mpa: f64) -> f64 {
    fy_mpa / es_mpa
}
