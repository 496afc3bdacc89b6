//! # Inverse Sizing Formulas
//!
//! Solve a bar's volume formula for one unknown dimension. Each function is
//! the exact algebraic inverse of the matching volume formula in
//! [`section`](super::section); no iteration is involved.
//!
//! All arguments are in millimetres and mm³. Callers obtain the volume from
//! a target weight with [`volume_from_weight`](super::mass::volume_from_weight).

use std::f64::consts::PI;

/// Diameter of a round bar with the given volume and length
///
/// # Formula
/// r = √(V / (π·L)), d = 2·r
///
/// # Example
/// ```rust
/// use bar_core::equations::inverse::round_diameter;
///
/// let d = round_diameter(7853.981_633_974_483, 100.0);
/// assert!((d - 10.0).abs() < 1e-9);
/// ```
#[inline]
pub fn round_diameter(volume_mm3: f64, length: f64) -> f64 {
    let radius = (volume_mm3 / (PI * length)).sqrt();
    2.0 * radius
}

/// Length of a round bar with the given volume and diameter
///
/// # Formula
/// L = V / (π·(d/2)²)
#[inline]
pub fn round_length(volume_mm3: f64, diameter: f64) -> f64 {
    let radius = diameter / 2.0;
    volume_mm3 / (PI * radius * radius)
}

/// Side of a square bar: s = √(V / L)
#[inline]
pub fn square_side(volume_mm3: f64, length: f64) -> f64 {
    (volume_mm3 / length).sqrt()
}

/// Length of a square bar: L = V / s²
#[inline]
pub fn square_length(volume_mm3: f64, side: f64) -> f64 {
    volume_mm3 / (side * side)
}

/// Thickness of a flat bar: t = V / (w·L)
#[inline]
pub fn flat_thickness(volume_mm3: f64, width: f64, length: f64) -> f64 {
    volume_mm3 / (width * length)
}

/// Length of a flat bar: L = V / (w·t)
#[inline]
pub fn flat_length(volume_mm3: f64, width: f64, thickness: f64) -> f64 {
    volume_mm3 / (width * thickness)
}
