//! # Weight and Price Formulas
//!
//! Converts bar volume to weight using material density, and weight or area
//! to price.
//!
//! ## Units
//!
//! - Volume: mm³
//! - Density: g/cm³
//! - Weight: kg
//!
//! 1 cm³ = 1000 mm³ and 1 kg = 1000 g, so the forward formula divides by
//! 1000 twice and its inverse multiplies by 10⁶.

use crate::units::{G_PER_KG, MM2_PER_IN2, MM3_PER_CM3};

/// Weight of a bar from its volume and density
///
/// # Formula
/// W = (V / 1000) · ρ / 1000
///
/// # Arguments
/// * `volume_mm3` - Volume in mm³
/// * `density_g_cm3` - Density in g/cm³
///
/// # Returns
/// Weight in kg
///
/// # Example
/// ```rust
/// use bar_core::equations::mass::weight_kg;
///
/// // 10 x 10 x 100 mm steel square: 10 cm³ × 7.85 = 78.5 g
/// assert!((weight_kg(10_000.0, 7.85) - 0.0785).abs() < 1e-12);
/// ```
#[inline]
pub fn weight_kg(volume_mm3: f64, density_g_cm3: f64) -> f64 {
    let volume_cm3 = volume_mm3 / MM3_PER_CM3;
    let weight_g = volume_cm3 * density_g_cm3;
    weight_g / G_PER_KG
}

/// Volume implied by a target weight (inverse of [`weight_kg`])
///
/// # Formula
/// V = W · 10⁶ / ρ
#[inline]
pub fn volume_from_weight(weight_kg: f64, density_g_cm3: f64) -> f64 {
    weight_kg * G_PER_KG * MM3_PER_CM3 / density_g_cm3
}

/// Price from weight: P = W · price_per_kg
#[inline]
pub fn price_by_weight(weight_kg: f64, price_per_kg: f64) -> f64 {
    weight_kg * price_per_kg
}

/// Price from area, priced per square inch
///
/// # Formula
/// P = (A / 645.16) · price_per_sq_inch
#[inline]
pub fn price_by_area(area_mm2: f64, price_per_sq_inch: f64) -> f64 {
    area_mm2 / MM2_PER_IN2 * price_per_sq_inch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight() {
        // Round 10 x 100 mm: 7853.98 mm³ → 0.06165 kg
        assert!((weight_kg(7853.98, 7.85) - 0.0617).abs() < 1e-4);
        assert!((weight_kg(20_000.0, 7.85) - 0.157).abs() < 1e-12);
    }

    #[test]
    fn test_volume_from_weight_inverts_weight() {
        for &(v, rho) in &[(1.0, 7.85), (7853.98, 7.85), (1.0e7, 2.7), (42.0, 8.96)] {
            let w = weight_kg(v, rho);
            assert!((volume_from_weight(w, rho) - v).abs() < 1e-9 * v);
        }
    }

    #[test]
    fn test_price_linear_in_weight() {
        assert_eq!(price_by_weight(2.0, 100.0), 200.0);
        assert_eq!(price_by_weight(4.0, 100.0), 2.0 * price_by_weight(2.0, 100.0));
        assert_eq!(price_by_weight(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_price_by_area() {
        assert!((price_by_area(645.16, 12.0) - 12.0).abs() < 1e-12);
        assert!((price_by_area(1290.32, 1.5) - 3.0).abs() < 1e-12);
    }
}
