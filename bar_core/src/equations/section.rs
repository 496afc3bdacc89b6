//! # Bar Section Formulas
//!
//! Cross-section area, outer surface area and volume for solid bar stock.
//! Every function takes millimetres and returns mm² or mm³.
//!
//! ## Notation
//!
//! - `d` = Diameter of round bar
//! - `s` = Side of square bar
//! - `w` = Width of flat bar
//! - `t` = Thickness of flat bar
//! - `L` = Length of bar
//!
//! Two different "areas" exist and must not be confused:
//! - **cross-section area**: the cut face perpendicular to the length axis
//! - **outer surface area**: lateral faces plus both end caps

use std::f64::consts::PI;

use crate::profile::BarDimensions;

// =============================================================================
// ROUND BAR
// =============================================================================

/// Cross-section area of a round bar
///
/// ```text
///       ___
///     /     \
///    |   d   |
///     \ ___ /
/// ```
///
/// # Formula
/// A = π·(d/2)²
///
/// # Example
/// ```rust
/// use bar_core::equations::section::round_cross_section_area;
///
/// let area = round_cross_section_area(10.0);
/// assert!((area - 78.54).abs() < 0.01);
/// ```
#[inline]
pub fn round_cross_section_area(d: f64) -> f64 {
    let r = d / 2.0;
    PI * r * r
}

/// Outer surface area of a round bar (lateral surface plus two end caps)
///
/// # Formula
/// A = π·d·L + 2·π·(d/2)²
#[inline]
pub fn round_surface_area(d: f64, length: f64) -> f64 {
    PI * d * length + 2.0 * round_cross_section_area(d)
}

/// Volume of a round bar: V = π·(d/2)²·L
#[inline]
pub fn round_volume(d: f64, length: f64) -> f64 {
    round_cross_section_area(d) * length
}

// =============================================================================
// SQUARE BAR
// =============================================================================

/// Cross-section area of a square bar: A = s²
#[inline]
pub fn square_cross_section_area(s: f64) -> f64 {
    s * s
}

/// Outer surface area of a square bar
///
/// # Formula
/// A = 4·s·L + 2·s²
#[inline]
pub fn square_surface_area(s: f64, length: f64) -> f64 {
    4.0 * s * length + 2.0 * square_cross_section_area(s)
}

/// Volume of a square bar: V = s²·L
#[inline]
pub fn square_volume(s: f64, length: f64) -> f64 {
    square_cross_section_area(s) * length
}

// =============================================================================
// FLAT BAR
// =============================================================================

/// Cross-section area of a flat bar
///
/// ```text
///     ┌───────────────┐
///   t │               │
///     └───────────────┘
///             w
/// ```
///
/// # Formula
/// A = w·t
#[inline]
pub fn flat_cross_section_area(w: f64, t: f64) -> f64 {
    w * t
}

/// Outer surface area of a flat bar (rectangular prism)
///
/// # Formula
/// A = 2·(w·L + t·L + w·t)
///
/// # Example
/// ```rust
/// use bar_core::equations::section::flat_surface_area;
///
/// // 20 x 10 x 100 mm: 2·(2000 + 1000 + 200)
/// assert_eq!(flat_surface_area(20.0, 10.0, 100.0), 6400.0);
/// ```
#[inline]
pub fn flat_surface_area(w: f64, t: f64, length: f64) -> f64 {
    2.0 * (w * length + t * length + w * t)
}

/// Volume of a flat bar: V = w·t·L
#[inline]
pub fn flat_volume(w: f64, t: f64, length: f64) -> f64 {
    flat_cross_section_area(w, t) * length
}

// =============================================================================
// PROFILE DISPATCH
// =============================================================================

/// Cross-section area for any profile (dimensions in mm)
pub fn cross_section_area(dims: &BarDimensions) -> f64 {
    match *dims {
        BarDimensions::Round { diameter } => round_cross_section_area(diameter),
        BarDimensions::Square { side } => square_cross_section_area(side),
        BarDimensions::Flat { width, thickness } => flat_cross_section_area(width, thickness),
    }
}

/// Outer surface area for any profile (dimensions in mm)
pub fn outer_surface_area(dims: &BarDimensions, length: f64) -> f64 {
    match *dims {
        BarDimensions::Round { diameter } => round_surface_area(diameter, length),
        BarDimensions::Square { side } => square_surface_area(side, length),
        BarDimensions::Flat { width, thickness } => flat_surface_area(width, thickness, length),
    }
}

/// Volume for any profile: cross-section area × length
pub fn volume(dims: &BarDimensions, length: f64) -> f64 {
    cross_section_area(dims) * length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_bar() {
        // d = 10 mm, L = 100 mm
        assert!((round_cross_section_area(10.0) - 78.5398).abs() < 1e-3);
        assert!((round_volume(10.0, 100.0) - 7853.98).abs() < 0.01);
        // π·10·100 + 2·78.54 = 3141.59 + 157.08
        assert!((round_surface_area(10.0, 100.0) - 3298.67).abs() < 0.01);
    }

    #[test]
    fn test_square_bar() {
        assert_eq!(square_cross_section_area(10.0), 100.0);
        assert_eq!(square_volume(10.0, 100.0), 10_000.0);
        assert_eq!(square_surface_area(10.0, 100.0), 4200.0);
    }

    #[test]
    fn test_flat_bar() {
        assert_eq!(flat_cross_section_area(20.0, 10.0), 200.0);
        assert_eq!(flat_volume(20.0, 10.0, 100.0), 20_000.0);
        assert_eq!(flat_surface_area(20.0, 10.0, 100.0), 6400.0);
    }

    #[test]
    fn test_dispatch_matches_direct_formulas() {
        let round = BarDimensions::Round { diameter: 12.0 };
        assert_eq!(cross_section_area(&round), round_cross_section_area(12.0));
        assert_eq!(volume(&round, 50.0), round_volume(12.0, 50.0));

        let flat = BarDimensions::Flat {
            width: 30.0,
            thickness: 5.0,
        };
        assert_eq!(outer_surface_area(&flat, 200.0), flat_surface_area(30.0, 5.0, 200.0));
    }

    #[test]
    fn test_surface_exceeds_cross_section() {
        let samples = [
            BarDimensions::Round { diameter: 8.0 },
            BarDimensions::Square { side: 8.0 },
            BarDimensions::Flat {
                width: 8.0,
                thickness: 3.0,
            },
        ];
        for dims in &samples {
            assert!(outer_surface_area(dims, 1.0) > cross_section_area(dims));
        }
    }

    #[test]
    fn test_volume_scales_with_length() {
        let dims = BarDimensions::Square { side: 7.0 };
        assert!((volume(&dims, 200.0) - 2.0 * volume(&dims, 100.0)).abs() < 1e-9);
    }
}
