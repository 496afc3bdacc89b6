//! # Unit Types
//!
//! Unit primitives, display conversions and the length unit flag.
//!
//! ## Conventions
//!
//! The engine works in millimetres internally:
//! - Length: millimetres (mm)
//! - Area: square millimetres (mm²)
//! - Volume: cubic millimetres (mm³)
//! - Density: grams per cubic centimetre (g/cm³)
//! - Weight: kilograms (kg)
//!
//! Inch input is converted to millimetres on ingestion. Conversion back to
//! display units (cm², in², cm³, in³, lb) is left to the host, using the
//! constants in this module.
//!
//! ## Example
//!
//! ```rust
//! use bar_core::units::{inch_to_mm, mm_to_inch, LengthUnit};
//!
//! assert_eq!(inch_to_mm(1.0), 25.4);
//! assert_eq!(mm_to_inch(254.0), 10.0);
//!
//! let unit: LengthUnit = "inch".parse().unwrap();
//! assert_eq!(unit.to_mm(1.0), 25.4);
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::errors::{de_error, CalcError};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Millimetres per inch (exact)
pub const MM_PER_INCH: f64 = 25.4;

/// Square millimetres per square centimetre
pub const MM2_PER_CM2: f64 = 100.0;

/// Square millimetres per square inch
pub const MM2_PER_IN2: f64 = 645.16;

/// Cubic millimetres per cubic centimetre
pub const MM3_PER_CM3: f64 = 1000.0;

/// Cubic millimetres per cubic inch
pub const MM3_PER_IN3: f64 = 16387.064;

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;

// ============================================================================
// Primitives
// ============================================================================

/// Convert millimetres to inches
#[inline]
pub fn mm_to_inch(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Convert inches to millimetres
#[inline]
pub fn inch_to_mm(inch: f64) -> f64 {
    inch * MM_PER_INCH
}

/// Square millimetres to square centimetres
#[inline]
pub fn mm2_to_cm2(mm2: f64) -> f64 {
    mm2 / MM2_PER_CM2
}

/// Square millimetres to square inches
#[inline]
pub fn mm2_to_in2(mm2: f64) -> f64 {
    mm2 / MM2_PER_IN2
}

/// Cubic millimetres to cubic centimetres
#[inline]
pub fn mm3_to_cm3(mm3: f64) -> f64 {
    mm3 / MM3_PER_CM3
}

/// Cubic millimetres to cubic inches
#[inline]
pub fn mm3_to_in3(mm3: f64) -> f64 {
    mm3 / MM3_PER_IN3
}

/// Kilograms to pounds
#[inline]
pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

// ============================================================================
// Length Unit Flag
// ============================================================================

/// Length unit selected by the host for all length-valued inputs.
///
/// Deserializes through `FromStr`, so JSON accepts the same aliases as the
/// CLI and an unknown unit is reported as `UnsupportedUnit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum LengthUnit {
    /// Millimetres (no conversion)
    #[default]
    #[serde(rename = "mm")]
    Mm,
    /// Inches (converted at 25.4 mm/in)
    #[serde(rename = "inch")]
    Inch,
}

impl LengthUnit {
    /// All supported units
    pub const ALL: [LengthUnit; 2] = [LengthUnit::Mm, LengthUnit::Inch];

    /// Convert a value in this unit to millimetres
    pub fn to_mm(self, value: f64) -> f64 {
        match self {
            LengthUnit::Mm => value,
            LengthUnit::Inch => inch_to_mm(value),
        }
    }

    /// Convert a millimetre value into this unit
    pub fn from_mm(self, mm: f64) -> f64 {
        match self {
            LengthUnit::Mm => mm,
            LengthUnit::Inch => mm_to_inch(mm),
        }
    }

    /// Short label used in prompts and reports
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Mm => "mm",
            LengthUnit::Inch => "inch",
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                Ok(LengthUnit::Mm)
            }
            "inch" | "inches" | "in" => Ok(LengthUnit::Inch),
            _ => Err(CalcError::unsupported_unit(s)),
        }
    }
}

impl<'de> Deserialize<'de> for LengthUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_to_mm_exact() {
        assert_eq!(inch_to_mm(1.0), 25.4);
        assert_eq!(mm_to_inch(25.4), 1.0);
    }

    #[test]
    fn test_unit_round_trip() {
        for &x in &[0.001, 0.1, 1.0, 10.0, 25.4, 123.456, 1.0e6] {
            assert!((mm_to_inch(inch_to_mm(x)) - x).abs() < 1e-9 * x.max(1.0));
            assert!((inch_to_mm(mm_to_inch(x)) - x).abs() < 1e-9 * x.max(1.0));
        }
    }

    #[test]
    fn test_length_unit_parsing() {
        assert_eq!("mm".parse::<LengthUnit>().unwrap(), LengthUnit::Mm);
        assert_eq!("Inch".parse::<LengthUnit>().unwrap(), LengthUnit::Inch);
        assert_eq!(" in ".parse::<LengthUnit>().unwrap(), LengthUnit::Inch);

        let err = "cm".parse::<LengthUnit>().unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_UNIT");
    }

    #[test]
    fn test_length_unit_conversion() {
        assert_eq!(LengthUnit::Mm.to_mm(12.0), 12.0);
        assert_eq!(LengthUnit::Inch.to_mm(2.0), 50.8);
        assert!((LengthUnit::Inch.from_mm(50.8) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_display_conversions() {
        assert_eq!(mm2_to_cm2(100.0), 1.0);
        assert_eq!(mm2_to_in2(645.16), 1.0);
        assert_eq!(mm3_to_cm3(1000.0), 1.0);
        assert_eq!(mm3_to_in3(16387.064), 1.0);
        assert!((kg_to_lb(1.0) - 2.20462).abs() < 1e-12);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LengthUnit::Inch).unwrap();
        assert_eq!(json, "\"inch\"");

        let unit: LengthUnit = serde_json::from_str("\"Inches\"").unwrap();
        assert_eq!(unit, LengthUnit::Inch);
    }

    #[test]
    fn test_unknown_unit_from_json() {
        let err: CalcError = serde_json::from_str::<LengthUnit>("\"cm\"").unwrap_err().into();
        assert_eq!(err, CalcError::unsupported_unit("cm"));
    }
}
