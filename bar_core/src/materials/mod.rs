//! # Materials
//!
//! Material data needed to turn a bar's volume into weight and price.
//!
//! ## Example
//!
//! ```rust
//! use bar_core::materials::{MaterialPreset, MaterialSpec};
//!
//! let steel = MaterialSpec::new(7.85, 100.0);
//! assert!(steel.validate().is_ok());
//!
//! let brass = MaterialSpec::from_preset(MaterialPreset::Brass, 450.0);
//! assert_eq!(brass.density_g_cm3, 8.5);
//! ```

pub mod presets;

pub use presets::{MaterialPreset, STEEL_DENSITY_G_CM3};

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_non_negative, ensure_positive, CalcResult};

/// Density and unit price of the bar material.
///
/// ## JSON Example
///
/// ```json
/// { "density_g_cm3": 7.85, "price_per_kg": 100.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Density (g/cm³), strictly positive
    pub density_g_cm3: f64,

    /// Price per kilogram, zero or positive
    #[serde(default)]
    pub price_per_kg: f64,
}

impl MaterialSpec {
    pub fn new(density_g_cm3: f64, price_per_kg: f64) -> Self {
        MaterialSpec {
            density_g_cm3,
            price_per_kg,
        }
    }

    /// Material from a preset density
    pub fn from_preset(preset: MaterialPreset, price_per_kg: f64) -> Self {
        Self::new(preset.density_g_cm3(), price_per_kg)
    }

    /// Validate density and price.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("density_g_cm3", self.density_g_cm3)?;
        ensure_non_negative("price_per_kg", self.price_per_kg)?;
        Ok(())
    }
}

impl Default for MaterialSpec {
    fn default() -> Self {
        Self::new(STEEL_DENSITY_G_CM3, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(MaterialSpec::new(7.85, 0.0).validate().is_ok());
        assert!(MaterialSpec::new(0.0, 10.0).validate().is_err());
        assert!(MaterialSpec::new(7.85, -1.0).validate().is_err());
    }

    #[test]
    fn test_default_is_steel() {
        let mat = MaterialSpec::default();
        assert_eq!(mat.density_g_cm3, 7.85);
        assert_eq!(mat.price_per_kg, 0.0);
    }

    #[test]
    fn test_serialization() {
        let mat = MaterialSpec::new(8.96, 850.0);
        let json = serde_json::to_string(&mat).unwrap();
        let roundtrip: MaterialSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(mat, roundtrip);

        let no_price: MaterialSpec = serde_json::from_str(r#"{"density_g_cm3":2.7}"#).unwrap();
        assert_eq!(no_price.price_per_kg, 0.0);
    }
}
