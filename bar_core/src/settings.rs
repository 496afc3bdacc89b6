//! # Calculator Settings
//!
//! Defaults the host applies when the user leaves a field blank: material
//! density, price per kg, currency label, input unit and display precision.
//!
//! Settings are stored as JSON. Missing keys fall back to the defaults, so a
//! file containing only `{"currency": "USD"}` is valid.
//!
//! ## Example
//!
//! ```rust
//! use bar_core::settings::CalculatorSettings;
//!
//! let settings = CalculatorSettings::from_json(r#"{"currency": "USD"}"#).unwrap();
//! assert_eq!(settings.currency, "USD");
//! assert_eq!(settings.default_density_g_cm3, 7.85);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ensure_non_negative, ensure_positive, CalcError, CalcResult};
use crate::materials::{MaterialSpec, STEEL_DENSITY_G_CM3};
use crate::units::LengthUnit;

/// Host-side defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Density used when none is given (g/cm³)
    pub default_density_g_cm3: f64,

    /// Price per kg used when none is given
    pub default_price_per_kg: f64,

    /// Currency label printed before prices (e.g., "Rs.", "USD")
    pub currency: String,

    /// Unit assumed for length inputs
    pub default_unit: LengthUnit,

    /// Decimal places in reports
    pub decimals: usize,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            default_density_g_cm3: STEEL_DENSITY_G_CM3,
            default_price_per_kg: 100.0,
            currency: "Rs.".to_string(),
            default_unit: LengthUnit::Mm,
            decimals: 2,
        }
    }
}

impl CalculatorSettings {
    /// Parse settings from a JSON string and validate them.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: CalculatorSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read", path.display().to_string(), e.to_string())
        })?;
        let settings = Self::from_json(&contents)?;
        debug!(path = %path.display(), "loaded calculator settings");
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the default material values.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("default_density_g_cm3", self.default_density_g_cm3)?;
        ensure_non_negative("default_price_per_kg", self.default_price_per_kg)?;
        Ok(())
    }

    /// Material built from the defaults, with optional overrides
    pub fn material(&self, density_g_cm3: Option<f64>, price_per_kg: Option<f64>) -> MaterialSpec {
        MaterialSpec::new(
            density_g_cm3.unwrap_or(self.default_density_g_cm3),
            price_per_kg.unwrap_or(self.default_price_per_kg),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CalculatorSettings::default();
        assert_eq!(settings.default_density_g_cm3, 7.85);
        assert_eq!(settings.default_price_per_kg, 100.0);
        assert_eq!(settings.currency, "Rs.");
        assert_eq!(settings.default_unit, LengthUnit::Mm);
    }

    #[test]
    fn test_partial_json() {
        let settings = CalculatorSettings::from_json(r#"{"default_unit": "inch", "decimals": 3}"#).unwrap();
        assert_eq!(settings.default_unit, LengthUnit::Inch);
        assert_eq!(settings.decimals, 3);
        assert_eq!(settings.currency, "Rs.");
    }

    #[test]
    fn test_invalid_json() {
        let err = CalculatorSettings::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

    }

    #[test]
    fn test_unknown_default_unit() {
        let err = CalculatorSettings::from_json(r#"{"default_unit": "cm"}"#).unwrap_err();
        assert_eq!(err, CalcError::unsupported_unit("cm"));
    }

    #[test]
    fn test_invalid_values() {
        let err = CalculatorSettings::from_json(r#"{"default_density_g_cm3": 0.0}"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSION");
    }

    #[test]
    fn test_material_overrides() {
        let settings = CalculatorSettings::default();
        let mat = settings.material(Some(2.7), None);
        assert_eq!(mat.density_g_cm3, 2.7);
        assert_eq!(mat.price_per_kg, 100.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CalculatorSettings::load(Path::new("/nonexistent/bar-settings.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("bar_settings_{}.json", std::process::id()));
        let original = CalculatorSettings {
            currency: "EUR".to_string(),
            ..Default::default()
        };
        fs::write(&path, original.to_json().unwrap()).unwrap();

        let loaded = CalculatorSettings::load(&path).unwrap();
        assert_eq!(loaded, original);
        fs::remove_file(&path).unwrap();
    }
}
