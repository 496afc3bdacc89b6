//! Common bar stock materials with nominal densities.
//!
//! Densities are typical handbook values at room temperature. Mill
//! certificates for a specific heat may differ by a percent or two.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{de_error, CalcError};

/// Nominal density of carbon/mild steel (g/cm³)
pub const STEEL_DENSITY_G_CM3: f64 = 7.85;

/// Named material with a nominal density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum MaterialPreset {
    /// Carbon / mild steel
    #[default]
    #[serde(rename = "mild-steel")]
    MildSteel,
    /// Austenitic stainless steel (304/316)
    #[serde(rename = "stainless-steel")]
    StainlessSteel,
    /// Aluminium alloy (6061)
    #[serde(rename = "aluminium")]
    Aluminium,
    /// Free-machining brass
    #[serde(rename = "brass")]
    Brass,
    /// Electrolytic copper
    #[serde(rename = "copper")]
    Copper,
}

impl MaterialPreset {
    pub const ALL: [MaterialPreset; 5] = [
        MaterialPreset::MildSteel,
        MaterialPreset::StainlessSteel,
        MaterialPreset::Aluminium,
        MaterialPreset::Brass,
        MaterialPreset::Copper,
    ];

    /// Nominal density in g/cm³
    pub fn density_g_cm3(&self) -> f64 {
        match self {
            MaterialPreset::MildSteel => STEEL_DENSITY_G_CM3,
            MaterialPreset::StainlessSteel => 8.00,
            MaterialPreset::Aluminium => 2.70,
            MaterialPreset::Brass => 8.50,
            MaterialPreset::Copper => 8.96,
        }
    }

    /// Identifier accepted by `FromStr`
    pub fn code(&self) -> &'static str {
        match self {
            MaterialPreset::MildSteel => "mild-steel",
            MaterialPreset::StainlessSteel => "stainless-steel",
            MaterialPreset::Aluminium => "aluminium",
            MaterialPreset::Brass => "brass",
            MaterialPreset::Copper => "copper",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialPreset::MildSteel => "Mild Steel",
            MaterialPreset::StainlessSteel => "Stainless Steel",
            MaterialPreset::Aluminium => "Aluminium",
            MaterialPreset::Brass => "Brass",
            MaterialPreset::Copper => "Copper",
        }
    }
}

impl std::fmt::Display for MaterialPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MaterialPreset {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "mild-steel" | "steel" => Ok(MaterialPreset::MildSteel),
            "stainless-steel" | "stainless" => Ok(MaterialPreset::StainlessSteel),
            "aluminium" | "aluminum" => Ok(MaterialPreset::Aluminium),
            "brass" => Ok(MaterialPreset::Brass),
            "copper" => Ok(MaterialPreset::Copper),
            _ => Err(CalcError::material_not_found(s)),
        }
    }
}

impl<'de> Deserialize<'de> for MaterialPreset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_steel() {
        assert_eq!(MaterialPreset::default().density_g_cm3(), 7.85);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("steel".parse::<MaterialPreset>().unwrap(), MaterialPreset::MildSteel);
        assert_eq!(
            "Stainless Steel".parse::<MaterialPreset>().unwrap(),
            MaterialPreset::StainlessSteel
        );
        assert_eq!("aluminum".parse::<MaterialPreset>().unwrap(), MaterialPreset::Aluminium);
    }

    #[test]
    fn test_unknown_preset() {
        let err = "unobtainium".parse::<MaterialPreset>().unwrap_err();
        assert_eq!(err, CalcError::material_not_found("unobtainium"));
        assert_eq!(err.to_string(), "Material not found: unobtainium");

        let err: CalcError = serde_json::from_str::<MaterialPreset>("\"tin\"").unwrap_err().into();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_code_round_trips() {
        for preset in MaterialPreset::ALL {
            assert_eq!(preset.code().parse::<MaterialPreset>().unwrap(), preset);
            let json = serde_json::to_string(&preset).unwrap();
            assert_eq!(json, format!("\"{}\"", preset.code()));
            assert_eq!(serde_json::from_str::<MaterialPreset>(&json).unwrap(), preset);
        }
    }

    #[test]
    fn test_densities_positive() {
        for preset in MaterialPreset::ALL {
            assert!(preset.density_g_cm3() > 0.0);
        }
    }
}
