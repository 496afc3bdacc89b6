//! # Bar Calculations
//!
//! Validated entry points into the engine. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function `(&*Input) -> CalcResult<*Result>`
//!
//! Unlike [`equations`](crate::equations), everything here validates its
//! arguments and accepts a [`LengthUnit`](crate::units::LengthUnit) flag.
//!
//! ## Available Calculations
//!
//! - [`bar`] - Forward: dimensions → area, volume, weight, price
//! - [`solve`] - Inverse: target weight + known dimensions → missing dimension

pub mod bar;
pub mod solve;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use bar::{area_and_volume, calculate, price, price_per_area, surface_area, weight, BarInput, BarResult};
pub use solve::{
    missing_dimension_from_weight, solve, InverseInput, InverseResult, KnownDimensions,
    ResolvedDimension, Unknown,
};

/// Enum wrapper for both calculation directions.
///
/// Lets a host accept either kind of request from a single JSON document.
///
/// ```json
/// { "type": "Forward", "bar": { ... }, "material": { ... } }
/// { "type": "Inverse", "profile": "Round", "solve_for": "diameter", ... }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Dimensions → area, volume, weight, price
    Forward(BarInput),
    /// Target weight → missing dimension
    Inverse(InverseInput),
}

/// Output matching a [`CalculationItem`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Forward(BarResult),
    Inverse(InverseResult),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Forward(b) => &b.label,
            CalculationItem::Inverse(i) => &i.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Forward(_) => "Forward",
            CalculationItem::Inverse(_) => "Inverse",
        }
    }

    /// Parse one calculation item from JSON.
    ///
    /// Unit, profile and unknown problems come back as their own error
    /// variants rather than as `SerializationError`.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a request document holding one item or an array of items
    pub fn items_from_json(json: &str) -> CalcResult<Vec<Self>> {
        if json.trim_start().starts_with('[') {
            Ok(serde_json::from_str(json)?)
        } else {
            Ok(vec![Self::from_json(json)?])
        }
    }

    /// Run the calculation
    pub fn evaluate(&self) -> CalcResult<CalculationOutput> {
        match self {
            CalculationItem::Forward(input) => calculate(input).map(CalculationOutput::Forward),
            CalculationItem::Inverse(input) => solve(input).map(CalculationOutput::Inverse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_item_from_json() {
        let json = r#"{
            "type": "Forward",
            "label": "SQ10",
            "bar": {
                "dimensions": { "profile": "Square", "side": 10.0 },
                "length": 100.0
            },
            "material": { "density_g_cm3": 7.85, "price_per_kg": 100.0 }
        }"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.label(), "SQ10");
        assert_eq!(item.calc_type(), "Forward");

        match item.evaluate().unwrap() {
            CalculationOutput::Forward(result) => {
                assert!((result.volume_mm3 - 10_000.0).abs() < 1e-9);
            }
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_inverse_item_from_json() {
        let json = r#"{
            "type": "Inverse",
            "profile": "Square",
            "solve_for": "length",
            "known": { "side": 10.0 },
            "target_weight_kg": 0.0785
        }"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.calc_type(), "Inverse");

        match item.evaluate().unwrap() {
            CalculationOutput::Inverse(out) => {
                assert!((out.resolved.value_mm - 100.0).abs() < 1e-9);
            }
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_output_serialization() {
        let item = CalculationItem::Forward(BarInput::new(
            "R10",
            crate::profile::BarSpec::round(10.0, 100.0, crate::units::LengthUnit::Mm),
            crate::materials::MaterialSpec::new(7.85, 0.0),
        ));
        let output = item.evaluate().unwrap();
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"type\":\"Forward\""));
        let roundtrip: CalculationOutput = serde_json::from_str(&json).unwrap();
        match roundtrip {
            CalculationOutput::Forward(result) => {
                assert!((result.cross_section_area_mm2 - 78.54).abs() < 0.01);
            }
            other => panic!("unexpected output: {:?}", other),
        }
    }

    #[test]
    fn test_items_from_json_single_and_array() {
        let one = r#"{"type":"Inverse","profile":"Round","solve_for":"length","known":{"diameter":10.0},"target_weight_kg":1.0}"#;
        assert_eq!(CalculationItem::items_from_json(one).unwrap().len(), 1);

        let many = format!("  [{}, {}]", one, one);
        assert_eq!(CalculationItem::items_from_json(&many).unwrap().len(), 2);
    }

    #[test]
    fn test_json_errors_keep_their_codes() {
        let forward = |dimensions: &str, unit: &str| {
            format!(
                r#"{{"type":"Forward","bar":{{"dimensions":{},"length":100.0,"unit":"{}"}}}}"#,
                dimensions, unit
            )
        };
        let code = |json: &str| CalculationItem::from_json(json).unwrap_err().error_code();

        assert_eq!(
            code(&forward(r#"{"profile":"Round","diameter":10.0}"#, "cm")),
            "UNSUPPORTED_UNIT"
        );
        assert_eq!(
            code(&forward(r#"{"profile":"Hexagon","side":10.0}"#, "mm")),
            "UNSUPPORTED_PROFILE"
        );
        assert_eq!(
            code(&forward(r#"{"profile":"Flat","width":20.0}"#, "mm")),
            "UNSUPPORTED_PROFILE"
        );

        // the same errors surface from inside an array
        let batch = format!("[{}]", forward(r#"{"profile":"Round","diameter":10.0}"#, "cm"));
        let err = CalculationItem::items_from_json(&batch).unwrap_err();
        assert_eq!(err, crate::errors::CalcError::unsupported_unit("cm"));

        assert_eq!(code("{ not json"), "SERIALIZATION_ERROR");
        assert_eq!(code(r#"{"type":"Sideways"}"#), "SERIALIZATION_ERROR");
    }
}
