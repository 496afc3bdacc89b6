//! # Inverse Bar Sizing
//!
//! Target weight + known dimensions → the one missing dimension.
//!
//! The target weight is first turned into the implied volume
//! (V = W·10⁶/ρ), then the profile's volume formula is solved for the
//! unknown:
//!
//! | Profile | Unknown | Needs |
//! |---------|---------|-------|
//! | Round | diameter | length |
//! | Round | length | diameter |
//! | Square | side | length |
//! | Square | length | side |
//! | Flat | thickness | width, length |
//! | Flat | length | width, thickness |
//!
//! Known dimensions are given in the host's unit and normalized to mm. The
//! resolved dimension is always returned in mm; use
//! [`ResolvedDimension::in_unit`] for display.
//!
//! ## Example
//!
//! ```rust
//! use bar_core::calculations::solve::{missing_dimension_from_weight, KnownDimensions, Unknown};
//! use bar_core::profile::Profile;
//! use bar_core::units::LengthUnit;
//!
//! let known = KnownDimensions { length: Some(100.0), ..Default::default() };
//! let resolved = missing_dimension_from_weight(
//!     Profile::Round,
//!     &known,
//!     Unknown::Diameter,
//!     0.0617,
//!     7.85,
//!     LengthUnit::Mm,
//! )
//! .unwrap();
//!
//! assert!((resolved.value_mm - 10.0).abs() < 0.01);
//! ```

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::calculations::bar::{calculate, BarInput, BarResult};
use crate::equations::{inverse, mass};
use crate::errors::{de_error, ensure_positive, CalcError, CalcResult};
use crate::materials::MaterialSpec;
use crate::profile::{BarDimensions, BarSpec, Profile};
use crate::units::LengthUnit;

/// The dimension to solve for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unknown {
    Diameter,
    Side,
    Thickness,
    Length,
}

impl Unknown {
    /// Unknowns that can be solved for on `profile`
    pub fn for_profile(profile: Profile) -> &'static [Unknown] {
        match profile {
            Profile::Round => &[Unknown::Diameter, Unknown::Length],
            Profile::Square => &[Unknown::Side, Unknown::Length],
            Profile::Flat => &[Unknown::Thickness, Unknown::Length],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Unknown::Diameter => "diameter",
            Unknown::Side => "side",
            Unknown::Thickness => "thickness",
            Unknown::Length => "length",
        }
    }
}

impl std::fmt::Display for Unknown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Unknown {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diameter" => Ok(Unknown::Diameter),
            "side" => Ok(Unknown::Side),
            "thickness" => Ok(Unknown::Thickness),
            "length" => Ok(Unknown::Length),
            _ => Err(CalcError::unsupported_profile(
                "any",
                format!("cannot solve for '{}'", s),
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Unknown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de_error)
    }
}

/// Dimensions already known to the host, in the host's unit.
///
/// Only the fields required by the chosen profile and unknown are read.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnownDimensions {
    pub diameter: Option<f64>,
    pub side: Option<f64>,
    pub width: Option<f64>,
    pub thickness: Option<f64>,
    pub length: Option<f64>,
}

impl KnownDimensions {
    /// Build from a name → value map; unrecognized names are ignored.
    pub fn from_named(dims: &HashMap<String, f64>) -> Self {
        KnownDimensions {
            diameter: dims.get("diameter").copied(),
            side: dims.get("side").copied(),
            width: dims.get("width").copied(),
            thickness: dims.get("thickness").copied(),
            length: dims.get("length").copied(),
        }
    }

    fn get(&self, name: &str) -> Option<f64> {
        match name {
            "diameter" => self.diameter,
            "side" => self.side,
            "width" => self.width,
            "thickness" => self.thickness,
            "length" => self.length,
            _ => None,
        }
    }

    /// Fetch a required field, validate it and convert it to mm.
    fn require_mm(&self, profile: Profile, name: &str, unit: LengthUnit) -> CalcResult<f64> {
        let value = self.get(name).ok_or_else(|| {
            CalcError::unsupported_profile(
                profile.display_name(),
                format!("missing required dimension '{}'", name),
            )
        })?;
        Ok(unit.to_mm(ensure_positive(name, value)?))
    }
}

/// A dimension solved from a target weight, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDimension {
    /// Which dimension was solved for
    pub unknown: Unknown,

    /// Resolved value (mm)
    pub value_mm: f64,
}

impl ResolvedDimension {
    /// Resolved value expressed in `unit`
    pub fn in_unit(&self, unit: LengthUnit) -> f64 {
        unit.from_mm(self.value_mm)
    }
}

/// Solve for the missing dimension of a bar with the given target weight.
///
/// # Arguments
///
/// * `profile` - Bar profile
/// * `known` - Known dimensions, in `unit`
/// * `unknown` - Dimension to solve for; must belong to `profile`
/// * `target_weight_kg` - Desired bar weight (kg)
/// * `density_g_cm3` - Material density (g/cm³)
/// * `unit` - Unit of the known dimensions
///
/// # Errors
///
/// * `InvalidDimension` - Non-positive weight, density or known dimension
/// * `UnsupportedProfile` - Unknown not valid for the profile, or a required
///   known dimension is missing
pub fn missing_dimension_from_weight(
    profile: Profile,
    known: &KnownDimensions,
    unknown: Unknown,
    target_weight_kg: f64,
    density_g_cm3: f64,
    unit: LengthUnit,
) -> CalcResult<ResolvedDimension> {
    if !Unknown::for_profile(profile).contains(&unknown) {
        return Err(CalcError::unsupported_profile(
            profile.display_name(),
            format!("cannot solve for '{}'", unknown),
        ));
    }
    ensure_positive("target_weight_kg", target_weight_kg)?;
    ensure_positive("density_g_cm3", density_g_cm3)?;

    let volume = mass::volume_from_weight(target_weight_kg, density_g_cm3);
    let req = |name: &str| known.require_mm(profile, name, unit);

    let value_mm = match (profile, unknown) {
        (Profile::Round, Unknown::Diameter) => inverse::round_diameter(volume, req("length")?),
        (Profile::Round, Unknown::Length) => inverse::round_length(volume, req("diameter")?),
        (Profile::Square, Unknown::Side) => inverse::square_side(volume, req("length")?),
        (Profile::Square, Unknown::Length) => inverse::square_length(volume, req("side")?),
        (Profile::Flat, Unknown::Thickness) => {
            inverse::flat_thickness(volume, req("width")?, req("length")?)
        }
        (Profile::Flat, Unknown::Length) => {
            inverse::flat_length(volume, req("width")?, req("thickness")?)
        }
        (profile, unknown) => {
            return Err(CalcError::unsupported_profile(
                profile.display_name(),
                format!("cannot solve for '{}'", unknown),
            ))
        }
    };

    // Extreme inputs can still overflow to infinity
    ensure_positive(unknown.name(), value_mm)?;

    debug!(
        profile = %profile,
        unknown = %unknown,
        target_weight_kg,
        volume_mm3 = volume,
        value_mm,
        "resolved missing dimension"
    );

    Ok(ResolvedDimension { unknown, value_mm })
}

/// Input for an inverse calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "R? x 100",
///   "profile": "Round",
///   "solve_for": "diameter",
///   "known": { "length": 100.0 },
///   "target_weight_kg": 0.0617,
///   "material": { "density_g_cm3": 7.85, "price_per_kg": 100.0 },
///   "unit": "mm"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InverseInput {
    #[serde(default)]
    pub label: String,

    pub profile: Profile,

    pub solve_for: Unknown,

    #[serde(default)]
    pub known: KnownDimensions,

    pub target_weight_kg: f64,

    #[serde(default)]
    pub material: MaterialSpec,

    #[serde(default)]
    pub unit: LengthUnit,
}

/// Results of an inverse calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InverseResult {
    /// The solved dimension (mm)
    pub resolved: ResolvedDimension,

    /// The completed bar, in mm
    pub bar: BarSpec,

    /// Forward results for the completed bar
    pub result: BarResult,
}

/// Solve for the missing dimension, then run the forward calculation on the
/// completed bar so the host can show area, volume and price alongside it.
pub fn solve(input: &InverseInput) -> CalcResult<InverseResult> {
    input.material.validate()?;

    let resolved = missing_dimension_from_weight(
        input.profile,
        &input.known,
        input.solve_for,
        input.target_weight_kg,
        input.material.density_g_cm3,
        input.unit,
    )?;

    let bar = complete_bar(input.profile, &input.known, resolved, input.unit)?;
    let result = calculate(&BarInput::new(input.label.clone(), bar, input.material))?;

    Ok(InverseResult {
        resolved,
        bar,
        result,
    })
}

/// Fill the resolved dimension into the known ones, producing a bar in mm.
fn complete_bar(
    profile: Profile,
    known: &KnownDimensions,
    resolved: ResolvedDimension,
    unit: LengthUnit,
) -> CalcResult<BarSpec> {
    let pick = |name: &str| -> CalcResult<f64> {
        if resolved.unknown.name() == name {
            Ok(resolved.value_mm)
        } else {
            known.require_mm(profile, name, unit)
        }
    };

    let dimensions = match profile {
        Profile::Round => BarDimensions::Round {
            diameter: pick("diameter")?,
        },
        Profile::Square => BarDimensions::Square {
            side: pick("side")?,
        },
        Profile::Flat => BarDimensions::Flat {
            width: pick("width")?,
            thickness: pick("thickness")?,
        },
    };

    Ok(BarSpec::new(dimensions, pick("length")?, LengthUnit::Mm))
}
