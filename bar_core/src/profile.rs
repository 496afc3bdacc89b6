//! # Bar Profiles
//!
//! The cross-section families supported by the engine and the dimensions
//! each one needs.
//!
//! | Profile | Named dimensions |
//! |---------|------------------|
//! | Round   | `diameter` |
//! | Square  | `side` |
//! | Flat    | `width`, `thickness` |
//!
//! [`BarDimensions`] fuses the profile tag with its dimensions so that a
//! round bar can never be handed a thickness. Hosts that collect inputs as a
//! loose name → value map go through [`BarSpec::from_named`], which reports a
//! missing field as [`CalcError::UnsupportedProfile`]. JSON input takes the
//! same route, so an unknown profile tag or a missing dimension reports the
//! same error whether it came from a form or a file.
//!
//! ## JSON Serialization
//!
//! ```json
//! { "profile": "Round", "diameter": 10.0 }
//! { "profile": "Flat", "width": 20.0, "thickness": 10.0 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use bar_core::profile::{BarSpec, Profile};
//! use bar_core::units::LengthUnit;
//!
//! let mut dims = HashMap::new();
//! dims.insert("width".to_string(), 20.0);
//! dims.insert("thickness".to_string(), 10.0);
//!
//! let spec = BarSpec::from_named(Profile::Flat, &dims, 100.0, LengthUnit::Mm).unwrap();
//! assert_eq!(spec.profile(), Profile::Flat);
//! ```

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{de_error, ensure_positive, CalcError, CalcResult};
use crate::units::LengthUnit;

/// Cross-sectional shape family of a bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Profile {
    Round,
    Square,
    Flat,
}

impl Profile {
    /// All profiles for iteration
    pub const ALL: [Profile; 3] = [Profile::Round, Profile::Square, Profile::Flat];

    /// Named cross-section dimensions this profile requires
    pub fn required_dimensions(&self) -> &'static [&'static str] {
        match self {
            Profile::Round => &["diameter"],
            Profile::Square => &["side"],
            Profile::Flat => &["width", "thickness"],
        }
    }

    /// Lowercase name accepted by `FromStr`
    pub fn code(&self) -> &'static str {
        match self {
            Profile::Round => "round",
            Profile::Square => "square",
            Profile::Flat => "flat",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Profile::Round => "Round Bar",
            Profile::Square => "Square Bar",
            Profile::Flat => "Flat Bar",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Profile {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let name = normalized.strip_suffix(" bar").unwrap_or(&normalized);
        match name {
            "round" => Ok(Profile::Round),
            "square" => Ok(Profile::Square),
            "flat" => Ok(Profile::Flat),
            _ => Err(CalcError::unsupported_profile(
                s,
                "expected one of round, square, flat",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de_error)
    }
}

/// Cross-section dimensions, tagged by profile.
///
/// Values are in whatever unit the enclosing [`BarSpec`] declares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "profile")]
pub enum BarDimensions {
    /// Solid round bar
    Round { diameter: f64 },
    /// Solid square bar
    Square { side: f64 },
    /// Rectangular flat bar
    Flat { width: f64, thickness: f64 },
}

impl BarDimensions {
    /// Profile tag for these dimensions
    pub fn profile(&self) -> Profile {
        match self {
            BarDimensions::Round { .. } => Profile::Round,
            BarDimensions::Square { .. } => Profile::Square,
            BarDimensions::Flat { .. } => Profile::Flat,
        }
    }

    /// Build dimensions for `profile` from a name → value map.
    ///
    /// Extra keys are ignored; a missing required key is an
    /// `UnsupportedProfile` error.
    pub fn from_named(profile: Profile, dims: &HashMap<String, f64>) -> CalcResult<Self> {
        let get = |name: &str| -> CalcResult<f64> {
            dims.get(name).copied().ok_or_else(|| {
                CalcError::unsupported_profile(
                    profile.display_name(),
                    format!("missing required dimension '{}'", name),
                )
            })
        };

        Ok(match profile {
            Profile::Round => BarDimensions::Round {
                diameter: get("diameter")?,
            },
            Profile::Square => BarDimensions::Square { side: get("side")? },
            Profile::Flat => BarDimensions::Flat {
                width: get("width")?,
                thickness: get("thickness")?,
            },
        })
    }

    /// Named view of the dimensions, in declaration order
    pub fn named(&self) -> Vec<(&'static str, f64)> {
        match *self {
            BarDimensions::Round { diameter } => vec![("diameter", diameter)],
            BarDimensions::Square { side } => vec![("side", side)],
            BarDimensions::Flat { width, thickness } => {
                vec![("width", width), ("thickness", thickness)]
            }
        }
    }

    /// Reject non-positive or non-finite dimensions
    pub fn validate(&self) -> CalcResult<()> {
        for (name, value) in self.named() {
            ensure_positive(name, value)?;
        }
        Ok(())
    }

    /// Convert every dimension from `unit` to millimetres
    pub fn to_mm(&self, unit: LengthUnit) -> Self {
        match *self {
            BarDimensions::Round { diameter } => BarDimensions::Round {
                diameter: unit.to_mm(diameter),
            },
            BarDimensions::Square { side } => BarDimensions::Square {
                side: unit.to_mm(side),
            },
            BarDimensions::Flat { width, thickness } => BarDimensions::Flat {
                width: unit.to_mm(width),
                thickness: unit.to_mm(thickness),
            },
        }
    }
}

/// Wire shape of [`BarDimensions`]: the profile tag plus loose dimensions
#[derive(Deserialize)]
struct RawDimensions {
    profile: Option<String>,
    #[serde(flatten)]
    dims: HashMap<String, f64>,
}

impl<'de> Deserialize<'de> for BarDimensions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawDimensions::deserialize(deserializer)?;
        let tag = raw.profile.ok_or_else(|| {
            de_error::<D::Error>(CalcError::unsupported_profile("", "missing 'profile' tag"))
        })?;
        let profile: Profile = tag.parse().map_err(de_error::<D::Error>)?;
        BarDimensions::from_named(profile, &raw.dims).map_err(de_error)
    }
}

/// A bar described by its cross-section, length and input unit.
///
/// ## JSON Example
///
/// ```json
/// {
///   "dimensions": { "profile": "Round", "diameter": 10.0 },
///   "length": 100.0,
///   "unit": "mm"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSpec {
    /// Cross-section dimensions (in `unit`)
    pub dimensions: BarDimensions,

    /// Bar length (in `unit`)
    pub length: f64,

    /// Unit for every length-valued field
    #[serde(default)]
    pub unit: LengthUnit,
}

impl BarSpec {
    pub fn new(dimensions: BarDimensions, length: f64, unit: LengthUnit) -> Self {
        BarSpec {
            dimensions,
            length,
            unit,
        }
    }

    /// Round bar
    pub fn round(diameter: f64, length: f64, unit: LengthUnit) -> Self {
        Self::new(BarDimensions::Round { diameter }, length, unit)
    }

    /// Square bar
    pub fn square(side: f64, length: f64, unit: LengthUnit) -> Self {
        Self::new(BarDimensions::Square { side }, length, unit)
    }

    /// Flat bar
    pub fn flat(width: f64, thickness: f64, length: f64, unit: LengthUnit) -> Self {
        Self::new(BarDimensions::Flat { width, thickness }, length, unit)
    }

    /// Build from a loosely-typed name → value map (form host input)
    pub fn from_named(
        profile: Profile,
        dims: &HashMap<String, f64>,
        length: f64,
        unit: LengthUnit,
    ) -> CalcResult<Self> {
        let dimensions = BarDimensions::from_named(profile, dims)?;
        Ok(Self::new(dimensions, length, unit))
    }

    pub fn profile(&self) -> Profile {
        self.dimensions.profile()
    }

    /// Validate all dimensions and the length.
    pub fn validate(&self) -> CalcResult<()> {
        self.dimensions.validate()?;
        ensure_positive("length", self.length)?;
        Ok(())
    }

    /// The same bar expressed in millimetres
    pub fn to_mm(&self) -> Self {
        BarSpec {
            dimensions: self.dimensions.to_mm(self.unit),
            length: self.unit.to_mm(self.length),
            unit: LengthUnit::Mm,
        }
    }
}
