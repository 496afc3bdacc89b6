//! # Forward Bar Calculation
//!
//! Dimensions → cross-section area, outer surface area, volume, weight and
//! price for a round, square or flat bar.
//!
//! ## Unit Handling
//!
//! Length inputs may be given in mm or inch. They are converted to mm on
//! entry and every result is reported in mm-based units (mm², mm³, kg).
//! Display conversion (cm², in², lb, ...) is available through the
//! accessors on [`BarResult`].
//!
//! ## Example
//!
//! ```rust
//! use bar_core::calculations::bar::{calculate, BarInput};
//! use bar_core::materials::MaterialSpec;
//! use bar_core::profile::BarSpec;
//! use bar_core::units::LengthUnit;
//!
//! let input = BarInput::new(
//!     "R10",
//!     BarSpec::round(10.0, 100.0, LengthUnit::Mm),
//!     MaterialSpec::new(7.85, 100.0),
//! );
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.cross_section_area_mm2 - 78.54).abs() < 0.01);
//! assert!((result.volume_mm3 - 7853.98).abs() < 0.01);
//! assert!((result.weight_kg - 0.0617).abs() < 1e-4);
//! assert!(result.area_price.is_none());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::{mass, section};
use crate::errors::{ensure_non_negative, ensure_positive, CalcResult};
use crate::materials::MaterialSpec;
use crate::profile::{BarDimensions, BarSpec};
use crate::units::{kg_to_lb, mm2_to_cm2, mm2_to_in2, mm3_to_cm3, mm3_to_in3, LengthUnit};

/// Input for a forward calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "FB 20x10",
///   "bar": {
///     "dimensions": { "profile": "Flat", "width": 20.0, "thickness": 10.0 },
///     "length": 100.0,
///     "unit": "mm"
///   },
///   "material": { "density_g_cm3": 7.85, "price_per_kg": 100.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarInput {
    /// User label (e.g., "R10 x 100", "Shaft stock")
    #[serde(default)]
    pub label: String,

    /// Bar geometry and input unit
    pub bar: BarSpec,

    /// Density and unit price
    #[serde(default)]
    pub material: MaterialSpec,

    /// Optional price per square inch of cross-section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_sq_inch: Option<f64>,
}

impl BarInput {
    pub fn new(label: impl Into<String>, bar: BarSpec, material: MaterialSpec) -> Self {
        BarInput {
            label: label.into(),
            bar,
            material,
            price_per_sq_inch: None,
        }
    }

    /// Also price the cross-section by area
    pub fn with_price_per_sq_inch(mut self, price_per_sq_inch: f64) -> Self {
        self.price_per_sq_inch = Some(price_per_sq_inch);
        self
    }

    /// Validate the bar and the material.
    pub fn validate(&self) -> CalcResult<()> {
        self.bar.validate()?;
        self.material.validate()?;
        if let Some(rate) = self.price_per_sq_inch {
            ensure_non_negative("price_per_sq_inch", rate)?;
        }
        Ok(())
    }
}

/// Results of a forward calculation, all in mm-based units.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cross_section_area_mm2": 100.0,
///   "outer_surface_area_mm2": 4200.0,
///   "volume_mm3": 10000.0,
///   "weight_kg": 0.0785,
///   "price": 7.85
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarResult {
    /// Area of the cut face (mm²)
    pub cross_section_area_mm2: f64,

    /// Lateral faces plus end caps (mm²)
    pub outer_surface_area_mm2: f64,

    /// Volume (mm³)
    pub volume_mm3: f64,

    /// Weight (kg)
    pub weight_kg: f64,

    /// Price in the host's currency
    pub price: f64,

    /// Cross-section priced per square inch, when a rate was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_price: Option<f64>,
}

impl BarResult {
    pub fn area_cm2(&self) -> f64 {
        mm2_to_cm2(self.cross_section_area_mm2)
    }

    pub fn area_in2(&self) -> f64 {
        mm2_to_in2(self.cross_section_area_mm2)
    }

    pub fn surface_cm2(&self) -> f64 {
        mm2_to_cm2(self.outer_surface_area_mm2)
    }

    pub fn surface_in2(&self) -> f64 {
        mm2_to_in2(self.outer_surface_area_mm2)
    }

    pub fn volume_cm3(&self) -> f64 {
        mm3_to_cm3(self.volume_mm3)
    }

    pub fn volume_in3(&self) -> f64 {
        mm3_to_in3(self.volume_mm3)
    }

    pub fn weight_lb(&self) -> f64 {
        kg_to_lb(self.weight_kg)
    }
}

/// Cross-section area (mm²) and volume (mm³) of a bar.
///
/// `dimensions` and `length` are in `unit` and are normalized to mm before
/// any formula runs.
pub fn area_and_volume(
    dimensions: &BarDimensions,
    length: f64,
    unit: LengthUnit,
) -> CalcResult<(f64, f64)> {
    let bar = BarSpec::new(*dimensions, length, unit);
    bar.validate()?;
    let bar = bar.to_mm();

    let area = section::cross_section_area(&bar.dimensions);
    let volume = section::volume(&bar.dimensions, bar.length);
    Ok((area, volume))
}

/// Outer surface area (mm²) of a bar, inputs in `unit`.
pub fn surface_area(dimensions: &BarDimensions, length: f64, unit: LengthUnit) -> CalcResult<f64> {
    let bar = BarSpec::new(*dimensions, length, unit);
    bar.validate()?;
    let bar = bar.to_mm();
    Ok(section::outer_surface_area(&bar.dimensions, bar.length))
}

/// Weight (kg) from volume (mm³) and density (g/cm³).
pub fn weight(volume_mm3: f64, density_g_cm3: f64) -> CalcResult<f64> {
    ensure_positive("volume_mm3", volume_mm3)?;
    ensure_positive("density_g_cm3", density_g_cm3)?;
    Ok(mass::weight_kg(volume_mm3, density_g_cm3))
}

/// Price from weight (kg) and price per kg.
pub fn price(weight_kg: f64, price_per_kg: f64) -> CalcResult<f64> {
    ensure_positive("weight_kg", weight_kg)?;
    ensure_non_negative("price_per_kg", price_per_kg)?;
    Ok(mass::price_by_weight(weight_kg, price_per_kg))
}

/// Price from an area (mm²) priced per square inch.
pub fn price_per_area(area_mm2: f64, price_per_sq_inch: f64) -> CalcResult<f64> {
    ensure_positive("area_mm2", area_mm2)?;
    ensure_non_negative("price_per_sq_inch", price_per_sq_inch)?;
    Ok(mass::price_by_area(area_mm2, price_per_sq_inch))
}

/// Run the full forward calculation.
///
/// # Returns
///
/// * `Ok(BarResult)` - Area, surface, volume, weight and price
/// * `Err(CalcError)` - If any input is invalid, or a result under- or
///   overflows (e.g. a 1e308 mm bar)
pub fn calculate(input: &BarInput) -> CalcResult<BarResult> {
    input.validate()?;

    let bar = input.bar.to_mm();
    let cross_section_area_mm2 = ensure_positive(
        "cross_section_area_mm2",
        section::cross_section_area(&bar.dimensions),
    )?;
    let outer_surface_area_mm2 = ensure_positive(
        "outer_surface_area_mm2",
        section::outer_surface_area(&bar.dimensions, bar.length),
    )?;
    let volume_mm3 = ensure_positive("volume_mm3", section::volume(&bar.dimensions, bar.length))?;
    let weight_kg = ensure_positive(
        "weight_kg",
        mass::weight_kg(volume_mm3, input.material.density_g_cm3),
    )?;
    let price = ensure_non_negative(
        "price",
        mass::price_by_weight(weight_kg, input.material.price_per_kg),
    )?;
    let area_price = input
        .price_per_sq_inch
        .map(|rate| price_per_area(cross_section_area_mm2, rate))
        .transpose()?;

    debug!(
        label = %input.label,
        profile = %bar.profile(),
        input_unit = %input.bar.unit,
        area_mm2 = cross_section_area_mm2,
        volume_mm3,
        weight_kg,
        "forward bar calculation"
    );

    Ok(BarResult {
        cross_section_area_mm2,
        outer_surface_area_mm2,
        volume_mm3,
        weight_kg,
        price,
        area_price,
    })
}
