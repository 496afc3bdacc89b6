//! # bar_core - Bar Stock Dimension Engine
//!
//! `bar_core` converts between the dimensions of a solid bar (round, square
//! or flat) and its derived properties: cross-section area, outer surface
//! area, volume, weight and price. It also solves the inverse problem: given
//! a target weight and all but one dimension, find the missing one.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Millimetres inside**: inch input is normalized on entry; results are
//!   always mm / mm² / mm³ / kg
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use bar_core::calculations::{calculate, BarInput};
//! use bar_core::materials::MaterialSpec;
//! use bar_core::profile::BarSpec;
//! use bar_core::units::LengthUnit;
//!
//! let input = BarInput::new(
//!     "SQ10",
//!     BarSpec::square(10.0, 100.0, LengthUnit::Mm),
//!     MaterialSpec::new(7.85, 100.0),
//! );
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.cross_section_area_mm2, 100.0);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Forward and inverse calculations (validated entry points)
//! - [`equations`] - Closed-form mm formulas
//! - [`profile`] - Bar profiles, dimensions and `BarSpec`
//! - [`materials`] - Density/price and material presets
//! - [`units`] - mm/inch primitives and display conversions
//! - [`settings`] - Host defaults loaded from JSON
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod profile;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    area_and_volume, calculate, missing_dimension_from_weight, price, solve, weight, BarInput,
    BarResult, CalculationItem, CalculationOutput, InverseInput, InverseResult, KnownDimensions,
    ResolvedDimension, Unknown,
};
pub use errors::{CalcError, CalcResult};
pub use materials::{MaterialPreset, MaterialSpec};
pub use profile::{BarDimensions, BarSpec, Profile};
pub use settings::CalculatorSettings;
pub use units::{inch_to_mm, mm_to_inch, LengthUnit};
