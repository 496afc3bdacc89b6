//! # Bar Equations
//!
//! The closed-form formulas behind every calculation, kept in one place so
//! they can be checked against a handbook independently of input handling.
//!
//! ## Modules
//!
//! - [`section`] - Cross-section area, outer surface area, volume
//! - [`mass`] - Weight from volume and density, price from weight or area
//! - [`inverse`] - Volume formulas solved for a single unknown dimension
//!
//! ## Conventions
//!
//! - **Inputs**: millimetres only. Unit normalization happens in
//!   [`calculations`](crate::calculations), never here.
//! - **No validation**: these functions trust their arguments. Positive
//!   inputs always give positive outputs.

pub mod inverse;
pub mod mass;
pub mod section;

// Re-export commonly used items
pub use section::{
    cross_section_area,
    outer_surface_area,
    volume,
    round_cross_section_area,
    round_surface_area,
    round_volume,
    square_cross_section_area,
    square_surface_area,
    square_volume,
    flat_cross_section_area,
    flat_surface_area,
    flat_volume,
};

pub use mass::{price_by_area, price_by_weight, volume_from_weight, weight_kg};

pub use inverse::{
    flat_length,
    flat_thickness,
    round_diameter,
    round_length,
    square_length,
    square_side,
};
