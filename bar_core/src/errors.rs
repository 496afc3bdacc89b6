//! # Error Types
//!
//! Structured error types for bar_core. Every engine call either returns a
//! complete result or fails fast with one of these variants; there are no
//! partial results.
//!
//! ## Example
//!
//! ```rust
//! use bar_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_mm: f64) -> CalcResult<()> {
//!     if length_mm <= 0.0 {
//!         return Err(CalcError::invalid_dimension(
//!             "length",
//!             length_mm.to_string(),
//!             "Length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_length(-1.0).unwrap_err().error_code(), "INVALID_DIMENSION");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bar_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for engine operations.
///
/// Serializes as `{"type": "...", "details": {...}}` so hosts can hand the
/// error straight to a JSON consumer.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A length, density, price or target weight is zero, negative or not finite
    #[error("Invalid dimension '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    /// A unit flag outside {mm, inch}
    #[error("Unsupported unit: '{unit}' (expected mm or inch)")]
    UnsupportedUnit { unit: String },

    /// Unknown profile, missing named dimension, or an unknown that does not
    /// belong to the profile
    #[error("Unsupported profile '{profile}': {reason}")]
    UnsupportedProfile { profile: String, reason: String },

    /// Material preset not found
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File I/O error (settings files)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedUnit error
    pub fn unsupported_unit(unit: impl Into<String>) -> Self {
        CalcError::UnsupportedUnit { unit: unit.into() }
    }

    /// Create an UnsupportedProfile error
    pub fn unsupported_profile(profile: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::UnsupportedProfile {
            profile: profile.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidDimension { .. } => "INVALID_DIMENSION",
            CalcError::UnsupportedUnit { .. } => "UNSUPPORTED_UNIT",
            CalcError::UnsupportedProfile { .. } => "UNSUPPORTED_PROFILE",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
        }
    }
}

/// Marks a serde error message that carries an encoded `CalcError`
const DE_MARKER: &str = "calc-error:";

/// Wrap a `CalcError` raised inside a `Deserialize` impl so that
/// `From<serde_json::Error>` can recover the original variant.
pub(crate) fn de_error<E: serde::de::Error>(err: CalcError) -> E {
    match serde_json::to_string(&err) {
        Ok(encoded) => E::custom(format!("{}{}", DE_MARKER, encoded)),
        Err(_) => E::custom(err),
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        if let Some(start) = message.find(DE_MARKER) {
            let encoded = &message[start + DE_MARKER.len()..];
            // serde_json appends " at line L column C"
            let encoded = encoded.rfind(" at line ").map_or(encoded, |end| &encoded[..end]);
            if let Ok(inner) = serde_json::from_str::<CalcError>(encoded) {
                return inner;
            }
        }
        CalcError::serialization(message)
    }
}

/// Require a strictly positive, finite value.
pub(crate) fn ensure_positive(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_dimension(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_dimension(
            field,
            value.to_string(),
            "Value must be positive",
        ));
    }
    Ok(value)
}

/// Require a non-negative, finite value.
pub(crate) fn ensure_non_negative(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_dimension(
            field,
            value.to_string(),
            "Value must be zero or positive",
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_dimension("diameter", "-5", "Value must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidDimension\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unsupported_unit("cm").error_code(), "UNSUPPORTED_UNIT");
        assert_eq!(
            CalcError::unsupported_profile("Hex", "unknown profile").error_code(),
            "UNSUPPORTED_PROFILE"
        );
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(CalcError::material_not_found("tin").error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_json_error_keeps_engine_variant() {
        #[derive(Debug)]
        struct Picky;

        impl<'de> Deserialize<'de> for Picky {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                Err(de_error(CalcError::unsupported_unit(text)))
            }
        }

        let err: CalcError = serde_json::from_str::<Picky>("\"furlong\"").unwrap_err().into();
        assert_eq!(err, CalcError::unsupported_unit("furlong"));

        let err: CalcError = serde_json::from_str::<Picky>("42").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("length", 12.5).unwrap(), 12.5);
        assert!(ensure_positive("length", 0.0).is_err());
        assert!(ensure_positive("length", -1.0).is_err());
        assert!(ensure_positive("length", f64::NAN).is_err());
        assert!(ensure_positive("length", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative("price_per_kg", 0.0).unwrap(), 0.0);
        assert!(ensure_non_negative("price_per_kg", -0.01).is_err());
    }

    #[test]
    fn test_display_message() {
        let err = CalcError::unsupported_unit("furlong");
        assert_eq!(err.to_string(), "Unsupported unit: 'furlong' (expected mm or inch)");
    }
}
