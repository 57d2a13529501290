//! # Error Types
//!
//! Structured error types for frac_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! Validation errors are raised before any computation begins. Numerically
//! marginal outcomes (no finite-life growth, critical size not reached) are
//! NOT errors; they are reported as advisories on the result.
//!
//! ## Example
//!
//! ```rust
//! use frac_core::errors::{CalcError, CalcResult};
//!
//! fn validate_speed(speed_rpm: f64) -> CalcResult<()> {
//!     if speed_rpm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "speed_rpm".to_string(),
//!             value: speed_rpm.to_string(),
//!             reason: "Rotational speed must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for frac_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for analysis operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, inconsistent geometry, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material not found in the preset library
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Crack size lies outside the validity domain of a geometry-factor correlation
    #[error("Geometry out of range: {correlation} valid to a/W = {limit}, got a/W = {relative_depth:.4}")]
    GeometryOutOfRange {
        correlation: String,
        relative_depth: f64,
        limit: f64,
    },

    /// K_I(a) failed to increase with crack size over the search domain
    #[error("Non-monotonic stress intensity: K_I stops increasing at a = {crack_size_m:.6e} m")]
    NonMonotonicStress { crack_size_m: f64 },

    /// An iterative procedure exhausted its iteration or subdivision budget
    #[error("No convergence: {procedure} after {iterations} iterations")]
    NonConvergence { procedure: String, iterations: usize },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a GeometryOutOfRange error
    pub fn geometry_out_of_range(correlation: impl Into<String>, relative_depth: f64, limit: f64) -> Self {
        CalcError::GeometryOutOfRange {
            correlation: correlation.into(),
            relative_depth,
            limit,
        }
    }

    /// Create a NonConvergence error
    pub fn non_convergence(procedure: impl Into<String>, iterations: usize) -> Self {
        CalcError::NonConvergence {
            procedure: procedure.into(),
            iterations,
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors raised by input validation (before any computation)
    pub fn is_validation_error(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. } | CalcError::MaterialNotFound { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::GeometryOutOfRange { .. } => "GEOMETRY_OUT_OF_RANGE",
            CalcError::NonMonotonicStress { .. } => "NON_MONOTONIC_STRESS",
            CalcError::NonConvergence { .. } => "NON_CONVERGENCE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
