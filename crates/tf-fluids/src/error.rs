//! Fluid property errors.

use tf_core::TfError;
use tf_tables::TableError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Failures of a single quality/mixing derivation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DataError {
    /// Saturated-liquid or saturated-vapor value is absent.
    #[error("Error in retrieving data from steam tables: saturation pair incomplete")]
    MissingSaturationData,

    /// Liquid and vapor values coincide, so quality cannot be inverted.
    #[error("Cannot compute quality: fg difference is zero (f = g = {value})")]
    DegenerateSaturation { value: f64 },
}

/// Errors that can occur while resolving a state.
#[derive(Error, Debug)]
pub enum FluidError {
    /// Material other than water.
    #[error("Only water accepted for now, got '{material}'")]
    UnsupportedMaterial { material: String },

    /// Neither temperature nor pressure given.
    #[error("Please provide either Temperature or Pressure")]
    InsufficientInputs,

    /// Structurally invalid state specification.
    #[error("Invalid state specification: {what}")]
    InvalidSpec { what: &'static str },

    /// Table missing, empty, or malformed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Saturation data unusable for a derivation.
    #[error(transparent)]
    Data(#[from] DataError),
}

impl From<FluidError> for TfError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::Table(table) => table.into(),
            FluidError::Data(data) => TfError::Invariant {
                what: format!("Fluid data error: {}", data),
            },
            other => TfError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}
