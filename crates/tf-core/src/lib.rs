//! tf-core: stable foundation for thermoflow.
//!
//! Contains:
//! - units (uom quantities in the fixed table units + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TfError, TfResult};
pub use numeric::*;
pub use units::*;
