//! tf-fluids: water states resolved from steam tables.
//!
//! Provides:
//! - Material selection (water only)
//! - The quality mixing law and its inverse
//! - The table resolver dispatching on which of T and P are known
//! - Request-scoped [`State`]s with cached resolution and flat reports
//!
//! # Example
//!
//! ```no_run
//! use tf_fluids::{State, StateSpec};
//! use tf_tables::{TableSources, load_tables};
//!
//! let tables = load_tables(&TableSources::in_directory("data")).unwrap();
//! let state = State::new(&tables, StateSpec::new("water").mass(1.0).temperature(100.0).quality(0.5)).unwrap();
//! let report = state.assemble_report().unwrap();
//! println!("h = {:?} kJ/kg", report.h);
//! ```

pub mod error;
pub mod material;
pub mod property;
pub mod quality;
pub mod record;
pub mod report;
pub mod resolver;
pub mod state;

// Re-exports for ergonomics
pub use error::{DataError, FluidError, FluidResult};
pub use material::Material;
pub use property::{GivenProperty, PropertyFamily};
pub use quality::{SaturationPair, quality_from_value, value_from_quality};
pub use record::PropertyRecord;
pub use report::StateReport;
pub use resolver::{
    Resolution, ResolutionPath, ResolveRequest, SATURATION_LINE_TOLERANCE, fill_quality, resolve,
    resolve_with_path,
};
pub use state::{State, StateSpec};
