//! tf-tables: tabulated thermodynamic data for thermoflow.
//!
//! Provides:
//! - A fixed column schema shared by all tables
//! - Immutable property tables and the [`TableSet`] a resolver works from
//! - Scalar (1-D) and grid (bilinear) interpolation with edge clamping
//! - CSV loading with text-encoding fallback and YAML-configured sources
//!
//! # Example
//!
//! ```no_run
//! use tf_tables::{Column, TableSources, interpolate_row, load_tables};
//!
//! let tables = load_tables(&TableSources::in_directory("data")).unwrap();
//! let row = interpolate_row(tables.saturated_by_temperature(), Column::Temperature, 100.0).unwrap();
//! println!("hg = {:?} kJ/kg", row.get(Column::EnthalpyVapor));
//! ```

pub mod column;
pub mod critical;
pub mod encoding;
pub mod error;
pub mod interpolate;
pub mod loader;
pub mod row;
pub mod sources;
pub mod table;
pub mod table_set;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

// Re-exports for ergonomics
pub use column::{Column, PHASE_HEADER};
pub use critical::{CriticalRecord, CriticalTable};
pub use encoding::{TextEncoding, decode_text};
pub use error::{TableError, TableResult};
pub use interpolate::{
    GRID_PRESSURE_TOLERANCE, GRID_TEMPERATURE_TOLERANCE, bracket_levels, find_exact,
    interpolate_grid, interpolate_row, pressure_levels,
};
pub use loader::{
    load_critical_table, load_property_table, load_tables, parse_critical_table,
    parse_property_table,
};
pub use row::PropertyRow;
pub use sources::TableSources;
pub use table::{PropertyTable, TableKind};
pub use table_set::{SharedTables, TableSet, TableSummary};
