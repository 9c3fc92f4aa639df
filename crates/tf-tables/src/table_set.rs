//! The complete set of tables a resolver works from.

use std::sync::{Arc, PoisonError, RwLock};

use crate::column::Column;
use crate::critical::CriticalTable;
use crate::error::{TableError, TableResult};
use crate::table::{PropertyTable, TableKind};

/// The four immutable tables loaded once per process.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSet {
    pub(crate) saturated_by_temperature: PropertyTable,
    pub(crate) saturated_by_pressure: PropertyTable,
    pub(crate) superheated_compressed: PropertyTable,
    pub(crate) critical: CriticalTable,
}

impl TableSet {
    /// Assemble a table set, checking each table sits in the slot of its kind.
    pub fn new(
        saturated_by_temperature: PropertyTable,
        saturated_by_pressure: PropertyTable,
        superheated_compressed: PropertyTable,
        critical: CriticalTable,
    ) -> TableResult<Self> {
        expect_kind(&saturated_by_temperature, TableKind::SaturatedByTemperature)?;
        expect_kind(&saturated_by_pressure, TableKind::SaturatedByPressure)?;
        expect_kind(&superheated_compressed, TableKind::SuperheatedCompressed)?;
        Ok(Self {
            saturated_by_temperature,
            saturated_by_pressure,
            superheated_compressed,
            critical,
        })
    }

    pub fn saturated_by_temperature(&self) -> &PropertyTable {
        &self.saturated_by_temperature
    }

    pub fn saturated_by_pressure(&self) -> &PropertyTable {
        &self.saturated_by_pressure
    }

    pub fn superheated_compressed(&self) -> &PropertyTable {
        &self.superheated_compressed
    }

    pub fn critical(&self) -> &CriticalTable {
        &self.critical
    }

    pub fn table(&self, kind: TableKind) -> &PropertyTable {
        match kind {
            TableKind::SaturatedByTemperature => &self.saturated_by_temperature,
            TableKind::SaturatedByPressure => &self.saturated_by_pressure,
            TableKind::SuperheatedCompressed => &self.superheated_compressed,
        }
    }

    /// Row counts and key ranges, one entry per property table.
    pub fn summary(&self) -> Vec<TableSummary> {
        [
            TableKind::SaturatedByTemperature,
            TableKind::SaturatedByPressure,
            TableKind::SuperheatedCompressed,
        ]
        .into_iter()
        .map(|kind| {
            let table = self.table(kind);
            TableSummary {
                kind,
                rows: table.len(),
                temperature_range: table.range(Column::Temperature),
                pressure_range: table.range(Column::Pressure),
            }
        })
        .collect()
    }
}

fn expect_kind(table: &PropertyTable, expected: TableKind) -> TableResult<()> {
    if table.kind() == expected {
        Ok(())
    } else {
        Err(TableError::KindMismatch {
            expected: expected.name(),
            found: table.kind().name(),
        })
    }
}

/// Overview of one loaded table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub kind: TableKind,
    pub rows: usize,
    pub temperature_range: Option<(f64, f64)>,
    pub pressure_range: Option<(f64, f64)>,
}

/// Process-wide holder for the active [`TableSet`].
///
/// `set_tables` replaces all four tables in one swap; a resolver that took
/// `current()` keeps a consistent snapshot even if a swap happens mid-call.
#[derive(Debug)]
pub struct SharedTables {
    inner: RwLock<Arc<TableSet>>,
}

impl SharedTables {
    pub fn new(tables: TableSet) -> Self {
        Self {
            inner: RwLock::new(Arc::new(tables)),
        }
    }

    /// Atomically replace the active set.
    pub fn set_tables(&self, tables: TableSet) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(tables);
    }

    /// Snapshot of the active set.
    pub fn current(&self) -> Arc<TableSet> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
