//! Property tables and their kinds.

use std::fmt;

use crate::column::Column;
use crate::row::PropertyRow;

/// Which of the tabulated datasets a table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Saturated liquid/vapor, keyed by temperature.
    SaturatedByTemperature,
    /// Saturated liquid/vapor, keyed by pressure.
    SaturatedByPressure,
    /// Single-phase grid keyed jointly by (T, P).
    SuperheatedCompressed,
}

impl TableKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::SaturatedByTemperature => "saturated-by-temperature",
            Self::SaturatedByPressure => "saturated-by-pressure",
            Self::SuperheatedCompressed => "superheated-compressed",
        }
    }

    /// Columns that must be present in every source file of this kind.
    pub fn key_columns(self) -> &'static [Column] {
        match self {
            Self::SaturatedByTemperature => &[Column::Temperature],
            Self::SaturatedByPressure => &[Column::Pressure],
            Self::SuperheatedCompressed => &[Column::Temperature, Column::Pressure],
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable, ordered sequence of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTable {
    kind: TableKind,
    rows: Vec<PropertyRow>,
}

impl PropertyTable {
    pub fn new(kind: TableKind, rows: Vec<PropertyRow>) -> Self {
        Self { kind, rows }
    }

    pub fn empty(kind: TableKind) -> Self {
        Self::new(kind, Vec::new())
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn rows(&self) -> &[PropertyRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Smallest and largest value of `column`, ignoring absent cells.
    pub fn range(&self, column: Column) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .filter_map(|r| r.get(column))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_skips_absent_cells() {
        let table = PropertyTable::new(
            TableKind::SaturatedByTemperature,
            vec![
                PropertyRow::new().with(Column::Temperature, 120.0),
                PropertyRow::new(),
                PropertyRow::new().with(Column::Temperature, 90.0),
            ],
        );
        assert_eq!(table.range(Column::Temperature), Some((90.0, 120.0)));
        assert_eq!(table.range(Column::Pressure), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn grid_kind_has_two_keys() {
        assert_eq!(TableKind::SuperheatedCompressed.key_columns().len(), 2);
        assert_eq!(
            TableKind::SaturatedByPressure.to_string(),
            "saturated-by-pressure"
        );
    }
}
