//! A single row of tabulated properties.

use tf_core::lerp;

use crate::column::Column;

/// One row of a property table: an optional value per schema column plus the
/// free-text phase label. Absent values mean "not tabulated for this row".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyRow {
    values: [Option<f64>; Column::COUNT],
    phase: Option<String>,
}

impl PropertyRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for fixtures and tests.
    pub fn with(mut self, column: Column, value: f64) -> Self {
        self.set(column, Some(value));
        self
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    #[inline]
    pub fn get(&self, column: Column) -> Option<f64> {
        self.values[column.index()]
    }

    /// Non-finite values are stored as absent.
    #[inline]
    pub fn set(&mut self, column: Column, value: Option<f64>) {
        self.values[column.index()] = value.filter(|v| v.is_finite());
    }

    pub fn has(&self, column: Column) -> bool {
        self.get(column).is_some()
    }

    pub fn phase(&self) -> Option<&str> {
        self.phase.as_deref()
    }

    pub fn set_phase(&mut self, phase: Option<String>) {
        self.phase = phase;
    }

    /// Columns holding a value, in schema order.
    pub fn present_columns(&self) -> impl Iterator<Item = Column> + '_ {
        Column::ALL.into_iter().filter(|c| self.has(*c))
    }

    /// Blend every numeric column toward `other` by weight `w`.
    ///
    /// A column absent on either side is absent in the result. The phase label
    /// is taken from `self`.
    pub fn blend(&self, other: &PropertyRow, w: f64) -> PropertyRow {
        let mut out = PropertyRow {
            values: [None; Column::COUNT],
            phase: self.phase.clone(),
        };
        for col in Column::ALL {
            let v = match (self.get(col), other.get(col)) {
                (Some(a), Some(b)) => Some(lerp(a, b, w)),
                _ => None,
            };
            out.set(col, v);
        }
        out
    }
}
