//! Piecewise-linear lookups over property tables.
//!
//! Lookups clamp at the table edges rather than extrapolate: a key outside
//! the tabulated range returns the boundary row with only the key replaced.

use tf_core::{Tolerances, nearly_equal};

use crate::column::Column;
use crate::error::{TableError, TableResult};
use crate::row::PropertyRow;
use crate::table::PropertyTable;

/// Absolute temperature tolerance for treating a (T, P) query as a stored grid point.
pub const GRID_TEMPERATURE_TOLERANCE: f64 = 1e-9;

/// Absolute pressure tolerance for treating a (T, P) query as a stored grid point.
pub const GRID_PRESSURE_TOLERANCE: f64 = 1e-12;

/// Interpolate one row of `table` at `x` along `key`.
///
/// Rows whose key cell is absent are ignored. Every numeric column is blended
/// between the bracketing rows; the phase label comes from the lower row and
/// the key column is set to exactly `x`.
pub fn interpolate_row(table: &PropertyTable, key: Column, x: f64) -> TableResult<PropertyRow> {
    check_key(key, x)?;
    if table.is_empty() {
        return Err(TableError::NotFound {
            what: format!("{} table is empty", table.kind()),
        });
    }
    interpolate_rows(table.rows(), key, x).ok_or_else(|| TableError::NotFound {
        what: format!("{} table has no rows keyed by {}", table.kind(), key),
    })
}

fn interpolate_rows<'a, I>(rows: I, key: Column, x: f64) -> Option<PropertyRow>
where
    I: IntoIterator<Item = &'a PropertyRow>,
{
    let mut keyed: Vec<(f64, &PropertyRow)> = rows
        .into_iter()
        .filter_map(|row| row.get(key).map(|k| (k, row)))
        .collect();
    if keyed.is_empty() {
        return None;
    }
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    let pinned = |row: &PropertyRow| {
        let mut out = row.clone();
        out.set(key, Some(x));
        out
    };

    let (k_first, first) = keyed[0];
    let (k_last, last) = keyed[keyed.len() - 1];

    // Table does not vary along the key.
    if keyed.len() == 1 || nearly_equal(k_first, k_last, Tolerances::TABULATED) {
        return Some(pinned(first));
    }
    if x <= k_first {
        return Some(pinned(first));
    }
    if x >= k_last {
        return Some(pinned(last));
    }

    // k_first < x < k_last, so 1 <= hi <= len - 1
    let hi = keyed.partition_point(|(k, _)| *k < x);
    let (k_lo, row_lo) = keyed[hi - 1];
    let (k_hi, row_hi) = keyed[hi];
    if k_hi == x {
        return Some(pinned(row_hi));
    }

    let span = k_hi - k_lo;
    if span.abs() <= Tolerances::TABULATED.abs {
        return Some(pinned(row_lo));
    }

    let mut out = row_lo.blend(row_hi, (x - k_lo) / span);
    out.set(key, Some(x));
    Some(out)
}

/// Sorted distinct pressure levels present in a grid table.
pub fn pressure_levels(table: &PropertyTable) -> Vec<f64> {
    let mut levels: Vec<f64> = table
        .rows()
        .iter()
        .filter_map(|r| r.get(Column::Pressure))
        .collect();
    levels.sort_by(f64::total_cmp);
    levels.dedup();
    levels
}

/// Adjacent pressure levels bracketing `p`. Outside the range (or on an exact
/// level) both bounds are the same level.
pub fn bracket_levels(levels: &[f64], p: f64) -> Option<(f64, f64)> {
    let (&first, &last) = (levels.first()?, levels.last()?);
    if p <= first {
        return Some((first, first));
    }
    if p >= last {
        return Some((last, last));
    }
    let idx = levels.partition_point(|l| *l < p);
    if levels[idx] == p {
        return Some((p, p));
    }
    Some((levels[idx - 1], levels[idx]))
}

/// Bilinear lookup over the superheated/compressed grid.
///
/// Each bracketing pressure level is interpolated along temperature, then the
/// two results are blended linearly in pressure. T and P of the result are
/// the requested values.
pub fn interpolate_grid(table: &PropertyTable, t: f64, p: f64) -> TableResult<PropertyRow> {
    check_key(Column::Temperature, t)?;
    check_key(Column::Pressure, p)?;

    let levels = pressure_levels(table);
    let (p_lo, p_hi) = bracket_levels(&levels, p).ok_or_else(|| TableError::NotFound {
        what: format!("{} table has no pressure levels", table.kind()),
    })?;

    let row_lo = interpolate_level(table, p_lo, t)?;
    let mut out = if p_lo == p_hi {
        row_lo
    } else {
        let row_hi = interpolate_level(table, p_hi, t)?;
        row_lo.blend(&row_hi, (p - p_lo) / (p_hi - p_lo))
    };

    out.set(Column::Temperature, Some(t));
    out.set(Column::Pressure, Some(p));
    Ok(out)
}

fn interpolate_level(table: &PropertyTable, level: f64, t: f64) -> TableResult<PropertyRow> {
    let rows = table
        .rows()
        .iter()
        .filter(|r| r.get(Column::Pressure) == Some(level));
    interpolate_rows(rows, Column::Temperature, t).ok_or_else(|| TableError::NotFound {
        what: format!(
            "{} table has no temperature rows at P = {} MPa",
            table.kind(),
            level
        ),
    })
}

/// Stored grid row at exactly (t, p), if any.
pub fn find_exact(table: &PropertyTable, t: f64, p: f64) -> Option<&PropertyRow> {
    let t_tol = Tolerances::absolute(GRID_TEMPERATURE_TOLERANCE);
    let p_tol = Tolerances::absolute(GRID_PRESSURE_TOLERANCE);
    table.rows().iter().find(|row| {
        matches!(
            (row.get(Column::Temperature), row.get(Column::Pressure)),
            (Some(rt), Some(rp)) if nearly_equal(rt, t, t_tol) && nearly_equal(rp, p, p_tol)
        )
    })
}

fn check_key(key: Column, x: f64) -> TableResult<()> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(TableError::NonFiniteKey {
            column: key.header(),
            value: x,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableKind;

    fn sat_t() -> PropertyTable {
        PropertyTable::new(
            TableKind::SaturatedByTemperature,
            vec![
                PropertyRow::new()
                    .with(Column::Temperature, 120.0)
                    .with(Column::Pressure, 0.19867)
                    .with(Column::EnthalpyLiquid, 503.81),
                PropertyRow::new()
                    .with(Column::Temperature, 100.0)
                    .with(Column::Pressure, 0.10142)
                    .with(Column::EnthalpyLiquid, 419.17)
                    .with_phase("Saturated"),
                PropertyRow::new().with(Column::Pressure, 9.9),
            ],
        )
    }

    #[test]
    fn empty_table_is_not_found() {
        let table = PropertyTable::empty(TableKind::SaturatedByPressure);
        let err = interpolate_row(&table, Column::Pressure, 0.5).unwrap_err();
        assert!(matches!(err, TableError::NotFound { .. }));
    }

    #[test]
    fn rows_without_key_are_dropped() {
        let table = PropertyTable::new(
            TableKind::SaturatedByTemperature,
            vec![PropertyRow::new().with(Column::Pressure, 1.0)],
        );
        let err = interpolate_row(&table, Column::Temperature, 50.0).unwrap_err();
        assert!(matches!(err, TableError::NotFound { .. }));
    }

    #[test]
    fn unsorted_rows_interpolate_midpoint() {
        let row = interpolate_row(&sat_t(), Column::Temperature, 110.0).unwrap();
        assert_eq!(row.get(Column::Temperature), Some(110.0));
        assert!((row.get(Column::EnthalpyLiquid).unwrap() - 461.49).abs() < 1e-9);
        assert!((row.get(Column::Pressure).unwrap() - 0.150045).abs() < 1e-9);
        assert_eq!(row.phase(), Some("Saturated"));
    }

    #[test]
    fn clamps_below_and_above() {
        let table = sat_t();
        let below = interpolate_row(&table, Column::Temperature, 10.0).unwrap();
        assert_eq!(below.get(Column::Temperature), Some(10.0));
        assert_eq!(below.get(Column::EnthalpyLiquid), Some(419.17));

        let above = interpolate_row(&table, Column::Temperature, 500.0).unwrap();
        assert_eq!(above.get(Column::Temperature), Some(500.0));
        assert_eq!(above.get(Column::EnthalpyLiquid), Some(503.81));
    }

    #[test]
    fn single_row_table_is_constant() {
        let table = PropertyTable::new(
            TableKind::SaturatedByPressure,
            vec![
                PropertyRow::new()
                    .with(Column::Pressure, 0.5)
                    .with(Column::Temperature, 151.83),
            ],
        );
        let row = interpolate_row(&table, Column::Pressure, 0.7).unwrap();
        assert_eq!(row.get(Column::Pressure), Some(0.7));
        assert_eq!(row.get(Column::Temperature), Some(151.83));
    }

    #[test]
    fn duplicate_keys_do_not_divide_by_zero() {
        let table = PropertyTable::new(
            TableKind::SaturatedByTemperature,
            vec![
                PropertyRow::new()
                    .with(Column::Temperature, 100.0)
                    .with(Column::Enthalpy, 1.0),
                PropertyRow::new()
                    .with(Column::Temperature, 105.0)
                    .with(Column::Enthalpy, 2.0),
                PropertyRow::new()
                    .with(Column::Temperature, 105.0)
                    .with(Column::Enthalpy, 3.0),
                PropertyRow::new()
                    .with(Column::Temperature, 110.0)
                    .with(Column::Enthalpy, 4.0),
            ],
        );
        let row = interpolate_row(&table, Column::Temperature, 107.5).unwrap();
        let h = row.get(Column::Enthalpy).unwrap();
        assert!(h.is_finite());
        assert!((h - 3.5).abs() < 1e-12);
    }

    #[test]
    fn nan_key_is_rejected() {
        let err = interpolate_row(&sat_t(), Column::Temperature, f64::NAN).unwrap_err();
        assert!(matches!(err, TableError::NonFiniteKey { .. }));
    }

    #[test]
    fn bracket_levels_cases() {
        let levels = [0.1, 0.5, 1.0];
        assert_eq!(bracket_levels(&levels, 0.05), Some((0.1, 0.1)));
        assert_eq!(bracket_levels(&levels, 2.0), Some((1.0, 1.0)));
        assert_eq!(bracket_levels(&levels, 0.5), Some((0.5, 0.5)));
        assert_eq!(bracket_levels(&levels, 0.7), Some((0.5, 1.0)));
        assert_eq!(bracket_levels(&[], 0.7), None);
    }

    fn grid() -> PropertyTable {
        let row = |t: f64, p: f64, h: f64| {
            PropertyRow::new()
                .with(Column::Temperature, t)
                .with(Column::Pressure, p)
                .with(Column::Enthalpy, h)
        };
        PropertyTable::new(
            TableKind::SuperheatedCompressed,
            vec![
                row(200.0, 0.1, 2875.5),
                row(250.0, 0.1, 2974.5),
                row(200.0, 0.5, 2855.8),
                row(250.0, 0.5, 2961.0),
            ],
        )
    }

    #[test]
    fn grid_bilinear_center() {
        let row = interpolate_grid(&grid(), 225.0, 0.3).unwrap();
        let at_lo = (2875.5 + 2974.5) / 2.0;
        let at_hi = (2855.8 + 2961.0) / 2.0;
        let expected = (at_lo + at_hi) / 2.0;
        assert!((row.get(Column::Enthalpy).unwrap() - expected).abs() < 1e-9);
        assert_eq!(row.get(Column::Temperature), Some(225.0));
        assert_eq!(row.get(Column::Pressure), Some(0.3));
    }

    #[test]
    fn grid_clamps_pressure() {
        let row = interpolate_grid(&grid(), 200.0, 5.0).unwrap();
        assert!((row.get(Column::Enthalpy).unwrap() - 2855.8).abs() < 1e-12);
        assert_eq!(row.get(Column::Pressure), Some(5.0));
    }

    #[test]
    fn find_exact_uses_tight_tolerances() {
        let table = grid();
        assert!(find_exact(&table, 250.0, 0.5).is_some());
        assert!(find_exact(&table, 250.0 + 1e-6, 0.5).is_none());
        assert!(find_exact(&table, 250.0, 0.5 + 1e-9).is_none());
    }
}
