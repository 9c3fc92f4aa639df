//! Table resolution.
//!
//! Which table is consulted depends only on which of T and P are present:
//!
//! | T | P | path |
//! |---|---|------|
//! | - | - | `InsufficientInputs` |
//! | ✓ | - | saturated-by-temperature lookup, then quality fill |
//! | - | ✓ | saturated-by-pressure lookup, then quality fill |
//! | ✓ | ✓ | saturation line if T ≈ Tsat(P), else the single-phase grid |
//!
//! With both T and P given the state is fixed, so quality and the given
//! intensive property are not consulted.

use std::fmt;

use tf_core::clamp_unit;
use tf_tables::{
    Column, PropertyRow, PropertyTable, TableError, TableSet, find_exact, interpolate_grid,
    interpolate_row,
};
use tracing::debug;

use crate::error::{FluidError, FluidResult};
use crate::material::Material;
use crate::property::{GivenProperty, PropertyFamily};
use crate::quality::SaturationPair;
use crate::record::PropertyRecord;

/// Absolute distance (°C) between T and Tsat(P) within which a (T, P) pair
/// is taken to lie on the saturation line.
pub const SATURATION_LINE_TOLERANCE: f64 = 1e-3;

/// Inputs of one resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolveRequest<'a> {
    pub material: &'a str,
    pub temperature: Option<f64>,
    pub pressure: Option<f64>,
    pub quality: Option<f64>,
    pub given: Option<GivenProperty>,
}

impl<'a> ResolveRequest<'a> {
    pub fn new(material: &'a str) -> Self {
        Self {
            material,
            ..Self::default()
        }
    }

    pub fn temperature(mut self, t: f64) -> Self {
        self.temperature = Some(t);
        self
    }

    pub fn pressure(mut self, p: f64) -> Self {
        self.pressure = Some(p);
        self
    }

    pub fn quality(mut self, x: f64) -> Self {
        self.quality = Some(x);
        self
    }

    pub fn given(mut self, given: GivenProperty) -> Self {
        self.given = Some(given);
        self
    }
}

/// Route a resolution took through the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPath {
    SaturatedByTemperature,
    SaturatedByPressure,
    /// T and P given, and T matches Tsat(P).
    SaturationLine,
    /// T and P given and stored verbatim in the grid.
    GridExact,
    GridInterpolated,
}

impl ResolutionPath {
    pub fn label(self) -> &'static str {
        match self {
            Self::SaturatedByTemperature => "saturated-by-temperature",
            Self::SaturatedByPressure => "saturated-by-pressure",
            Self::SaturationLine => "saturation-line",
            Self::GridExact => "grid-exact",
            Self::GridInterpolated => "grid-interpolated",
        }
    }
}

impl fmt::Display for ResolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved record together with the path that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub path: ResolutionPath,
    pub record: PropertyRecord,
}

/// Resolve a request into a property record.
pub fn resolve(tables: &TableSet, request: &ResolveRequest<'_>) -> FluidResult<PropertyRecord> {
    resolve_with_path(tables, request).map(|r| r.record)
}

/// Like [`resolve`], also reporting which path was taken.
pub fn resolve_with_path(
    tables: &TableSet,
    request: &ResolveRequest<'_>,
) -> FluidResult<Resolution> {
    let _material: Material = request.material.parse()?;

    let resolution = match (request.temperature, request.pressure) {
        (None, None) => return Err(FluidError::InsufficientInputs),
        (Some(t), None) => Resolution {
            path: ResolutionPath::SaturatedByTemperature,
            record: saturated_lookup(
                tables.saturated_by_temperature(),
                Column::Temperature,
                t,
                request,
            )?,
        },
        (None, Some(p)) => Resolution {
            path: ResolutionPath::SaturatedByPressure,
            record: saturated_lookup(tables.saturated_by_pressure(), Column::Pressure, p, request)?,
        },
        (Some(t), Some(p)) => resolve_temperature_pressure(tables, t, p)?,
    };

    debug!(
        path = %resolution.path,
        t = ?request.temperature,
        p = ?request.pressure,
        x = ?resolution.record.quality(),
        "resolved state"
    );
    Ok(resolution)
}

fn saturated_lookup(
    table: &PropertyTable,
    key: Column,
    x: f64,
    request: &ResolveRequest<'_>,
) -> FluidResult<PropertyRecord> {
    let row = interpolate_row(table, key, x)?;
    Ok(fill_quality(row, request.quality, request.given))
}

/// Saturation line if T ≈ Tsat(P); otherwise exact grid point, else bilinear.
fn resolve_temperature_pressure(tables: &TableSet, t: f64, p: f64) -> FluidResult<Resolution> {
    let sat_p = tables.saturated_by_pressure();
    let t_sat = interpolate_row(sat_p, Column::Pressure, p)?
        .get(Column::Temperature)
        .ok_or(TableError::MissingColumn {
            table: sat_p.kind().name(),
            column: Column::Temperature.header(),
        })?;

    if (t - t_sat).abs() <= SATURATION_LINE_TOLERANCE {
        let row = interpolate_row(tables.saturated_by_temperature(), Column::Temperature, t)?;
        return Ok(Resolution {
            path: ResolutionPath::SaturationLine,
            record: PropertyRecord::from_row(row),
        });
    }

    let grid = tables.superheated_compressed();
    if let Some(row) = find_exact(grid, t, p) {
        return Ok(Resolution {
            path: ResolutionPath::GridExact,
            record: PropertyRecord::from_row(row.clone()),
        });
    }

    Ok(Resolution {
        path: ResolutionPath::GridInterpolated,
        record: PropertyRecord::from_row(interpolate_grid(grid, t, p)?),
    })
}

/// Complete a saturated row from a quality or one given intensive property.
///
/// Without either, the row is returned untouched (x undefined). Otherwise
/// x is the given quality, or is backed out of the given property through
/// its f/g pair; every family with an f/g pair then gets its mixed value
/// from that x. If no x can be found, only the given property's raw value is
/// stored as its mixed value; the record still carries the row's f/g/fg
/// values, and every other mixed value stays absent.
pub fn fill_quality(
    row: PropertyRow,
    quality: Option<f64>,
    given: Option<GivenProperty>,
) -> PropertyRecord {
    if quality.is_none() && given.is_none() {
        return PropertyRecord::from_row(row);
    }

    let x_used = quality
        .or_else(|| given.and_then(|g| back_derive_quality(&row, g)))
        .map(clamp_unit);

    let mut out = saturation_skeleton(&row);
    match x_used {
        Some(x) => {
            for family in PropertyFamily::PRECEDENCE {
                if let Ok(pair) = SaturationPair::from_row(&row, family) {
                    out.set(family.mixed(), Some(pair.value_at(x)));
                }
            }
            PropertyRecord::with_quality(out, x)
        }
        None => {
            if let Some(g) = given {
                debug!(
                    family = %g.family,
                    value = g.value,
                    "no saturation closure; keeping given value only"
                );
                out.set(g.family.mixed(), Some(g.value));
            }
            PropertyRecord::from_row(out)
        }
    }
}

fn back_derive_quality(row: &PropertyRow, given: GivenProperty) -> Option<f64> {
    match SaturationPair::from_row(row, given.family).and_then(|pair| pair.quality_of(given.value))
    {
        Ok(x) => Some(x),
        Err(err) => {
            debug!(family = %given.family, %err, "quality not derivable from given property");
            None
        }
    }
}

/// T, P, phase, and every f/g/fg value of a saturated row, with fg
/// recomputed as g - f wherever both are present.
fn saturation_skeleton(row: &PropertyRow) -> PropertyRow {
    let mut out = PropertyRow::new();
    out.set(Column::Temperature, row.get(Column::Temperature));
    out.set(Column::Pressure, row.get(Column::Pressure));
    out.set_phase(row.phase().map(str::to_owned));

    for family in PropertyFamily::PRECEDENCE {
        let (f, g) = (row.get(family.liquid()), row.get(family.vapor()));
        out.set(family.liquid(), f);
        out.set(family.vapor(), g);
        if let Some(fg_col) = family.vaporization() {
            let fg = match (f, g) {
                (Some(f), Some(g)) => Some(g - f),
                _ => row.get(fg_col),
            };
            out.set(fg_col, fg);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tf_tables::fixtures::water_tables;

    fn close(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn neither_t_nor_p_is_insufficient() {
        let tables = water_tables();
        let err = resolve(&tables, &ResolveRequest::new("water").quality(0.5)).unwrap_err();
        assert!(matches!(err, FluidError::InsufficientInputs));
    }

    #[test]
    fn material_checked_before_tables() {
        // Empty tables would fail with a TableError if they were consulted.
        let tables = TableSet::new(
            PropertyTable::empty(tf_tables::TableKind::SaturatedByTemperature),
            PropertyTable::empty(tf_tables::TableKind::SaturatedByPressure),
            PropertyTable::empty(tf_tables::TableKind::SuperheatedCompressed),
            Default::default(),
        )
        .unwrap();
        let err = resolve(&tables, &ResolveRequest::new("Ammonia").temperature(100.0)).unwrap_err();
        assert!(matches!(err, FluidError::UnsupportedMaterial { .. }));

        let err = resolve(&tables, &ResolveRequest::new("water").temperature(100.0)).unwrap_err();
        assert!(matches!(err, FluidError::Table(TableError::NotFound { .. })));
    }

    #[test]
    fn temperature_only_returns_raw_row() {
        let tables = water_tables();
        let res = resolve_with_path(&tables, &ResolveRequest::new("water").temperature(100.0)).unwrap();
        assert_eq!(res.path, ResolutionPath::SaturatedByTemperature);
        let rec = res.record;
        assert_eq!(rec.quality(), None);
        assert_eq!(rec.h(), None);
        assert!(close(rec.hf(), 419.17));
        assert!(close(rec.hg(), 2675.6));
        assert!(close(rec.pressure(), 0.10142));
    }

    #[test]
    fn quality_fills_every_family() {
        let tables = water_tables();
        let rec = resolve(&tables, &ResolveRequest::new("water").temperature(100.0).quality(0.5)).unwrap();
        assert_eq!(rec.quality(), Some(0.5));
        assert!(close(rec.h(), 0.5 * 419.17 + 0.5 * 2675.6));
        assert!(close(rec.u(), 0.5 * 419.06 + 0.5 * 2506.0));
        assert!(close(rec.v(), 0.5 * 0.001043 + 0.5 * 1.6720));
        assert!(close(rec.s(), 0.5 * 1.3072 + 0.5 * 7.3542));
        assert!(close(rec.hfg(), 2675.6 - 419.17));
    }

    #[test]
    fn given_enthalpy_backs_out_quality() {
        let tables = water_tables();
        let h = 419.17 + 0.25 * (2675.6 - 419.17);
        let rec = resolve(
            &tables,
            &ResolveRequest::new("water")
                .temperature(100.0)
                .given(GivenProperty::enthalpy(h)),
        )
        .unwrap();
        assert!(close(rec.quality(), 0.25));
        assert!(close(rec.s(), 1.3072 + 0.25 * (7.3542 - 1.3072)));
    }

    #[test]
    fn given_value_outside_dome_clamps_quality() {
        let tables = water_tables();
        let rec = resolve(
            &tables,
            &ResolveRequest::new("water")
                .pressure(0.5)
                .given(GivenProperty::specific_volume(5.0)),
        )
        .unwrap();
        assert_eq!(rec.quality(), Some(1.0));
        assert!(close(rec.v(), 0.37483));
        assert!(close(rec.temperature(), 151.83));
    }

    #[test]
    fn pressure_only_quality_fill() {
        let tables = water_tables();
        let res = resolve_with_path(&tables, &ResolveRequest::new("water").pressure(0.2).quality(1.0)).unwrap();
        assert_eq!(res.path, ResolutionPath::SaturatedByPressure);
        assert!(close(res.record.h(), 2706.3));
        assert!(close(res.record.pressure(), 0.2));
    }

    #[test]
    fn degraded_when_no_pair_for_given_property() {
        let row = PropertyRow::new()
            .with(Column::Temperature, 100.0)
            .with(Column::Pressure, 0.10142)
            .with(Column::EnthalpyLiquid, 419.17)
            .with(Column::EnthalpyVapor, 2675.6);
        let rec = fill_quality(row, None, Some(GivenProperty::entropy(6.0)));
        assert_eq!(rec.quality(), None);
        assert_eq!(rec.s(), Some(6.0));
        assert_eq!(rec.h(), None);
        assert!(close(rec.hfg(), 2675.6 - 419.17));
    }

    #[test]
    fn off_dome_temperature_pressure_uses_grid() {
        let tables = water_tables();
        let res = resolve_with_path(&tables, &ResolveRequest::new("water").temperature(150.0).pressure(0.5)).unwrap();
        assert_eq!(res.path, ResolutionPath::GridExact);
        assert!(!res.record.has_saturation_data());
        assert_eq!(res.record.h(), Some(632.18));
        assert_eq!(res.record.phase(), Some("Compressed Liquid"));
    }

    #[test]
    fn grid_interpolation_between_points() {
        let tables = water_tables();
        let res = resolve_with_path(&tables, &ResolveRequest::new("water").temperature(225.0).pressure(0.75)).unwrap();
        assert_eq!(res.path, ResolutionPath::GridInterpolated);
        let at_lo = (2855.8 + 2961.0) / 2.0;
        let at_hi = (2828.3 + 2943.1) / 2.0;
        assert!(close(res.record.h(), (at_lo + at_hi) / 2.0));
        assert_eq!(res.record.temperature(), Some(225.0));
        assert_eq!(res.record.pressure(), Some(0.75));
    }

    #[test]
    fn on_saturation_line_matches_temperature_only() {
        let tables = water_tables();
        let both = resolve_with_path(
            &tables,
            &ResolveRequest::new("water").temperature(151.8305).pressure(0.5),
        )
        .unwrap();
        assert_eq!(both.path, ResolutionPath::SaturationLine);
        let t_only = resolve(&tables, &ResolveRequest::new("water").temperature(151.8305)).unwrap();
        assert_eq!(both.record, t_only);
    }

    #[test]
    fn quality_ignored_once_t_and_p_fix_the_state() {
        let tables = water_tables();
        let rec = resolve(
            &tables,
            &ResolveRequest::new("water").temperature(200.0).pressure(0.1).quality(0.3),
        )
        .unwrap();
        assert_eq!(rec.quality(), None);
        assert_eq!(rec.h(), Some(2875.5));
    }
}
