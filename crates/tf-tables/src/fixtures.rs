//! Small in-code water tables for tests.
//!
//! Values follow the standard steam tables around 90-200 °C and 0.1-1.0 MPa.
//! Compressed-liquid rows at low pressure are approximated from the saturated
//! liquid at the same temperature.

use crate::column::Column;
use crate::critical::CriticalTable;
use crate::row::PropertyRow;
use crate::table::{PropertyTable, TableKind};
use crate::table_set::TableSet;

// T, P, vf, vg, uf, ug, hf, hg, sf, sg
type SatRow = (f64, f64, f64, f64, f64, f64, f64, f64, f64, f64);

const SAT_BY_TEMPERATURE: [SatRow; 6] = [
    (90.0, 0.070183, 0.001036, 2.3593, 376.97, 2494.0, 377.04, 2659.6, 1.1929, 7.4357),
    (100.0, 0.10142, 0.001043, 1.6720, 419.06, 2506.0, 419.17, 2675.6, 1.3072, 7.3542),
    (120.0, 0.19867, 0.001060, 0.89133, 503.60, 2528.9, 503.81, 2705.9, 1.5279, 7.1292),
    (150.0, 0.47616, 0.001091, 0.39248, 631.66, 2559.1, 632.18, 2745.9, 1.8418, 6.8371),
    (160.0, 0.61823, 0.001102, 0.30680, 674.79, 2568.3, 675.47, 2756.7, 1.9426, 6.7502),
    (200.0, 1.5549, 0.001157, 0.12721, 850.46, 2594.2, 852.26, 2792.0, 2.3305, 6.4302),
];

const SAT_BY_PRESSURE: [SatRow; 4] = [
    (99.61, 0.1, 0.001043, 1.6941, 417.40, 2505.6, 417.51, 2675.0, 1.3028, 7.3589),
    (120.21, 0.2, 0.001061, 0.88578, 504.50, 2529.1, 504.71, 2706.3, 1.5302, 7.1270),
    (151.83, 0.5, 0.001093, 0.37483, 639.54, 2560.7, 640.09, 2748.1, 1.8604, 6.8207),
    (179.88, 1.0, 0.001127, 0.19436, 761.39, 2582.8, 762.51, 2777.1, 2.1381, 6.5850),
];

// T, P, v, u, h, s, phase
type GridRow = (f64, f64, f64, f64, f64, f64, &'static str);

const LIQUID: &str = "Compressed Liquid";
const VAPOR: &str = "Superheated Vapor";

const SUPERHEATED_COMPRESSED: [GridRow; 12] = [
    (100.0, 0.1, 1.6959, 2506.2, 2675.8, 7.3611, VAPOR),
    (150.0, 0.1, 1.9367, 2582.9, 2776.6, 7.6148, VAPOR),
    (200.0, 0.1, 2.1724, 2658.2, 2875.5, 7.8356, VAPOR),
    (250.0, 0.1, 2.4062, 2733.9, 2974.5, 8.0346, VAPOR),
    (100.0, 0.5, 0.0010432, 418.99, 419.51, 1.3069, LIQUID),
    (150.0, 0.5, 0.0010905, 631.63, 632.18, 1.8417, LIQUID),
    (200.0, 0.5, 0.42503, 2643.3, 2855.8, 7.0610, VAPOR),
    (250.0, 0.5, 0.47443, 2723.8, 2961.0, 7.2725, VAPOR),
    (100.0, 1.0, 0.0010429, 418.90, 419.94, 1.3066, LIQUID),
    (150.0, 1.0, 0.0010903, 631.55, 632.64, 1.8415, LIQUID),
    (200.0, 1.0, 0.20602, 2622.3, 2828.3, 6.6956, VAPOR),
    (250.0, 1.0, 0.23275, 2710.4, 2943.1, 6.9265, VAPOR),
];

fn saturated_row(r: &SatRow) -> PropertyRow {
    let &(t, p, vf, vg, uf, ug, hf, hg, sf, sg) = r;
    PropertyRow::new()
        .with(Column::Temperature, t)
        .with(Column::Pressure, p)
        .with(Column::SpecificVolumeLiquid, vf)
        .with(Column::SpecificVolumeVapor, vg)
        .with(Column::InternalEnergyLiquid, uf)
        .with(Column::InternalEnergyVapor, ug)
        .with(Column::InternalEnergyVaporization, ug - uf)
        .with(Column::EnthalpyLiquid, hf)
        .with(Column::EnthalpyVapor, hg)
        .with(Column::EnthalpyVaporization, hg - hf)
        .with(Column::EntropyLiquid, sf)
        .with(Column::EntropyVapor, sg)
        .with(Column::EntropyVaporization, sg - sf)
}

fn grid_row(r: &GridRow) -> PropertyRow {
    let &(t, p, v, u, h, s, phase) = r;
    PropertyRow::new()
        .with(Column::Temperature, t)
        .with(Column::Pressure, p)
        .with(Column::SpecificVolume, v)
        .with(Column::InternalEnergy, u)
        .with(Column::Enthalpy, h)
        .with(Column::Entropy, s)
        .with_phase(phase)
}

pub fn saturated_by_temperature() -> PropertyTable {
    PropertyTable::new(
        TableKind::SaturatedByTemperature,
        SAT_BY_TEMPERATURE.iter().map(saturated_row).collect(),
    )
}

pub fn saturated_by_pressure() -> PropertyTable {
    PropertyTable::new(
        TableKind::SaturatedByPressure,
        SAT_BY_PRESSURE.iter().map(saturated_row).collect(),
    )
}

pub fn superheated_compressed() -> PropertyTable {
    PropertyTable::new(
        TableKind::SuperheatedCompressed,
        SUPERHEATED_COMPRESSED.iter().map(grid_row).collect(),
    )
}

pub fn critical_properties() -> CriticalTable {
    let headers = [
        "Substance",
        "Formula",
        "Molar Mass (kg/kmol)",
        "Temperature (K)",
        "Pressure (MPa)",
        "Volume (m^3/kmol)",
    ];
    let water = ["Water", "H2O", "18.015", "647.1", "22.06", "0.0560"];
    CriticalTable::new(
        headers.iter().map(|s| s.to_string()).collect(),
        vec![water.iter().map(|s| s.to_string()).collect()],
    )
}

/// All four fixture tables.
pub fn water_tables() -> TableSet {
    TableSet {
        saturated_by_temperature: saturated_by_temperature(),
        saturated_by_pressure: saturated_by_pressure(),
        superheated_compressed: superheated_compressed(),
        critical: critical_properties(),
    }
}
