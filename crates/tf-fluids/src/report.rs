//! Flat state reports.

use serde::Serialize;
use tf_core::units::{Energy, Pressure, Temperature, Volume};
use tf_tables::{Column, PHASE_HEADER};

use crate::error::FluidResult;
use crate::material::Material;
use crate::property::PropertyFamily;
use crate::record::PropertyRecord;
use crate::state::{State, StateSpec};

pub const MATERIAL_LABEL: &str = "Material";
pub const MASS_LABEL: &str = "m (kg)";
pub const QUALITY_LABEL: &str = "x";
pub const VOLUME_LABEL: &str = "V (m^3)";
pub const INTERNAL_ENERGY_LABEL: &str = "U (kJ)";
pub const ENTHALPY_LABEL: &str = "H (kJ)";
pub const ENTROPY_LABEL: &str = "S (kJ/K)";

/// Every property of one state, absent where it does not apply.
///
/// Serialized keys are the public table headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateReport {
    #[serde(rename = "Material")]
    pub material: String,
    #[serde(rename = "Phase")]
    pub phase: Option<String>,
    #[serde(rename = "m (kg)")]
    pub mass: f64,
    #[serde(rename = "T (°C)")]
    pub temperature: Option<f64>,
    #[serde(rename = "P (MPa)")]
    pub pressure: Option<f64>,
    #[serde(rename = "x")]
    pub quality: Option<f64>,

    #[serde(rename = "Specific Volume (m^3/kg)")]
    pub v: Option<f64>,
    #[serde(rename = "Specific Volume Liquid (m^3/kg)")]
    pub vf: Option<f64>,
    #[serde(rename = "Specific Volume Vapor (m^3/kg)")]
    pub vg: Option<f64>,

    #[serde(rename = "Internal Energy (kJ/kg)")]
    pub u: Option<f64>,
    #[serde(rename = "Internal Energy Liquid (kJ/kg)")]
    pub uf: Option<f64>,
    #[serde(rename = "Internal Energy Vapor (kJ/kg)")]
    pub ug: Option<f64>,
    #[serde(rename = "Internal Energy of Vaporization (kJ/kg)")]
    pub ufg: Option<f64>,

    #[serde(rename = "Enthalpy (kJ/kg)")]
    pub h: Option<f64>,
    #[serde(rename = "Enthalpy Liquid (kJ/kg)")]
    pub hf: Option<f64>,
    #[serde(rename = "Enthalpy Vapor (kJ/kg)")]
    pub hg: Option<f64>,
    #[serde(rename = "Enthalpy of Vaporization (kJ/kg)")]
    pub hfg: Option<f64>,

    #[serde(rename = "Entropy [kJ/(kg K)]")]
    pub s: Option<f64>,
    #[serde(rename = "Entropy Liquid [kJ/(kg K)]")]
    pub sf: Option<f64>,
    #[serde(rename = "Entropy Vapor [kJ/(kg K)]")]
    pub sg: Option<f64>,
    #[serde(rename = "Entropy of Vaporization [kJ/(kg K)]")]
    pub sfg: Option<f64>,

    #[serde(rename = "V (m^3)")]
    pub total_volume: Option<f64>,
    #[serde(rename = "U (kJ)")]
    pub total_internal_energy: Option<f64>,
    #[serde(rename = "H (kJ)")]
    pub total_enthalpy: Option<f64>,
    #[serde(rename = "S (kJ/K)")]
    pub total_entropy: Option<f64>,
}

impl StateReport {
    /// Numeric entries in display order, labelled with their public keys.
    pub fn entries(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            (MASS_LABEL, Some(self.mass)),
            (Column::Temperature.header(), self.temperature),
            (Column::Pressure.header(), self.pressure),
            (QUALITY_LABEL, self.quality),
            (Column::SpecificVolume.header(), self.v),
            (Column::SpecificVolumeLiquid.header(), self.vf),
            (Column::SpecificVolumeVapor.header(), self.vg),
            (Column::InternalEnergy.header(), self.u),
            (Column::InternalEnergyLiquid.header(), self.uf),
            (Column::InternalEnergyVapor.header(), self.ug),
            (Column::InternalEnergyVaporization.header(), self.ufg),
            (Column::Enthalpy.header(), self.h),
            (Column::EnthalpyLiquid.header(), self.hf),
            (Column::EnthalpyVapor.header(), self.hg),
            (Column::EnthalpyVaporization.header(), self.hfg),
            (Column::Entropy.header(), self.s),
            (Column::EntropyLiquid.header(), self.sf),
            (Column::EntropyVapor.header(), self.sg),
            (Column::EntropyVaporization.header(), self.sfg),
            (VOLUME_LABEL, self.total_volume),
            (INTERNAL_ENERGY_LABEL, self.total_internal_energy),
            (ENTHALPY_LABEL, self.total_enthalpy),
            (ENTROPY_LABEL, self.total_entropy),
        ]
    }

    /// Text entries (material, phase) in display order.
    pub fn labels(&self) -> [(&'static str, Option<&str>); 2] {
        [
            (MATERIAL_LABEL, Some(self.material.as_str())),
            (PHASE_HEADER, self.phase.as_deref()),
        ]
    }

    pub fn temperature_quantity(&self) -> Option<Temperature> {
        self.temperature.map(tf_core::degc)
    }

    pub fn pressure_quantity(&self) -> Option<Pressure> {
        self.pressure.map(tf_core::mpa)
    }

    pub fn total_volume_quantity(&self) -> Option<Volume> {
        self.total_volume.map(tf_core::m3)
    }

    pub fn total_internal_energy_quantity(&self) -> Option<Energy> {
        self.total_internal_energy.map(tf_core::kj)
    }

    pub fn total_enthalpy_quantity(&self) -> Option<Energy> {
        self.total_enthalpy.map(tf_core::kj)
    }
}

impl State<'_> {
    /// Resolve and assemble the flat report.
    ///
    /// Quality is the record's, else the requested one, else backed out of the
    /// given property through the record's f/g pair. A mixed value missing
    /// from the record is taken from the given property of that family, else
    /// mixed from the record's f/g pair at that quality.
    pub fn assemble_report(&self) -> FluidResult<StateReport> {
        let record = self.resolve()?;
        let spec = self.spec();
        let material: Material = spec.material.parse()?;

        let quality = report_quality(record, spec);
        let mixed = |family: PropertyFamily| mixed_value(record, spec, quality, family);
        let (v, u, h, s) = (
            mixed(PropertyFamily::SpecificVolume),
            mixed(PropertyFamily::InternalEnergy),
            mixed(PropertyFamily::Enthalpy),
            mixed(PropertyFamily::Entropy),
        );
        let m = self.mass();

        Ok(StateReport {
            material: material.name().to_string(),
            phase: record.phase().map(str::to_owned),
            mass: m,
            temperature: self.temperature()?,
            pressure: self.pressure()?,
            quality,
            v,
            vf: record.vf(),
            vg: record.vg(),
            u,
            uf: record.uf(),
            ug: record.ug(),
            ufg: record.ufg(),
            h,
            hf: record.hf(),
            hg: record.hg(),
            hfg: record.hfg(),
            s,
            sf: record.sf(),
            sg: record.sg(),
            sfg: record.sfg(),
            total_volume: spec.volume.or(v.map(|v| m * v)),
            total_internal_energy: u.map(|u| m * u),
            total_enthalpy: h.map(|h| m * h),
            total_entropy: s.map(|s| m * s),
        })
    }
}

/// Only a record with saturation data can carry a quality; single-phase
/// records keep none even when one was requested.
fn report_quality(record: &PropertyRecord, spec: &StateSpec) -> Option<f64> {
    if record.quality().is_some() {
        return record.quality();
    }
    if !record.has_saturation_data() {
        return None;
    }
    spec.quality.or_else(|| {
        let given = spec.given?;
        record
            .saturation_pair(given.family)
            .and_then(|pair| pair.quality_of(given.value))
            .ok()
    })
}

fn mixed_value(
    record: &PropertyRecord,
    spec: &StateSpec,
    quality: Option<f64>,
    family: PropertyFamily,
) -> Option<f64> {
    record
        .mixed(family)
        .or_else(|| spec.given.filter(|g| g.family == family).map(|g| g.value))
        .or_else(|| {
            let x = quality?;
            record.saturation_pair(family).ok().map(|pair| pair.value_at(x))
        })
}
