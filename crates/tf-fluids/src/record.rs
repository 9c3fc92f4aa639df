//! Resolved property records.

use tf_tables::{Column, PropertyRow};

use crate::error::DataError;
use crate::property::PropertyFamily;
use crate::quality::SaturationPair;

/// Output of a table resolution: the fixed column schema plus quality.
///
/// Absent values mean "not applicable for this state": a single-phase grid
/// point has no f/g values, a bare saturation lookup has no mixed values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyRecord {
    values: PropertyRow,
    quality: Option<f64>,
}

impl PropertyRecord {
    pub fn from_row(values: PropertyRow) -> Self {
        Self {
            values,
            quality: None,
        }
    }

    pub fn with_quality(values: PropertyRow, quality: f64) -> Self {
        Self {
            values,
            quality: Some(quality),
        }
    }

    pub fn row(&self) -> &PropertyRow {
        &self.values
    }

    pub fn get(&self, column: Column) -> Option<f64> {
        self.values.get(column)
    }

    pub fn temperature(&self) -> Option<f64> {
        self.get(Column::Temperature)
    }

    pub fn pressure(&self) -> Option<f64> {
        self.get(Column::Pressure)
    }

    pub fn quality(&self) -> Option<f64> {
        self.quality
    }

    pub fn phase(&self) -> Option<&str> {
        self.values.phase()
    }

    pub fn mixed(&self, family: PropertyFamily) -> Option<f64> {
        self.get(family.mixed())
    }

    pub fn liquid(&self, family: PropertyFamily) -> Option<f64> {
        self.get(family.liquid())
    }

    pub fn vapor(&self, family: PropertyFamily) -> Option<f64> {
        self.get(family.vapor())
    }

    pub fn vaporization(&self, family: PropertyFamily) -> Option<f64> {
        family.vaporization().and_then(|c| self.get(c))
    }

    pub fn saturation_pair(&self, family: PropertyFamily) -> Result<SaturationPair, DataError> {
        SaturationPair::from_row(&self.values, family)
    }

    /// At least one property family carries both saturated values.
    pub fn has_saturation_data(&self) -> bool {
        PropertyFamily::PRECEDENCE
            .iter()
            .any(|f| self.saturation_pair(*f).is_ok())
    }

    pub fn v(&self) -> Option<f64> {
        self.get(Column::SpecificVolume)
    }

    pub fn vf(&self) -> Option<f64> {
        self.get(Column::SpecificVolumeLiquid)
    }

    pub fn vg(&self) -> Option<f64> {
        self.get(Column::SpecificVolumeVapor)
    }

    pub fn u(&self) -> Option<f64> {
        self.get(Column::InternalEnergy)
    }

    pub fn uf(&self) -> Option<f64> {
        self.get(Column::InternalEnergyLiquid)
    }

    pub fn ug(&self) -> Option<f64> {
        self.get(Column::InternalEnergyVapor)
    }

    pub fn ufg(&self) -> Option<f64> {
        self.get(Column::InternalEnergyVaporization)
    }

    pub fn h(&self) -> Option<f64> {
        self.get(Column::Enthalpy)
    }

    pub fn hf(&self) -> Option<f64> {
        self.get(Column::EnthalpyLiquid)
    }

    pub fn hg(&self) -> Option<f64> {
        self.get(Column::EnthalpyVapor)
    }

    pub fn hfg(&self) -> Option<f64> {
        self.get(Column::EnthalpyVaporization)
    }

    pub fn s(&self) -> Option<f64> {
        self.get(Column::Entropy)
    }

    pub fn sf(&self) -> Option<f64> {
        self.get(Column::EntropyLiquid)
    }

    pub fn sg(&self) -> Option<f64> {
        self.get(Column::EntropyVapor)
    }

    pub fn sfg(&self) -> Option<f64> {
        self.get(Column::EntropyVaporization)
    }
}
