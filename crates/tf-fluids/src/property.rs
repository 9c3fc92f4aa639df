//! Intensive property families and their table columns.

use std::fmt;

use tf_tables::Column;

/// The four intensive properties that mix linearly with quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyFamily {
    SpecificVolume,
    InternalEnergy,
    Enthalpy,
    Entropy,
}

impl PropertyFamily {
    /// Order in which a given property is used to back out quality.
    pub const PRECEDENCE: [PropertyFamily; 4] = [
        PropertyFamily::Enthalpy,
        PropertyFamily::InternalEnergy,
        PropertyFamily::SpecificVolume,
        PropertyFamily::Entropy,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::SpecificVolume => "v",
            Self::InternalEnergy => "u",
            Self::Enthalpy => "h",
            Self::Entropy => "s",
        }
    }

    /// Column of the mixed (or single-phase) value.
    pub fn mixed(self) -> Column {
        match self {
            Self::SpecificVolume => Column::SpecificVolume,
            Self::InternalEnergy => Column::InternalEnergy,
            Self::Enthalpy => Column::Enthalpy,
            Self::Entropy => Column::Entropy,
        }
    }

    pub fn liquid(self) -> Column {
        match self {
            Self::SpecificVolume => Column::SpecificVolumeLiquid,
            Self::InternalEnergy => Column::InternalEnergyLiquid,
            Self::Enthalpy => Column::EnthalpyLiquid,
            Self::Entropy => Column::EntropyLiquid,
        }
    }

    pub fn vapor(self) -> Column {
        match self {
            Self::SpecificVolume => Column::SpecificVolumeVapor,
            Self::InternalEnergy => Column::InternalEnergyVapor,
            Self::Enthalpy => Column::EnthalpyVapor,
            Self::Entropy => Column::EntropyVapor,
        }
    }

    /// Vaporization column; specific volume has none in the schema.
    pub fn vaporization(self) -> Option<Column> {
        match self {
            Self::SpecificVolume => None,
            Self::InternalEnergy => Some(Column::InternalEnergyVaporization),
            Self::Enthalpy => Some(Column::EnthalpyVaporization),
            Self::Entropy => Some(Column::EntropyVaporization),
        }
    }
}

impl fmt::Display for PropertyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The single intensive property supplied alongside T or P.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GivenProperty {
    pub family: PropertyFamily,
    pub value: f64,
}

impl GivenProperty {
    pub fn new(family: PropertyFamily, value: f64) -> Self {
        Self { family, value }
    }

    pub fn specific_volume(value: f64) -> Self {
        Self::new(PropertyFamily::SpecificVolume, value)
    }

    pub fn internal_energy(value: f64) -> Self {
        Self::new(PropertyFamily::InternalEnergy, value)
    }

    pub fn enthalpy(value: f64) -> Self {
        Self::new(PropertyFamily::Enthalpy, value)
    }

    pub fn entropy(value: f64) -> Self {
        Self::new(PropertyFamily::Entropy, value)
    }
}
