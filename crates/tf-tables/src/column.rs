//! Fixed column schema shared by every property table.
//!
//! Header strings are the public schema of the tabulated data; loaders match
//! incoming CSV headers against them (and a few aliases) after normalisation.

use std::fmt;

/// Header of the free-text phase column.
pub const PHASE_HEADER: &str = "Phase";

/// A numeric column of a property table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Temperature,
    Pressure,
    SpecificVolume,
    SpecificVolumeLiquid,
    SpecificVolumeVapor,
    InternalEnergy,
    InternalEnergyLiquid,
    InternalEnergyVapor,
    InternalEnergyVaporization,
    Enthalpy,
    EnthalpyLiquid,
    EnthalpyVapor,
    EnthalpyVaporization,
    Entropy,
    EntropyLiquid,
    EntropyVapor,
    EntropyVaporization,
}

impl Column {
    pub const COUNT: usize = 17;

    pub const ALL: [Column; Self::COUNT] = [
        Column::Temperature,
        Column::Pressure,
        Column::SpecificVolume,
        Column::SpecificVolumeLiquid,
        Column::SpecificVolumeVapor,
        Column::InternalEnergy,
        Column::InternalEnergyLiquid,
        Column::InternalEnergyVapor,
        Column::InternalEnergyVaporization,
        Column::Enthalpy,
        Column::EnthalpyLiquid,
        Column::EnthalpyVapor,
        Column::EnthalpyVaporization,
        Column::Entropy,
        Column::EntropyLiquid,
        Column::EntropyVapor,
        Column::EntropyVaporization,
    ];

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Canonical header string.
    pub fn header(self) -> &'static str {
        match self {
            Self::Temperature => "T (°C)",
            Self::Pressure => "P (MPa)",
            Self::SpecificVolume => "Specific Volume (m^3/kg)",
            Self::SpecificVolumeLiquid => "Specific Volume Liquid (m^3/kg)",
            Self::SpecificVolumeVapor => "Specific Volume Vapor (m^3/kg)",
            Self::InternalEnergy => "Internal Energy (kJ/kg)",
            Self::InternalEnergyLiquid => "Internal Energy Liquid (kJ/kg)",
            Self::InternalEnergyVapor => "Internal Energy Vapor (kJ/kg)",
            Self::InternalEnergyVaporization => "Internal Energy of Vaporization (kJ/kg)",
            Self::Enthalpy => "Enthalpy (kJ/kg)",
            Self::EnthalpyLiquid => "Enthalpy Liquid (kJ/kg)",
            Self::EnthalpyVapor => "Enthalpy Vapor (kJ/kg)",
            Self::EnthalpyVaporization => "Enthalpy of Vaporization (kJ/kg)",
            Self::Entropy => "Entropy [kJ/(kg K)]",
            Self::EntropyLiquid => "Entropy Liquid [kJ/(kg K)]",
            Self::EntropyVapor => "Entropy Vapor [kJ/(kg K)]",
            Self::EntropyVaporization => "Entropy of Vaporization [kJ/(kg K)]",
        }
    }

    /// Alternative spellings seen in exported tables.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Temperature => &["Temperature (°C)", "T"],
            Self::Pressure => &["Pressure (MPa)", "P"],
            Self::SpecificVolume => &["v"],
            Self::InternalEnergy => &["u"],
            Self::Enthalpy => &["h"],
            Self::Entropy => &["s"],
            _ => &[],
        }
    }

    /// Map a raw CSV header onto the schema.
    pub fn from_header(header: &str) -> Option<Column> {
        let wanted = normalize_header(header);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|col| {
            normalize_header(col.header()) == wanted
                || col.aliases().iter().any(|a| normalize_header(a) == wanted)
        })
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Lower-case ASCII alphanumerics only; drops units punctuation and the
/// degree sign so that encoding damage to `°` does not break matching.
pub fn normalize_header(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, col) in Column::ALL.iter().enumerate() {
            assert_eq!(col.index(), i);
        }
    }

    #[test]
    fn canonical_headers_round_trip() {
        for col in Column::ALL {
            assert_eq!(Column::from_header(col.header()), Some(col));
        }
    }

    #[test]
    fn headers_match_despite_encoding_damage() {
        assert_eq!(Column::from_header("T (Â°C)"), Some(Column::Temperature));
        assert_eq!(Column::from_header("  t (°c) "), Some(Column::Temperature));
        assert_eq!(
            Column::from_header("Entropy (kJ/(kg·K))"),
            Some(Column::Entropy)
        );
    }

    #[test]
    fn unknown_headers_are_ignored() {
        assert_eq!(Column::from_header("Density (kg/m^3)"), None);
        assert_eq!(Column::from_header(""), None);
        assert_eq!(Column::from_header(PHASE_HEADER), None);
    }
}
