//! Quality (vapor mass fraction) and the liquid/vapor mixing law.
//!
//! ```text
//! val = (1 - x) * val_f + x * val_g
//! x   = clip((val - val_f) / (val_g - val_f), 0, 1)
//! ```
//!
//! The same law serves v, u, h and s.

use tf_core::{Tolerances, clamp_unit, nearly_equal};
use tf_tables::PropertyRow;

use crate::error::DataError;
use crate::property::PropertyFamily;

/// Quality implied by a mixed value, clamped into [0, 1].
pub fn quality_from_value(
    val_f: Option<f64>,
    val_g: Option<f64>,
    val: f64,
) -> Result<f64, DataError> {
    let (f, g) = complete(val_f, val_g)?;
    if g == f {
        return Err(DataError::DegenerateSaturation { value: f });
    }
    Ok(clamp_unit((val - f) / (g - f)))
}

/// Mixed value at quality `x`; `x` is expected to be in [0, 1] already.
pub fn value_from_quality(val_f: Option<f64>, val_g: Option<f64>, x: f64) -> Result<f64, DataError> {
    let (f, g) = complete(val_f, val_g)?;
    Ok((1.0 - x) * f + x * g)
}

fn complete(val_f: Option<f64>, val_g: Option<f64>) -> Result<(f64, f64), DataError> {
    match (val_f, val_g) {
        (Some(f), Some(g)) => Ok((f, g)),
        _ => Err(DataError::MissingSaturationData),
    }
}

/// Saturated-liquid/vapor values of one property family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationPair {
    pub family: PropertyFamily,
    pub liquid: f64,
    pub vapor: f64,
}

impl SaturationPair {
    /// Pair read from a table row; both cells must be present.
    pub fn from_row(row: &PropertyRow, family: PropertyFamily) -> Result<Self, DataError> {
        Self::from_values(family, row.get(family.liquid()), row.get(family.vapor()))
    }

    pub fn from_values(
        family: PropertyFamily,
        liquid: Option<f64>,
        vapor: Option<f64>,
    ) -> Result<Self, DataError> {
        let (liquid, vapor) = complete(liquid, vapor)?;
        Ok(Self {
            family,
            liquid,
            vapor,
        })
    }

    /// `g - f`.
    pub fn spread(&self) -> f64 {
        self.vapor - self.liquid
    }

    /// Liquid and vapor values agree to table precision, so inverting the
    /// mixing law would only amplify noise.
    pub fn is_degenerate(&self) -> bool {
        nearly_equal(self.vapor, self.liquid, Tolerances::TABULATED)
    }

    /// Quality from a mixed value, refusing near-degenerate pairs.
    pub fn quality_of(&self, val: f64) -> Result<f64, DataError> {
        if self.is_degenerate() {
            return Err(DataError::DegenerateSaturation { value: self.liquid });
        }
        quality_from_value(Some(self.liquid), Some(self.vapor), val)
    }

    pub fn value_at(&self, x: f64) -> f64 {
        (1.0 - x) * self.liquid + x * self.vapor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tf_tables::Column;

    #[test]
    fn midpoint_quality() {
        let x = quality_from_value(Some(419.17), Some(2675.6), 1547.385).unwrap();
        assert!((x - 0.5).abs() < 1e-12);
    }

    #[test]
    fn missing_pair_member() {
        assert_eq!(
            quality_from_value(None, Some(1.0), 0.5),
            Err(DataError::MissingSaturationData)
        );
        assert_eq!(
            value_from_quality(Some(1.0), None, 0.5),
            Err(DataError::MissingSaturationData)
        );
    }

    #[test]
    fn zero_spread_is_degenerate() {
        assert!(matches!(
            quality_from_value(Some(2.0), Some(2.0), 2.0),
            Err(DataError::DegenerateSaturation { .. })
        ));
    }

    #[test]
    fn out_of_dome_values_clamp() {
        assert_eq!(quality_from_value(Some(419.17), Some(2675.6), 100.0), Ok(0.0));
        assert_eq!(quality_from_value(Some(419.17), Some(2675.6), 3000.0), Ok(1.0));
    }

    #[test]
    fn pair_from_row_and_near_degenerate_guard() {
        let row = PropertyRow::new()
            .with(Column::EntropyLiquid, 4.4070)
            .with(Column::EntropyVapor, 4.4070 + 1e-9);
        let pair = SaturationPair::from_row(&row, PropertyFamily::Entropy).unwrap();
        assert!(pair.is_degenerate());
        assert!(pair.quality_of(4.4).is_err());

        let err = SaturationPair::from_row(&row, PropertyFamily::Enthalpy).unwrap_err();
        assert_eq!(err, DataError::MissingSaturationData);
    }

    #[test]
    fn pair_value_at_matches_free_function() {
        let pair = SaturationPair::from_values(PropertyFamily::SpecificVolume, Some(0.001043), Some(1.6720))
            .unwrap();
        let free = value_from_quality(Some(0.001043), Some(1.6720), 0.3).unwrap();
        assert_eq!(pair.value_at(0.3), free);
        assert!((pair.spread() - 1.670957).abs() < 1e-12);
    }
}
