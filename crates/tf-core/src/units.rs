// tf-core/src/units.rs
//
// Tabulated water data is stored in fixed units: °C, MPa, m³/kg, kJ/kg,
// kJ/(kg·K). These helpers wrap raw table values into uom quantities without
// altering them.

use uom::si::f64::{
    Energy as UomEnergy, Mass as UomMass, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Energy = UomEnergy;
pub type Mass = UomMass;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Volume = UomVolume;

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn mpa(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn kj(v: f64) -> Energy {
    use uom::si::energy::kilojoule;
    Energy::new::<kilojoule>(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::pressure::kilopascal;
    use uom::si::thermodynamic_temperature::kelvin;

    #[test]
    fn constructors_smoke() {
        let _m = kg(1.0);
        let _v = m3(0.5);
        let _e = kj(2675.6);
    }

    #[test]
    fn table_units_map_to_si() {
        assert!((degc(100.0).get::<kelvin>() - 373.15).abs() < 1e-9);
        assert!((mpa(0.101_42).get::<kilopascal>() - 101.42).abs() < 1e-9);
    }
}
