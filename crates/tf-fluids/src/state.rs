//! Request-scoped thermodynamic states.
//!
//! A [`State`] pairs a validated [`StateSpec`] with a lazily resolved
//! [`PropertyRecord`]. The record is computed on the first property access
//! and cached; reassigning T or P drops it.

use std::cell::OnceCell;

use tf_core::ensure_finite;
use tf_core::units::Mass;
use tf_tables::{Column, TableSet};

use crate::error::{FluidError, FluidResult};
use crate::property::GivenProperty;
use crate::record::PropertyRecord;
use crate::resolver::{ResolveRequest, resolve};

/// What the caller knows about a state.
///
/// Temperature in °C, pressure in MPa, mass in kg, volume in m³.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateSpec {
    pub material: String,
    pub mass: Option<f64>,
    pub volume: Option<f64>,
    pub temperature: Option<f64>,
    pub pressure: Option<f64>,
    pub quality: Option<f64>,
    pub given: Option<GivenProperty>,
}

impl StateSpec {
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            ..Self::default()
        }
    }

    pub fn mass(mut self, m: f64) -> Self {
        self.mass = Some(m);
        self
    }

    pub fn volume(mut self, v: f64) -> Self {
        self.volume = Some(v);
        self
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

    /// Resolver inputs carried by this spec.
    pub fn request(&self) -> ResolveRequest<'_> {
        ResolveRequest {
            material: &self.material,
            temperature: self.temperature,
            pressure: self.pressure,
            quality: self.quality,
            given: self.given,
        }
    }

    fn validate(&self) -> FluidResult<f64> {
        let mass = self.mass.ok_or(FluidError::InvalidSpec {
            what: "Need value for mass",
        })?;
        if !mass.is_finite() || mass <= 0.0 {
            return Err(FluidError::InvalidSpec {
                what: "mass must be positive and finite",
            });
        }
        if self.volume.is_some_and(|v| !v.is_finite() || v <= 0.0) {
            return Err(FluidError::InvalidSpec {
                what: "volume must be positive and finite",
            });
        }
        check_finite(self.temperature, "temperature must be finite")?;
        check_finite(self.pressure, "pressure must be finite")?;
        check_finite(self.given.map(|g| g.value), "given property must be finite")?;
        if self.quality.is_some_and(|x| !(0.0..=1.0).contains(&x)) {
            return Err(FluidError::InvalidSpec {
                what: "quality must lie in [0, 1]",
            });
        }
        Ok(mass)
    }
}

fn check_finite(value: Option<f64>, what: &'static str) -> FluidResult<()> {
    match value {
        Some(v) => ensure_finite(v, what)
            .map(|_| ())
            .map_err(|_| FluidError::InvalidSpec { what }),
        None => Ok(()),
    }
}

/// A state bound to a table set, resolved on demand.
#[derive(Debug, Clone)]
pub struct State<'t> {
    tables: &'t TableSet,
    spec: StateSpec,
    mass: f64,
    record: OnceCell<PropertyRecord>,
}

impl<'t> State<'t> {
    /// Validate `spec` without touching the tables.
    pub fn new(tables: &'t TableSet, spec: StateSpec) -> FluidResult<Self> {
        let mass = spec.validate()?;
        Ok(Self {
            tables,
            spec,
            mass,
            record: OnceCell::new(),
        })
    }

    pub fn spec(&self) -> &StateSpec {
        &self.spec
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn mass_quantity(&self) -> Mass {
        tf_core::kg(self.mass)
    }

    /// Resolved record, computed once and cached.
    pub fn resolve(&self) -> FluidResult<&PropertyRecord> {
        if let Some(record) = self.record.get() {
            return Ok(record);
        }
        let record = resolve(self.tables, &self.spec.request())?;
        Ok(self.record.get_or_init(|| record))
    }

    pub fn is_resolved(&self) -> bool {
        self.record.get().is_some()
    }

    /// Reassign T and drop the cached record.
    pub fn set_temperature(&mut self, t: f64) -> FluidResult<()> {
        check_finite(Some(t), "temperature must be finite")?;
        self.spec.temperature = Some(t);
        self.record.take();
        Ok(())
    }

    /// Reassign P and drop the cached record.
    pub fn set_pressure(&mut self, p: f64) -> FluidResult<()> {
        check_finite(Some(p), "pressure must be finite")?;
        self.spec.pressure = Some(p);
        self.record.take();
        Ok(())
    }

    pub fn with_temperature(mut self, t: f64) -> FluidResult<Self> {
        self.set_temperature(t)?;
        Ok(self)
    }

    pub fn with_pressure(mut self, p: f64) -> FluidResult<Self> {
        self.set_pressure(p)?;
        Ok(self)
    }

    /// Given T, else the T of the resolved record.
    pub fn temperature(&self) -> FluidResult<Option<f64>> {
        match self.spec.temperature {
            Some(t) => Ok(Some(t)),
            None => self.column(Column::Temperature),
        }
    }

    /// Given P, else the P of the resolved record.
    pub fn pressure(&self) -> FluidResult<Option<f64>> {
        match self.spec.pressure {
            Some(p) => Ok(Some(p)),
            None => self.column(Column::Pressure),
        }
    }

    pub fn quality(&self) -> FluidResult<Option<f64>> {
        Ok(self.resolve()?.quality())
    }

    pub fn phase(&self) -> FluidResult<Option<&str>> {
        Ok(self.resolve()?.phase())
    }

    fn column(&self, column: Column) -> FluidResult<Option<f64>> {
        Ok(self.resolve()?.get(column))
    }

    pub fn v(&self) -> FluidResult<Option<f64>> {
        self.column(Column::SpecificVolume)
    }

    pub fn vf(&self) -> FluidResult<Option<f64>> {
        self.column(Column::SpecificVolumeLiquid)
    }

    pub fn vg(&self) -> FluidResult<Option<f64>> {
        self.column(Column::SpecificVolumeVapor)
    }

    pub fn u(&self) -> FluidResult<Option<f64>> {
        self.column(Column::InternalEnergy)
    }

    pub fn uf(&self) -> FluidResult<Option<f64>> {
        self.column(Column::InternalEnergyLiquid)
    }

    pub fn ug(&self) -> FluidResult<Option<f64>> {
        self.column(Column::InternalEnergyVapor)
    }

    pub fn ufg(&self) -> FluidResult<Option<f64>> {
        self.column(Column::InternalEnergyVaporization)
    }

    pub fn h(&self) -> FluidResult<Option<f64>> {
        self.column(Column::Enthalpy)
    }

    pub fn hf(&self) -> FluidResult<Option<f64>> {
        self.column(Column::EnthalpyLiquid)
    }

    pub fn hg(&self) -> FluidResult<Option<f64>> {
        self.column(Column::EnthalpyVapor)
    }

    pub fn hfg(&self) -> FluidResult<Option<f64>> {
        self.column(Column::EnthalpyVaporization)
    }

    pub fn s(&self) -> FluidResult<Option<f64>> {
        self.column(Column::Entropy)
    }

    pub fn sf(&self) -> FluidResult<Option<f64>> {
        self.column(Column::EntropyLiquid)
    }

    pub fn sg(&self) -> FluidResult<Option<f64>> {
        self.column(Column::EntropyVapor)
    }

    pub fn sfg(&self) -> FluidResult<Option<f64>> {
        self.column(Column::EntropyVaporization)
    }

    /// Total volume [m³]: the given V, else m·v.
    pub fn volume(&self) -> FluidResult<Option<f64>> {
        match self.spec.volume {
            Some(v) => Ok(Some(v)),
            None => Ok(self.v()?.map(|v| self.mass * v)),
        }
    }

    /// Override the total volume; does not affect the resolved record.
    pub fn set_volume(&mut self, v: f64) -> FluidResult<()> {
        if !v.is_finite() || v <= 0.0 {
            return Err(FluidError::InvalidSpec {
                what: "volume must be positive and finite",
            });
        }
        self.spec.volume = Some(v);
        Ok(())
    }

    /// Total internal energy [kJ].
    pub fn internal_energy(&self) -> FluidResult<Option<f64>> {
        Ok(self.u()?.map(|u| self.mass * u))
    }

    /// Total enthalpy [kJ].
    pub fn enthalpy(&self) -> FluidResult<Option<f64>> {
        Ok(self.h()?.map(|h| self.mass * h))
    }

    /// Total entropy [kJ/K].
    pub fn entropy(&self) -> FluidResult<Option<f64>> {
        Ok(self.s()?.map(|s| self.mass * s))
    }
}
