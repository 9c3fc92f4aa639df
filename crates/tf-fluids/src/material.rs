//! Supported materials.

use std::fmt;
use std::str::FromStr;

use crate::error::FluidError;

/// A material the tables cover. Only water is tabulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Material {
    #[default]
    Water,
}

impl Material {
    pub fn name(self) -> &'static str {
        match self {
            Self::Water => "water",
        }
    }

    /// Key used to find the material in the critical-properties table.
    pub fn critical_key(self) -> &'static str {
        match self {
            Self::Water => "Water",
        }
    }
}

impl FromStr for Material {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("water") {
            Ok(Self::Water)
        } else {
            Err(FluidError::UnsupportedMaterial {
                material: s.to_string(),
            })
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_is_case_insensitive() {
        assert_eq!("Water".parse::<Material>().unwrap(), Material::Water);
        assert_eq!("WATER".parse::<Material>().unwrap(), Material::Water);
    }

    #[test]
    fn other_materials_are_rejected() {
        let err = "Ammonia".parse::<Material>().unwrap_err();
        assert!(matches!(err, FluidError::UnsupportedMaterial { ref material } if material == "Ammonia"));
        assert!("".parse::<Material>().is_err());
    }
}
