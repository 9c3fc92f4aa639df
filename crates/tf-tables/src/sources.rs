//! Where the table files live.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};
use crate::table::TableKind;

/// File locations of the four tables.
///
/// Relative file names resolve against `directory`; every field has a default
/// so a config file only needs to name what differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSources {
    pub directory: PathBuf,
    pub saturated_by_temperature: PathBuf,
    pub saturated_by_pressure: PathBuf,
    pub superheated_compressed: PathBuf,
    pub critical_properties: PathBuf,
}

impl Default for TableSources {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            saturated_by_temperature: PathBuf::from("Tabla_Saturada_por_Temperatura.csv"),
            saturated_by_pressure: PathBuf::from("Saturated_by_Pressure.csv"),
            superheated_compressed: PathBuf::from(
                "Cleaned_Filled_Compressed_Liquid_and_Superheated_Steam.csv",
            ),
            critical_properties: PathBuf::from("Critical_Properties_Table__SI_.csv"),
        }
    }
}

impl TableSources {
    /// Default file names under `directory`.
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn from_yaml_str(content: &str) -> TableResult<Self> {
        serde_yaml::from_str(content).map_err(|e| TableError::Config {
            message: format!("Failed to parse table sources YAML: {}", e),
        })
    }

    pub fn load_yaml(path: &Path) -> TableResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TableError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml_string(&self) -> TableResult<String> {
        serde_yaml::to_string(self).map_err(|e| TableError::Config {
            message: format!("Failed to serialize table sources: {}", e),
        })
    }

    pub fn path_for(&self, kind: TableKind) -> PathBuf {
        let file = match kind {
            TableKind::SaturatedByTemperature => &self.saturated_by_temperature,
            TableKind::SaturatedByPressure => &self.saturated_by_pressure,
            TableKind::SuperheatedCompressed => &self.superheated_compressed,
        };
        self.directory.join(file)
    }

    pub fn critical_path(&self) -> PathBuf {
        self.directory.join(&self.critical_properties)
    }
}
