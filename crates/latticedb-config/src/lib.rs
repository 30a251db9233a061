//! `latticedb.toml` model and loader.
//!
//! ```toml
//! [grid]
//! max_coordinate = 99
//!
//! [store]
//! dir = "data"
//! index_file = "map.bin"
//! data_file = "info.bin"
//! ```
//!
//! Every key is optional; missing keys take the defaults shown. A relative
//! `store.dir` is resolved against the directory of the file it was read
//! from.

#[cfg(test)]
mod tests;

use latticedb_core::{
    grid::{DEFAULT_MAX_COORDINATE, GridBounds, MAX_SUPPORTED_COORDINATE},
    store::{DEFAULT_DATA_FILE, DEFAULT_INDEX_FILE, StorePaths},
};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

pub const DEFAULT_CONFIG_FILE: &str = "latticedb.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ConfigError {
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

///
/// LatticeConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LatticeConfig {
    pub grid: GridConfig,
    pub store: StoreConfig,
}

impl LatticeConfig {
    /// Read and validate the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&text)?;
        if config.store.dir.is_relative()
            && let Some(base) = path.parent()
        {
            config.store.dir = base.join(&config.store.dir);
        }

        Ok(config)
    }

    /// Parse and validate; relative paths are kept as written.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        self.store.validate()
    }

    pub fn grid_bounds(&self) -> Result<GridBounds, ConfigError> {
        self.grid.bounds()
    }

    #[must_use]
    pub fn store_paths(&self) -> StorePaths {
        self.store.paths()
    }
}

///
/// GridConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub max_coordinate: u32,
}

impl GridConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.bounds().map(|_| ())
    }

    pub fn bounds(&self) -> Result<GridBounds, ConfigError> {
        GridBounds::new(self.max_coordinate).map_err(|_| ConfigError::Invalid {
            field: "grid.max_coordinate",
            reason: format!(
                "{} is outside 1..={MAX_SUPPORTED_COORDINATE}",
                self.max_coordinate
            ),
        })
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_coordinate: DEFAULT_MAX_COORDINATE,
        }
    }
}

///
/// StoreConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub dir: PathBuf,
    pub index_file: String,
    pub data_file: String,
}

impl StoreConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (field, name) in [
            ("store.index_file", &self.index_file),
            ("store.data_file", &self.data_file),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "file name is empty".to_string(),
                });
            }
        }

        if self.index_file == self.data_file {
            return Err(ConfigError::Invalid {
                field: "store.data_file",
                reason: format!("`{}` is also the index file", self.data_file),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn paths(&self) -> StorePaths {
        StorePaths::new(
            self.dir.join(&self.index_file),
            self.dir.join(&self.data_file),
        )
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            index_file: DEFAULT_INDEX_FILE.to_string(),
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}
