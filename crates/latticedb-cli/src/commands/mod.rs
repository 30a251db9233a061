pub mod build;
pub mod query;

use crate::error::CliResult;
use latticedb::config::{DEFAULT_CONFIG_FILE, LatticeConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load the explicit config, else `./latticedb.toml` if present, else the
/// defaults.
pub fn load_config(explicit: Option<&Path>) -> CliResult<LatticeConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|path| path.is_file()),
    };

    let config = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            LatticeConfig::load(&path)?
        }
        None => LatticeConfig::default(),
    };

    Ok(config)
}
