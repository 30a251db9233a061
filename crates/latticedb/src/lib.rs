//! ## Crate layout
//! - `core`: big-integer arithmetic, block codec, lattice combinatorics, the
//!   keyed store, and the binding-layer operations.
//! - `config`: the `latticedb.toml` model and loader.
//! - `error`: the public error shape handed to callers.
//!
//! The `prelude` module carries the types a caller needs to open a store and
//! query it.

pub use latticedb_config as config;
pub use latticedb_core as core;

pub mod error;

pub use error::{Error, ErrorKind, ErrorOrigin};

use crate::{
    config::LatticeConfig,
    core::{
        error::InternalError,
        grid::PathCounter,
        interface::GridService,
        store::{BuildSummary, build_store},
    },
};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Open the store described by `config` for querying.
pub fn open_service(config: &LatticeConfig) -> Result<GridService, Error> {
    let bounds = config.grid_bounds()?;

    Ok(GridService::open(config.store_paths(), bounds)?)
}

/// Build every coordinate of the configured grid into the configured store.
pub fn build(config: &LatticeConfig) -> Result<BuildSummary, Error> {
    let bounds = config.grid_bounds()?;
    let counter = PathCounter::new(bounds);
    let summary = build_store(&counter, config.store_paths()).map_err(InternalError::from)?;

    Ok(summary)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        config::LatticeConfig,
        core::prelude::*,
    };
}
