//! Observability: tracing spans for store builds and queries, and a
//! point-in-time store report.
//!
//! Events inside these spans are emitted by the owning modules; subscribers
//! are installed by the binary, never by this crate.

use crate::{
    error::InternalError,
    grid::{Coordinate, GridBounds},
    store::{StoreError, StorePaths, StoreReader},
};
use derive_more::Display;
use serde::Serialize;
use std::{fs, path::Path};
use tracing::{Span, info_span, trace_span};

///
/// QueryKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum QueryKind {
    #[display("chance")]
    Chance,
    #[display("complete")]
    Complete,
    #[display("edges")]
    Edges,
    #[display("paths")]
    Paths,
}

/// Span wrapping one full store build.
#[must_use]
pub fn build_span(bounds: &GridBounds, paths: &StorePaths) -> Span {
    info_span!(
        "store_build",
        max_coordinate = bounds.max_coordinate(),
        index = %paths.index.display(),
        data = %paths.data.display(),
    )
}

/// Span wrapping one binding-layer query.
#[must_use]
pub fn query_span(kind: QueryKind, coordinate: Coordinate) -> Span {
    trace_span!("query", %kind, %coordinate)
}

///
/// StoreReport
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StoreReport {
    pub max_coordinate: u32,
    pub index_records: u64,
    pub index_bytes: u64,
    pub data_bytes: u64,
}

/// Sizes of a built store as currently on disk.
pub fn store_report(reader: &StoreReader) -> Result<StoreReport, InternalError> {
    let paths = reader.paths();
    let size = |path: &Path| -> Result<u64, StoreError> {
        Ok(fs::metadata(path).map_err(StoreError::io(path))?.len())
    };

    Ok(StoreReport {
        max_coordinate: reader.bounds().max_coordinate(),
        index_records: reader.index_records()?,
        index_bytes: size(&paths.index)?,
        data_bytes: size(&paths.data)?,
    })
}
