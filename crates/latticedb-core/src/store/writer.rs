use super::{IndexInfo, StoreError, StorePaths};
use crate::{
    codec::{BlockUnit, block_size, write_block},
    grid::{Coordinate, HashKey, PathCounter, edge_use_fixed},
    obs,
};
use serde::Serialize;
use std::{
    ffi::OsString,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

///
/// BuildSummary
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct BuildSummary {
    pub records: u64,
    pub data_bytes: u64,
    pub index_records: u64,
    pub max_hash: Option<HashKey>,
}

///
/// StoreWriter
///
/// Builds the data file and publishes the index over it. Each file is
/// written to a `.tmp` sibling and renamed into place once synced, so a
/// failed build never leaves a half-written file under the final name.
///

pub struct StoreWriter<'a> {
    paths: StorePaths,
    counter: &'a PathCounter,
}

impl<'a> StoreWriter<'a> {
    #[must_use]
    pub const fn new(paths: StorePaths, counter: &'a PathCounter) -> Self {
        Self { paths, counter }
    }

    #[must_use]
    pub const fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Write one data record per coordinate, in the order given, replacing
    /// any existing data file. Returns the index entries in the same order.
    pub fn build_data(&self, coordinates: &[Coordinate]) -> Result<Vec<IndexInfo>, StoreError> {
        let bounds = self.counter.bounds();
        info!(
            path = %self.paths.data.display(),
            coordinates = coordinates.len(),
            "building data file"
        );

        let (infos, data_bytes) = write_atomically(&self.paths.data, |out| {
            let mut infos = Vec::with_capacity(coordinates.len());
            let mut offset = 0u64;

            for &coordinate in coordinates {
                let hash = bounds.hash(coordinate)?;
                let limbs = self.counter.path_count_to(coordinate)?.to_wide_limbs();
                let edges = edge_use_fixed(coordinate);

                let units = [BlockUnit::sequence(&limbs), BlockUnit::sequence(&edges)];
                let size = block_size(&units);
                let written = write_block(out, &units)?;
                debug_assert_eq!(size, written);

                let info = IndexInfo {
                    hashed_coord: hash,
                    start_offset: offset,
                    path_limb_count: limbs.len() as u64,
                    edge_value_count: edges.len() as u64,
                };
                debug!(record = %info.display(bounds), "wrote data record");

                infos.push(info);
                offset += size;
            }

            Ok((infos, offset))
        })?;

        info!(records = infos.len(), data_bytes, "data file built");

        Ok(infos)
    }

    /// Write the dense index over `0..=max(hash)`. `infos` must be strictly
    /// ascending by hash; hashes without an entry get placeholder records.
    /// Returns the number of records written.
    pub fn publish_index(&self, infos: &[IndexInfo]) -> Result<u64, StoreError> {
        for pair in infos.windows(2) {
            if pair[1].hashed_coord <= pair[0].hashed_coord {
                return Err(StoreError::IndexOrder {
                    previous: pair[0].hashed_coord,
                    hash: pair[1].hashed_coord,
                });
            }
        }

        let max_hash = infos.last().map(|info| info.hashed_coord);
        info!(
            path = %self.paths.index.display(),
            entries = infos.len(),
            max_hash,
            "publishing index"
        );

        let records = write_atomically(&self.paths.index, |out| {
            let Some(max_hash) = max_hash else {
                return Ok(0);
            };

            let mut entries = infos.iter().peekable();
            for hash in 0..=max_hash {
                let record = match entries.next_if(|info| info.hashed_coord == hash) {
                    Some(info) => *info,
                    None => IndexInfo::placeholder(hash),
                };
                record.write_to(out)?;
            }

            Ok(max_hash + 1)
        })?;

        info!(records, "index published");

        Ok(records)
    }
}

/// Build a complete store for every coordinate of the counter's grid.
pub fn build_store(counter: &PathCounter, paths: StorePaths) -> Result<BuildSummary, StoreError> {
    let _span = obs::build_span(counter.bounds(), &paths).entered();
    let coordinates: Vec<Coordinate> = counter.bounds().coordinates().collect();
    let writer = StoreWriter::new(paths, counter);

    let infos = writer.build_data(&coordinates)?;
    let index_records = writer.publish_index(&infos)?;

    Ok(BuildSummary {
        records: infos.len() as u64,
        data_bytes: infos.last().map_or(0, |info| info.start_offset + info.record_size()),
        index_records,
        max_hash: infos.last().map(|info| info.hashed_coord),
    })
}

// Write through a `.tmp` sibling, sync, then rename over `target`.
fn write_atomically<T>(
    target: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> Result<T, StoreError>,
) -> Result<T, StoreError> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(StoreError::io(parent))?;
    }

    let tmp = tmp_path(target);
    let result = write_and_sync(&tmp, write);
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
        return result;
    }

    fs::rename(&tmp, target).map_err(StoreError::io(target))?;

    result
}

fn write_and_sync<T>(
    tmp: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> Result<T, StoreError>,
) -> Result<T, StoreError> {
    let file = File::create(tmp).map_err(StoreError::io(tmp))?;
    let mut out = BufWriter::new(file);

    let value = write(&mut out)?;

    out.flush().map_err(StoreError::io(tmp))?;
    let file = out
        .into_inner()
        .map_err(|err| StoreError::io(tmp)(err.into_error()))?;
    file.sync_all().map_err(StoreError::io(tmp))?;

    Ok(value)
}

pub(super) fn tmp_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map_or_else(OsString::new, ToOwned::to_owned);
    name.push(".tmp");

    target.with_file_name(name)
}
