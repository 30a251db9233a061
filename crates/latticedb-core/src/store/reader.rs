use super::{INDEX_RECORD_STRIDE, IndexInfo, StoreError, StorePaths};
use crate::{
    arith::BigUnsigned,
    codec::BlockReader,
    grid::{Coordinate, GridBounds, HashKey, edge_count},
};
use serde::Serialize;
use std::{
    fmt::Debug,
    fs::File,
    io::{BufReader, Seek, SeekFrom},
    path::Path,
};
use tracing::trace;

const PRECISION_SCALE_F64: f64 = 100_000_000.0;

// Bytes per persisted limb or edge value.
const RECORD_VALUE_SIZE: u64 = 8;

mod sealed {
    pub trait Sealed {}
}

///
/// EdgeRepresentation
///
/// How persisted fixed-point edge probabilities are handed back.
///

pub trait EdgeRepresentation: sealed::Sealed {
    type Value: Copy + Debug + PartialEq + Serialize;

    fn from_fixed(raw: i64) -> Self::Value;
}

/// Raw persisted values, scaled by [`crate::grid::PRECISION_SCALE`].
#[derive(Clone, Copy, Debug)]
pub struct FixedPoint;

/// Probabilities in `[0, 1]`.
#[derive(Clone, Copy, Debug)]
pub struct Fraction;

impl sealed::Sealed for FixedPoint {}
impl sealed::Sealed for Fraction {}

impl EdgeRepresentation for FixedPoint {
    type Value = i64;

    fn from_fixed(raw: i64) -> i64 {
        raw
    }
}

impl EdgeRepresentation for Fraction {
    type Value = f64;

    #[expect(clippy::cast_precision_loss)]
    fn from_fixed(raw: i64) -> f64 {
        raw as f64 / PRECISION_SCALE_F64
    }
}

///
/// StoreRecord
///
/// One coordinate's persisted values. Slot 0 of `edges` is the placeholder
/// seed, as written. Placeholder index slots yield a zero path count and no
/// edges.
///

#[derive(Clone, Debug, PartialEq)]
pub struct StoreRecord<V> {
    pub info: IndexInfo,
    pub path_count: BigUnsigned,
    pub edges: Vec<V>,
}

///
/// StoreReader
///

#[derive(Clone, Debug)]
pub struct StoreReader {
    paths: StorePaths,
    bounds: GridBounds,
}

impl StoreReader {
    /// Open a built store; both files must exist.
    pub fn open(paths: StorePaths, bounds: GridBounds) -> Result<Self, StoreError> {
        for (role, path) in [("index", &paths.index), ("data", &paths.data)] {
            if !path.is_file() {
                return Err(StoreError::MissingFile {
                    role,
                    path: path.clone(),
                });
            }
        }

        Ok(Self { paths, bounds })
    }

    #[must_use]
    pub const fn paths(&self) -> &StorePaths {
        &self.paths
    }

    #[must_use]
    pub const fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Number of records in the index file, placeholders included.
    pub fn index_records(&self) -> Result<u64, StoreError> {
        let len = std::fs::metadata(&self.paths.index)
            .map_err(StoreError::io(&self.paths.index))?
            .len();

        Ok(len / INDEX_RECORD_STRIDE)
    }

    pub fn read_index_info(&self, hash: HashKey) -> Result<IndexInfo, StoreError> {
        let path = &self.paths.index;
        let mut file = File::open(path).map_err(StoreError::io(path))?;

        let records = file.metadata().map_err(StoreError::io(path))?.len() / INDEX_RECORD_STRIDE;
        if hash >= records {
            return Err(StoreError::NotIndexed { hash, records });
        }

        file.seek(SeekFrom::Start(IndexInfo::index_offset(hash)))
            .map_err(StoreError::io(path))?;

        IndexInfo::read_from(hash, &mut BlockReader::new(file))
    }

    pub fn lookup<R: EdgeRepresentation>(
        &self,
        coordinate: Coordinate,
    ) -> Result<StoreRecord<R::Value>, StoreError> {
        let hash = self.bounds.hash(coordinate)?;
        let info = self.read_index_info(hash)?;
        trace!(%coordinate, hash, start = info.start_offset, "store lookup");

        if info.is_placeholder() {
            return Ok(StoreRecord {
                info,
                path_count: BigUnsigned::ZERO,
                edges: Vec::new(),
            });
        }

        let expected_edges = edge_count(coordinate) as u64;
        if info.edge_value_count != expected_edges {
            return Err(StoreError::corruption(
                hash,
                format!(
                    "{} edge values recorded, {expected_edges} expected for {coordinate}",
                    info.edge_value_count
                ),
            ));
        }

        let (limbs, edges) = self.read_data(&info)?;
        let path_count = BigUnsigned::try_from_wide_limbs(&limbs)?;

        Ok(StoreRecord {
            info,
            path_count,
            edges: edges.into_iter().map(R::from_fixed).collect(),
        })
    }

    fn read_data(&self, info: &IndexInfo) -> Result<(Vec<u64>, Vec<i64>), StoreError> {
        let path: &Path = &self.paths.data;
        let count = |value: u64| {
            usize::try_from(value).map_err(|_| {
                StoreError::corruption(info.hashed_coord, format!("count {value} exceeds usize"))
            })
        };
        let limb_count = count(info.path_limb_count)?;
        let value_count = count(info.edge_value_count)?;

        let mut file = File::open(path).map_err(StoreError::io(path))?;

        // the record must lie inside the data file before anything is allocated
        let file_len = file.metadata().map_err(StoreError::io(path))?.len();
        let end = info
            .path_limb_count
            .checked_add(info.edge_value_count)
            .and_then(|values| values.checked_mul(RECORD_VALUE_SIZE))
            .and_then(|size| size.checked_add(info.start_offset));
        match end {
            Some(end) if end <= file_len => {}
            _ => {
                return Err(StoreError::corruption(
                    info.hashed_coord,
                    format!(
                        "record at {} with {} limbs and {} edges overruns data file of {file_len} bytes",
                        info.start_offset, info.path_limb_count, info.edge_value_count
                    ),
                ));
            }
        }

        file.seek(SeekFrom::Start(info.start_offset))
            .map_err(StoreError::io(path))?;

        let mut reader = BlockReader::new(BufReader::new(file));
        let limbs = reader.read_sequence::<u64>(limb_count)?;
        let edges = reader.read_sequence::<i64>(value_count)?;

        Ok((limbs, edges))
    }
}
