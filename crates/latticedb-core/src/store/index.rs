use super::StoreError;
use crate::{
    codec::{BlockReader, BlockUnit, write_block},
    grid::{GridBounds, HashKey},
};
use std::{
    fmt,
    io::{Read, Write},
};

/// Bytes per index record: three native-endian `i64` fields.
pub const INDEX_RECORD_STRIDE: u64 = 24;

///
/// IndexInfo
///
/// Locates one coordinate's record in the data file. The hash is implied by
/// the record's position in the index and is not persisted.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct IndexInfo {
    pub hashed_coord: HashKey,
    pub start_offset: u64,
    pub path_limb_count: u64,
    pub edge_value_count: u64,
}

impl IndexInfo {
    /// Slot reserved for an unbuilt hash.
    #[must_use]
    pub const fn placeholder(hashed_coord: HashKey) -> Self {
        Self {
            hashed_coord,
            start_offset: 0,
            path_limb_count: 0,
            edge_value_count: 0,
        }
    }

    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.start_offset == 0 && self.path_limb_count == 0 && self.edge_value_count == 0
    }

    /// Bytes the record occupies in the data file.
    #[must_use]
    pub const fn record_size(&self) -> u64 {
        (self.path_limb_count + self.edge_value_count) * 8
    }

    /// Byte offset of this hash's slot in the index file.
    #[must_use]
    pub const fn index_offset(hashed_coord: HashKey) -> u64 {
        hashed_coord * INDEX_RECORD_STRIDE
    }

    #[must_use]
    pub const fn display<'a>(&'a self, bounds: &'a GridBounds) -> IndexInfoDisplay<'a> {
        IndexInfoDisplay { info: self, bounds }
    }

    pub(crate) fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64, StoreError> {
        let fields = [
            self.field(self.start_offset)?,
            self.field(self.path_limb_count)?,
            self.field(self.edge_value_count)?,
        ];
        let units = fields.map(BlockUnit::scalar);

        Ok(write_block(writer, &units)?)
    }

    pub(crate) fn read_from<R: Read>(
        hashed_coord: HashKey,
        reader: &mut BlockReader<R>,
    ) -> Result<Self, StoreError> {
        let mut field = || -> Result<u64, StoreError> {
            let raw = reader.read_scalar::<i64>()?;
            u64::try_from(raw).map_err(|_| {
                StoreError::corruption(hashed_coord, format!("negative index field {raw}"))
            })
        };

        Ok(Self {
            hashed_coord,
            start_offset: field()?,
            path_limb_count: field()?,
            edge_value_count: field()?,
        })
    }

    fn field(&self, value: u64) -> Result<i64, StoreError> {
        i64::try_from(value).map_err(|_| {
            StoreError::corruption(self.hashed_coord, format!("index field {value} exceeds i64"))
        })
    }
}

///
/// IndexInfoDisplay
/// Renders an [`IndexInfo`] with its coordinate recovered from the hash.
///

pub struct IndexInfoDisplay<'a> {
    info: &'a IndexInfo,
    bounds: &'a GridBounds,
}

impl fmt::Display for IndexInfoDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.info;
        match self.bounds.unhash(info.hashed_coord) {
            Ok(coordinate) => write!(f, "coord {coordinate}")?,
            Err(_) => write!(f, "coord ?")?,
        }

        write!(
            f,
            " | hash {} | start {} | limbs {} | edges {}",
            info.hashed_coord, info.start_offset, info.path_limb_count, info.edge_value_count
        )
    }
}
