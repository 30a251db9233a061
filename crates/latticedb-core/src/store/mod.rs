//! Direct-addressed on-disk store of path counts and edge probabilities.
//!
//! Two files make up a store:
//!
//! - the **index** file, a dense array of 24-byte records where the record
//!   at `hash * 24` describes coordinate `hash`; unbuilt hashes below the
//!   maximum hold all-zero placeholders;
//! - the **data** file, the concatenated variable-length records: path-count
//!   limbs widened to 64 bits, then fixed-point edge probabilities.
//!
//! Both files are native-endian and only portable between hosts that agree
//! on byte order. They are written once per build, through temporary files
//! renamed into place, and read many times afterwards; every lookup opens
//! its own handles.

mod index;
mod reader;
mod writer;


use crate::{
    arith::ArithError,
    codec::CodecError,
    error::ErrorClass,
    grid::{GridError, HashKey},
};
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

pub use index::{INDEX_RECORD_STRIDE, IndexInfo, IndexInfoDisplay};
pub use reader::{EdgeRepresentation, FixedPoint, Fraction, StoreReader, StoreRecord};
pub use writer::{BuildSummary, StoreWriter, build_store};

pub const DEFAULT_INDEX_FILE: &str = "map.bin";
pub const DEFAULT_DATA_FILE: &str = "info.bin";

///
/// StoreError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum StoreError {
    #[error(transparent)]
    Arith(#[from] ArithError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("store record for hash {hash} is corrupt: {reason}")]
    Corruption { hash: HashKey, reason: String },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("index input must be strictly ascending: hash {hash} follows {previous}")]
    IndexOrder { previous: HashKey, hash: HashKey },

    #[error("store i/o failed on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{role} file not found at {}", path.display())]
    MissingFile { role: &'static str, path: PathBuf },

    #[error("hash {hash} lies past the end of the index ({records} records)")]
    NotIndexed { hash: HashKey, records: u64 },
}

impl StoreError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::Arith(err) => err.class(),
            Self::Codec(err) => err.class(),
            Self::Corruption { .. } => ErrorClass::Corruption,
            Self::Grid(err) => err.class(),
            Self::IndexOrder { .. } => ErrorClass::InvariantViolation,
            Self::Io { .. } => ErrorClass::Io,
            Self::MissingFile { .. } | Self::NotIndexed { .. } => ErrorClass::NotFound,
        }
    }

    pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn corruption(hash: HashKey, reason: impl Into<String>) -> Self {
        Self::Corruption {
            hash,
            reason: reason.into(),
        }
    }
}

///
/// StorePaths
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StorePaths {
    pub index: PathBuf,
    pub data: PathBuf,
}

impl StorePaths {
    #[must_use]
    pub fn new(index: impl Into<PathBuf>, data: impl Into<PathBuf>) -> Self {
        Self {
            index: index.into(),
            data: data.into(),
        }
    }

    /// Default file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();

        Self::new(dir.join(DEFAULT_INDEX_FILE), dir.join(DEFAULT_DATA_FILE))
    }
}
