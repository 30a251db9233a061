//! Fixed-layout binary block codec.
//!
//! A block is a caller-ordered list of units, each a single scalar or a flat
//! sequence of scalars, written at native width and byte order with no
//! padding, alignment or length prefixes. The format does not describe
//! itself: readers supply the same kinds and element counts the writer used.
//!
//! Writers and readers are single-owner values. Sharing one stream across
//! threads needs external synchronization; independent readers over
//! independent handles need none.

mod scalar;

#[cfg(test)]
mod tests;

use crate::error::ErrorClass;
use std::io::{self, Read, Write};
use thiserror::Error as ThisError;

pub use scalar::{NativeScalar, ScalarKind, ScalarValue, SequenceRef, SequenceValue};

///
/// CodecError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum CodecError {
    #[error("block i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("sequence of {count} {kind} values does not fit in memory")]
    SequenceTooLarge { kind: ScalarKind, count: u64 },

    #[error("block ended early: {needed} bytes of {kind} expected after {consumed} bytes")]
    Truncated {
        kind: ScalarKind,
        needed: u64,
        consumed: u64,
    },
}

impl CodecError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::Io(_) => ErrorClass::Io,
            Self::SequenceTooLarge { .. } => ErrorClass::Unsupported,
            Self::Truncated { .. } => ErrorClass::Corruption,
        }
    }
}

///
/// BlockUnit
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlockUnit<'a> {
    Scalar(ScalarValue),
    Sequence(SequenceRef<'a>),
}

impl<'a> BlockUnit<'a> {
    #[must_use]
    pub fn scalar<T: NativeScalar>(value: T) -> Self {
        Self::Scalar(value.into_value())
    }

    #[must_use]
    pub fn sequence<T: NativeScalar>(values: &'a [T]) -> Self {
        Self::Sequence(T::sequence_ref(values))
    }

    /// On-wire size in bytes.
    #[must_use]
    pub const fn byte_size(&self) -> u64 {
        match self {
            Self::Scalar(value) => value.kind().size(),
            Self::Sequence(values) => values.kind().size() * values.len() as u64,
        }
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        match self {
            Self::Scalar(value) => value.encode_into(out),
            Self::Sequence(values) => values.encode_into(out),
        }
    }
}

/// Total on-wire size of `units`, without performing I/O.
#[must_use]
pub fn block_size(units: &[BlockUnit<'_>]) -> u64 {
    units.iter().map(BlockUnit::byte_size).sum()
}

/// Write `units` in order and return the number of bytes written.
pub fn write_block<W: Write>(writer: &mut W, units: &[BlockUnit<'_>]) -> Result<u64, CodecError> {
    let mut buf = Vec::with_capacity(usize::try_from(block_size(units)).unwrap_or(0));
    for unit in units {
        unit.encode_into(&mut buf);
    }
    writer.write_all(&buf)?;

    Ok(buf.len() as u64)
}

///
/// Slot
/// Shape of one unit to read back.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Slot {
    Scalar(ScalarKind),
    Sequence(ScalarKind, usize),
}

///
/// BlockValue
///

#[derive(Clone, Debug, PartialEq)]
pub enum BlockValue {
    Scalar(ScalarValue),
    Sequence(SequenceValue),
}

///
/// BlockReader
/// Reads units back in write order, tracking bytes consumed.
///

#[derive(Debug)]
pub struct BlockReader<R> {
    inner: R,
    consumed: u64,
}

impl<R: Read> BlockReader<R> {
    pub const fn new(inner: R) -> Self {
        Self { inner, consumed: 0 }
    }

    #[must_use]
    pub const fn consumed(&self) -> u64 {
        self.consumed
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn read_scalar<T: NativeScalar>(&mut self) -> Result<T, CodecError> {
        let bytes = self.read_raw(T::KIND, 1)?;

        Ok(T::from_native(&bytes))
    }

    pub fn read_sequence<T: NativeScalar>(&mut self, count: usize) -> Result<Vec<T>, CodecError> {
        let bytes = self.read_raw(T::KIND, count)?;

        Ok(scalar::decode_all(&bytes))
    }

    pub fn read_slot(&mut self, slot: Slot) -> Result<BlockValue, CodecError> {
        match slot {
            Slot::Scalar(kind) => {
                let bytes = self.read_raw(kind, 1)?;
                Ok(BlockValue::Scalar(ScalarValue::decode(kind, &bytes)))
            }
            Slot::Sequence(kind, count) => {
                let bytes = self.read_raw(kind, count)?;
                Ok(BlockValue::Sequence(SequenceValue::decode(kind, &bytes)))
            }
        }
    }

    fn read_raw(&mut self, kind: ScalarKind, count: usize) -> Result<Vec<u8>, CodecError> {
        let too_large = || CodecError::SequenceTooLarge {
            kind,
            count: count as u64,
        };
        let needed = kind.size().checked_mul(count as u64).ok_or_else(too_large)?;
        let len = usize::try_from(needed).map_err(|_| too_large())?;

        let mut bytes = vec![0; len];
        self.inner.read_exact(&mut bytes).map_err(|err| {
            if err.kind() == io::ErrorKind::UnexpectedEof {
                CodecError::Truncated {
                    kind,
                    needed,
                    consumed: self.consumed,
                }
            } else {
                CodecError::Io(err)
            }
        })?;
        self.consumed += needed;

        Ok(bytes)
    }
}

/// Read one owned value per slot, in order.
pub fn read_block<R: Read>(reader: R, slots: &[Slot]) -> Result<Vec<BlockValue>, CodecError> {
    let mut reader = BlockReader::new(reader);

    slots.iter().map(|&slot| reader.read_slot(slot)).collect()
}
