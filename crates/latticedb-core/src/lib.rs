//! Core runtime for LatticeDB: arbitrary-precision path counts, the block
//! codec, lattice combinatorics, and the direct-addressed store they are
//! persisted in.

pub mod arith;
pub mod codec;
pub mod error;
pub mod grid;
pub mod interface;
pub mod obs;
pub mod store;

///
/// Prelude
///
/// Domain vocabulary plus the store entry points.
///

pub mod prelude {
    pub use crate::{
        arith::BigUnsigned,
        error::InternalError,
        grid::{Coordinate, GridBounds, PathCounter},
        interface::{ChanceResponse, CompleteInfo, GridService},
        store::{FixedPoint, Fraction, StorePaths, StoreReader, StoreWriter, build_store},
    };
}
