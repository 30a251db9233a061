//! Lattice coordinates, hash keys and the combinatorics built on them.

mod edges;
mod factorial;
mod paths;


use crate::{arith::ArithError, error::ErrorClass};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

pub use edges::{edge_count, edge_use_fixed, edge_use_percentages};
pub use factorial::{FactorialTable, factorial};
pub use paths::PathCounter;

/// Hash key addressing one coordinate in the index file.
pub type HashKey = u64;

/// Fixed-point scale for persisted edge probabilities (`1.0 == 10^8`).
pub const PRECISION_SCALE: i64 = 100_000_000;

/// Decimal digits of [`PRECISION_SCALE`].
pub const PRECISION_DIGITS: u32 = 8;

pub const DEFAULT_MAX_COORDINATE: u32 = 99;

/// Largest grid bound the hash and dense index can address.
///
/// This is an addressing limit, not a practical build size: edge vectors
/// grow with `x * y`, so a full build's data file is roughly `4 * max^4`
/// bytes (about 400 MB at the default bound of 99).
pub const MAX_SUPPORTED_COORDINATE: u32 = 9_999;

///
/// GridError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum GridError {
    #[error(transparent)]
    Arith(#[from] ArithError),

    #[error("coordinate {coordinate} outside grid bounds 0..={max}")]
    CoordinateOutOfRange { coordinate: Coordinate, max: u32 },

    #[error("hash key {key} does not decode to a coordinate within 0..={max}")]
    KeyOutOfRange { key: HashKey, max: u32 },

    #[error("point {point} lies beyond end {end}")]
    PointBeyondEnd { point: Coordinate, end: Coordinate },

    #[error("grid bound {max} outside supported range 1..={limit}")]
    UnsupportedBound { max: u32, limit: u32 },
}

impl GridError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::Arith(err) => err.class(),
            Self::CoordinateOutOfRange { .. }
            | Self::KeyOutOfRange { .. }
            | Self::PointBeyondEnd { .. } => ErrorClass::InvariantViolation,
            Self::UnsupportedBound { .. } => ErrorClass::Unsupported,
        }
    }
}

///
/// Coordinate
///
/// Lattice point reached from the origin by unit right (`x`) and up (`y`)
/// moves.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[display("({x}, {y})")]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// `true` when `self` is componentwise `<= other`.
    #[must_use]
    pub const fn dominated_by(&self, other: &Self) -> bool {
        self.x <= other.x && self.y <= other.y
    }
}

/// Offset of `end` measured from `point`.
pub fn relative(end: Coordinate, point: Coordinate) -> Result<Coordinate, GridError> {
    match (end.x.checked_sub(point.x), end.y.checked_sub(point.y)) {
        (Some(x), Some(y)) => Ok(Coordinate::new(x, y)),
        _ => Err(GridError::PointBeyondEnd { point, end }),
    }
}

///
/// GridBounds
///
/// Square grid `[0, max_coordinate]²`. Hash keys zero-pad both components to
/// the digit width of `max_coordinate` and concatenate them decimally.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridBounds {
    max_coordinate: u32,
    radix: u64,
}

impl GridBounds {
    pub fn new(max_coordinate: u32) -> Result<Self, GridError> {
        if !(1..=MAX_SUPPORTED_COORDINATE).contains(&max_coordinate) {
            return Err(GridError::UnsupportedBound {
                max: max_coordinate,
                limit: MAX_SUPPORTED_COORDINATE,
            });
        }

        Ok(Self {
            max_coordinate,
            radix: 10u64.pow(max_coordinate.ilog10() + 1),
        })
    }

    #[must_use]
    pub const fn max_coordinate(&self) -> u32 {
        self.max_coordinate
    }

    /// Decimal digits per hashed component.
    #[must_use]
    pub const fn digits(&self) -> u32 {
        self.radix.ilog10()
    }

    #[must_use]
    pub const fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x <= self.max_coordinate && coordinate.y <= self.max_coordinate
    }

    pub const fn check(&self, coordinate: Coordinate) -> Result<Coordinate, GridError> {
        if self.contains(coordinate) {
            Ok(coordinate)
        } else {
            Err(GridError::CoordinateOutOfRange {
                coordinate,
                max: self.max_coordinate,
            })
        }
    }

    pub fn hash(&self, coordinate: Coordinate) -> Result<HashKey, GridError> {
        let c = self.check(coordinate)?;

        Ok(self.key_of(c))
    }

    pub fn unhash(&self, key: HashKey) -> Result<Coordinate, GridError> {
        let out_of_range = GridError::KeyOutOfRange {
            key,
            max: self.max_coordinate,
        };

        match (u32::try_from(key / self.radix), u32::try_from(key % self.radix)) {
            (Ok(x), Ok(y)) => self.check(Coordinate::new(x, y)).map_err(|_| out_of_range),
            _ => Err(out_of_range),
        }
    }

    /// Hash of the far corner; the largest key the grid produces.
    #[must_use]
    pub fn max_hash(&self) -> HashKey {
        self.key_of(Coordinate::new(self.max_coordinate, self.max_coordinate))
    }

    /// Every coordinate in x-major order, which is ascending hash order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..=self.max_coordinate)
            .flat_map(|x| (0..=self.max_coordinate).map(move |y| Coordinate::new(x, y)))
    }

    /// Hash keys of every coordinate, ascending.
    #[must_use]
    pub fn hash_all(&self) -> Vec<HashKey> {
        self.coordinates()
            .map(|c| self.key_of(c))
            .collect()
    }

    fn key_of(&self, c: Coordinate) -> HashKey {
        u64::from(c.x) * self.radix + u64::from(c.y)
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self {
            max_coordinate: DEFAULT_MAX_COORDINATE,
            radix: 100,
        }
    }
}
