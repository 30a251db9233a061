//! Arbitrary-precision unsigned integers.
//!
//! Path counts grow combinatorially (the count to `(99, 99)` needs seven
//! limbs), so they are held as a most-significant-first sequence of 32-bit
//! limbs with a 64-bit accumulator for carries and products.
//!
//! Every operation returns a new, canonical value. The only fallible
//! operations are division (`n < d` and `d == 0` are rejected) and lossy
//! float conversion.

#![expect(clippy::cast_possible_truncation)]

mod decimal;
mod div;
mod ops;

#[cfg(test)]
mod tests;

use crate::error::ErrorClass;
use std::cmp::Ordering;
use thiserror::Error as ThisError;

pub use decimal::DOUBLE_CONVERSION_LIMBS;

/// One limb of a [`BigUnsigned`].
pub type Limb = u32;

/// Accumulator wide enough for a limb product plus carry.
pub type DoubleLimb = u64;

/// Number of bits per limb.
pub const LIMB_BITS: u32 = Limb::BITS;

/// Limb radix; every limb lies in `[0, BASE)`.
pub const BASE: DoubleLimb = 1 << LIMB_BITS;

const LIMB_MASK: DoubleLimb = BASE - 1;

///
/// ArithError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum ArithError {
    #[error("decimal digit value {value} out of range at position {position}")]
    DigitOutOfRange { position: usize, value: u8 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("divisor exceeds dividend ({divisor_limbs} vs {dividend_limbs} limbs)")]
    DivisorExceedsDividend {
        dividend_limbs: usize,
        divisor_limbs: usize,
    },

    #[error("empty decimal input")]
    EmptyInput,

    #[error("invalid decimal character {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },

    #[error("limb value {value:#x} at position {position} exceeds the limb base")]
    LimbOutOfRange { position: usize, value: u64 },

    #[error("value spans {limbs} limbs; at most {max} convert to f64 without precision loss")]
    PrecisionLoss { limbs: usize, max: usize },
}

impl ArithError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::DivisionByZero | Self::DivisorExceedsDividend { .. } => {
                ErrorClass::InvariantViolation
            }
            Self::DigitOutOfRange { .. } | Self::EmptyInput | Self::InvalidDigit { .. } => {
                ErrorClass::Unsupported
            }
            Self::LimbOutOfRange { .. } => ErrorClass::Corruption,
            Self::PrecisionLoss { .. } => ErrorClass::PrecisionLoss,
        }
    }
}

///
/// BigUnsigned
///
/// Natural number stored as base-2^32 limbs, most significant first.
/// Canonical form has no leading zero limb; zero is the empty sequence.
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct BigUnsigned {
    limbs: Vec<Limb>,
}

impl BigUnsigned {
    pub const ZERO: Self = Self { limbs: Vec::new() };

    #[must_use]
    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }

    /// Build from most-significant-first limbs, stripping leading zeros.
    #[must_use]
    pub fn from_limbs(mut limbs: Vec<Limb>) -> Self {
        trim_leading_zeros(&mut limbs);

        Self { limbs }
    }

    /// Build from 64-bit wire units, rejecting any unit that is not a limb.
    pub fn try_from_wide_limbs(units: &[u64]) -> Result<Self, ArithError> {
        let limbs = units
            .iter()
            .enumerate()
            .map(|(position, &value)| {
                Limb::try_from(value).map_err(|_| ArithError::LimbOutOfRange { position, value })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_limbs(limbs))
    }

    /// Widen every limb to a 64-bit wire unit.
    #[must_use]
    pub fn to_wide_limbs(&self) -> Vec<u64> {
        self.limbs.iter().map(|&limb| u64::from(limb)).collect()
    }

    #[must_use]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    #[must_use]
    pub const fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    #[must_use]
    pub fn is_odd(&self) -> bool {
        self.limbs.last().is_some_and(|limb| limb & 1 == 1)
    }
}

impl From<u64> for BigUnsigned {
    fn from(value: u64) -> Self {
        Self::from_limbs(vec![(value >> LIMB_BITS) as Limb, (value & LIMB_MASK) as Limb])
    }
}

impl From<u32> for BigUnsigned {
    fn from(value: u32) -> Self {
        Self::from_limbs(vec![value])
    }
}

impl Ord for BigUnsigned {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_limbs(&self.limbs, &other.limbs)
    }
}

impl PartialOrd for BigUnsigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Strip leading zero limbs in place. Idempotent.
pub fn trim_leading_zeros(limbs: &mut Vec<Limb>) {
    let leading = limbs.iter().take_while(|&&limb| limb == 0).count();
    if leading > 0 {
        limbs.drain(..leading);
    }
}

// Canonical limb sequences: the longer one is larger, equal lengths compare
// lexicographically from the most significant limb.
fn cmp_limbs(left: &[Limb], right: &[Limb]) -> Ordering {
    left.len()
        .cmp(&right.len())
        .then_with(|| left.cmp(right))
}
