//! Division and exponentiation.
//!
//! Multi-limb division estimates the quotient from the divisor's leading
//! limb alone. That estimate never undershoots, so when `q * d <= n` it is
//! exact. Otherwise the true quotient is bracketed between the estimate and
//! a corrected lower bound, and the bracket is averaged and re-corrected
//! until its ends are adjacent. A round cap bounds the loop; past it the
//! exact limb-by-limb long division takes over.

use super::{ArithError, BASE, BigUnsigned, DoubleLimb, LIMB_BITS, Limb};
use tracing::warn;

impl BigUnsigned {
    /// Floor division.
    ///
    /// Fails with [`ArithError::DivisionByZero`] when `divisor` is zero and
    /// with [`ArithError::DivisorExceedsDividend`] when `self < divisor`.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, ArithError> {
        if divisor.is_zero() {
            return Err(ArithError::DivisionByZero);
        }
        if self < divisor {
            return Err(ArithError::DivisorExceedsDividend {
                dividend_limbs: self.limb_count(),
                divisor_limbs: divisor.limb_count(),
            });
        }

        Ok(divide(self, divisor))
    }

    /// Floor division by a single limb, returning quotient and remainder.
    pub fn div_rem_limb(&self, divisor: Limb) -> Result<(Self, Limb), ArithError> {
        if divisor == 0 {
            return Err(ArithError::DivisionByZero);
        }

        let (quotient, remainder) = div_rem_prefix(&self.limbs, divisor);

        Ok((Self::from_limbs(quotient), remainder))
    }

    /// `self ^ exponent` by square-and-multiply. `x^0` is one for every `x`.
    #[must_use]
    pub fn pow(&self, exponent: &Self) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exponent = exponent.clone();

        while !exponent.is_zero() {
            if exponent.is_odd() {
                result = &result * &base;
            }
            exponent = exponent.halve();
            if !exponent.is_zero() {
                base = &base * &base;
            }
        }

        result
    }

    #[must_use]
    pub(crate) fn halve(&self) -> Self {
        Self::from_limbs(div_rem_prefix(&self.limbs, 2).0)
    }
}

// Preconditions: divisor non-zero and `dividend >= divisor`.
fn divide(dividend: &BigUnsigned, divisor: &BigUnsigned) -> BigUnsigned {
    let lead = divisor.limbs[0];
    let tail = divisor.limb_count() - 1;

    let estimate = leading_quotient(&dividend.limbs, tail, lead);
    if &estimate * divisor <= *dividend {
        return estimate;
    }

    refine_quotient(dividend, divisor, estimate)
}

// Narrow the bracket `low * d <= n < high * d` until the bounds are adjacent;
// `low` is then the quotient. Each round averages the bounds, then pulls the
// opposite bound in with the leading-limb estimate of the new remainder.
fn refine_quotient(
    dividend: &BigUnsigned,
    divisor: &BigUnsigned,
    mut high: BigUnsigned,
) -> BigUnsigned {
    let mut low = lower_bound(dividend, divisor, &high);
    high = high.min(upper_bound(dividend, divisor, &low));

    let max_rounds = LIMB_BITS as usize * (dividend.limb_count() + 1);
    for _ in 0..max_rounds {
        if &high - &low == BigUnsigned::one() {
            return low;
        }

        let mid = (&low + &high).halve();
        if &mid * divisor > *dividend {
            low = low.max(lower_bound(dividend, divisor, &mid));
            high = mid;
        } else {
            high = high.min(upper_bound(dividend, divisor, &mid));
            low = mid;
        }
    }

    warn!(
        dividend_limbs = dividend.limb_count(),
        divisor_limbs = divisor.limb_count(),
        "quotient refinement did not converge; falling back to long division"
    );

    long_divide(dividend, divisor)
}

// Given `q * d > n`, step `q` down by at least the overshoot in units of `d`.
fn lower_bound(dividend: &BigUnsigned, divisor: &BigUnsigned, over: &BigUnsigned) -> BigUnsigned {
    let overshoot = &(over * divisor) - dividend;
    let step = &leading_remainder_quotient(&overshoot, divisor) + &BigUnsigned::one();

    if step >= *over {
        BigUnsigned::ZERO
    } else {
        over - &step
    }
}

// Given `q * d <= n`, the smallest value the shortfall proves is too large.
fn upper_bound(dividend: &BigUnsigned, divisor: &BigUnsigned, under: &BigUnsigned) -> BigUnsigned {
    let shortfall = dividend - &(under * divisor);

    &(under + &leading_remainder_quotient(&shortfall, divisor)) + &BigUnsigned::one()
}

// Remainder measured against the divisor's leading limb only; never smaller
// than `remainder / divisor`.
fn leading_remainder_quotient(remainder: &BigUnsigned, divisor: &BigUnsigned) -> BigUnsigned {
    leading_quotient(&remainder.limbs, divisor.limb_count() - 1, divisor.limbs[0])
}

// `floor(floor(limbs / BASE^tail) / lead)`.
fn leading_quotient(limbs: &[Limb], tail: usize, lead: Limb) -> BigUnsigned {
    let head = &limbs[..limbs.len().saturating_sub(tail)];

    BigUnsigned::from_limbs(div_rem_prefix(head, lead).0)
}

// Exact schoolbook division, one quotient limb per dividend limb.
pub(super) fn long_divide(dividend: &BigUnsigned, divisor: &BigUnsigned) -> BigUnsigned {
    let mut quotient = Vec::with_capacity(dividend.limb_count());
    let mut remainder = BigUnsigned::ZERO;

    for &limb in &dividend.limbs {
        let mut shifted = remainder.limbs;
        shifted.push(limb);
        remainder = BigUnsigned::from_limbs(shifted);

        // largest digit with divisor * digit <= remainder
        let (mut low, mut high): (DoubleLimb, DoubleLimb) = (0, BASE - 1);
        while low < high {
            let mid = low + (high - low).div_ceil(2);
            if divisor.mul_limb(mid as Limb) <= remainder {
                low = mid;
            } else {
                high = mid - 1;
            }
        }

        remainder = &remainder - &divisor.mul_limb(low as Limb);
        quotient.push(low as Limb);
    }

    BigUnsigned::from_limbs(quotient)
}

fn div_rem_prefix(limbs: &[Limb], divisor: Limb) -> (Vec<Limb>, Limb) {
    let divisor = DoubleLimb::from(divisor);
    let mut quotient = Vec::with_capacity(limbs.len());
    let mut remainder: DoubleLimb = 0;

    for &limb in limbs {
        let current = (remainder << LIMB_BITS) | DoubleLimb::from(limb);
        quotient.push((current / divisor) as Limb);
        remainder = current % divisor;
    }

    (quotient, remainder as Limb)
}
