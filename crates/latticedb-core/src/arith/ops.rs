use super::{BigUnsigned, DoubleLimb, LIMB_BITS, LIMB_MASK, Limb, cmp_limbs, trim_leading_zeros};
use std::{
    cmp::Ordering,
    ops::{Add, Mul, Sub},
};

// Forward the owned and mixed operator forms to the borrowed implementation.
macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait<BigUnsigned> for BigUnsigned {
            type Output = BigUnsigned;

            fn $method(self, rhs: BigUnsigned) -> BigUnsigned {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&BigUnsigned> for BigUnsigned {
            type Output = BigUnsigned;

            fn $method(self, rhs: &BigUnsigned) -> BigUnsigned {
                (&self).$method(rhs)
            }
        }

        impl $trait<BigUnsigned> for &BigUnsigned {
            type Output = BigUnsigned;

            fn $method(self, rhs: BigUnsigned) -> BigUnsigned {
                self.$method(&rhs)
            }
        }
    };
}

impl Add<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    fn add(self, rhs: &BigUnsigned) -> BigUnsigned {
        BigUnsigned {
            limbs: add_limbs(&self.limbs, &rhs.limbs),
        }
    }
}

/// Subtraction yields the magnitude `|self - rhs|`; the type has no sign.
impl Sub<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    fn sub(self, rhs: &BigUnsigned) -> BigUnsigned {
        BigUnsigned {
            limbs: sub_magnitude(&self.limbs, &rhs.limbs),
        }
    }
}

impl Mul<&BigUnsigned> for &BigUnsigned {
    type Output = BigUnsigned;

    fn mul(self, rhs: &BigUnsigned) -> BigUnsigned {
        BigUnsigned {
            limbs: mul_limbs(&self.limbs, &rhs.limbs),
        }
    }
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl BigUnsigned {
    /// Multiply by a single limb.
    #[must_use]
    pub fn mul_limb(&self, digit: Limb) -> Self {
        if digit == 0 {
            return Self::ZERO;
        }

        Self {
            limbs: mul_limb_shifted(&self.limbs, digit, 0),
        }
    }
}

pub(super) fn add_limbs(left: &[Limb], right: &[Limb]) -> Vec<Limb> {
    let (longer, shorter) = if left.len() >= right.len() {
        (left, right)
    } else {
        (right, left)
    };

    let mut out = vec![0; longer.len() + 1];
    let mut shorter_rev = shorter.iter().rev();
    let mut carry: DoubleLimb = 0;

    for (slot, &limb) in out.iter_mut().rev().zip(longer.iter().rev()) {
        let addend = shorter_rev.next().map_or(0, |&s| DoubleLimb::from(s));
        let sum = DoubleLimb::from(limb) + addend + carry;

        carry = sum >> LIMB_BITS;
        *slot = (sum & LIMB_MASK) as Limb;
    }
    out[0] = carry as Limb;

    trim_leading_zeros(&mut out);
    out
}

pub(super) fn sub_magnitude(left: &[Limb], right: &[Limb]) -> Vec<Limb> {
    let (larger, smaller) = match cmp_limbs(left, right) {
        Ordering::Equal => return Vec::new(),
        Ordering::Greater => (left, right),
        Ordering::Less => (right, left),
    };

    let mut out = vec![0; larger.len()];
    let mut smaller_rev = smaller.iter().rev();
    let mut borrow: DoubleLimb = 0;

    for (slot, &limb) in out.iter_mut().rev().zip(larger.iter().rev()) {
        let subtrahend = smaller_rev.next().map_or(0, |&s| DoubleLimb::from(s)) + borrow;

        // a negative difference wraps, leaving every bit above the limb set
        let diff = DoubleLimb::from(limb).wrapping_sub(subtrahend);
        borrow = (diff >> LIMB_BITS) & 1;
        *slot = (diff & LIMB_MASK) as Limb;
    }

    trim_leading_zeros(&mut out);
    out
}

pub(super) fn mul_limbs(left: &[Limb], right: &[Limb]) -> Vec<Limb> {
    if left.is_empty() || right.is_empty() {
        return Vec::new();
    }

    let mut acc = Vec::new();
    for (shift, &digit) in right.iter().rev().enumerate() {
        if digit == 0 {
            continue;
        }
        let partial = mul_limb_shifted(left, digit, shift);
        acc = add_limbs(&acc, &partial);
    }

    acc
}

// `limbs * digit * BASE^shift`; `digit` must be non-zero.
fn mul_limb_shifted(limbs: &[Limb], digit: Limb, shift: usize) -> Vec<Limb> {
    let mut out = vec![0; limbs.len() + 1 + shift];
    let mut carry: DoubleLimb = 0;

    for (slot, &limb) in out[..=limbs.len()]
        .iter_mut()
        .rev()
        .zip(limbs.iter().rev())
    {
        let product = DoubleLimb::from(limb) * DoubleLimb::from(digit) + carry;

        carry = product >> LIMB_BITS;
        *slot = (product & LIMB_MASK) as Limb;
    }
    out[0] = carry as Limb;

    trim_leading_zeros(&mut out);
    out
}
