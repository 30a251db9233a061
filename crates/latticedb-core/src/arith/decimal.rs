use super::{ArithError, BASE, BigUnsigned, DoubleLimb, LIMB_BITS, Limb};
use std::{fmt, str::FromStr};

/// Largest limb count that converts to `f64` without overflowing.
///
/// `f64::MAX_EXP` divided by the bit length of `BASE`, less one limb of
/// headroom.
pub const DOUBLE_CONVERSION_LIMBS: usize = f64::MAX_EXP as usize / (LIMB_BITS as usize + 1) - 1;

const BASE_F64: f64 = 4_294_967_296.0;

impl BigUnsigned {
    /// Parse most-significant-first decimal digit values (each `0..=9`).
    pub fn from_decimal_digits(digits: &[u8]) -> Result<Self, ArithError> {
        if digits.is_empty() {
            return Err(ArithError::EmptyInput);
        }
        if let Some((position, &value)) = digits.iter().enumerate().find(|(_, d)| **d > 9) {
            return Err(ArithError::DigitOutOfRange { position, value });
        }

        let mut buffer: Vec<u8> = digits.iter().copied().skip_while(|&d| d == 0).collect();
        let mut limbs_rev = Vec::new();

        // repeated division of the decimal buffer by BASE; each remainder is
        // the next limb, least significant first
        while !buffer.is_empty() {
            let mut next = Vec::with_capacity(buffer.len());
            let mut remainder: DoubleLimb = 0;

            for &digit in &buffer {
                let current = remainder * 10 + DoubleLimb::from(digit);
                let q = current / BASE;
                remainder = current % BASE;
                if q != 0 || !next.is_empty() {
                    next.push(q as u8);
                }
            }

            limbs_rev.push(remainder as Limb);
            buffer = next;
        }

        limbs_rev.reverse();

        Ok(Self::from_limbs(limbs_rev))
    }

    /// Most-significant-first decimal digits; zero renders as `[0]`.
    #[must_use]
    pub fn to_decimal_digits(&self) -> Vec<u8> {
        let base_digits = decimal_digits_of(BASE);
        let mut power = vec![1];
        let mut result = vec![0];

        for &limb in self.limbs.iter().rev() {
            let term = mul_decimal(&decimal_digits_of(DoubleLimb::from(limb)), &power);
            result = add_decimal(&result, &term);
            power = mul_decimal(&power, &base_digits);
        }

        result
    }

    /// Sum of `limb * BASE^i`, evaluated in `f64`.
    pub fn to_f64(&self) -> Result<f64, ArithError> {
        if self.limb_count() > DOUBLE_CONVERSION_LIMBS {
            return Err(ArithError::PrecisionLoss {
                limbs: self.limb_count(),
                max: DOUBLE_CONVERSION_LIMBS,
            });
        }

        let mut scale = 1.0;
        let mut total = 0.0;
        for &limb in self.limbs.iter().rev() {
            total += f64::from(limb) * scale;
            scale *= BASE_F64;
        }

        Ok(total)
    }
}

impl fmt::Display for BigUnsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self
            .to_decimal_digits()
            .into_iter()
            .map(|d| char::from(b'0' + d))
            .collect();

        f.pad_integral(true, "", &rendered)
    }
}

impl FromStr for BigUnsigned {
    type Err = ArithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .chars()
            .enumerate()
            .map(|(position, found)| {
                found
                    .to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(ArithError::InvalidDigit { position, found })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_decimal_digits(&digits)
    }
}

fn decimal_digits_of(mut value: DoubleLimb) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push((value % 10) as u8);
        value /= 10;
    }
    digits.reverse();

    digits
}

fn strip_decimal_zeros(mut digits: Vec<u8>) -> Vec<u8> {
    let leading = digits.iter().take_while(|&&d| d == 0).count();
    if leading == digits.len() {
        return vec![0];
    }
    digits.drain(..leading);

    digits
}

fn add_decimal(left: &[u8], right: &[u8]) -> Vec<u8> {
    let width = left.len().max(right.len());
    let mut out = vec![0; width + 1];
    let mut left_rev = left.iter().rev();
    let mut right_rev = right.iter().rev();
    let mut carry = 0;

    for slot in out.iter_mut().rev() {
        let sum = left_rev.next().copied().unwrap_or(0) + right_rev.next().copied().unwrap_or(0) + carry;
        *slot = sum % 10;
        carry = sum / 10;
    }

    strip_decimal_zeros(out)
}

fn mul_decimal(left: &[u8], right: &[u8]) -> Vec<u8> {
    // columns least significant first
    let mut columns = vec![0u32; left.len() + right.len()];

    for (i, &a) in left.iter().rev().enumerate() {
        let mut carry = 0;
        for (j, &b) in right.iter().rev().enumerate() {
            let cell = columns[i + j] + u32::from(a) * u32::from(b) + carry;
            columns[i + j] = cell % 10;
            carry = cell / 10;
        }

        let mut k = i + right.len();
        while carry > 0 {
            let cell = columns[k] + carry;
            columns[k] = cell % 10;
            carry = cell / 10;
            k += 1;
        }
    }

    strip_decimal_zeros(columns.into_iter().rev().map(|d| d as u8).collect())
}
