use crate::arith::BigUnsigned;
use std::borrow::Cow;

/// `n!`, computed directly.
#[must_use]
pub fn factorial(n: u32) -> BigUnsigned {
    (2..=n).fold(BigUnsigned::one(), |acc, k| &acc * &BigUnsigned::from(k))
}

///
/// FactorialTable
///
/// Factorials `0!..=limit!`, populated upfront. Lookups past the table fall
/// back to direct computation.
///

#[derive(Clone, Debug)]
pub struct FactorialTable {
    values: Vec<BigUnsigned>,
}

impl FactorialTable {
    #[must_use]
    pub fn new(limit: u32) -> Self {
        let mut values = Vec::with_capacity(limit as usize + 1);
        let mut current = BigUnsigned::one();
        values.push(current.clone());

        for k in 1..=limit {
            current = &current * &BigUnsigned::from(k);
            values.push(current.clone());
        }

        Self { values }
    }

    /// Largest argument served from the table.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.values.len() - 1
    }

    #[must_use]
    pub fn get(&self, n: u32) -> Cow<'_, BigUnsigned> {
        match self.values.get(n as usize) {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(factorial(n)),
        }
    }
}
