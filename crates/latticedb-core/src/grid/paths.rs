use super::{Coordinate, FactorialTable, GridBounds, GridError, PRECISION_DIGITS, relative};
use crate::arith::BigUnsigned;

const PRECISION_SCALE_F64: f64 = 100_000_000.0;

///
/// PathCounter
///
/// Exact monotone path counts over one grid, backed by a factorial table
/// covering every sum of two in-bounds components.
///

#[derive(Clone, Debug)]
pub struct PathCounter {
    bounds: GridBounds,
    factorials: FactorialTable,
}

impl PathCounter {
    #[must_use]
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            factorials: FactorialTable::new(2 * bounds.max_coordinate()),
        }
    }

    #[must_use]
    pub const fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Paths from the origin to `point`: `(x + y)! / (x! * y!)`.
    pub fn path_count_to(&self, point: Coordinate) -> Result<BigUnsigned, GridError> {
        let point = self.bounds.check(point)?;

        let numerator = self.factorials.get(point.x + point.y);
        let denominator = &*self.factorials.get(point.x) * &*self.factorials.get(point.y);

        Ok(numerator.checked_div(&denominator)?)
    }

    /// Paths from the origin to `end` that pass through `point`.
    pub fn path_count_through(
        &self,
        point: Coordinate,
        end: Coordinate,
    ) -> Result<BigUnsigned, GridError> {
        self.bounds.check(end)?;
        let remainder = relative(end, point)?;

        Ok(&self.path_count_to(point)? * &self.path_count_to(remainder)?)
    }

    /// Probability in `[0, 1]` that a uniformly random path to `end` passes
    /// through `point`.
    ///
    /// Fails with a precision-loss error when the scaled ratio is too large
    /// for `f64`; callers fall back to the exact counts.
    pub fn chance_through_point(&self, point: Coordinate, end: Coordinate) -> Result<f64, GridError> {
        let through = self.path_count_through(point, end)?;
        let total = self.path_count_to(end)?;

        // total * 10^8 / through, then inverted back to a ratio
        let scale = BigUnsigned::from(10u32).pow(&BigUnsigned::from(PRECISION_DIGITS));
        let inverse = (&total * &scale).checked_div(&through)?;
        let inverse = inverse.to_f64()?;

        Ok(PRECISION_SCALE_F64 * (1.0 / inverse))
    }
}
