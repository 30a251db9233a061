//! Edge-use probabilities.
//!
//! Edges are laid out row by row from the bottom of the grid: a row of `X`
//! horizontal edges, then the `X + 1` vertical edges leading up from it,
//! ending with the top row of horizontal edges. Slot 0 is a placeholder
//! holding the seed value and is not an edge.
//!
//! Each edge takes the probability mass arriving at its start vertex and
//! scales it by the share of remaining moves that go in its direction. The
//! fixed-point sweep multiplies before it divides at every step; persisted
//! values depend on that order.

use super::{Coordinate, PRECISION_SCALE};

/// Number of slots for a grid ending at `end`, including the placeholder.
#[must_use]
pub fn edge_count(end: Coordinate) -> usize {
    let (x, y) = (end.x as usize, end.y as usize);

    1 + x * (y + 1) + (x + 1) * y
}

/// Edge-use probabilities as percentages in `[0, 100]`.
#[must_use]
pub fn edge_use_percentages(end: Coordinate) -> Vec<f64> {
    let mut res = vec![100.0; edge_count(end)];
    if end.x == 0 || end.y == 0 {
        return res;
    }

    let w = end.x as usize;
    let (x, y) = (f64::from(end.x), f64::from(end.y));
    let mut remaining = x + y;
    let mut p = 1;

    // bottom row of horizontal edges
    for i in 0..end.x {
        let i = f64::from(i);
        res[p] = res[p - 1] * ((x - i) / (remaining - i));
        p += 1;
    }

    // bottom row of vertical edges
    for i in 0..=end.x {
        let i = f64::from(i);
        res[p] = res[p - w - 1] * (y / (remaining - i));
        p += 1;
    }

    for i in 0..end.y - 1 {
        let i = f64::from(i);
        remaining -= 1.0;

        res[p] = res[p - w - 1] * (x / remaining);
        p += 1;
        for j in 0..end.x - 1 {
            let j = f64::from(j);
            res[p] = (res[p - 1] + res[p - w - 1]) * ((x - j - 1.0) / (remaining - j - 1.0));
            p += 1;
        }

        res[p] = res[p - 2 * w - 1] * ((y - i - 1.0) / remaining);
        p += 1;
        for j in 0..end.x {
            let j = f64::from(j);
            res[p] = (res[p - w - 1] + res[p - 2 * w - 1]) * ((y - i - 1.0) / (remaining - j - 1.0));
            p += 1;
        }
    }

    // top row of horizontal edges
    remaining -= 1.0;
    res[p] = res[p - w - 1] * (x / remaining);
    p += 1;
    for j in 0..end.x - 1 {
        let j = f64::from(j);
        res[p] = (res[p - 1] + res[p - w - 1]) * ((x - j - 1.0) / (remaining - j - 1.0));
        p += 1;
    }

    res
}

/// Edge-use probabilities in fixed point, `PRECISION_SCALE == 1.0`.
#[must_use]
pub fn edge_use_fixed(end: Coordinate) -> Vec<i64> {
    const S: i64 = PRECISION_SCALE;

    let mut res = vec![S; edge_count(end)];
    if end.x == 0 || end.y == 0 {
        return res;
    }

    let w = end.x as usize;
    let (x, y) = (i64::from(end.x), i64::from(end.y));
    let mut remaining = x + y;
    let mut p = 1;

    // bottom row of horizontal edges
    for i in 0..x {
        res[p] = res[p - 1] * ((S * (x - i)) / (remaining - i)) / S;
        p += 1;
    }

    // bottom row of vertical edges
    for i in 0..=x {
        res[p] = res[p - w - 1] * ((S * y) / (remaining - i)) / S;
        p += 1;
    }

    for i in 0..y - 1 {
        remaining -= 1;

        res[p] = res[p - w - 1] * ((S * x) / remaining) / S;
        p += 1;
        for j in 0..x - 1 {
            res[p] = (res[p - 1] + res[p - w - 1]) * ((S * (x - j - 1)) / (remaining - j - 1)) / S;
            p += 1;
        }

        res[p] = res[p - 2 * w - 1] * ((S * (y - i - 1)) / remaining) / S;
        p += 1;
        for j in 0..x {
            res[p] = (res[p - w - 1] + res[p - 2 * w - 1]) * ((S * (y - i - 1)) / (remaining - j - 1))
                / S;
            p += 1;
        }
    }

    // top row of horizontal edges
    remaining -= 1;
    res[p] = res[p - w - 1] * ((S * x) / remaining) / S;
    p += 1;
    for j in 0..x - 1 {
        res[p] = (res[p - 1] + res[p - w - 1]) * ((S * (x - j - 1)) / (remaining - j - 1)) / S;
        p += 1;
    }

    res
}
