//! Operations consumed by the binding layer.
//!
//! Edge vectors returned here drop the placeholder slot and are fractions in
//! `[0, 1]`; path counts are decimal strings.

#[cfg(test)]
mod tests;

use crate::{
    error::{ErrorClass, ErrorOrigin, InternalError},
    grid::{Coordinate, GridBounds, PathCounter},
    obs::{QueryKind, query_span},
    store::{Fraction, StorePaths, StoreReader, StoreRecord},
};
use serde::Serialize;

///
/// ChanceResponse
///
/// `chance` is `None` when the ratio cannot be rendered as `f64` without
/// losing precision; the exact counts are always present.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChanceResponse {
    pub chance: Option<f64>,
    pub paths_through: String,
    pub paths_total: String,
}

///
/// CompleteInfo
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompleteInfo {
    pub edges: Vec<f64>,
    pub paths: String,
}

///
/// GridService
///

#[derive(Debug)]
pub struct GridService {
    reader: StoreReader,
    counter: PathCounter,
}

impl GridService {
    pub fn new(reader: StoreReader, counter: PathCounter) -> Result<Self, InternalError> {
        if reader.bounds() != counter.bounds() {
            return Err(InternalError::interface_invariant(format!(
                "store bound {} differs from counter bound {}",
                reader.bounds().max_coordinate(),
                counter.bounds().max_coordinate()
            )));
        }

        Ok(Self { reader, counter })
    }

    /// Open the store at `paths` for a grid of `bounds`.
    pub fn open(paths: StorePaths, bounds: GridBounds) -> Result<Self, InternalError> {
        let reader = StoreReader::open(paths, bounds)?;

        Self::new(reader, PathCounter::new(bounds))
    }

    #[must_use]
    pub const fn reader(&self) -> &StoreReader {
        &self.reader
    }

    #[must_use]
    pub const fn counter(&self) -> &PathCounter {
        &self.counter
    }

    pub fn lookup_edges(&self, x: u32, y: u32) -> Result<Vec<f64>, InternalError> {
        let record = self.lookup(QueryKind::Edges, Coordinate::new(x, y))?;

        Ok(drop_placeholder(record.edges))
    }

    pub fn lookup_paths(&self, x: u32, y: u32) -> Result<String, InternalError> {
        let record = self.lookup(QueryKind::Paths, Coordinate::new(x, y))?;

        Ok(record.path_count.to_string())
    }

    pub fn lookup_complete(&self, x: u32, y: u32) -> Result<CompleteInfo, InternalError> {
        let record = self.lookup(QueryKind::Complete, Coordinate::new(x, y))?;

        Ok(CompleteInfo {
            paths: record.path_count.to_string(),
            edges: drop_placeholder(record.edges),
        })
    }

    /// Probability that a path to `(x2, y2)` passes through `(x1, y1)`.
    /// Computed directly; the store is not consulted.
    pub fn compute_chance(
        &self,
        x1: u32,
        y1: u32,
        x2: u32,
        y2: u32,
    ) -> Result<ChanceResponse, InternalError> {
        let (point, end) = (Coordinate::new(x1, y1), Coordinate::new(x2, y2));
        let _span = query_span(QueryKind::Chance, point).entered();

        let through = self.counter.path_count_through(point, end)?;
        let total = self.counter.path_count_to(end)?;
        let chance = match self.counter.chance_through_point(point, end) {
            Ok(chance) => Some(chance),
            Err(err) => {
                let err = InternalError::from(err);
                if !err.is_precision_loss() {
                    return Err(err);
                }
                None
            }
        };

        Ok(ChanceResponse {
            chance,
            paths_through: through.to_string(),
            paths_total: total.to_string(),
        })
    }

    fn lookup(
        &self,
        kind: QueryKind,
        coordinate: Coordinate,
    ) -> Result<StoreRecord<f64>, InternalError> {
        let _span = query_span(kind, coordinate).entered();
        let record = self.reader.lookup::<Fraction>(coordinate)?;
        if record.info.is_placeholder() {
            return Err(InternalError::new(
                ErrorClass::NotFound,
                ErrorOrigin::Interface,
                format!("coordinate {coordinate} has no stored record"),
            ));
        }

        Ok(record)
    }
}

fn drop_placeholder(mut edges: Vec<f64>) -> Vec<f64> {
    if !edges.is_empty() {
        edges.remove(0);
    }

    edges
}
