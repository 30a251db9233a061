use crate::{error::CliResult, output::print_json};
use latticedb::{config::LatticeConfig, core::obs::store_report, open_service};
use serde::Serialize;

///
/// Query
///

#[derive(Clone, Copy, Debug)]
pub enum Query {
    Chance { x1: u32, y1: u32, x2: u32, y2: u32 },
    Edges { x: u32, y: u32 },
    Info { x: u32, y: u32 },
    Paths { x: u32, y: u32 },
    Report,
}

#[derive(Serialize)]
struct PathsOutput {
    paths: String,
}

pub fn run(config: &LatticeConfig, query: Query) -> CliResult<()> {
    let service = open_service(config)?;

    match query {
        Query::Chance { x1, y1, x2, y2 } => print_json(&service.compute_chance(x1, y1, x2, y2)?),
        Query::Edges { x, y } => print_json(&service.lookup_edges(x, y)?),
        Query::Info { x, y } => print_json(&service.lookup_complete(x, y)?),
        Query::Paths { x, y } => print_json(&PathsOutput {
            paths: service.lookup_paths(x, y)?,
        }),
        Query::Report => print_json(&store_report(service.reader())?),
    }
}
