use crate::{error::CliResult, output::print_json};
use latticedb::config::LatticeConfig;
use tracing::info;

pub fn run(config: &LatticeConfig) -> CliResult<()> {
    let summary = latticedb::build(config)?;
    info!(
        records = summary.records,
        data_bytes = summary.data_bytes,
        "store built"
    );

    print_json(&summary)
}
