use crate::error::CliResult;
use serde::Serialize;
use std::io::{self, Write};

/// Write `value` as one line of JSON to `out`.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    write_json(&mut io::stdout().lock(), value)
}
