use std::io;
use std::io::Write;

use log::{debug, info};

use crate::constants::CB_OPCODE_COUNT;
use crate::error::GenError;
use crate::opcodes::{CbRow, HexStyle};

/// Output settings, independent of how they were parsed.
#[derive(Debug, Clone, Default)]
pub struct GenOptions {
    pub hex_style: HexStyle,
    /// Wraps the rows in a `const <name>: [Instruction; 256]` item when set.
    pub table_name: Option<String>,
}

/// Every CB row in opcode order.
pub fn rows() -> impl Iterator<Item = Result<CbRow, GenError>> {
    (0..CB_OPCODE_COUNT).map(CbRow::new)
}

/// Writes the table to `out`, one line per opcode, and returns the number of
/// rows written. Stops at the first failing opcode.
pub fn write_table<W: Write>(out: &mut W, options: &GenOptions) -> Result<usize, GenError> {
    if let Some(name) = &options.table_name {
        writeln!(out, "const {}: [Instruction; {}] = [", name, CB_OPCODE_COUNT)?;
    }

    let mut written = 0;
    for row in rows() {
        let row = row?;
        debug!("{:#04x} -> {}", row.opcode, row.label());
        writeln!(out, "{}", row.render(options.hex_style))?;
        written += 1;
    }

    if options.table_name.is_some() {
        writeln!(out, "];")?;
    }
    out.flush()?;

    info!("Generated {} CB instruction rows", written);
    Ok(written)
}

/// Renders the whole table into a string.
pub fn render_table(options: &GenOptions) -> Result<String, GenError> {
    let mut buffer = Vec::new();
    write_table(&mut buffer, options)?;
    String::from_utf8(buffer)
        .map_err(|err| GenError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}
