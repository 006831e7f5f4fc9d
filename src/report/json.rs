use std::io::Write;

use anyhow::Result;

use crate::models::ScanResult;

/// Write `result` as pretty-printed JSON followed by a newline.
pub fn render<W: Write>(result: &ScanResult, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}
