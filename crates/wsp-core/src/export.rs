//! Export — writes the record table to any [`Write`] sink.
//!
//! Two formats: `jsonl` (one record object per line) and `json` (a single
//! pretty-printed array). Column names match [`Record`]'s fields.

use std::io::Write;

use crate::types::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Jsonl,
    Json,
}

pub fn write_jsonl<W: Write>(records: &[Record], mut out: W) -> anyhow::Result<()> {
    for record in records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(records: &[Record], mut out: W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut out, records)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

pub fn write_records<W: Write>(
    records: &[Record],
    format: ExportFormat,
    out: W,
) -> anyhow::Result<()> {
    match format {
        ExportFormat::Jsonl => write_jsonl(records, out),
        ExportFormat::Json => write_json(records, out),
    }
}
