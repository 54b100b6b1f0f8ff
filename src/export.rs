//! Flat CSV snapshot of the card table: a `name,count` header followed by
//! one row per card.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{CardkeeperError, Result};

pub const HEADER: [&str; 2] = ["name", "count"];

/// Quotes a cell only when it could not be read back otherwise.
fn cell(text: &str) -> String {
    if text.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

pub fn write_csv<W: Write>(rows: &[(i64, i64)], writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "{},{}", cell(HEADER[0]), cell(HEADER[1]))?;
    for (number, count) in rows {
        writeln!(writer, "{},{}", number, count)?;
    }
    writer.flush()
}

pub fn export_to_path(rows: &[(i64, i64)], path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| CardkeeperError::Export(format!("{}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);
    write_csv(rows, &mut writer)
        .map_err(|e| CardkeeperError::Export(format!("{}: {}", path.display(), e)))?;
    info!(rows = rows.len(), path = %path.display(), "exported");
    Ok(())
}

fn unquote(field: &str) -> &str {
    let field = field.trim();
    field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .unwrap_or(field)
}

/// Reads back what [`write_csv`] produced.
pub fn read_csv<R: BufRead>(reader: R) -> Result<Vec<(i64, i64)>> {
    let mut lines = reader.lines();
    let header = lines
        .next()
        .transpose()?
        .ok_or_else(|| CardkeeperError::Export("empty file".into()))?;
    let columns: Vec<&str> = header.trim_end_matches('\r').split(',').map(unquote).collect();
    if columns != HEADER {
        return Err(CardkeeperError::Export(format!("unexpected header '{}'", header)));
    }
    let mut rows = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let parse = |field: Option<&str>| -> Result<i64> {
            field
                .map(unquote)
                .and_then(|f| f.parse().ok())
                .ok_or_else(|| CardkeeperError::Export(format!("bad row {}: '{}'", index + 2, line)))
        };
        let mut fields = line.split(',');
        let number = parse(fields.next())?;
        let count = parse(fields.next())?;
        if fields.next().is_some() {
            return Err(CardkeeperError::Export(format!("bad row {}: '{}'", index + 2, line)));
        }
        rows.push((number, count));
    }
    Ok(rows)
}
