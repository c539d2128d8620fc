use std::io::{self, Write};

use colored::Colorize;
use explorer_api::prelude::*;

/// Human-readable UTC date, in the style of an HTTP date header.
pub fn format_date(entry: &LedgerEntry) -> String {
    match entry.datetime() {
        Some(dt) => dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        None => format!("invalid timestamp {}", entry.timestamp),
    }
}

/// Writes one entry card.
pub fn render_entry<W: Write>(out: &mut W, entry: &LedgerEntry, sentinel: &Sentinel) -> io::Result<()> {
    let title = format!("#{}", entry.index).bold();
    if entry.is_genesis(sentinel) {
        writeln!(out, "{} - {} {}", title, entry.hash.underline(), "(genesis)".green())?;
    } else {
        writeln!(out, "{} - {}", title, entry.hash.underline())?;
    }
    writeln!(out, "{}", format_date(entry))?;
    writeln!(out)?;

    writeln!(
        out,
        "  {:<18} {:<18} {:<12} {}",
        "Accumulated work".bold(),
        "Difficulty (bits)".bold(),
        "Nonce".bold(),
        "Timestamp".bold()
    )?;
    writeln!(
        out,
        "  {:<18} {:<18} {:<12} {}",
        entry.accumulated_difficulty, entry.difficulty_bits, entry.nonce, entry.timestamp
    )?;
    writeln!(out)?;

    writeln!(out, "{}", "Data".bold())?;
    writeln!(out, "  {}", entry.payload)?;
    writeln!(out)?;

    writeln!(out, "Previous block hash: {}", entry.previous_hash.underline())?;
    Ok(())
}

/// Writes every entry in the order given, separated by blank lines.
pub fn render_entries<W: Write>(out: &mut W, entries: &[LedgerEntry], sentinel: &Sentinel) -> io::Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        render_entry(out, entry, sentinel)?;
    }
    Ok(())
}

/// Writes the entries as a pretty-printed JSON array using the node's field names.
pub fn render_json<W: Write>(out: &mut W, entries: &[LedgerEntry]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries)?;
    writeln!(out).map_err(serde_json::Error::io)
}
