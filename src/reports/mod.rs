mod export;
mod tables;

use shingles::config::OutputFormat;
use shingles::{ShingleRecord, ShingleResult};
use std::io::Write;

/// Writes records in the requested format, in the order given.
pub fn emit<W: Write>(
    records: &[ShingleRecord],
    format: OutputFormat,
    out: &mut W,
) -> ShingleResult<()> {
    match format {
        OutputFormat::Table => tables::records(records, out),
        OutputFormat::Plain => export::plain(records, out),
        OutputFormat::Csv => export::csv(records, out),
        OutputFormat::Json => export::json(records, out),
    }
}

pub fn summary<W: Write>(
    distinct: usize,
    occurrences: usize,
    ngram_length: usize,
    format: OutputFormat,
    out: &mut W,
) -> ShingleResult<()> {
    match format {
        OutputFormat::Table => tables::summary(distinct, occurrences, ngram_length, out),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "ngram_length": ngram_length,
                "distinct": distinct,
                "occurrences": occurrences,
            });
            serde_json::to_writer(&mut *out, &value)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Plain | OutputFormat::Csv => {
            writeln!(out, "{}", distinct)?;
            Ok(())
        }
    }
}
