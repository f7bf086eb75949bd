use shingles::{ShingleRecord, ShingleResult};
use std::io::Write;

/// One console line per record: `hash:<h>, ngram:'<text>', count:<c>, frequency:<f>`.
pub fn plain<W: Write>(records: &[ShingleRecord], out: &mut W) -> ShingleResult<()> {
    for r in records {
        writeln!(out, "{}", r)?;
    }
    Ok(())
}

pub fn csv<W: Write>(records: &[ShingleRecord], out: &mut W) -> ShingleResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn json<W: Write>(records: &[ShingleRecord], out: &mut W) -> ShingleResult<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}
