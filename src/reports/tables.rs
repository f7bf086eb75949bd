use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use shingles::{ShingleRecord, ShingleResult};
use std::io::Write;

pub fn records<W: Write>(records: &[ShingleRecord], out: &mut W) -> ShingleResult<()> {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Hash"),
        Cell::new("N-gram").add_attribute(Attribute::Bold),
        Cell::new("Count").fg(Color::Cyan),
        Cell::new("Freq"),
    ]);

    for i in [0, 1, 3, 4] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, r) in records.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(r.hash),
            Cell::new(&r.ngram),
            Cell::new(r.count).fg(Color::Cyan),
            Cell::new(format!("{:.4}", r.frequency)),
        ]);
    }
    writeln!(out, "{}", table)?;
    Ok(())
}

pub fn summary<W: Write>(
    distinct: usize,
    occurrences: usize,
    ngram_length: usize,
    out: &mut W,
) -> ShingleResult<()> {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("N").add_attribute(Attribute::Bold),
        Cell::new("Distinct").fg(Color::Cyan),
        Cell::new("Occurrences"),
    ]);
    table.add_row(vec![
        Cell::new(ngram_length),
        Cell::new(distinct).fg(Color::Cyan),
        Cell::new(occurrences),
    ]);

    for i in 0..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    writeln!(out, "{}", table)?;
    Ok(())
}
