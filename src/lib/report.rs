use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::SortOrder;
use crate::error::{Result, WordCountError};
use crate::merger::{MergedTable, RankedEntry, merge_by_count};

const COLUMN_WIDTH: usize = 20;
const COLUMN_GAP: &str = "\t\t\t\t";

fn write_row<W: Write>(out: &mut W, left: impl Display, right: impl Display) -> io::Result<()> {
    writeln!(out, "{:<width$}{}{}", left, COLUMN_GAP, right, width = COLUMN_WIDTH)
}

fn write_header<W: Write>(out: &mut W, left: &str, right: &str) -> io::Result<()> {
    write_row(out, left, right)?;
    writeln!(out)
}

/// `word` / `occurance` columns, one line per word in word order.
pub fn write_by_name<W: Write>(out: &mut W, merged: &MergedTable) -> io::Result<()> {
    write_header(out, "word", "occurance")?;
    for (word, count) in merged.iter() {
        write_row(out, word, count)?;
    }
    Ok(())
}

/// `occurance` / `word` columns, one line per entry in the given order.
pub fn write_by_count<W: Write>(out: &mut W, ranked: &[RankedEntry]) -> io::Result<()> {
    write_header(out, "occurance", "word")?;
    for entry in ranked {
        write_row(out, entry.count, &entry.word)?;
    }
    Ok(())
}

pub fn write_report_to<W: Write>(
    out: &mut W,
    order: SortOrder,
    merged: &MergedTable,
) -> io::Result<()> {
    match order {
        SortOrder::ByName => write_by_name(out, merged),
        SortOrder::ByCount => write_by_count(out, &merge_by_count(merged)),
    }
}

/// Create or truncate `path` and write the report into it.
pub fn write_report(path: &Path, order: SortOrder, merged: &MergedTable) -> Result<()> {
    let failed = |source: io::Error| WordCountError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(File::create(path).map_err(failed)?);
    write_report_to(&mut out, order, merged).map_err(failed)?;
    out.flush().map_err(failed)
}
