// ============================================================
// Layer 4 — Line Writer
// ============================================================
// Writes classifier lines to a plain text file:
//   - one line per record, terminated by '\n'
//   - no header, no index column
//   - an existing file is truncated and overwritten
//
// The parent directory is not created; writing into a
// directory that does not exist fails like any other
// unwritable path.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Write `lines` to `path`, returning how many were written.
pub fn write_lines<I, S>(path: &Path, lines: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = File::create(path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;
    let mut out = BufWriter::new(file);

    let mut count = 0usize;
    for line in lines {
        writeln!(out, "{}", line.as_ref())
            .with_context(|| format!("Cannot write to '{}'", path.display()))?;
        count += 1;
    }

    out.flush()
        .with_context(|| format!("Cannot flush '{}'", path.display()))?;

    tracing::debug!("Wrote {} lines to '{}'", count, path.display());
    Ok(count)
}
