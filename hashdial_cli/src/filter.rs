//! Line filters — stream input line by line, decide per line.
//!
//! The key is the line's bytes without its `\n` / `\r\n` terminator, so
//! the same record decides the same way regardless of line endings. Lines
//! are written back unchanged, terminator included. Input need not be
//! UTF-8.

use std::io::{self, BufRead, Write};

use hashdial::bounds::{validate_len, validate_probability};
use hashdial::Dial;

use crate::error::{CliError, Result};

/// Line counts for one filter run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub lines_read: u64,
    pub lines_written: u64,
    /// The reader of the output went away (e.g. `| head`) before input
    /// ran out.
    pub output_closed: bool,
}

/// Whether `err` means the downstream reader closed the pipe.
pub fn is_broken_pipe(err: &CliError) -> bool {
    matches!(err, CliError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
}

/// Strip one trailing `\n`, then one trailing `\r`.
pub fn line_key(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Drive `emit` over every line of `input`. `emit` gets the key, the raw
/// line and the output, and reports whether it wrote anything.
fn for_each_line<R, W, F>(mut input: R, mut output: W, mut emit: F) -> Result<FilterStats>
where
    R: BufRead,
    W: Write,
    F: FnMut(&[u8], &[u8], &mut W) -> Result<bool>,
{
    let mut stats = FilterStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        stats.lines_read += 1;
        match emit(line_key(&buf), &buf, &mut output) {
            Ok(true) => stats.lines_written += 1,
            Ok(false) => {}
            Err(e) if is_broken_pipe(&e) => {
                stats.output_closed = true;
                return Ok(stats);
            }
            Err(e) => return Err(e),
        }
    }

    match output.flush() {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => stats.output_closed = true,
        other => other?,
    }
    Ok(stats)
}

/// Keep the lines `dial` accepts with `probability`.
pub fn sample<R: BufRead, W: Write>(
    dial: Dial<'_>,
    probability: f64,
    input: R,
    output: W,
) -> Result<FilterStats> {
    validate_probability(probability)?;

    for_each_line(input, output, |key, line, out| {
        if dial.accept(key, probability)? {
            out.write_all(line)?;
            return Ok(true);
        }
        Ok(false)
    })
}

/// Keep the lines that fall into partition `index` of `count`.
///
/// Running this once per index over the same input splits it into `count`
/// disjoint parts that together cover every line.
pub fn partition<R: BufRead, W: Write>(
    dial: Dial<'_>,
    count: usize,
    index: usize,
    input: R,
    output: W,
) -> Result<FilterStats> {
    if count == 0 {
        return Err(CliError::Usage("partition count must be > 0".into()));
    }
    if index >= count {
        return Err(CliError::Usage(format!(
            "partition index ({}) must be < count ({})",
            index, count
        )));
    }

    for_each_line(input, output, |key, line, out| {
        if dial.select_index(key, count)? == index {
            out.write_all(line)?;
            return Ok(true);
        }
        Ok(false)
    })
}

/// Prefix every line with one of `labels` and a tab.
pub fn bucket<R: BufRead, W: Write>(
    dial: Dial<'_>,
    labels: &[String],
    input: R,
    output: W,
) -> Result<FilterStats> {
    validate_len(labels.len())?;

    for_each_line(input, output, |key, line, out| {
        let label = dial.choose(key, labels)?;
        out.write_all(label.as_bytes())?;
        out.write_all(b"\t")?;
        out.write_all(line)?;
        Ok(true)
    })
}
