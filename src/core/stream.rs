//! Item and line processing: tokenize, parse, convert, emit.
//!
//! Output joining follows one policy for the whole run:
//! * without `--out-sep` every single value, and every array line, ends with
//!   a newline (array values on one line are printed back to back);
//! * with `--out-sep` all values of the run are joined by the separator and
//!   the run ends with exactly one newline.

use std::io::{self, BufRead, Write};

use crate::core::{
    config::RunConfig,
    constants::{DECIMAL_PRECISION, DEFAULT_INPUT_SEPARATORS},
    convert::{convert_scales, snap_to_zero},
    error::GradusError,
    number::parse_number,
};

/// Writes formatted values and applies the separator/newline policy.
pub struct Emitter<W: Write> {
    out: W,
    sep: Option<String>,
    written: usize,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W, sep: Option<String>) -> Self {
        Self {
            out,
            sep,
            written: 0,
        }
    }

    /// Number of values emitted so far.
    #[inline]
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn value(&mut self, v: f64) -> io::Result<()> {
        if self.written > 0 {
            if let Some(sep) = &self.sep {
                self.out.write_all(sep.as_bytes())?;
            }
        }
        write!(self.out, "{:.*}", DECIMAL_PRECISION, snap_to_zero(v))?;
        self.written += 1;
        Ok(())
    }

    /// Close one input item (a single value or an array line).
    pub fn end_item(&mut self) -> io::Result<()> {
        if self.sep.is_none() {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Terminate the run and hand the writer back.
    pub fn finish(mut self) -> io::Result<W> {
        if self.sep.is_some() && self.written > 0 {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Split on any character of `in_sep` (whitespace by default), skipping
/// the empty tokens adjacent delimiters produce.
pub fn split_tokens<'a>(line: &'a str, in_sep: Option<&'a str>) -> impl Iterator<Item = &'a str> {
    let seps = in_sep.unwrap_or(DEFAULT_INPUT_SEPARATORS);
    line.split(move |c: char| seps.contains(c))
        .filter(|t| !t.is_empty())
}

/// Parse one token and convert it with the configured scales.
pub fn convert_token(token: &str, cfg: &RunConfig) -> Result<f64, GradusError> {
    let value = parse_number(token)?;
    Ok(convert_scales(value, cfg.source, cfg.target)?)
}

/// Convert every value on `line`. Nothing is written unless the whole line
/// converts.
pub fn process_array<W: Write>(
    line: &str,
    cfg: &RunConfig,
    out: &mut Emitter<W>,
) -> Result<usize, GradusError> {
    let values = split_tokens(line, cfg.in_sep.as_deref())
        .map(|t| convert_token(t, cfg))
        .collect::<Result<Vec<_>, _>>()?;
    for &v in &values {
        out.value(v)?;
    }
    out.end_item()?;
    Ok(values.len())
}

/// One positional argument or stdin line, in array or single-value mode.
pub fn process_item<W: Write>(
    item: &str,
    cfg: &RunConfig,
    out: &mut Emitter<W>,
) -> Result<usize, GradusError> {
    if cfg.array {
        return process_array(item, cfg, out);
    }
    let v = convert_token(item, cfg)?;
    out.value(v)?;
    out.end_item()?;
    Ok(1)
}

/// Stream `src` line by line until EOF, skipping empty lines.
pub fn process_lines<R: BufRead, W: Write>(
    mut src: R,
    cfg: &RunConfig,
    out: &mut Emitter<W>,
) -> Result<usize, GradusError> {
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut count = 0usize;

    loop {
        buf.clear();
        if src.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }
        if buf.is_empty() {
            continue;
        }
        let line = String::from_utf8_lossy(&buf);
        count += process_item(&line, cfg, out)?;
    }
    Ok(count)
}
