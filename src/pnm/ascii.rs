//! Line and token scanning for the header and the plain (ASCII) payloads.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::PnmError;

/// Forward-only line reader over a byte slice.
pub(crate) struct LineCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Next line that is neither blank nor a `#` comment, with surrounding
    /// whitespace (including `\r`) trimmed. Consumes the terminating `\n`.
    pub(crate) fn next_kept(&mut self) -> Option<&'a [u8]> {
        while self.pos < self.data.len() {
            let rest = &self.data[self.pos..];
            let (line, advance) = match rest.iter().position(|&b| b == b'\n') {
                Some(end) => (&rest[..end], end + 1),
                None => (rest, rest.len()),
            };
            self.pos += advance;

            let line = line.trim_ascii();
            if line.is_empty() || line[0] == b'#' {
                continue;
            }
            return Some(line);
        }
        None
    }

    /// Offset just past the last consumed line.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }
}

/// Whitespace-separated tokens of one line.
pub(crate) fn tokens(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(u8::is_ascii_whitespace)
        .filter(|tok| !tok.is_empty())
}

/// Parse an unsigned decimal token. Saturates instead of overflowing so that
/// huge values still compare as out of range.
pub(crate) fn parse_decimal(token: &[u8]) -> Option<u64> {
    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(token.iter().fold(0u64, |acc, &d| {
        acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
    }))
}

/// Lossy, length-capped rendering of input bytes for error messages.
pub(crate) fn excerpt(bytes: &[u8]) -> String {
    const MAX: usize = 16;
    let shown = String::from_utf8_lossy(&bytes[..bytes.len().min(MAX)]).into_owned();
    if bytes.len() > MAX {
        format!("{shown}...")
    } else {
        shown
    }
}

/// Parse one `[0, max]` sample token found at `(row, col)`.
pub(crate) fn parse_sample(token: &[u8], max: u8, row: usize, col: usize) -> Result<u8, PnmError> {
    match parse_decimal(token) {
        Some(v) if v <= u64::from(max) => Ok(v as u8),
        Some(v) => Err(PnmError::InvalidSampleValue(format!(
            "{v} at ({row}, {col}) exceeds max value {max}"
        ))),
        None => Err(PnmError::InvalidSampleValue(format!(
            "`{}` at ({row}, {col}) is not a decimal integer",
            excerpt(token)
        ))),
    }
}

/// Decode a payload laid out as one kept line per row, each holding exactly
/// `width` tokens. `parse` maps a token at `(row, col)` to a sample.
pub(crate) fn decode_rows<T>(
    payload: &[u8],
    width: usize,
    height: usize,
    mut parse: impl FnMut(&[u8], usize, usize) -> Result<T, PnmError>,
) -> Result<Vec<T>, PnmError> {
    // every sample needs at least one payload byte
    let mut out = Vec::with_capacity((width * height).min(payload.len()));
    let mut lines = LineCursor::new(payload);

    for row in 0..height {
        let line = lines.next_kept().ok_or(PnmError::TruncatedPayload {
            needed: width * height,
            actual: row * width,
        })?;

        let mut found = 0;
        for (col, token) in tokens(line).enumerate() {
            if col < width {
                out.push(parse(token, row, col)?);
            }
            found = col + 1;
        }
        if found != width {
            return Err(PnmError::InvalidSampleValue(format!(
                "row {row} has {found} samples, expected {width}"
            )));
        }
    }
    Ok(out)
}

/// Append the decimal digits of `v`.
pub(crate) fn push_decimal(out: &mut Vec<u8>, v: u8) {
    if v >= 100 {
        out.push(b'0' + v / 100);
    }
    if v >= 10 {
        out.push(b'0' + (v / 10) % 10);
    }
    out.push(b'0' + v % 10);
}
