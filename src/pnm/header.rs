//! Header parsing shared by all six sub-formats.

use alloc::format;

use super::ascii::{LineCursor, excerpt, parse_decimal, tokens};
use super::MagicNumber;
use crate::error::PnmError;

/// Parsed PNM header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PnmHeader {
    pub magic: MagicNumber,
    pub width: u32,
    pub height: u32,
    /// Declared max-value. `None` for PBM.
    pub max_value: Option<u8>,
    /// Offset of the first payload byte in the input.
    pub data_offset: usize,
}

impl PnmHeader {
    /// Max-value bounding each sample; PBM's implied max-value is 1.
    pub fn sample_max(&self) -> u8 {
        self.max_value
            .unwrap_or_else(|| self.magic.format().default_max_value())
    }
}

/// Parse the header lines: magic number, `width height`, and (PGM/PPM) the
/// max-value. Blank lines and `#` comment lines between them are skipped.
///
/// The payload starts right after the newline ending the last header line;
/// nothing after that line is skipped, so a raw payload may begin with any
/// byte including `#`.
pub fn parse_header(data: &[u8]) -> Result<PnmHeader, PnmError> {
    let mut lines = LineCursor::new(data);

    let magic_line = lines
        .next_kept()
        .ok_or_else(|| PnmError::InvalidMagicNumber("no magic number (empty input)".into()))?;
    let magic = MagicNumber::from_token(magic_line).ok_or_else(|| {
        PnmError::InvalidMagicNumber(format!(
            "expected one of P1..P6, found `{}`",
            excerpt(magic_line)
        ))
    })?;

    let dims_line = lines
        .next_kept()
        .ok_or_else(|| PnmError::MalformedDimensions("missing width and height line".into()))?;
    let mut dims = tokens(dims_line);
    let (Some(w), Some(h), None) = (dims.next(), dims.next(), dims.next()) else {
        return Err(PnmError::MalformedDimensions(format!(
            "expected `width height`, found `{}`",
            excerpt(dims_line)
        )));
    };
    let width = parse_dimension(w, "width")?;
    let height = parse_dimension(h, "height")?;

    let max_value = if magic.format().has_max_value() {
        let max_line = lines
            .next_kept()
            .ok_or_else(|| PnmError::MalformedMaxValue("missing max value line".into()))?;
        let mut toks = tokens(max_line);
        let value = match (toks.next(), toks.next()) {
            (Some(tok), None) => parse_decimal(tok),
            _ => None,
        }
        .ok_or_else(|| {
            PnmError::MalformedMaxValue(format!(
                "expected a decimal integer, found `{}`",
                excerpt(max_line)
            ))
        })?;
        if !(1..=255).contains(&value) {
            return Err(PnmError::InvalidDimensions(format!(
                "max value {value} outside 1..=255"
            )));
        }
        Some(value as u8)
    } else {
        None
    };

    let header = PnmHeader {
        magic,
        width,
        height,
        max_value,
        data_offset: lines.position(),
    };
    log::debug!("parsed header {header:?}");
    Ok(header)
}

fn parse_dimension(token: &[u8], name: &str) -> Result<u32, PnmError> {
    let (negative, digits) = match token.strip_prefix(b"-") {
        Some(digits) => (true, digits),
        None => (false, token),
    };
    let value = parse_decimal(digits).ok_or_else(|| {
        PnmError::MalformedDimensions(format!(
            "{name} `{}` is not a decimal integer",
            excerpt(token)
        ))
    })?;
    if negative || value == 0 {
        return Err(PnmError::InvalidDimensions(format!(
            "{name} must be positive, found {}",
            excerpt(token)
        )));
    }
    u32::try_from(value).map_err(|_| {
        PnmError::InvalidDimensions(format!("{name} {value} exceeds {}", u32::MAX))
    })
}
