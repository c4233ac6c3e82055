//! PNM family: P1/P4 (PBM), P2/P5 (PGM), P3/P6 (PPM).
//!
//! Each depth has a plain (ASCII) and a raw (binary) sub-format. The header
//! is shared; see [`parse_header`].

mod ascii;
mod header;
mod pbm;
mod pgm;
mod ppm;

pub use header::{PnmHeader, parse_header};

use core::fmt;
use core::str::FromStr;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::PnmError;
use crate::grid::ImageGrid;
use crate::limits::Limits;
use crate::pixel::Sample;

/// Color depth of a PNM image.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PnmFormat {
    /// PBM: one bit per pixel, `true` is black.
    Pbm,
    /// PGM: one byte per pixel.
    Pgm,
    /// PPM: three bytes (R, G, B) per pixel.
    Ppm,
}

impl PnmFormat {
    /// Samples per pixel.
    pub const fn channels(self) -> usize {
        match self {
            Self::Pbm | Self::Pgm => 1,
            Self::Ppm => 3,
        }
    }

    /// Whether the header carries an explicit max-value line.
    pub const fn has_max_value(self) -> bool {
        !matches!(self, Self::Pbm)
    }

    /// Max-value used when none is given: 1 for PBM, 255 otherwise.
    pub const fn default_max_value(self) -> u8 {
        match self {
            Self::Pbm => 1,
            Self::Pgm | Self::Ppm => 255,
        }
    }
}

impl fmt::Display for PnmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pbm => "PBM",
            Self::Pgm => "PGM",
            Self::Ppm => "PPM",
        })
    }
}

/// Payload encoding: human-readable decimal tokens or raw bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// "Plain" sub-format (P1, P2, P3).
    Ascii,
    /// "Raw" sub-format (P4, P5, P6).
    Binary,
}

/// The two-character tag on the first header line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MagicNumber {
    /// ASCII bitmap.
    P1,
    /// ASCII graymap.
    P2,
    /// ASCII pixmap.
    P3,
    /// Packed binary bitmap.
    P4,
    /// Raw binary graymap.
    P5,
    /// Raw binary pixmap.
    P6,
}

impl MagicNumber {
    pub const fn new(format: PnmFormat, encoding: Encoding) -> Self {
        match (format, encoding) {
            (PnmFormat::Pbm, Encoding::Ascii) => Self::P1,
            (PnmFormat::Pgm, Encoding::Ascii) => Self::P2,
            (PnmFormat::Ppm, Encoding::Ascii) => Self::P3,
            (PnmFormat::Pbm, Encoding::Binary) => Self::P4,
            (PnmFormat::Pgm, Encoding::Binary) => Self::P5,
            (PnmFormat::Ppm, Encoding::Binary) => Self::P6,
        }
    }

    pub const fn format(self) -> PnmFormat {
        match self {
            Self::P1 | Self::P4 => PnmFormat::Pbm,
            Self::P2 | Self::P5 => PnmFormat::Pgm,
            Self::P3 | Self::P6 => PnmFormat::Ppm,
        }
    }

    pub const fn encoding(self) -> Encoding {
        match self {
            Self::P1 | Self::P2 | Self::P3 => Encoding::Ascii,
            Self::P4 | Self::P5 | Self::P6 => Encoding::Binary,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
            Self::P5 => "P5",
            Self::P6 => "P6",
        }
    }

    /// Recognize a magic token. The token must match exactly.
    pub fn from_token(token: &[u8]) -> Option<Self> {
        match token {
            b"P1" => Some(Self::P1),
            b"P2" => Some(Self::P2),
            b"P3" => Some(Self::P3),
            b"P4" => Some(Self::P4),
            b"P5" => Some(Self::P5),
            b"P6" => Some(Self::P6),
            _ => None,
        }
    }
}

impl fmt::Display for MagicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MagicNumber {
    type Err = PnmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s.as_bytes()).ok_or_else(|| {
            PnmError::InvalidMagicNumber(format!("expected one of P1..P6, found `{s}`"))
        })
    }
}

/// Decode a parsed image into a grid of `T` (called from DecodeRequest).
pub(crate) fn decode_grid<T: Sample>(
    data: &[u8],
    header: &PnmHeader,
    limits: Option<&Limits>,
) -> Result<ImageGrid<T>, PnmError> {
    if header.magic.format() != T::FORMAT {
        return Err(PnmError::InvalidMagicNumber(format!(
            "expected {} data, found {} ({})",
            T::FORMAT,
            header.magic,
            header.magic.format()
        )));
    }

    // the payload codecs index up to width * height * channels
    let too_large = || PnmError::DimensionsTooLarge {
        width: header.width,
        height: header.height,
    };
    let pixels = (header.width as usize)
        .checked_mul(header.height as usize)
        .ok_or_else(too_large)?;
    pixels
        .checked_mul(T::FORMAT.channels())
        .ok_or_else(too_large)?;
    let buffer_bytes = pixels
        .checked_mul(core::mem::size_of::<T>())
        .and_then(|bytes| u64::try_from(bytes).ok())
        .ok_or_else(too_large)?;

    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
        limits.check_memory(buffer_bytes)?;
    }

    let payload = data.get(header.data_offset..).unwrap_or_default();
    log::debug!(
        "decoding {} {}x{} max {} ({} payload bytes)",
        header.magic,
        header.width,
        header.height,
        header.sample_max(),
        payload.len()
    );

    let samples = T::decode_payload(payload, header)?;
    Ok(ImageGrid::from_header(header, samples))
}

/// Encode a grid with the given sub-format (called from EncodeRequest).
pub(crate) fn encode_grid<T: Sample>(grid: &ImageGrid<T>, encoding: Encoding) -> Vec<u8> {
    let magic = MagicNumber::new(T::FORMAT, encoding);
    let (width, height) = (grid.width(), grid.height());
    let header: String = if T::FORMAT.has_max_value() {
        format!("{magic}\n{width} {height}\n{}\n", grid.max_value())
    } else {
        format!("{magic}\n{width} {height}\n")
    };

    let samples = grid.samples();
    let payload_estimate = match encoding {
        Encoding::Binary => samples.len() * T::FORMAT.channels(),
        // widest token plus separator
        Encoding::Ascii => samples.len() * T::FORMAT.channels() * 4,
    };
    let mut out = Vec::with_capacity(header.len() + payload_estimate);
    out.extend_from_slice(header.as_bytes());

    log::debug!("encoding {magic} {width}x{height}");
    T::encode_payload(samples, width as usize, encoding, &mut out);
    out
}
