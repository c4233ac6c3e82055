//! # zenpnm
//!
//! Codec and transforms for the classic Netpbm formats: PBM (bitmap), PGM
//! (graymap) and PPM (pixmap), each in plain (ASCII) and raw (binary) form.
//!
//! ## Supported Formats
//!
//! - **P1** / **P4**: PBM, `0`/`1` tokens or packed bits (MSB first, rows padded to a byte)
//! - **P2** / **P5**: PGM, decimal tokens or one byte per sample
//! - **P3** / **P6**: PPM, decimal R G B triplets or three bytes per pixel
//!
//! Max-values from 1 to 255 are supported.
//!
//! ## Non-Goals
//!
//! - PAM (P7), PFM, and 16-bit samples
//! - Streaming decode; the whole image is held in memory
//! - Color management
//!
//! ## Coordinates
//!
//! Every accessor and transform uses `(row, col)` with `row < height` and
//! `col < width`. [`ImageGrid::size`] returns `(height, width)`.
//!
//! ## Usage
//!
//! ```
//! use zenpnm::{Encoding, MagicNumber};
//!
//! let mut gray = zenpnm::decode_pgm(b"P2\n3 1\n255\n0 128 255\n")?;
//! gray.invert();
//! assert_eq!(gray.samples(), [255, 127, 0]);
//!
//! let raw = gray.with_encoding(Encoding::Binary).encode();
//! assert_eq!(raw, b"P5\n3 1\n255\n\xff\x7f\x00");
//!
//! let color = zenpnm::decode_ppm(b"P3\n1 1\n255\n10 20 30\n")?;
//! let gray = color.to_graymap();
//! assert_eq!(gray.magic_number(), MagicNumber::P2);
//! assert_eq!(gray.at(0, 0), 20);
//! # Ok::<(), zenpnm::PnmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod grid;
mod info;
mod limits;
mod pixel;
mod transform;

pub mod pnm;

mod decode;
mod encode;

#[cfg(feature = "std")]
mod io;

use alloc::vec::Vec;

// Re-exports
pub use decode::{DecodeRequest, DecodedImage};
pub use encode::EncodeRequest;
pub use error::PnmError;
pub use grid::{Bitmap, Graymap, ImageGrid, Pixmap};
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{Pixel, Sample};
pub use pnm::{Encoding, MagicNumber, PnmFormat, PnmHeader, parse_header};

#[cfg(feature = "std")]
pub use io::{read_file, write_file};

/// Decode any P1..P6 image.
pub fn decode(data: &[u8]) -> Result<DecodedImage, PnmError> {
    DecodeRequest::new(data).decode()
}

/// Decode a P1 or P4 image.
pub fn decode_pbm(data: &[u8]) -> Result<Bitmap, PnmError> {
    DecodeRequest::new(data).decode_pbm()
}

/// Decode a P2 or P5 image.
pub fn decode_pgm(data: &[u8]) -> Result<Graymap, PnmError> {
    DecodeRequest::new(data).decode_pgm()
}

/// Decode a P3 or P6 image.
pub fn decode_ppm(data: &[u8]) -> Result<Pixmap, PnmError> {
    DecodeRequest::new(data).decode_ppm()
}

/// Encode with the image's own magic number.
pub fn encode(image: &DecodedImage) -> Vec<u8> {
    image.encode()
}

/// Encode as P1 or P4, following the grid's magic number.
pub fn encode_pbm(grid: &Bitmap) -> Vec<u8> {
    grid.encode()
}

/// Encode as P2 or P5, following the grid's magic number.
pub fn encode_pgm(grid: &Graymap) -> Vec<u8> {
    grid.encode()
}

/// Encode as P3 or P6, following the grid's magic number.
pub fn encode_ppm(grid: &Pixmap) -> Vec<u8> {
    grid.encode()
}
