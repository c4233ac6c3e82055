use alloc::vec::Vec;

use crate::decode::DecodedImage;
use crate::grid::ImageGrid;
use crate::pixel::Sample;
use crate::pnm::{self, Encoding};

/// Encode request.
///
/// By default each grid is written in the sub-format its magic number
/// names. [`with_encoding`](Self::with_encoding) overrides that without
/// touching the grid.
///
/// ```
/// use zenpnm::{Bitmap, EncodeRequest, Encoding};
///
/// let bits = Bitmap::from_samples(2, 2, Encoding::Ascii, 1, vec![true, false, false, true])?;
/// let raw = EncodeRequest::new().with_encoding(Encoding::Binary).encode(&bits);
/// assert_eq!(raw, b"P4\n2 2\n\x80\x40");
/// # Ok::<(), zenpnm::PnmError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {
    encoding: Option<Encoding>,
}

impl EncodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write plain (ASCII) or raw (binary) regardless of the grid's magic number.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    pub fn encode<T: Sample>(&self, grid: &ImageGrid<T>) -> Vec<u8> {
        pnm::encode_grid(grid, self.encoding.unwrap_or(grid.encoding()))
    }

    pub fn encode_image(&self, image: &DecodedImage) -> Vec<u8> {
        match self.encoding {
            Some(encoding) => image.encode_as(encoding),
            None => image.encode(),
        }
    }
}
