use alloc::vec::Vec;

use crate::error::PnmError;
use crate::grid::{Bitmap, Graymap, ImageGrid, Pixmap};
use crate::limits::Limits;
use crate::pixel::Sample;
use crate::pnm::{self, Encoding, MagicNumber, PnmFormat};

/// A decoded image of whichever depth the header declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodedImage {
    Bitmap(Bitmap),
    Graymap(Graymap),
    Pixmap(Pixmap),
}

macro_rules! each {
    ($image:expr, |$grid:ident| $body:expr) => {
        match $image {
            DecodedImage::Bitmap($grid) => $body,
            DecodedImage::Graymap($grid) => $body,
            DecodedImage::Pixmap($grid) => $body,
        }
    };
}

impl DecodedImage {
    pub fn format(&self) -> PnmFormat {
        match self {
            Self::Bitmap(_) => PnmFormat::Pbm,
            Self::Graymap(_) => PnmFormat::Pgm,
            Self::Pixmap(_) => PnmFormat::Ppm,
        }
    }

    pub fn width(&self) -> u32 {
        each!(self, |g| g.width())
    }

    pub fn height(&self) -> u32 {
        each!(self, |g| g.height())
    }

    /// `(height, width)`.
    pub fn size(&self) -> (u32, u32) {
        each!(self, |g| g.size())
    }

    pub fn magic_number(&self) -> MagicNumber {
        each!(self, |g| g.magic_number())
    }

    pub fn max_value(&self) -> u8 {
        each!(self, |g| g.max_value())
    }

    /// Serialize with the image's own magic number.
    pub fn encode(&self) -> Vec<u8> {
        each!(self, |g| g.encode())
    }

    pub(crate) fn encode_as(&self, encoding: Encoding) -> Vec<u8> {
        each!(self, |g| pnm::encode_grid(g, encoding))
    }

    pub fn into_bitmap(self) -> Option<Bitmap> {
        match self {
            Self::Bitmap(g) => Some(g),
            _ => None,
        }
    }

    pub fn into_graymap(self) -> Option<Graymap> {
        match self {
            Self::Graymap(g) => Some(g),
            _ => None,
        }
    }

    pub fn into_pixmap(self) -> Option<Pixmap> {
        match self {
            Self::Pixmap(g) => Some(g),
            _ => None,
        }
    }
}

impl From<Bitmap> for DecodedImage {
    fn from(g: Bitmap) -> Self {
        Self::Bitmap(g)
    }
}

impl From<Graymap> for DecodedImage {
    fn from(g: Graymap) -> Self {
        Self::Graymap(g)
    }
}

impl From<Pixmap> for DecodedImage {
    fn from(g: Pixmap) -> Self {
        Self::Pixmap(g)
    }
}

/// Decode request with optional resource limits.
///
/// ```
/// use zenpnm::{DecodeRequest, Limits};
///
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let gray = DecodeRequest::new(b"P2\n3 1\n255\n0 128 255\n")
///     .with_limits(&limits)
///     .decode_pgm()?;
/// assert_eq!(gray.samples(), [0, 128, 255]);
/// # Ok::<(), zenpnm::PnmError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode whichever depth the header declares.
    pub fn decode(self) -> Result<DecodedImage, PnmError> {
        let header = pnm::parse_header(self.data)?;
        let (data, limits) = (self.data, self.limits);
        Ok(match header.magic.format() {
            PnmFormat::Pbm => DecodedImage::Bitmap(pnm::decode_grid(data, &header, limits)?),
            PnmFormat::Pgm => DecodedImage::Graymap(pnm::decode_grid(data, &header, limits)?),
            PnmFormat::Ppm => DecodedImage::Pixmap(pnm::decode_grid(data, &header, limits)?),
        })
    }

    /// Decode into a grid of `T`; a header of another depth is
    /// [`PnmError::InvalidMagicNumber`].
    pub fn decode_as<T: Sample>(self) -> Result<ImageGrid<T>, PnmError> {
        let header = pnm::parse_header(self.data)?;
        pnm::decode_grid(self.data, &header, self.limits)
    }

    /// Decode a P1 or P4 image.
    pub fn decode_pbm(self) -> Result<Bitmap, PnmError> {
        self.decode_as()
    }

    /// Decode a P2 or P5 image.
    pub fn decode_pgm(self) -> Result<Graymap, PnmError> {
        self.decode_as()
    }

    /// Decode a P3 or P6 image.
    pub fn decode_ppm(self) -> Result<Pixmap, PnmError> {
        self.decode_as()
    }
}
