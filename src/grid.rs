use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::PnmError;
use crate::pixel::{Pixel, Sample};
use crate::pnm::{self, Encoding, MagicNumber, PnmHeader};

/// Rectangular grid of samples plus PNM metadata.
///
/// Samples are stored row-major and addressed as `(row, col)`, with
/// `row < height` and `col < width`. Every sample is within
/// `[0, max_value]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageGrid<T> {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) magic: MagicNumber,
    pub(crate) max_value: u8,
    pub(crate) samples: Vec<T>,
}

/// PBM grid; `true` is black.
pub type Bitmap = ImageGrid<bool>;
/// PGM grid.
pub type Graymap = ImageGrid<u8>;
/// PPM grid.
pub type Pixmap = ImageGrid<Pixel>;

impl<T: Sample> ImageGrid<T> {
    /// Grid of `width * height` default samples (white, black, black) with the
    /// format's default max-value.
    pub fn new(width: u32, height: u32, encoding: Encoding) -> Result<Self, PnmError> {
        let pixels = checked_pixels(width, height)?;
        Ok(Self {
            width,
            height,
            magic: MagicNumber::new(T::FORMAT, encoding),
            max_value: T::FORMAT.default_max_value(),
            samples: vec![T::default(); pixels],
        })
    }

    /// Build a grid from row-major samples.
    ///
    /// `max_value` must be 1 for bitmaps and within `1..=255` otherwise, and
    /// every sample must fit under it.
    pub fn from_samples(
        width: u32,
        height: u32,
        encoding: Encoding,
        max_value: u8,
        samples: Vec<T>,
    ) -> Result<Self, PnmError> {
        let pixels = checked_pixels(width, height)?;
        if samples.len() != pixels {
            return Err(PnmError::InvalidDimensions(format!(
                "{width}x{height} needs {pixels} samples, got {}",
                samples.len()
            )));
        }
        if max_value == 0 || (!T::FORMAT.has_max_value() && max_value != 1) {
            return Err(PnmError::InvalidDimensions(format!(
                "max value {max_value} is not valid for {}",
                T::FORMAT
            )));
        }
        if let Some(pos) = samples.iter().position(|s| !s.fits(max_value)) {
            return Err(PnmError::InvalidSampleValue(format!(
                "{:?} at ({}, {}) exceeds max value {max_value}",
                samples[pos],
                pos / width as usize,
                pos % width as usize
            )));
        }
        Ok(Self {
            width,
            height,
            magic: MagicNumber::new(T::FORMAT, encoding),
            max_value,
            samples,
        })
    }

    /// Decoder-side constructor; the payload codec has already validated
    /// sample count and range.
    pub(crate) fn from_header(header: &PnmHeader, samples: Vec<T>) -> Self {
        debug_assert_eq!(
            samples.len(),
            header.width as usize * header.height as usize
        );
        Self {
            width: header.width,
            height: header.height,
            magic: header.magic,
            max_value: header.sample_max(),
            samples,
        }
    }

    /// `(height, width)`, matching `(row, col)` indexing.
    pub fn size(&self) -> (u32, u32) {
        (self.height, self.width)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn magic_number(&self) -> MagicNumber {
        self.magic
    }

    pub fn encoding(&self) -> Encoding {
        self.magic.encoding()
    }

    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Row-major samples.
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.samples.chunks_exact(self.width as usize)
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height as usize && col < self.width as usize)
            .then(|| row * self.width as usize + col)
    }

    /// Sample at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.index(row, col).map(|i| self.samples[i])
    }

    /// Sample at `(row, col)`.
    ///
    /// # Panics
    ///
    /// If `row >= height` or `col >= width`.
    pub fn at(&self, row: usize, col: usize) -> T {
        match self.get(row, col) {
            Some(sample) => sample,
            None => panic!(
                "pixel ({row}, {col}) is outside the {}x{} image",
                self.width, self.height
            ),
        }
    }

    /// Overwrite the sample at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), PnmError> {
        let i = self.index(row, col).ok_or(PnmError::OutOfBounds { row, col })?;
        if !value.fits(self.max_value) {
            return Err(PnmError::InvalidSampleValue(format!(
                "{value:?} exceeds max value {}",
                self.max_value
            )));
        }
        self.samples[i] = value;
        Ok(())
    }

    /// Switch between the ASCII and binary sub-format of this depth.
    ///
    /// A magic number of another depth is rejected.
    pub fn set_magic_number(&mut self, magic: MagicNumber) -> Result<(), PnmError> {
        if magic.format() != T::FORMAT {
            return Err(PnmError::InvalidMagicNumber(format!(
                "{magic} is a {} magic number, this grid is {}",
                magic.format(),
                T::FORMAT
            )));
        }
        self.magic = magic;
        Ok(())
    }

    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.magic = MagicNumber::new(T::FORMAT, encoding);
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.set_encoding(encoding);
        self
    }

    /// Serialize with this grid's own magic number.
    pub fn encode(&self) -> Vec<u8> {
        pnm::encode_grid(self, self.encoding())
    }
}

fn checked_pixels(width: u32, height: u32) -> Result<usize, PnmError> {
    if width == 0 || height == 0 {
        return Err(PnmError::InvalidDimensions(format!(
            "{width}x{height} has a zero side"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(PnmError::DimensionsTooLarge { width, height })
}

#[cfg(feature = "imgref")]
impl<T: Sample> ImageGrid<T> {
    /// Zero-copy view as an [`imgref::ImgRef`].
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, T> {
        imgref::ImgRef::new(&self.samples, self.width as usize, self.height as usize)
    }

    /// Copy an [`imgref::ImgRef`] into a new grid. See [`Self::from_samples`].
    pub fn from_imgref(
        img: imgref::ImgRef<'_, T>,
        encoding: Encoding,
        max_value: u8,
    ) -> Result<Self, PnmError> {
        let (width, height) = (img.width(), img.height());
        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
            return Err(PnmError::InvalidDimensions(format!(
                "{width}x{height} does not fit in u32"
            )));
        };
        let samples: Vec<T> = img.pixels().collect();
        Self::from_samples(w, h, encoding, max_value, samples)
    }
}
