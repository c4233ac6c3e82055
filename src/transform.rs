//! Geometric and photometric transforms, plus conversions between depths.
//!
//! `invert`, `flip`, `flop` and `rescale_max_value` mutate in place;
//! `rotate90_cw` and the conversions build new storage.

use alloc::vec::Vec;

use crate::error::PnmError;
use crate::grid::{Bitmap, Graymap, ImageGrid, Pixmap};
use crate::pixel::{Sample, intensity};
use crate::pnm::{MagicNumber, PnmFormat};

impl<T: Sample> ImageGrid<T> {
    /// Bitmaps negate each bit; graymaps and pixmaps map each channel `v` to
    /// `max_value - v`.
    pub fn invert(&mut self) {
        log::trace!("invert {}x{}", self.width, self.height);
        let max = self.max_value;
        for s in &mut self.samples {
            *s = s.inverted(max);
        }
    }

    /// Mirror horizontally: reverse each row.
    pub fn flip(&mut self) {
        log::trace!("flip {}x{}", self.width, self.height);
        for row in self.samples.chunks_exact_mut(self.width as usize) {
            row.reverse();
        }
    }

    /// Mirror vertically: swap rows from both ends toward the middle. The
    /// middle row of an odd-height grid stays put.
    pub fn flop(&mut self) {
        log::trace!("flop {}x{}", self.width, self.height);
        let w = self.width as usize;
        let h = self.height as usize;
        for top in 0..h / 2 {
            let bottom = h - 1 - top;
            let (upper, lower) = self.samples.split_at_mut(bottom * w);
            upper[top * w..(top + 1) * w].swap_with_slice(&mut lower[..w]);
        }
    }

    /// Rotate 90° clockwise into a new grid of `height x width`.
    ///
    /// The sample at `(i, j)` lands at `(j, old_height - 1 - i)`. Magic
    /// number and max-value carry over.
    pub fn rotate90_cw(self) -> Self {
        log::trace!("rotate {}x{} clockwise", self.width, self.height);
        let old_w = self.width as usize;
        let old_h = self.height as usize;
        let mut rotated = Vec::with_capacity(self.samples.len());
        for row in 0..old_w {
            for col in 0..old_h {
                rotated.push(self.samples[(old_h - 1 - col) * old_w + row]);
            }
        }
        ImageGrid {
            width: self.height,
            height: self.width,
            magic: self.magic,
            max_value: self.max_value,
            samples: rotated,
        }
    }

    /// Rescale every channel to a new max-value:
    /// `round(v * new_max / old_max)`.
    ///
    /// Bitmaps have a fixed max-value of 1 and are rejected, as is a zero
    /// old or new max-value.
    pub fn rescale_max_value(&mut self, new_max: u8) -> Result<(), PnmError> {
        if T::FORMAT == PnmFormat::Pbm {
            return Err(PnmError::InvalidState(
                "PBM max value is fixed at 1".into(),
            ));
        }
        let old_max = self.max_value;
        if old_max == 0 {
            return Err(PnmError::InvalidState("current max value is 0".into()));
        }
        if new_max == 0 {
            return Err(PnmError::InvalidState(
                "new max value must be at least 1".into(),
            ));
        }
        log::trace!("rescale max value {old_max} -> {new_max}");
        for s in &mut self.samples {
            *s = s.rescaled(old_max, new_max);
        }
        self.max_value = new_max;
        Ok(())
    }

    /// Same as [`Self::rescale_max_value`].
    pub fn set_max_value(&mut self, new_max: u8) -> Result<(), PnmError> {
        self.rescale_max_value(new_max)
    }

    fn convert<U: Sample>(
        &self,
        magic: MagicNumber,
        max_value: u8,
        f: impl Fn(T) -> U,
    ) -> ImageGrid<U> {
        ImageGrid {
            width: self.width,
            height: self.height,
            magic,
            max_value,
            samples: self.samples.iter().map(|&s| f(s)).collect(),
        }
    }
}

impl Pixmap {
    /// Gray is the truncated channel average `(R + G + B) / 3`. The result
    /// is a plain (P2) graymap with the same max-value.
    pub fn to_graymap(&self) -> Graymap {
        self.convert(MagicNumber::P2, self.max_value, intensity)
    }

    /// A pixel is set (black) when its channel average is below
    /// `max_value / 2`. The result is a plain (P1) bitmap.
    pub fn to_bitmap(&self) -> Bitmap {
        let threshold = self.max_value / 2;
        self.convert(MagicNumber::P1, 1, |p| intensity(p) < threshold)
    }
}

impl Graymap {
    /// A pixel is set (black) when below `max_value / 2`. The result is a
    /// plain (P1) bitmap.
    pub fn to_bitmap(&self) -> Bitmap {
        let threshold = self.max_value / 2;
        self.convert(MagicNumber::P1, 1, |v| v < threshold)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::pixel::Pixel;
    use crate::pnm::Encoding;

    fn gray(width: u32, height: u32, max: u8, samples: Vec<u8>) -> Graymap {
        Graymap::from_samples(width, height, Encoding::Ascii, max, samples).unwrap()
    }

    #[test]
    fn invert_graymap() {
        let mut g = gray(3, 1, 255, vec![0, 128, 255]);
        g.invert();
        assert_eq!(g.samples(), [255, 127, 0]);
    }

    #[test]
    fn invert_respects_max_value() {
        let mut g = gray(2, 1, 15, vec![0, 5]);
        g.invert();
        assert_eq!(g.samples(), [15, 10]);
        g.invert();
        assert_eq!(g.samples(), [0, 5]);
    }

    #[test]
    fn invert_bitmap_and_pixmap() {
        let mut b = Bitmap::from_samples(2, 1, Encoding::Binary, 1, vec![true, false]).unwrap();
        b.invert();
        assert_eq!(b.samples(), [false, true]);

        let mut p = Pixmap::from_samples(
            1,
            1,
            Encoding::Binary,
            200,
            vec![Pixel { r: 0, g: 50, b: 200 }],
        )
        .unwrap();
        p.invert();
        assert_eq!(p.at(0, 0), Pixel { r: 200, g: 150, b: 0 });
    }

    #[test]
    fn flip_reverses_rows() {
        let mut g = gray(3, 2, 255, vec![1, 2, 3, 4, 5, 6]);
        g.flip();
        assert_eq!(g.samples(), [3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn flop_reverses_row_order() {
        let mut g = gray(2, 3, 255, vec![1, 2, 3, 4, 5, 6]);
        g.flop();
        // middle row untouched
        assert_eq!(g.samples(), [5, 6, 3, 4, 1, 2]);

        let mut even = gray(1, 4, 255, vec![1, 2, 3, 4]);
        even.flop();
        assert_eq!(even.samples(), [4, 3, 2, 1]);
    }

    #[test]
    fn single_row_and_column_are_fixed_points() {
        let mut row = gray(3, 1, 255, vec![1, 2, 3]);
        row.flop();
        assert_eq!(row.samples(), [1, 2, 3]);

        let mut col = gray(1, 3, 255, vec![1, 2, 3]);
        col.flip();
        assert_eq!(col.samples(), [1, 2, 3]);
    }

    #[test]
    fn rotate_clockwise() {
        // 1 2 3      4 1
        // 4 5 6  ->  5 2
        //            6 3
        let g = gray(3, 2, 200, vec![1, 2, 3, 4, 5, 6]).rotate90_cw();
        assert_eq!(g.size(), (3, 2));
        assert_eq!(g.samples(), [4, 1, 5, 2, 6, 3]);
        assert_eq!(g.max_value(), 200);
        assert_eq!(g.magic_number(), MagicNumber::P2);
    }

    #[test]
    fn rotate_moves_samples_per_mapping() {
        let g = gray(4, 3, 255, (0..12).collect());
        let r = g.clone().rotate90_cw();
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(r.at(j, 3 - 1 - i), g.at(i, j));
            }
        }
    }

    #[test]
    fn rescale_rounds() {
        let mut g = gray(3, 1, 255, vec![0, 128, 255]);
        g.rescale_max_value(15).unwrap();
        assert_eq!(g.max_value(), 15);
        assert_eq!(g.samples(), [0, 8, 15]);

        g.set_max_value(255).unwrap();
        assert_eq!(g.samples(), [0, 136, 255]);
    }

    #[test]
    fn rescale_rejects_zero_and_bitmaps() {
        let mut g = gray(1, 1, 255, vec![3]);
        assert!(matches!(
            g.rescale_max_value(0),
            Err(PnmError::InvalidState(_))
        ));
        assert_eq!(g.max_value(), 255);

        let mut b = Bitmap::new(1, 1, Encoding::Ascii).unwrap();
        assert!(matches!(
            b.rescale_max_value(255),
            Err(PnmError::InvalidState(_))
        ));
    }

    #[test]
    fn pixmap_to_graymap_averages() {
        let p = Pixmap::from_samples(
            2,
            1,
            Encoding::Binary,
            255,
            vec![Pixel { r: 10, g: 20, b: 30 }, Pixel { r: 255, g: 255, b: 254 }],
        )
        .unwrap();
        let g = p.to_graymap();
        assert_eq!(g.magic_number(), MagicNumber::P2);
        assert_eq!(g.max_value(), 255);
        assert_eq!(g.samples(), [20, 254]);
    }

    #[test]
    fn thresholds_agree_between_paths() {
        let pixels = vec![
            Pixel { r: 126, g: 126, b: 126 },
            Pixel { r: 127, g: 127, b: 127 },
            Pixel { r: 0, g: 0, b: 255 },
            Pixel { r: 255, g: 255, b: 0 },
        ];
        let p = Pixmap::from_samples(2, 2, Encoding::Binary, 255, pixels).unwrap();
        let direct = p.to_bitmap();
        let via_gray = p.to_graymap().to_bitmap();
        assert_eq!(direct, via_gray);
        // 255 / 2 = 127
        assert_eq!(direct.samples(), [true, false, true, false]);
        assert_eq!(direct.magic_number(), MagicNumber::P1);
        assert_eq!(direct.max_value(), 1);
    }

    #[test]
    fn graymap_to_bitmap_uses_max_value() {
        let g = gray(3, 1, 10, vec![4, 5, 10]);
        assert_eq!(g.to_bitmap().samples(), [true, false, false]);
    }
}
