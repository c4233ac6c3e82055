use core::fmt::Debug;

use crate::pnm::PnmFormat;

/// One PPM pixel: independent R, G, B byte channels.
pub type Pixel = rgb::Rgb<u8>;

pub(crate) mod sealed {
    use alloc::vec::Vec;

    use crate::error::PnmError;
    use crate::pnm::{Encoding, PnmHeader};

    /// Payload codec for one sample type, implemented in the matching `pnm`
    /// submodule. Only reachable through `pnm::decode_grid` and
    /// `pnm::encode_grid`, which validate the header dimensions first.
    pub trait Codec: Sized {
        fn decode_payload(payload: &[u8], header: &PnmHeader) -> Result<Vec<Self>, PnmError>;

        fn encode_payload(samples: &[Self], width: usize, encoding: Encoding, out: &mut Vec<u8>);
    }
}

/// A grid sample type: `bool` (PBM), `u8` (PGM) or [`Pixel`] (PPM).
///
/// The trait is sealed. Payload decoding goes through
/// [`DecodeRequest`](crate::DecodeRequest) only:
///
/// ```compile_fail
/// use zenpnm::{Pixel, Sample};
///
/// let header = zenpnm::parse_header(b"P6\n1 1\n255\n").unwrap();
/// let _ = Pixel::decode_payload(&[0, 0, 0], &header);
/// ```
pub trait Sample: Copy + PartialEq + Debug + Default + sealed::Codec {
    /// Format whose payload holds samples of this type.
    const FORMAT: PnmFormat;

    /// Whether every channel is within `[0, max]`.
    fn fits(self, max: u8) -> bool;

    /// Photometric negative relative to `max`.
    fn inverted(self, max: u8) -> Self;

    /// Each channel scaled from `[0, old_max]` to `[0, new_max]`, rounding
    /// half up. `old_max` must be nonzero.
    fn rescaled(self, old_max: u8, new_max: u8) -> Self;
}

pub(crate) fn rescale_channel(v: u8, old_max: u8, new_max: u8) -> u8 {
    debug_assert_ne!(old_max, 0, "rescale from a zero max value");
    let (v, old, new) = (u32::from(v), u32::from(old_max), u32::from(new_max));
    ((v * new + old / 2) / old).min(255) as u8
}

/// Channel average `(R + G + B) / 3`, truncated. Used by every pixmap
/// conversion.
pub(crate) fn intensity(p: Pixel) -> u8 {
    ((u16::from(p.r) + u16::from(p.g) + u16::from(p.b)) / 3) as u8
}
