//! PBM codec: P1 (`0`/`1` tokens) and P4 (packed bits, MSB first, each row
//! padded to a whole byte).

use alloc::format;
use alloc::vec::Vec;

use super::ascii::{decode_rows, excerpt};
use super::{Encoding, PnmFormat, PnmHeader};
use crate::error::PnmError;
use crate::pixel::Sample;
use crate::pixel::sealed::Codec;

impl Sample for bool {
    const FORMAT: PnmFormat = PnmFormat::Pbm;

    fn fits(self, _max: u8) -> bool {
        true
    }

    fn inverted(self, _max: u8) -> Self {
        !self
    }

    fn rescaled(self, _old_max: u8, _new_max: u8) -> Self {
        self
    }
}

impl Codec for bool {
    fn decode_payload(payload: &[u8], header: &PnmHeader) -> Result<Vec<Self>, PnmError> {
        let (w, h) = (header.width as usize, header.height as usize);
        match header.magic.encoding() {
            Encoding::Ascii => decode_rows(payload, w, h, |token, row, col| match token {
                b"0" => Ok(false),
                b"1" => Ok(true),
                _ => Err(PnmError::InvalidSampleValue(format!(
                    "`{}` at ({row}, {col}) is not 0 or 1",
                    excerpt(token)
                ))),
            }),
            Encoding::Binary => unpack_rows(payload, w, h),
        }
    }

    fn encode_payload(samples: &[Self], width: usize, encoding: Encoding, out: &mut Vec<u8>) {
        match encoding {
            Encoding::Ascii => {
                for row in samples.chunks_exact(width) {
                    for (col, &on) in row.iter().enumerate() {
                        if col > 0 {
                            out.push(b' ');
                        }
                        out.push(if on { b'1' } else { b'0' });
                    }
                    out.push(b'\n');
                }
            }
            Encoding::Binary => pack_rows(samples, width, out),
        }
    }
}

/// Bytes per packed row.
pub(crate) const fn row_bytes(width: usize) -> usize {
    width.div_ceil(8)
}

fn unpack_rows(payload: &[u8], width: usize, height: usize) -> Result<Vec<bool>, PnmError> {
    let stride = row_bytes(width);
    let needed = stride * height;
    let payload = payload.get(..needed).ok_or(PnmError::TruncatedPayload {
        needed,
        actual: payload.len(),
    })?;

    let mut out = Vec::with_capacity(width * height);
    for row in payload.chunks_exact(stride) {
        // bits past `width` in the last byte are padding
        out.extend((0..width).map(|x| (row[x / 8] >> (7 - x % 8)) & 1 != 0));
    }
    Ok(out)
}

fn pack_rows(samples: &[bool], width: usize, out: &mut Vec<u8>) {
    for row in samples.chunks_exact(width) {
        out.extend(row.chunks(8).map(|chunk| {
            chunk
                .iter()
                .zip(0u8..)
                .fold(0u8, |acc, (&on, i)| acc | (u8::from(on) << (7 - i)))
        }));
    }
}
