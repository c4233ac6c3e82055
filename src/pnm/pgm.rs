//! PGM codec: P2 (decimal tokens, one row per line) and P5 (one raw byte per
//! sample).

use alloc::format;
use alloc::vec::Vec;

use super::ascii::{decode_rows, parse_sample, push_decimal};
use super::{Encoding, PnmFormat, PnmHeader};
use crate::error::PnmError;
use crate::pixel::sealed::Codec;
use crate::pixel::{Sample, rescale_channel};

impl Sample for u8 {
    const FORMAT: PnmFormat = PnmFormat::Pgm;

    fn fits(self, max: u8) -> bool {
        self <= max
    }

    fn inverted(self, max: u8) -> Self {
        max.saturating_sub(self)
    }

    fn rescaled(self, old_max: u8, new_max: u8) -> Self {
        rescale_channel(self, old_max, new_max)
    }
}

impl Codec for u8 {
    fn decode_payload(payload: &[u8], header: &PnmHeader) -> Result<Vec<Self>, PnmError> {
        let (w, h) = (header.width as usize, header.height as usize);
        let max = header.sample_max();
        match header.magic.encoding() {
            Encoding::Ascii => decode_rows(payload, w, h, |token, row, col| {
                parse_sample(token, max, row, col)
            }),
            Encoding::Binary => {
                let needed = w * h;
                let raw = payload.get(..needed).ok_or(PnmError::TruncatedPayload {
                    needed,
                    actual: payload.len(),
                })?;
                check_raw_range(raw, w, 1, max)?;
                Ok(raw.to_vec())
            }
        }
    }

    fn encode_payload(samples: &[Self], width: usize, encoding: Encoding, out: &mut Vec<u8>) {
        match encoding {
            Encoding::Ascii => {
                for row in samples.chunks_exact(width) {
                    for (col, &v) in row.iter().enumerate() {
                        if col > 0 {
                            out.push(b' ');
                        }
                        push_decimal(out, v);
                    }
                    out.push(b'\n');
                }
            }
            Encoding::Binary => out.extend_from_slice(samples),
        }
    }
}

/// Reject raw bytes above `max`. `channels` bytes make up one pixel of a row
/// `width` pixels wide.
pub(crate) fn check_raw_range(
    raw: &[u8],
    width: usize,
    channels: usize,
    max: u8,
) -> Result<(), PnmError> {
    if max == u8::MAX {
        return Ok(());
    }
    match raw.iter().position(|&v| v > max) {
        Some(pos) => {
            let pixel = pos / channels;
            Err(PnmError::InvalidSampleValue(format!(
                "{} at ({}, {}) exceeds max value {max}",
                raw[pos],
                pixel / width,
                pixel % width
            )))
        }
        None => Ok(()),
    }
}
