//! PPM codec: P3 (decimal tokens grouped in threes, free line layout) and
//! P6 (three raw bytes per pixel).

use alloc::vec::Vec;

use super::ascii::{LineCursor, parse_sample, push_decimal, tokens};
use super::pgm::check_raw_range;
use super::{Encoding, PnmFormat, PnmHeader};
use crate::error::PnmError;
use crate::pixel::sealed::Codec;
use crate::pixel::{Pixel, Sample, rescale_channel};

impl Sample for Pixel {
    const FORMAT: PnmFormat = PnmFormat::Ppm;

    fn fits(self, max: u8) -> bool {
        self.r <= max && self.g <= max && self.b <= max
    }

    fn inverted(self, max: u8) -> Self {
        Pixel {
            r: max.saturating_sub(self.r),
            g: max.saturating_sub(self.g),
            b: max.saturating_sub(self.b),
        }
    }

    fn rescaled(self, old_max: u8, new_max: u8) -> Self {
        Pixel {
            r: rescale_channel(self.r, old_max, new_max),
            g: rescale_channel(self.g, old_max, new_max),
            b: rescale_channel(self.b, old_max, new_max),
        }
    }
}

impl Codec for Pixel {
    fn decode_payload(payload: &[u8], header: &PnmHeader) -> Result<Vec<Self>, PnmError> {
        let w = header.width as usize;
        let needed = w * header.height as usize * 3;
        let max = header.sample_max();

        let channels = match header.magic.encoding() {
            Encoding::Ascii => {
                let mut channels = Vec::with_capacity(needed.min(payload.len()));
                let mut lines = LineCursor::new(payload);
                'lines: while let Some(line) = lines.next_kept() {
                    for token in tokens(line) {
                        if channels.len() == needed {
                            break 'lines;
                        }
                        let pixel = channels.len() / 3;
                        channels.push(parse_sample(token, max, pixel / w, pixel % w)?);
                    }
                }
                if channels.len() < needed {
                    return Err(PnmError::TruncatedPayload {
                        needed,
                        actual: channels.len(),
                    });
                }
                channels
            }
            Encoding::Binary => {
                let raw = payload.get(..needed).ok_or(PnmError::TruncatedPayload {
                    needed,
                    actual: payload.len(),
                })?;
                check_raw_range(raw, w, 3, max)?;
                raw.to_vec()
            }
        };

        Ok(channels
            .chunks_exact(3)
            .map(|c| Pixel {
                r: c[0],
                g: c[1],
                b: c[2],
            })
            .collect())
    }

    fn encode_payload(samples: &[Self], width: usize, encoding: Encoding, out: &mut Vec<u8>) {
        match encoding {
            Encoding::Ascii => {
                for row in samples.chunks_exact(width) {
                    for p in row {
                        for v in [p.r, p.g, p.b] {
                            push_decimal(out, v);
                            out.push(b' ');
                        }
                    }
                    out.push(b'\n');
                }
            }
            Encoding::Binary => {
                for p in samples {
                    out.extend_from_slice(&[p.r, p.g, p.b]);
                }
            }
        }
    }
}
