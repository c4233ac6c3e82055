use crate::error::PnmError;
use crate::pnm::{Encoding, MagicNumber, PnmFormat, parse_header};

/// Header facts available without decoding the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: PnmFormat,
    pub encoding: Encoding,
    pub magic: MagicNumber,
    /// Declared max-value, or 1 for PBM.
    pub max_value: u8,
}

impl ImageInfo {
    /// Probe the header only.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PnmError> {
        let header = parse_header(data)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            format: header.magic.format(),
            encoding: header.magic.encoding(),
            magic: header.magic,
            max_value: header.sample_max(),
        })
    }
}
