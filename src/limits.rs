use alloc::format;

use crate::error::PnmError;

/// Caller-set bounds applied right after the header is parsed, before any
/// sample storage is allocated.
///
/// Every field defaults to `None` (unbounded).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Bound on `width * height`.
    pub max_pixels: Option<u64>,
    /// Bound on the decoded sample buffer, in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), PnmError> {
        let (width, height) = (u64::from(width), u64::from(height));
        if let Some(max) = self.max_width.filter(|&max| width > max) {
            return Err(PnmError::LimitExceeded(format!(
                "image is {width} pixels wide, at most {max} allowed"
            )));
        }
        if let Some(max) = self.max_height.filter(|&max| height > max) {
            return Err(PnmError::LimitExceeded(format!(
                "image is {height} pixels tall, at most {max} allowed"
            )));
        }
        // both factors fit in u32, so the product fits in u64
        let pixels = width * height;
        if let Some(max) = self.max_pixels.filter(|&max| pixels > max) {
            return Err(PnmError::LimitExceeded(format!(
                "image has {pixels} pixels, at most {max} allowed"
            )));
        }
        Ok(())
    }

    /// `bytes` is the already overflow-checked size of the sample buffer.
    pub(crate) fn check_memory(&self, bytes: u64) -> Result<(), PnmError> {
        match self.max_memory_bytes {
            Some(max) if bytes > max => Err(PnmError::LimitExceeded(format!(
                "sample buffer needs {bytes} bytes, at most {max} allowed"
            ))),
            _ => Ok(()),
        }
    }
}
