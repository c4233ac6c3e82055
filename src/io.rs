//! Single-call file wrappers. Each opens, uses and closes its file within
//! the call.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::decode::{DecodeRequest, DecodedImage};
use crate::error::PnmError;
use crate::grid::ImageGrid;
use crate::pixel::Sample;

/// Read and decode a whole file.
pub fn read_file(path: impl AsRef<Path>) -> Result<DecodedImage, PnmError> {
    let data = std::fs::read(path.as_ref())?;
    log::debug!("read {} bytes from {}", data.len(), path.as_ref().display());
    DecodeRequest::new(&data).decode()
}

/// Encode `grid` with its own magic number and write it to `path`,
/// replacing any existing file.
pub fn write_file<T: Sample>(path: impl AsRef<Path>, grid: &ImageGrid<T>) -> Result<(), PnmError> {
    let bytes = grid.encode();
    let mut file = File::create(path.as_ref())?;
    file.write_all(&bytes)?;
    file.flush()?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.as_ref().display());
    Ok(())
}

impl<T: Sample> ImageGrid<T> {
    /// Read and decode a file that must hold this grid's depth.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PnmError> {
        let data = std::fs::read(path)?;
        DecodeRequest::new(&data).decode_as()
    }

    /// See [`write_file`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PnmError> {
        write_file(path, self)
    }
}
