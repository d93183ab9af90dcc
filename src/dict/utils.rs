//! Low-level file and byte reading utilities

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::debug;

use super::types::error::{DictError, Result};

/// Read exactly `len` bytes without trusting `len` for the allocation.
///
/// Length fields come straight from the file, so a corrupted value must end
/// in a `Truncated` error rather than a huge buffer.
pub fn read_bytes<R: Read>(reader: &mut R, len: u64, context: &'static str) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(len.min(64 * 1024) as usize);
    reader
        .take(len)
        .read_to_end(&mut buf)
        .map_err(|source| DictError::Truncated { context, source })?;

    if (buf.len() as u64) < len {
        return Err(DictError::Truncated {
            context,
            source: io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {} bytes, found {}", len, buf.len()),
            ),
        });
    }
    Ok(buf)
}

/// Open `name` inside `dir`, or `None` if it cannot be opened.
pub fn open_in(dir: &Path, name: &str) -> Option<File> {
    let path = dir.join(name);
    match File::open(&path) {
        Ok(file) => Some(file),
        Err(e) => {
            debug!("Cannot open {}: {}", path.display(), e);
            None
        }
    }
}
