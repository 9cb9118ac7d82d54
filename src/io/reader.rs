//! Binary file loading
//!
//! Input files are opened in binary mode and read fully into memory;
//! the scanner operates on whole buffers.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::carve::errors::{CarveError, CarveResult};

/// Checks whether a path has the `.pdf` extension, case-insensitively
pub fn is_pdf_file(path: &Path) -> bool {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Reads a file's full contents into a byte buffer
///
/// # Arguments
/// * `path` - Path of the file to read
///
/// # Returns
/// The file's bytes, or an error naming the unreadable path
pub fn read_file_bytes(path: &Path) -> CarveResult<Vec<u8>> {
    let mut file = File::open(path)
        .map_err(|e| CarveError::UnreadableInput(path.display().to_string(), e))?;

    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| CarveError::UnreadableInput(path.display().to_string(), e))?;

    debug!("Read {} bytes from {}", buffer.len(), path.display());
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_pdf_extension_matching() {
        assert!(is_pdf_file(Path::new("report.pdf")));
        assert!(is_pdf_file(Path::new("dir/REPORT.PDF")));
        assert!(!is_pdf_file(Path::new("report.txt")));
        assert!(!is_pdf_file(Path::new("report")));
        assert!(!is_pdf_file(Path::new("pdf")));
    }
}
