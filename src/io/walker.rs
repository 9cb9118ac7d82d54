//! Recursive discovery of PDF files
//!
//! Directory inputs are walked recursively; every regular file with a
//! `.pdf` extension is queued for processing.

use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

use super::reader::is_pdf_file;

/// Collects every `.pdf` file under a directory root, recursively
///
/// Unreadable entries are skipped with a warning so one bad subtree does
/// not abort the walk. Results are sorted for a deterministic processing
/// order.
///
/// # Arguments
/// * `root` - Directory to walk
///
/// # Returns
/// Sorted paths of all PDF files found under the root
pub fn collect_pdf_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_file() && is_pdf_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    files
}
