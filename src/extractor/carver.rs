//! Carving scanned images out to disk
//!
//! Turns scan results into image files. The full byte range of every
//! image is known before the first write begins, so a failed write can
//! never leave a partially carved image behind a successful return.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::carve::errors::{CarveError, CarveResult};
use crate::carve::SignatureScanner;
use crate::utils::logger::Logger;

use super::naming;

/// Writes every image found in a buffer to an output directory
pub struct ImageCarver<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ImageCarver<'a> {
    /// Create a new carver
    ///
    /// # Arguments
    /// * `logger` - Logger for recording operations
    pub fn new(logger: &'a Logger) -> Self {
        ImageCarver { logger }
    }

    /// Scans `buffer` and writes each embedded image under `output_dir`
    ///
    /// The output directory is only created when at least one image was
    /// found, so inputs without embedded images leave no trace on disk.
    ///
    /// # Arguments
    /// * `buffer` - Full contents of one input file
    /// * `output_dir` - Directory to place the carved images in
    ///
    /// # Returns
    /// Paths of all written image files, in source order
    pub fn carve_to_dir(&self, buffer: &[u8], output_dir: &Path) -> CarveResult<Vec<PathBuf>> {
        let scanner = SignatureScanner::new();
        let images = scanner.scan_all(buffer);

        if images.is_empty() {
            debug!("No embedded images found, skipping {}", output_dir.display());
            return Ok(Vec::new());
        }

        fs::create_dir_all(output_dir)
            .map_err(|e| CarveError::OutputWrite(output_dir.display().to_string(), e))?;

        let mut written = Vec::with_capacity(images.len());
        for (index, image) in images.iter().enumerate() {
            let file_name = naming::image_file_name(image.format, index + 1);
            let output_path = output_dir.join(file_name);

            fs::write(&output_path, image.data)
                .map_err(|e| CarveError::OutputWrite(output_path.display().to_string(), e))?;

            info!(
                "Image saved to {} ({}, offsets {}..{})",
                output_path.display(),
                image.format,
                image.start,
                image.end
            );
            written.push(output_path);
        }

        self.logger.log(&format!(
            "Extracted {} images to {}",
            written.len(),
            output_dir.display()
        ))?;

        Ok(written)
    }
}
