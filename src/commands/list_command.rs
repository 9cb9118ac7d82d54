//! Image listing command
//!
//! This module implements the command for reporting the embedded images
//! found in PDF files without writing anything to disk.

use std::path::Path;

use clap::ArgMatches;
use log::{error, info, warn};

use crate::carve::errors::{CarveError, CarveResult};
use crate::carve::{ImageInfo, SignatureScanner};
use crate::commands::command_traits::Command;
use crate::io::{reader, walker};
use crate::utils::format_utils::format_byte_size;
use crate::utils::logger::Logger;

/// Command for listing embedded images without extracting them
pub struct ListCommand<'a> {
    /// Path to the input file or directory
    input_path: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ListCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CarveResult<Self> {
        let input_path = args.get_one::<String>("input")
            .ok_or_else(|| CarveError::GenericError("Missing input path".to_string()))?
            .clone();

        Ok(ListCommand { input_path, logger })
    }

    /// Reports every embedded image found in one PDF file
    fn list_file(&self, path: &Path) -> CarveResult<()> {
        let buffer = reader::read_file_bytes(path)?;

        let scanner = SignatureScanner::new();
        let images = scanner.scan_all(&buffer);

        info!("{}: {} embedded images", path.display(), images.len());

        for (index, image) in images.iter().enumerate() {
            let info = ImageInfo::for_image(image);
            let size = format_byte_size(info.byte_len() as u64);

            match info.dimensions {
                Some((width, height)) => info!(
                    "  #{} {} at {}..{} ({}, {}x{})",
                    index + 1, info.format, info.start, info.end, size, width, height
                ),
                None => info!(
                    "  #{} {} at {}..{} ({})",
                    index + 1, info.format, info.start, info.end, size
                ),
            }
        }

        self.logger.log(&format!(
            "{}: {} embedded images",
            path.display(),
            images.len()
        ))?;

        Ok(())
    }
}

impl<'a> Command for ListCommand<'a> {
    fn execute(&self) -> CarveResult<()> {
        let input = Path::new(&self.input_path);

        if input.is_file() {
            if !reader::is_pdf_file(input) {
                warn!("Skipping {}: not a .pdf file", input.display());
                return Ok(());
            }
            self.list_file(input)
        } else if input.is_dir() {
            let files = walker::collect_pdf_files(input);
            if files.is_empty() {
                info!("No PDF files found under {}", input.display());
                return Ok(());
            }

            for file in &files {
                if let Err(e) = self.list_file(file) {
                    error!("Failed to list {}: {}", file.display(), e);
                }
            }
            Ok(())
        } else {
            Err(CarveError::InvalidPath(self.input_path.clone()))
        }
    }
}
