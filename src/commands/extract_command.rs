//! Image extraction command
//!
//! This module implements the command for extracting embedded images
//! from PDF files, with support for single-file and recursive directory
//! processing.

use std::path::Path;

use clap::ArgMatches;
use log::{error, info, warn};

use crate::carve::errors::{CarveError, CarveResult};
use crate::commands::command_traits::Command;
use crate::extractor::{self, ImageCarver};
use crate::io::{reader, walker};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for extracting embedded images from PDF files
pub struct ExtractCommand<'a> {
    /// Path to the input file or directory
    input_path: String,
    /// Root directory for extraction results
    output_root: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CarveResult<Self> {
        info!("Creating new extract command from arguments");

        let input_path = args.get_one::<String>("input")
            .ok_or_else(|| CarveError::GenericError("Missing input path".to_string()))?
            .clone();
        info!("Input path: {}", input_path);

        let output_root = args.get_one::<String>("output")
            .cloned()
            .unwrap_or_else(|| extractor::DEFAULT_RESULTS_ROOT.to_string());
        info!("Results root: {}", output_root);

        Ok(ExtractCommand {
            input_path,
            output_root,
            logger,
        })
    }

    /// Extracts every embedded image from a single PDF file
    ///
    /// # Arguments
    /// * `path` - Path of the PDF file to process
    ///
    /// # Returns
    /// Number of images written for this file
    fn process_file(&self, path: &Path) -> CarveResult<usize> {
        info!("Processing {}", path.display());

        let buffer = reader::read_file_bytes(path)?;

        let output_dir = extractor::output_dir_for(Path::new(&self.output_root), path);
        let carver = ImageCarver::new(self.logger);
        let written = carver.carve_to_dir(&buffer, &output_dir)?;

        if written.is_empty() {
            info!("No embedded images found in {}", path.display());
        } else {
            info!("Extracted {} images from {}", written.len(), path.display());
        }

        Ok(written.len())
    }

    /// Processes every PDF file under a directory root
    ///
    /// A failure on one file is logged and counted, then processing
    /// continues with the remaining files.
    fn process_directory(&self, root: &Path) -> CarveResult<()> {
        info!("Scanning {} recursively for PDF files", root.display());

        let files = walker::collect_pdf_files(root);
        if files.is_empty() {
            info!("No PDF files found under {}", root.display());
            return Ok(());
        }

        info!("Found {} PDF files", files.len());

        let progress = if files.len() > 1 {
            Some(ProgressTracker::new(files.len() as u64, "Extracting images"))
        } else {
            None
        };

        let mut total_images = 0;
        let mut failures = 0;

        for file in &files {
            match self.process_file(file) {
                Ok(count) => total_images += count,
                Err(e) => {
                    error!("Failed to process {}: {}", file.display(), e);
                    failures += 1;
                }
            }

            if let Some(bar) = &progress {
                bar.increment();
            }
        }

        if let Some(bar) = &progress {
            bar.finish();
        }

        let summary = format!(
            "Batch complete: {} files, {} images extracted, {} failures",
            files.len(), total_images, failures
        );
        info!("{}", summary);
        self.logger.log(&summary)?;

        Ok(())
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> CarveResult<()> {
        let input = Path::new(&self.input_path);

        if input.is_file() {
            if !reader::is_pdf_file(input) {
                warn!("Skipping {}: not a .pdf file", input.display());
                return Ok(());
            }
            self.process_file(input)?;
            Ok(())
        } else if input.is_dir() {
            self.process_directory(input)
        } else {
            Err(CarveError::InvalidPath(self.input_path.clone()))
        }
    }
}
