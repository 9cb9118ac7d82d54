use std::path::{Path, PathBuf};

use log::info;

use crate::carve::errors::CarveResult;
use crate::carve::{ImageInfo, SignatureScanner};
use crate::extractor::{self, ImageCarver};
use crate::io::reader;
use crate::utils::logger::Logger;

/// Main interface to the carvekit library
pub struct CarveKit {
    logger: Logger,
}

impl CarveKit {
    /// Create a new CarveKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "carvekit.log"
    ///
    /// # Returns
    /// A CarveKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> CarveResult<Self> {
        let log_path = log_file.unwrap_or("carvekit.log");
        let logger = Logger::new(log_path)?;
        Ok(CarveKit { logger })
    }

    /// Scan a PDF file and report its embedded images without extracting
    ///
    /// # Arguments
    /// * `input_path` - Path to the PDF file to scan
    ///
    /// # Returns
    /// Summaries of every embedded image found, in source order
    pub fn scan(&self, input_path: &str) -> CarveResult<Vec<ImageInfo>> {
        let buffer = reader::read_file_bytes(Path::new(input_path))?;

        let scanner = SignatureScanner::new();
        let infos = scanner
            .scan(&buffer)
            .map(|image| ImageInfo::for_image(&image))
            .collect();

        Ok(infos)
    }

    /// Extract every embedded image from a PDF file
    ///
    /// Images are written under `<output_root>/<input stem>/` using the
    /// `<format>_<index>.<ext>` naming scheme, numbered in source order.
    ///
    /// # Arguments
    /// * `input_path` - Path to the PDF file to extract from
    /// * `output_root` - Optional results root, defaults to "results"
    ///
    /// # Returns
    /// Paths of all written image files, in source order
    pub fn extract(&self, input_path: &str, output_root: Option<&str>) -> CarveResult<Vec<PathBuf>> {
        let root = output_root.unwrap_or(extractor::DEFAULT_RESULTS_ROOT);
        info!("Extracting images from {} into {}", input_path, root);

        let input = Path::new(input_path);
        let buffer = reader::read_file_bytes(input)?;

        let output_dir = extractor::output_dir_for(Path::new(root), input);
        let carver = ImageCarver::new(&self.logger);
        carver.carve_to_dir(&buffer, &output_dir)
    }
}
