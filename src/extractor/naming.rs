//! Output naming scheme for carved images
//!
//! Each input file gets its own subdirectory under the results root,
//! named after the input file's stem. Image files are numbered in the
//! order the images appear in the source, across both formats.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::carve::ImageFormat;

/// Default root directory for extraction results
pub const DEFAULT_RESULTS_ROOT: &str = "results";

/// Builds the output directory path for one input file
///
/// # Arguments
/// * `results_root` - Root directory all extraction results live under
/// * `input_path` - The input file the directory is named after
pub fn output_dir_for(results_root: &Path, input_path: &Path) -> PathBuf {
    let stem = input_path
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("unnamed");

    results_root.join(stem)
}

/// Builds the file name for one carved image
///
/// `index` is 1-based and counts across both formats in source order.
pub fn image_file_name(format: ImageFormat, index: usize) -> String {
    format!("{}_{}.{}", format.name(), index, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dir_named_after_input_stem() {
        let dir = output_dir_for(Path::new("results"), Path::new("docs/report.pdf"));
        assert_eq!(dir, PathBuf::from("results/report"));
    }

    #[test]
    fn test_image_file_names() {
        assert_eq!(image_file_name(ImageFormat::Jpeg, 1), "jpeg_1.jpg");
        assert_eq!(image_file_name(ImageFormat::Png, 2), "png_2.png");
    }
}
