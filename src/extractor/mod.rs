//! Carving extraction results to disk
//!
//! This module turns scan results into files on disk, handling output
//! directory layout and file naming.

mod carver;
mod naming;

// Public exports
pub use carver::ImageCarver;
pub use naming::{image_file_name, output_dir_for, DEFAULT_RESULTS_ROOT};
