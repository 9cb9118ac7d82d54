//! Embedded image detection and extraction
//!
//! This module provides structures and functions for locating embedded
//! JPEG and PNG streams in raw byte buffers by their signatures.

pub mod errors;
pub mod signature;
pub mod scanner;
pub mod extracted;
pub mod probe;
#[cfg(test)]
mod tests;

pub use errors::{CarveError, CarveResult};
pub use signature::{ImageFormat, SignatureSpec, SIGNATURES};
pub use scanner::{ScanIter, SignatureScanner};
pub use extracted::{ExtractedImage, ImageInfo};
