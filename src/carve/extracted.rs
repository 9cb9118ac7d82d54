//! Extraction result records
//!
//! The scanner yields `ExtractedImage` records that borrow the scanned
//! buffer; `ImageInfo` is the owned summary form used for reporting.

use super::probe;
use super::signature::ImageFormat;

/// One embedded image located in a source buffer
///
/// `data` is exactly `buffer[start..end]`: it begins at the first byte of
/// the start marker and ends at the last byte of the end marker, so the
/// slice is a standalone image stream.
#[derive(Debug, Clone, Copy)]
pub struct ExtractedImage<'a> {
    /// Detected format of the stream
    pub format: ImageFormat,
    /// Offset of the first byte of the start marker
    pub start: usize,
    /// Offset one past the last byte of the end marker
    pub end: usize,
    /// The carved byte slice
    pub data: &'a [u8],
}

impl<'a> ExtractedImage<'a> {
    /// Length of the carved stream in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the slice is empty (never produced by a scan)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Owned summary of one located image, for reporting
#[derive(Debug, Clone)]
pub struct ImageInfo {
    /// Detected format of the stream
    pub format: ImageFormat,
    /// Offset of the first byte of the start marker
    pub start: usize,
    /// Offset one past the last byte of the end marker
    pub end: usize,
    /// Pixel dimensions, when readable structurally (PNG only)
    pub dimensions: Option<(u32, u32)>,
}

impl ImageInfo {
    /// Builds a summary record for one extracted image
    ///
    /// PNG dimensions are read from the IHDR chunk at fixed offsets. JPEG
    /// dimensions are not reported: reading them would require
    /// marker-segment parsing, which signature scanning does not do.
    pub fn for_image(image: &ExtractedImage<'_>) -> Self {
        let dimensions = match image.format {
            ImageFormat::Png => probe::png_dimensions(image.data),
            ImageFormat::Jpeg => None,
        };

        ImageInfo {
            format: image.format,
            start: image.start,
            end: image.end,
            dimensions,
        }
    }

    /// Length of the underlying stream in bytes
    pub fn byte_len(&self) -> usize {
        self.end - self.start
    }
}
