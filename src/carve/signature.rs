//! Image format signatures
//!
//! This module defines the fixed byte sequences used to recognize
//! embedded JPEG and PNG streams inside arbitrary binary data, and the
//! registry the scanner iterates over.

use std::fmt;

use lazy_static::lazy_static;

/// Raster image formats recognized by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Lowercase format name, used in output file names
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
        }
    }

    /// File extension for carved images of this format
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Jpeg => write!(f, "JPEG"),
            ImageFormat::Png => write!(f, "PNG"),
        }
    }
}

/// JPEG start-of-image marker plus the prefix of the first segment marker
pub const JPEG_START_MARKER: &[u8] = &[0xFF, 0xD8, 0xFF];

/// JPEG end-of-image marker
pub const JPEG_END_MARKER: &[u8] = &[0xFF, 0xD9];

/// PNG file signature
pub const PNG_START_MARKER: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// PNG IEND chunk type plus its fixed CRC
pub const PNG_END_MARKER: &[u8] = &[0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82];

/// Describes how to recognize one embedded image format
///
/// A signature is a pair of fixed byte sequences: one marking where a
/// stream of this format begins and one marking where it ends. The end
/// marker is part of the stream, so a complete match runs from the first
/// byte of `start_marker` through the last byte of `end_marker`.
#[derive(Debug, Clone, Copy)]
pub struct SignatureSpec {
    /// Format this signature detects
    pub format: ImageFormat,
    /// Byte sequence at the start of a stream
    pub start_marker: &'static [u8],
    /// Byte sequence terminating a stream
    pub end_marker: &'static [u8],
}

lazy_static! {
    /// Registry of all signatures known to the scanner
    pub static ref SIGNATURES: Vec<SignatureSpec> = vec![
        SignatureSpec {
            format: ImageFormat::Jpeg,
            start_marker: JPEG_START_MARKER,
            end_marker: JPEG_END_MARKER,
        },
        SignatureSpec {
            format: ImageFormat::Png,
            start_marker: PNG_START_MARKER,
            end_marker: PNG_END_MARKER,
        },
    ];
}
