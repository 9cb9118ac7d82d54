//! Shared helpers for carve module tests
//!
//! Builds small, structurally valid image streams byte by byte so tests
//! can embed them in synthetic buffers and compare extractions exactly.

use crate::carve::signature::{JPEG_END_MARKER, JPEG_START_MARKER, PNG_END_MARKER, PNG_START_MARKER};

/// Builds a structurally minimal JPEG stream (SOI, JFIF APP0, EOI)
pub fn minimal_jpeg() -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(JPEG_START_MARKER);         // FF D8 FF
    buffer.push(0xE0);                                   // APP0
    buffer.extend_from_slice(&[0x00, 0x10]);             // segment length (16)
    buffer.extend_from_slice(b"JFIF\0");                 // identifier
    buffer.extend_from_slice(&[0x01, 0x01]);             // version 1.1
    buffer.push(0x00);                                   // density units
    buffer.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]); // density 1x1
    buffer.extend_from_slice(&[0x00, 0x00]);             // no thumbnail
    buffer.extend_from_slice(JPEG_END_MARKER);           // FF D9
    buffer
}

/// Builds a complete 1x1 RGBA PNG stream (67 bytes, real CRCs)
pub fn minimal_png() -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(PNG_START_MARKER);

    // IHDR: 1x1, 8-bit RGBA
    buffer.extend_from_slice(&[0x00, 0x00, 0x00, 0x0D]); // chunk length
    buffer.extend_from_slice(b"IHDR");
    buffer.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]); // width
    buffer.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]); // height
    buffer.extend_from_slice(&[0x08, 0x06, 0x00, 0x00, 0x00]);
    buffer.extend_from_slice(&[0x1F, 0x15, 0xC4, 0x89]); // CRC

    // IDAT: one deflated scanline
    buffer.extend_from_slice(&[0x00, 0x00, 0x00, 0x0A]); // chunk length
    buffer.extend_from_slice(b"IDAT");
    buffer.extend_from_slice(&[0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01]);
    buffer.extend_from_slice(&[0x0D, 0x0A, 0x2D, 0xB4]); // CRC

    // IEND
    buffer.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // chunk length
    buffer.extend_from_slice(PNG_END_MARKER);
    buffer
}

/// Deterministic filler bytes free of any image markers
///
/// Values cycle through 0..251, so 0xFF never occurs and no marker
/// sequence can form by accident.
pub fn garbage(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
