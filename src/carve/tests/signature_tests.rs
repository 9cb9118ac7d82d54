//! Tests for the signature registry

use crate::carve::signature::{
    ImageFormat, JPEG_END_MARKER, JPEG_START_MARKER, PNG_END_MARKER, PNG_START_MARKER, SIGNATURES,
};

#[test]
fn test_marker_bytes() {
    assert_eq!(JPEG_START_MARKER, &[0xFF, 0xD8, 0xFF]);
    assert_eq!(JPEG_END_MARKER, &[0xFF, 0xD9]);
    assert_eq!(PNG_START_MARKER, &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    assert_eq!(PNG_END_MARKER, &[0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82]);
}

#[test]
fn test_png_end_marker_is_iend_plus_crc() {
    assert_eq!(&PNG_END_MARKER[..4], b"IEND");
    assert_eq!(PNG_END_MARKER.len(), 8);
}

#[test]
fn test_format_names_and_extensions() {
    assert_eq!(ImageFormat::Jpeg.name(), "jpeg");
    assert_eq!(ImageFormat::Jpeg.extension(), "jpg");
    assert_eq!(ImageFormat::Png.name(), "png");
    assert_eq!(ImageFormat::Png.extension(), "png");

    assert_eq!(ImageFormat::Jpeg.to_string(), "JPEG");
    assert_eq!(ImageFormat::Png.to_string(), "PNG");
}

#[test]
fn test_registry_covers_both_formats() {
    assert_eq!(SIGNATURES.len(), 2);

    let jpeg = SIGNATURES.iter().find(|s| s.format == ImageFormat::Jpeg).unwrap();
    assert_eq!(jpeg.start_marker, JPEG_START_MARKER);
    assert_eq!(jpeg.end_marker, JPEG_END_MARKER);

    let png = SIGNATURES.iter().find(|s| s.format == ImageFormat::Png).unwrap();
    assert_eq!(png.start_marker, PNG_START_MARKER);
    assert_eq!(png.end_marker, PNG_END_MARKER);
}
