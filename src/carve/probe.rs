//! Structural probes over carved image bytes
//!
//! Reads reportable facts straight out of carved byte ranges without
//! decoding any pixel data.

use std::io::Cursor;
use std::ops::Range;

use byteorder::{BigEndian, ReadBytesExt};

/// Location of the IHDR chunk type tag within a PNG stream
const IHDR_TYPE_RANGE: Range<usize> = 12..16;

/// Location of the IHDR width/height pair within a PNG stream
const IHDR_DIMENSIONS_RANGE: Range<usize> = 16..24;

/// Reads the pixel dimensions of a PNG stream from its IHDR chunk
///
/// The IHDR chunk is required to be first in a PNG file, so width and
/// height sit at fixed offsets behind the file signature, stored as
/// big-endian u32 values.
///
/// # Arguments
/// * `data` - A carved PNG byte slice, starting at the PNG signature
///
/// # Returns
/// `(width, height)` in pixels, or `None` when the slice is too short or
/// the chunk type tag at the expected offset is not `IHDR`
pub fn png_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    if data.len() < IHDR_DIMENSIONS_RANGE.end {
        return None;
    }

    if &data[IHDR_TYPE_RANGE] != b"IHDR" {
        return None;
    }

    let mut cursor = Cursor::new(&data[IHDR_DIMENSIONS_RANGE]);
    let width = cursor.read_u32::<BigEndian>().ok()?;
    let height = cursor.read_u32::<BigEndian>().ok()?;

    Some((width, height))
}
