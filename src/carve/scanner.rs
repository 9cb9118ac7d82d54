//! Signature scanning over raw byte buffers
//!
//! The scanner walks a buffer looking for the start/end marker pairs in
//! the signature registry and yields one record per complete embedded
//! stream. It never touches the file system and never fails: malformed
//! byte patterns simply produce no results.

use log::debug;

use super::extracted::ExtractedImage;
use super::signature::{SignatureSpec, SIGNATURES};

/// Finds the next occurrence of `pattern` in `buffer` at or after `from`
///
/// Returns the offset of the first byte of the match, or `None` when the
/// pattern does not occur in the remaining bytes.
fn find_pattern(buffer: &[u8], pattern: &[u8], from: usize) -> Option<usize> {
    if pattern.is_empty() || from >= buffer.len() {
        return None;
    }

    buffer[from..]
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|pos| pos + from)
}

/// Scan state for one signature
///
/// Holds the next unemitted match for its format so the merged iterator
/// can order results by position across formats. `pos` strictly advances
/// on every refill, which bounds the scan on any input.
struct FormatCursor {
    spec: &'static SignatureSpec,
    /// Next offset to search from
    pos: usize,
    /// Next located match, not yet emitted, as a (start, end) pair
    pending: Option<(usize, usize)>,
    /// Set once no further matches can exist for this format
    exhausted: bool,
}

impl FormatCursor {
    fn new(spec: &'static SignatureSpec) -> Self {
        FormatCursor {
            spec,
            pos: 0,
            pending: None,
            exhausted: false,
        }
    }

    /// Locates the next complete match for this format, if any
    fn refill(&mut self, buffer: &[u8]) {
        if self.pending.is_some() || self.exhausted {
            return;
        }

        if let Some(start) = find_pattern(buffer, self.spec.start_marker, self.pos) {
            let body = start + self.spec.start_marker.len();

            if let Some(tail) = find_pattern(buffer, self.spec.end_marker, body) {
                let end = tail + self.spec.end_marker.len();
                self.pending = Some((start, end));
                self.pos = end;
                return;
            }

            // Unterminated stream: the end-marker search already covered
            // every byte to the end of the buffer, so no later start can
            // complete either. The partial match is dropped, never emitted.
            debug!(
                "Unterminated {} stream at offset {}, dropped",
                self.spec.format, start
            );
        }

        self.exhausted = true;
    }
}

/// Lazy iterator over the embedded images in a buffer
///
/// Yields results ordered by ascending start offset, regardless of
/// format. Same-format matches never overlap: each search resumes at the
/// end of the previous match. The iterator borrows the buffer and owns
/// no other state, so dropping it part-way through is free.
pub struct ScanIter<'a> {
    buffer: &'a [u8],
    cursors: Vec<FormatCursor>,
}

impl<'a> Iterator for ScanIter<'a> {
    type Item = ExtractedImage<'a>;

    fn next(&mut self) -> Option<ExtractedImage<'a>> {
        for cursor in self.cursors.iter_mut() {
            cursor.refill(self.buffer);
        }

        // Emit whichever format's next match starts earliest
        let next = self
            .cursors
            .iter()
            .enumerate()
            .filter_map(|(i, cursor)| cursor.pending.map(|(start, _)| (start, i)))
            .min()
            .map(|(_, i)| i)?;

        let cursor = &mut self.cursors[next];
        let (start, end) = cursor.pending.take()?;

        Some(ExtractedImage {
            format: cursor.spec.format,
            start,
            end,
            data: &self.buffer[start..end],
        })
    }
}

/// Scans byte buffers for embedded image streams
///
/// One scan makes a single pass per registered signature and reports
/// every complete, non-overlapping match. Known limitation: the first
/// `FF D9` after a JPEG start marker is taken as its terminator. `FF D9`
/// can in principle occur inside entropy-coded scan data, in which case
/// the carved stream is cut short at the false terminator. Resolving
/// that would require full marker-segment parsing, which is outside the
/// scope of signature-based extraction.
pub struct SignatureScanner;

impl SignatureScanner {
    /// Create a new scanner instance
    pub fn new() -> Self {
        SignatureScanner
    }

    /// Lazily scans `buffer` for embedded images
    ///
    /// The returned iterator is independent of any previous scan over the
    /// same buffer; calling `scan` again restarts from the beginning.
    ///
    /// # Arguments
    /// * `buffer` - Full contents of the file to scan
    ///
    /// # Returns
    /// An iterator over the embedded images, in source order
    pub fn scan<'a>(&self, buffer: &'a [u8]) -> ScanIter<'a> {
        ScanIter {
            buffer,
            cursors: SIGNATURES.iter().map(FormatCursor::new).collect(),
        }
    }

    /// Scans `buffer` and collects every result eagerly
    ///
    /// # Arguments
    /// * `buffer` - Full contents of the file to scan
    ///
    /// # Returns
    /// All embedded images found, ordered by start offset
    pub fn scan_all<'a>(&self, buffer: &'a [u8]) -> Vec<ExtractedImage<'a>> {
        let images: Vec<ExtractedImage<'a>> = self.scan(buffer).collect();
        debug!(
            "Scan complete: {} embedded images in {} bytes",
            images.len(),
            buffer.len()
        );
        images
    }
}

impl Default for SignatureScanner {
    fn default() -> Self {
        SignatureScanner::new()
    }
}
