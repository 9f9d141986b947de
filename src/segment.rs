//! Splitting acknowledgement bodies into per-selection chunks

/// Marker that opens every selection in an acknowledgement email
pub const SELECTION_DELIMITER: &str = "SELECTION ACKNOWLEDGEMENT";

/// Split an email body into selection chunks
///
/// Text before the first delimiter is header material and is dropped.
/// Empty pieces, such as one left after a trailing delimiter, are skipped.
/// The iterator borrows `body` and can be cloned to restart it.
pub fn segment(body: &str) -> impl Iterator<Item = &str> + Clone {
    body.split(SELECTION_DELIMITER)
        .skip(1)
        .filter(|chunk| !chunk.is_empty())
}
