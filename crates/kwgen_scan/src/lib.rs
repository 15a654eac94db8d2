//! Finds the keyword enumerators in a token header.

pub mod markers;
pub mod word;

pub use markers::{MarkerScanner, Markers, ScanState, ScannedLine};
pub use word::{FIELD_SEPARATOR, ReservedWord, extract_first_field};

use tracing::trace;

/// Collects the first field of every line inside the keyword range.
///
/// Order follows the source. Duplicates are kept.
pub fn extract_reserved(source: &str, markers: &Markers) -> Vec<ReservedWord> {
    MarkerScanner::new(source, markers)
        .in_range()
        .filter_map(|line| {
            let word = extract_first_field(line.text)?;
            trace!(line = line.number, word = %word, "reserved word");
            Some(word)
        })
        .collect()
}
