/*!
 * Order-independent marker comparisons between a key and its translation.
 */

/// Return a copy of the markers sorted by Unicode scalar value (byte order)
pub fn sorted(markers: &[String]) -> Vec<String> {
    let mut sorted = markers.to_vec();
    sorted.sort();
    sorted
}

/// Check that two marker sequences contain the same markers with the same
/// counts, in any order
pub fn same_markers(expected: &[String], received: &[String]) -> bool {
    expected.len() == received.len() && sorted(expected) == sorted(received)
}

/// Check that every received marker also appears in the expected markers.
///
/// Received markers may omit expected ones, but never introduce new ones.
pub fn markers_subset(expected: &[String], received: &[String]) -> bool {
    received.iter().all(|marker| expected.contains(marker))
}
