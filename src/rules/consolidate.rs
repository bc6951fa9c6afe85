//! Per-line merge algorithm.

use crate::core::Line;

/// Merge one line's non-zero tiles in scan order and pad it with zeros.
///
/// Adjacent equal pairs merge into their sum, first pair first. A merged
/// tile never merges again in the same pass, so `[2, 2, 2]` becomes
/// `[4, 2]` and not `[8]`. The result is zero-padded to `pad_to` cells and
/// returned with the sum of all merged values.
///
/// ```
/// use rust_2048::rules::consolidate;
///
/// let (line, score) = consolidate(&[2, 2, 4], 4);
/// assert_eq!(line.as_slice(), &[4, 4, 0, 0]);
/// assert_eq!(score, 4);
/// ```
#[must_use]
pub fn consolidate(tiles: &[u64], pad_to: usize) -> (Line, u64) {
    debug_assert!(tiles.len() <= pad_to, "line longer than its pad length");

    let mut merged = Line::with_capacity(pad_to);
    let mut score = 0;
    let mut i = 0;

    while i < tiles.len() {
        let value = tiles[i];
        if i + 1 < tiles.len() && tiles[i + 1] == value {
            merged.push(value * 2);
            score += value * 2;
            i += 2;
        } else {
            merged.push(value);
            i += 1;
        }
    }

    merged.resize(pad_to.max(merged.len()), 0);
    (merged, score)
}
