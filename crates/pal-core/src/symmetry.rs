//! Symmetry checker - decides whether a canonical phrase reads the same both ways
//!
//! Two cursors start at either end of the phrase and move inward, each decoding
//! one whole codepoint per step. Offsets are byte offsets into the UTF-8 text,
//! but a multi-byte codepoint is always consumed as one unit.
//!
//! # Guarantees
//!
//! - O(n) codepoint comparisons, stopping at the first mismatch
//! - Independent of encoding width (1–4 bytes per codepoint)
//! - The empty phrase is never symmetric

use std::fmt;

use serde::Serialize;

/// First pair of codepoints that breaks symmetry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Byte offset of the codepoint read from the front
    pub front_offset: usize,
    pub front: char,
    /// Byte offset of the codepoint read from the back
    pub back_offset: usize,
    pub back: char,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:?} at byte {} differs from {:?} at byte {}",
            self.front, self.front_offset, self.back, self.back_offset
        )
    }
}

/// Returns true iff `canonical` is non-empty and reads identically in both directions
///
/// The input is compared as given; run it through the normalizer first when it
/// is raw text.
pub fn is_symmetric(canonical: &str) -> bool {
    !canonical.is_empty() && first_mismatch(canonical).is_none()
}

/// Scan inward from both ends and report the first differing pair
///
/// Returns `None` when the cursors meet (odd-length middle) or cross (even
/// length fully consumed) without a difference. The empty string has no
/// mismatch; emptiness is rejected by [`is_symmetric`], not here.
pub fn first_mismatch(canonical: &str) -> Option<Mismatch> {
    let mut cursors = canonical.char_indices();
    loop {
        let (front_offset, front) = cursors.next()?;
        let (back_offset, back) = cursors.next_back()?;
        if front != back {
            return Some(Mismatch {
                front_offset,
                front,
                back_offset,
                back,
            });
        }
    }
}
