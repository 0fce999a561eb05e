//! Phrase normalizer - converts raw text to its canonical comparison form
//!
//! Palindromes are judged on the orthographic core of a phrase, not on its
//! surface encoding. `"DÁBALE ARROZ"` and `"dabale arroz"` must compare equal,
//! and so must `"é"` written as U+00E9 or as `e` + U+0301.
//!
//! # Pipeline
//!
//! `raw → fold case → strip separators → NFD → strip marks (Mn) → NFC`
//!
//! Every stage is a lazy `char` iterator adapter, so the full pipeline makes a
//! single pass and allocates once. Each stage is also exposed as a `&str → String`
//! function for testing in isolation.
//!
//! # Guarantees
//!
//! - **Total**: every input (including empty) has a canonical form
//! - **Idempotent**: `normalize(normalize(x)) == normalize(x)`
//! - **Deterministic**: same input always produces same output
//!
//! Logographic text is compared as written: no kanji → kana conversion happens.
//! Nonspacing marks are stripped for every script alike.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;
use unicode_casefold::UnicodeCaseFold;
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

// ── Canonical phrase ───────────────────────────────────────

/// A phrase in canonical comparison form
///
/// Case-folded, free of punctuation, whitespace and nonspacing marks, in NFC.
/// Only [`normalize`] produces one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct CanonicalPhrase(String);

impl CanonicalPhrase {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of codepoints (not bytes)
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl Deref for CanonicalPhrase {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalPhrase {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalPhrase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CanonicalPhrase> for String {
    fn from(phrase: CanonicalPhrase) -> Self {
        phrase.0
    }
}

// ── Public API ─────────────────────────────────────────────

/// Normalize a raw phrase to canonical form
///
/// Runs all five stages in order. Order matters: marks can only be removed
/// once decomposition has separated them from their base letter.
pub fn normalize(phrase: &str) -> CanonicalPhrase {
    let canonical = recomposed(without_marks(decomposed(without_separators(
        case_folded(phrase.chars()),
    ))))
    .collect();
    CanonicalPhrase(canonical)
}

/// Returns true for punctuation (P*), separators (Z*) and whitespace controls
pub fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            get_general_category(c),
            GeneralCategory::ConnectorPunctuation
                | GeneralCategory::DashPunctuation
                | GeneralCategory::OpenPunctuation
                | GeneralCategory::ClosePunctuation
                | GeneralCategory::InitialPunctuation
                | GeneralCategory::FinalPunctuation
                | GeneralCategory::OtherPunctuation
                | GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        )
}

/// Returns true for nonspacing marks (Mn): accents, tone marks, voicing marks
pub fn is_nonspacing_mark(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::NonspacingMark)
}

// ── Stage adapters ─────────────────────────────────────────

/// Stage 1: full Unicode case folding (`ß` → `ss`, `ς` → `σ`)
pub fn case_folded<I>(chars: I) -> impl Iterator<Item = char>
where
    I: Iterator<Item = char>,
{
    chars.case_fold()
}

/// Stage 2: drop punctuation and whitespace, preserving order
pub fn without_separators<I>(chars: I) -> impl Iterator<Item = char>
where
    I: Iterator<Item = char>,
{
    chars.filter(|&c| !is_separator(c))
}

/// Stage 3: canonical decomposition (NFD)
pub fn decomposed<I>(chars: I) -> impl Iterator<Item = char>
where
    I: Iterator<Item = char>,
{
    chars.nfd()
}

/// Stage 4: drop nonspacing marks
pub fn without_marks<I>(chars: I) -> impl Iterator<Item = char>
where
    I: Iterator<Item = char>,
{
    chars.filter(|&c| !is_nonspacing_mark(c))
}

/// Stage 5: canonical composition (NFC)
pub fn recomposed<I>(chars: I) -> impl Iterator<Item = char>
where
    I: Iterator<Item = char>,
{
    chars.nfc()
}

// ── Stage functions ────────────────────────────────────────

/// Stage 1 on a whole string
pub fn fold_case(s: &str) -> String {
    case_folded(s.chars()).collect()
}

/// Stage 2 on a whole string
pub fn strip_separators(s: &str) -> String {
    without_separators(s.chars()).collect()
}

/// Stage 3 on a whole string
pub fn decompose(s: &str) -> String {
    decomposed(s.chars()).collect()
}

/// Stage 4 on a whole string
pub fn strip_marks(s: &str) -> String {
    without_marks(s.chars()).collect()
}

/// Stage 5 on a whole string
pub fn recompose(s: &str) -> String {
    recomposed(s.chars()).collect()
}
