//! Phrase validator - normalizer followed by the symmetry checker
//!
//! [`validate`] is the single operation callers need. It never fails: a phrase
//! that normalizes to nothing is a well-defined `false` result carrying an empty
//! canonical form.

use std::fmt;

use serde::Serialize;

use crate::normalizer::{normalize, CanonicalPhrase};
use crate::symmetry::{first_mismatch, is_symmetric, Mismatch};
use crate::Result;

// ── Result types ───────────────────────────────────────────

/// Outcome of validating one phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    #[serde(rename = "palindrome")]
    is_palindrome: bool,
    canonical: CanonicalPhrase,
}

impl ValidationResult {
    pub fn is_palindrome(&self) -> bool {
        self.is_palindrome
    }

    pub fn canonical(&self) -> &CanonicalPhrase {
        &self.canonical
    }

    pub fn into_parts(self) -> (bool, CanonicalPhrase) {
        (self.is_palindrome, self.canonical)
    }

    /// Explains the boolean: a `false` is either a mismatch or an empty phrase
    pub fn verdict(&self) -> Verdict {
        if self.is_palindrome {
            Verdict::Palindrome
        } else if self.canonical.is_empty() {
            Verdict::Empty
        } else {
            Verdict::NotPalindrome
        }
    }

    /// First asymmetric codepoint pair of the canonical form, if any
    pub fn mismatch(&self) -> Option<Mismatch> {
        first_mismatch(&self.canonical)
    }

    /// Render as `{"palindrome": bool, "canonical": string}`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Three-way classification of a validation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Palindrome,
    NotPalindrome,
    /// Nothing left after normalization (empty, or only punctuation/whitespace/marks)
    Empty,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Palindrome => write!(f, "palindrome"),
            Verdict::NotPalindrome => write!(f, "not a palindrome"),
            Verdict::Empty => write!(f, "empty after normalization"),
        }
    }
}

/// A raw phrase paired with its verdict, as exchanged with outer layers
///
/// Serializes as `{"phrase": string, "valid": bool}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palindrome {
    phrase: String,
    valid: bool,
}

impl Palindrome {
    pub fn new(phrase: impl Into<String>) -> Self {
        let phrase = phrase.into();
        let valid = validate(&phrase).is_palindrome();
        Self { phrase, valid }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

// ── Public API ─────────────────────────────────────────────

/// Validate a raw phrase
///
/// Pipeline: normalize → symmetry check. Pure and thread-safe.
pub fn validate(phrase: &str) -> ValidationResult {
    let canonical = normalize(phrase);
    let is_palindrome = is_symmetric(&canonical);

    tracing::debug!(
        raw_bytes = phrase.len(),
        canonical_chars = canonical.char_count(),
        palindrome = is_palindrome,
        "validated phrase"
    );
    tracing::trace!(canonical = %canonical, "canonical form");

    ValidationResult {
        is_palindrome,
        canonical,
    }
}

/// Decode UTF-8 bytes and validate them
///
/// # Errors
/// Returns `InvalidUtf8` with the length of the valid prefix when `bytes` is
/// not well-formed UTF-8.
pub fn validate_bytes(bytes: &[u8]) -> Result<ValidationResult> {
    let phrase = std::str::from_utf8(bytes)?;
    Ok(validate(phrase))
}
