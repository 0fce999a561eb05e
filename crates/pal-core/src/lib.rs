//! pal core - Unicode-aware palindrome validation
//!
//! Decides whether a phrase reads the same forward and backward once letter
//! case, punctuation, whitespace and diacritics are set aside. All bindings
//! (CLI, C FFI, Python) call into this crate and hold no logic of their own.
//!
//! # Architecture
//!
//! ```text
//! Raw phrase → Normalizer → Canonical phrase → Symmetry checker → ValidationResult
//! ```
//!
//! # Guarantees
//!
//! - **Total**: every Unicode string validates; nothing panics or errors
//! - **Deterministic**: same input always produces identical output
//! - **Stateless**: calls share nothing and may run on any number of threads
//! - **Codepoint-exact**: comparison never splits a multi-byte codepoint
//!
//! # Example
//!
//! ```
//! let result = pal_core::validate("DÁBALE ARROZ A LA ZORRA EL ABAD");
//! assert!(result.is_palindrome());
//! assert_eq!(result.canonical().as_str(), "dabalearrozalazorraelabad");
//! ```

pub mod error;
pub mod normalizer;
pub mod symmetry;
pub mod validator;

pub use error::{Error, Result};
pub use normalizer::{normalize, CanonicalPhrase};
pub use symmetry::{first_mismatch, is_symmetric, Mismatch};
pub use validator::{validate, validate_bytes, Palindrome, ValidationResult, Verdict};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fixture_lines(name: &str) -> Vec<String> {
        let path = format!(
            "{}/../../tests/fixtures/phrases/{}",
            env!("CARGO_MANIFEST_DIR"),
            name
        );
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path, e))
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_owned)
            .collect()
    }

    // ── Conformance fixtures ───────────────────────────

    #[test]
    fn test_conformance_palindromes() {
        let phrases = fixture_lines("palindromes.txt");
        assert!(phrases.len() >= 16);
        for phrase in phrases {
            assert!(
                validate(&phrase).is_palindrome(),
                "{:?} should be a palindrome",
                phrase
            );
        }
    }

    #[test]
    fn test_conformance_not_palindromes() {
        let phrases = fixture_lines("not_palindromes.txt");
        assert!(phrases.len() >= 5);
        for phrase in phrases {
            assert!(
                !validate(&phrase).is_palindrome(),
                "{:?} should not be a palindrome",
                phrase
            );
        }
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationResult>();
        assert_send_sync::<CanonicalPhrase>();
        assert_send_sync::<Palindrome>();
        assert_send_sync::<Error>();
    }

    #[test]
    fn test_parallel_validation_agrees() {
        let phrases = fixture_lines("palindromes.txt");
        let expected: Vec<ValidationResult> = phrases.iter().map(|p| validate(p)).collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| phrases.iter().map(|p| validate(p)).collect::<Vec<_>>())
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_determinism_100_iterations() {
        let input = "わたしまけましたわ";
        let first = validate(input);
        for i in 0..100 {
            assert_eq!(first, validate(input), "Non-determinism at iteration {}", i);
        }
    }

    #[test]
    fn test_accented_and_plain_share_canonical() {
        let plain = validate("ana");
        let accented = validate("a\u{0301}n\u{0303}a\u{0308}");
        assert_eq!(plain.canonical(), accented.canonical());
        assert!(accented.is_palindrome());
    }

    #[test]
    fn test_single_mismatch_short_circuit() {
        let result = validate("Xracecary");
        assert!(!result.is_palindrome());
        let mismatch = result.mismatch().unwrap();
        assert_eq!(mismatch.front_offset, 0);
        assert_eq!(mismatch.back_offset, result.canonical().len() - 1);
    }

    // ── Invariance properties ──────────────────────────

    proptest! {
        #[test]
        fn prop_case_invariance(s in "[a-zA-ZÀ-ÖØ-öø-ÿα-ωΑ-Ωа-яА-Я ]{0,32}") {
            prop_assert_eq!(
                validate(&s).is_palindrome(),
                validate(&s.to_uppercase()).is_palindrome()
            );
        }

        #[test]
        fn prop_punctuation_invariance(
            half in "[a-zà-ÿ]{1,12}",
            noise in proptest::collection::vec((0usize..64, "[ ,.!?;:'\"()¿¡«»—-]"), 0..8),
        ) {
            let mut phrase: Vec<String> = half
                .chars()
                .chain(half.chars().rev())
                .map(String::from)
                .collect();
            for (at, punct) in noise {
                let at = at % (phrase.len() + 1);
                phrase.insert(at, punct);
            }
            prop_assert!(validate(&phrase.concat()).is_palindrome());
        }

        #[test]
        fn prop_diacritic_invariance(s in "[aeiou]{1,16}", accent in "[\u{0300}\u{0301}\u{0302}\u{0303}\u{0308}]") {
            let plain: String = s.chars().chain(s.chars().rev()).collect();
            let accented: String = plain
                .chars()
                .flat_map(|c| [c].into_iter().chain(accent.chars()))
                .collect();
            let (plain, accented) = (validate(&plain), validate(&accented));
            prop_assert_eq!(plain.is_palindrome(), accented.is_palindrome());
            prop_assert_eq!(plain.canonical(), accented.canonical());
        }
    }
}
