// Additional integration tests for word pool invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use doodle_arcade::words::data::{CHAIR_WORDS, SWEAR_WORDS};
use doodle_arcade::words::deck::{classify, WordKind};

#[test]
fn chair_words_are_unique_and_well_formed() {
    let mut seen = HashSet::new();
    for w in CHAIR_WORDS {
        assert!(seen.insert(*w), "duplicate chair word '{}'", w);
        assert!(!w.is_empty(), "empty chair word");
        assert!(
            !w.chars().any(|c| c.is_lowercase()),
            "chair word '{}' is not uppercase",
            w
        );
        assert!(
            !w.chars().any(char::is_whitespace),
            "chair word '{}' contains whitespace",
            w
        );
    }
}

#[test]
fn swear_words_are_unique_and_well_formed() {
    let mut seen = HashSet::new();
    for w in SWEAR_WORDS {
        assert!(seen.insert(*w), "duplicate swear word '{}'", w);
        assert!(!w.is_empty(), "empty swear word");
        assert!(
            !w.chars().any(|c| c.is_lowercase()),
            "swear word '{}' is not uppercase",
            w
        );
        assert!(
            !w.chars().any(char::is_whitespace),
            "swear word '{}' contains whitespace",
            w
        );
    }
}

#[test]
fn pools_do_not_overlap() {
    let chairs: HashSet<&str> = CHAIR_WORDS.iter().copied().collect();
    for w in SWEAR_WORDS {
        assert!(!chairs.contains(*w), "'{}' appears in both pools", w);
    }
}

#[test]
fn classify_agrees_with_the_pools() {
    for w in CHAIR_WORDS {
        assert_eq!(classify(w), Some(WordKind::Chair), "'{}' should classify as chair", w);
    }
    for w in SWEAR_WORDS {
        assert_eq!(classify(w), Some(WordKind::Swear), "'{}' should classify as swear", w);
    }
    // Bookcases are neither
    assert_eq!(classify("BILLY"), None);
}
