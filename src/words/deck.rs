//! Deterministic session tools for the chair-or-swear game. Randomness is an
//! explicit seed threaded through a splitmix32 mixer, so a session replays
//! exactly from its seed.

use crate::words::data::{CHAIR_WORDS, SWEAR_WORDS};

/// Which list a word came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordKind {
    Chair,
    Swear,
}

/// One card in a session deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckWord {
    pub word: &'static str,
    pub kind: WordKind,
}

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

fn rand_below(seed: u32, salt: u32, bound: usize) -> usize {
    if bound == 0 {
        return 0;
    }
    splitmix32(seed ^ salt) as usize % bound
}

/// Fisher-Yates shuffle driven by the seed. Same seed, same order.
pub fn shuffle<T>(items: &mut [T], seed: u32) {
    for i in (1..items.len()).rev() {
        let j = rand_below(seed, i as u32, i + 1);
        items.swap(i, j);
    }
}

/// Build a session deck of up to `count` cards, drawing roughly half and half
/// from both word lists without repeating a word. Stops early once both pools
/// run dry, so any `count` terminates.
pub fn build_session(seed: u32, count: usize) -> Vec<DeckWord> {
    let mut chairs: Vec<&'static str> = CHAIR_WORDS.to_vec();
    let mut swears: Vec<&'static str> = SWEAR_WORDS.to_vec();
    shuffle(&mut chairs, splitmix32(seed));
    shuffle(&mut swears, splitmix32(seed ^ 0x5EED));

    let mut deck = Vec::with_capacity(count.min(chairs.len() + swears.len()));
    for slot in 0..count {
        let pick_chair = match (chairs.is_empty(), swears.is_empty()) {
            (true, true) => break,
            (false, true) => true,
            (true, false) => false,
            (false, false) => splitmix32(seed ^ (slot as u32)) & 1 == 0,
        };
        if pick_chair {
            if let Some(word) = chairs.pop() {
                deck.push(DeckWord {
                    word,
                    kind: WordKind::Chair,
                });
            }
        } else if let Some(word) = swears.pop() {
            deck.push(DeckWord {
                word,
                kind: WordKind::Swear,
            });
        }
    }
    deck
}

/// Which list a word belongs to, if either.
pub fn classify(word: &str) -> Option<WordKind> {
    if CHAIR_WORDS.contains(&word) {
        Some(WordKind::Chair)
    } else if SWEAR_WORDS.contains(&word) {
        Some(WordKind::Swear)
    } else {
        None
    }
}

/// Whether a guess matches the word's list.
pub fn is_correct(word: &str, guess: WordKind) -> bool {
    classify(word) == Some(guess)
}
