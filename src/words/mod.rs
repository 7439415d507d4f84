//! Chair-or-swear page: one card at a time, guess whether the word is an
//! IKEA chair model or Swedish profanity. Buttons or arrow keys answer; a
//! wrong guess ends the round.

pub mod data;
pub mod deck;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::audio;
use crate::dom::{ensure_button, ensure_overlay, performance_now, set_style, set_text};

use data::{CHAIR_WORDS, SWEAR_WORDS};
use deck::{build_session, is_correct, DeckWord, WordKind};

const CARD_STYLE: &str = "position:fixed; top:34%; left:50%; transform:translate(-50%,-50%); font-family:'Fira Code', monospace; font-size:46px; font-weight:bold; text-align:center; color:#ffd166; background:rgba(0,0,0,0.55); padding:24px 48px; border-radius:16px; z-index:30;";
const CAPTION_STYLE: &str = "position:fixed; top:47%; left:50%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:15px; color:#9ca3af; text-align:center; z-index:30;";
const SCORE_STYLE: &str = "position:fixed; top:18px; left:50%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:18px; font-weight:bold; color:#ffd166; background:rgba(0,0,0,0.42); padding:6px 14px; border-radius:10px; z-index:30;";
const CHAIR_BUTTON_STYLE: &str = "position:fixed; top:60%; left:calc(50% - 16px); transform:translateX(-100%); font-family:'Fira Code', monospace; font-size:18px; font-weight:600; padding:14px 28px; background:rgba(0,0,0,0.55); border:1px solid #333; border-radius:12px; color:#ffd166; cursor:pointer; z-index:30;";
const SWEAR_BUTTON_STYLE: &str = "position:fixed; top:60%; left:calc(50% + 16px); font-family:'Fira Code', monospace; font-size:18px; font-weight:600; padding:14px 28px; background:rgba(0,0,0,0.55); border:1px solid #333; border-radius:12px; color:#ffd166; cursor:pointer; z-index:30;";
const START_BUTTON_STYLE: &str = "position:fixed; top:72%; left:50%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:15px; font-weight:600; padding:10px 22px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:10px; color:#ffd166; cursor:pointer; z-index:30;";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum RoundPhase {
    Ready,
    Playing,
    Over,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum GuessResult {
    Correct,
    /// Last card of the deck answered correctly; a fresh deck was dealt.
    DeckCleared,
    Wrong,
    Ignored,
}

struct WordState {
    deck: Vec<DeckWord>,
    position: usize,
    score: u32,
    phase: RoundPhase,
    last_miss: Option<DeckWord>,
}

impl WordState {
    fn new() -> Self {
        Self {
            deck: Vec::new(),
            position: 0,
            score: 0,
            phase: RoundPhase::Ready,
            last_miss: None,
        }
    }

    fn restart(&mut self, seed: u32) {
        self.deck = full_deck(seed);
        self.position = 0;
        self.score = 0;
        self.last_miss = None;
        self.phase = RoundPhase::Playing;
    }

    /// Applies one guess. `reseed` is only consumed when the deck runs out
    /// and a fresh one has to be dealt; the running score carries over.
    fn apply_guess(&mut self, guess: WordKind, reseed: u32) -> GuessResult {
        if self.phase != RoundPhase::Playing {
            return GuessResult::Ignored;
        }
        let Some(card) = self.deck.get(self.position).copied() else {
            self.phase = RoundPhase::Over;
            return GuessResult::Ignored;
        };
        if is_correct(card.word, guess) {
            self.score += 1;
            self.position += 1;
            if self.position >= self.deck.len() {
                self.deck = full_deck(reseed);
                self.position = 0;
                GuessResult::DeckCleared
            } else {
                GuessResult::Correct
            }
        } else {
            self.last_miss = Some(card);
            self.phase = RoundPhase::Over;
            GuessResult::Wrong
        }
    }
}

fn full_deck(seed: u32) -> Vec<DeckWord> {
    build_session(seed, CHAIR_WORDS.len() + SWEAR_WORDS.len())
}

fn kind_label(kind: WordKind) -> &'static str {
    match kind {
        WordKind::Chair => "chair",
        WordKind::Swear => "swear word",
    }
}

fn time_seed() -> u32 {
    (performance_now() * 1000.0) as u64 as u32
}

pub(crate) fn start_word_page() -> Result<(), JsValue> {
    let doc = crate::dom::document()?;

    ensure_overlay(&doc, "da-word-card", CARD_STYLE)?;
    ensure_overlay(&doc, "da-word-caption", CAPTION_STYLE)?;
    ensure_overlay(&doc, "da-word-score", SCORE_STYLE)?;
    ensure_button(&doc, "da-word-chair", "\u{1FA91} Chair", CHAIR_BUTTON_STYLE)?;
    ensure_button(&doc, "da-word-swear", "\u{1F4A2} Swear", SWEAR_BUTTON_STYLE)?;
    ensure_button(&doc, "da-word-start", "Start Game", START_BUTTON_STYLE)?;

    WORD_STATE.with(|cell| cell.replace(Some(WordState::new())));

    if let Some(chair) = doc.get_element_by_id("da-word-chair") {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            answer_clicked(WordKind::Chair);
        }) as Box<dyn FnMut(_)>);
        chair.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    if let Some(swear) = doc.get_element_by_id("da-word-swear") {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            answer_clicked(WordKind::Swear);
        }) as Box<dyn FnMut(_)>);
        swear.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    if let Some(start) = doc.get_element_by_id("da-word-start") {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            start_clicked();
        }) as Box<dyn FnMut(_)>);
        start.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let keydown = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        match evt.key().as_str() {
            "ArrowLeft" => answer_clicked(WordKind::Chair),
            "ArrowRight" => answer_clicked(WordKind::Swear),
            _ => {}
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();

    WORD_STATE.with(|cell| {
        if let Some(state) = cell.borrow().as_ref() {
            sync_dom(state);
        }
    });
    Ok(())
}

thread_local! {
    static WORD_STATE: std::cell::RefCell<Option<WordState>> = std::cell::RefCell::new(None);
}

fn answer_clicked(guess: WordKind) {
    WORD_STATE.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let Some(state) = borrow.as_mut() else {
            return;
        };
        match state.apply_guess(guess, time_seed()) {
            GuessResult::Correct => audio::play_click(),
            GuessResult::DeckCleared => audio::play_success(),
            GuessResult::Wrong => audio::play_error(),
            GuessResult::Ignored => return,
        }
        sync_dom(state);
    });
}

fn start_clicked() {
    WORD_STATE.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let Some(state) = borrow.as_mut() else {
            return;
        };
        state.restart(time_seed());
        audio::play_click();
        sync_dom(state);
    });
}

fn sync_dom(state: &WordState) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    let (card_text, caption) = match state.phase {
        RoundPhase::Ready => (
            String::from("CHAIR OR SWEAR?"),
            String::from("Spot whether the word is an IKEA chair or Swedish profanity."),
        ),
        RoundPhase::Playing => {
            let word = state
                .deck
                .get(state.position)
                .map(|card| card.word)
                .unwrap_or("?");
            (
                String::from(word),
                String::from("\u{2B05} chair \u{2022} swear \u{27A1} (arrow keys work too)"),
            )
        }
        RoundPhase::Over => {
            let caption = match state.last_miss {
                Some(card) => format!(
                    "\u{274C} That was a {}! Final score: {}.",
                    kind_label(card.kind),
                    state.score
                ),
                None => format!("Final score: {}.", state.score),
            };
            let word = state.last_miss.map(|card| card.word).unwrap_or("GAME OVER");
            (String::from(word), caption)
        }
    };
    set_text(&doc, "da-word-card", &card_text);
    set_text(&doc, "da-word-caption", &caption);
    set_text(&doc, "da-word-score", &format!("Score: {}", state.score));
    set_text(
        &doc,
        "da-word-start",
        if state.phase == RoundPhase::Ready {
            "Start Game"
        } else {
            "Restart Game"
        },
    );
    let answers = if state.phase == RoundPhase::Playing {
        ""
    } else {
        " display:none;"
    };
    set_style(&doc, "da-word-chair", &format!("{CHAIR_BUTTON_STYLE}{answers}"));
    set_style(&doc, "da-word-swear", &format!("{SWEAR_BUTTON_STYLE}{answers}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opposite(kind: WordKind) -> WordKind {
        match kind {
            WordKind::Chair => WordKind::Swear,
            WordKind::Swear => WordKind::Chair,
        }
    }

    #[test]
    fn test_restart_deals_full_deck() {
        let mut state = WordState::new();
        assert_eq!(state.phase, RoundPhase::Ready);
        state.restart(7);
        assert_eq!(state.phase, RoundPhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.deck.len(), CHAIR_WORDS.len() + SWEAR_WORDS.len());
    }

    #[test]
    fn test_correct_guess_advances() {
        let mut state = WordState::new();
        state.restart(7);
        let kind = state.deck[0].kind;
        assert_eq!(state.apply_guess(kind, 99), GuessResult::Correct);
        assert_eq!(state.score, 1);
        assert_eq!(state.position, 1);
        assert_eq!(state.phase, RoundPhase::Playing);
    }

    #[test]
    fn test_wrong_guess_ends_round() {
        let mut state = WordState::new();
        state.restart(7);
        let card = state.deck[0];
        assert_eq!(state.apply_guess(opposite(card.kind), 99), GuessResult::Wrong);
        assert_eq!(state.phase, RoundPhase::Over);
        assert_eq!(state.last_miss, Some(card));
        assert_eq!(
            state.apply_guess(WordKind::Chair, 99),
            GuessResult::Ignored,
            "finished rounds ignore further guesses"
        );
    }

    #[test]
    fn test_deck_rollover_keeps_score() {
        let mut state = WordState::new();
        state.restart(3);
        let total = state.deck.len();
        for i in 0..total {
            let kind = state.deck[state.position].kind;
            let expected = if i + 1 == total {
                GuessResult::DeckCleared
            } else {
                GuessResult::Correct
            };
            assert_eq!(state.apply_guess(kind, 99), expected, "guess {i}");
        }
        assert_eq!(state.score as usize, total);
        assert_eq!(state.phase, RoundPhase::Playing);
        assert!(state.position < state.deck.len());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(kind_label(WordKind::Chair), "chair");
        assert_eq!(kind_label(WordKind::Swear), "swear word");
    }
}
