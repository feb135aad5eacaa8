//! Typewriter Text
//!
//! Cycles through phrases one character at a time: type, hold, erase,
//! advance. The stepping logic is a pure function driven by an interval.

use gloo_timers::callback::Interval;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

const TICK_MS: u32 = 80;

/// Ticks the full phrase stays on screen before erasing begins.
pub const HOLD_TICKS: u8 = 20;

/// One frame of the typewriter cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeState {
    pub phrase: usize,
    pub shown: usize,
    pub deleting: bool,
    pub hold: u8,
}

/// Advance the cycle by one tick. `phrase_len` is the character count of
/// the current phrase.
pub fn advance(state: TypeState, phrase_count: usize, phrase_len: usize) -> TypeState {
    if phrase_count == 0 {
        return state;
    }

    if state.hold > 0 {
        return TypeState {
            hold: state.hold - 1,
            ..state
        };
    }

    if state.deleting {
        if state.shown == 0 {
            TypeState {
                phrase: (state.phrase + 1) % phrase_count,
                shown: 0,
                deleting: false,
                hold: 0,
            }
        } else {
            TypeState {
                shown: state.shown - 1,
                ..state
            }
        }
    } else if state.shown < phrase_len {
        let shown = state.shown + 1;
        TypeState {
            shown,
            hold: if shown == phrase_len { HOLD_TICKS } else { 0 },
            ..state
        }
    } else {
        TypeState {
            deleting: true,
            ..state
        }
    }
}

/// Rotating typewriter line with a blinking caret.
#[component]
pub fn Typewriter(
    phrases: Vec<String>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let text = create_rw_signal(String::new());
    let state = Rc::new(Cell::new(TypeState::default()));
    let phrases = Rc::new(phrases);

    let interval = {
        let phrases = Rc::clone(&phrases);
        let state = Rc::clone(&state);
        Interval::new(TICK_MS, move || {
            if phrases.is_empty() {
                return;
            }
            let current = state.get();
            let phrase_len = phrases[current.phrase].chars().count();
            let next = advance(current, phrases.len(), phrase_len);
            state.set(next);
            text.set(phrases[next.phrase].chars().take(next.shown).collect());
        })
    };
    on_cleanup(move || drop(interval));

    view! {
        <span class=class>
            {move || text.get()}
            <span class="animate-pulse">"|"</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut state: TypeState, ticks: usize, phrase_count: usize, lens: &[usize]) -> TypeState {
        for _ in 0..ticks {
            state = advance(state, phrase_count, lens[state.phrase]);
        }
        state
    }

    #[test]
    fn types_one_character_per_tick() {
        let state = run(TypeState::default(), 3, 2, &[5, 4]);
        assert_eq!(state.shown, 3);
        assert!(!state.deleting);
    }

    #[test]
    fn holds_when_the_phrase_completes() {
        let state = run(TypeState::default(), 5, 2, &[5, 4]);
        assert_eq!(state.shown, 5);
        assert_eq!(state.hold, HOLD_TICKS);
    }

    #[test]
    fn erases_and_advances_to_the_next_phrase() {
        // 5 to type + 20 hold + 1 flip to deleting + 5 to erase + 1 advance
        let state = run(TypeState::default(), 32, 2, &[5, 4]);
        assert_eq!(state.phrase, 1);
        assert_eq!(state.shown, 0);
        assert!(!state.deleting);
    }

    #[test]
    fn wraps_around_the_phrase_list() {
        let mut state = TypeState {
            phrase: 1,
            shown: 0,
            deleting: true,
            hold: 0,
        };
        state = advance(state, 2, 4);
        assert_eq!(state.phrase, 0);
    }

    #[test]
    fn empty_phrase_list_is_inert() {
        let state = advance(TypeState::default(), 0, 0);
        assert_eq!(state, TypeState::default());
    }
}
