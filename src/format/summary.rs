// src/format/summary.rs

use crate::cards::Card;
use crate::session::state::{SessionState, Stage};

/// Compact card token, rank directly followed by the suit glyph.
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank, card.suit)
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// One-line summary of the present fields, fixed order, ` | ` separated.
/// Position is omitted when unset, the stack when zero, hand and board
/// when empty; the stage enum has no empty value and always prints.
pub fn format_game_state(state: &SessionState) -> String {
    let mut parts = Vec::new();
    if !state.position.is_empty() {
        parts.push(format!("Position: {}", state.position));
    }
    parts.push(format!("Stage: {}", state.stage));
    if state.stack_size != 0 {
        parts.push(format!("Stack: {}BB", state.stack_size));
    }
    if !state.hand.is_empty() {
        parts.push(format!("Hand: {}", format_cards(state.hand.cards())));
    }
    if !state.board.is_empty() {
        parts.push(format!("Board: {}", format_cards(state.board.cards())));
    }
    parts.join(" | ")
}

/// True iff at least one field is present. The stage counts only when it
/// differs from the preflop default, so the one invalid state is the
/// untouched blank: no position, preflop, zero stack, nothing selected.
/// Gates whether the summary line decorates the outgoing message at all.
pub fn has_valid_state(state: &SessionState) -> bool {
    !state.position.is_empty()
        || state.stage != Stage::Preflop
        || state.stack_size != 0
        || !state.hand.is_empty()
        || !state.board.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: &str, suit: &str) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn formats_the_full_summary_line() {
        let mut state = SessionState::default();
        state.position = "BTN".to_string();
        state.stage = Stage::Flop;
        state.stack_size = 100;
        state.hand.select(card("A", "♠"));
        state.hand.select(card("K", "♥"));
        state.board.toggle(card("Q", "♦"));
        assert_eq!(
            format_game_state(&state),
            "Position: BTN | Stage: Flop | Stack: 100BB | Hand: A♠ K♥ | Board: Q♦"
        );
    }

    #[test]
    fn absent_fields_are_omitted() {
        let mut state = SessionState::default();
        state.position = "BTN".to_string();
        state.stack_size = 0;
        assert_eq!(format_game_state(&state), "Position: BTN | Stage: Preflop");
    }

    #[test]
    fn only_the_all_absent_state_is_invalid() {
        let blank = SessionState {
            stack_size: 0,
            ..SessionState::default()
        };
        assert!(!has_valid_state(&blank));

        let mut with_position = blank.clone();
        with_position.position = "SB".to_string();
        assert!(has_valid_state(&with_position));

        let mut with_stage = blank.clone();
        with_stage.stage = Stage::Turn;
        assert!(has_valid_state(&with_stage));

        let mut with_stack = blank.clone();
        with_stack.stack_size = 100;
        assert!(has_valid_state(&with_stack));

        let mut with_hand = blank.clone();
        with_hand.hand.select(card("A", "♠"));
        assert!(has_valid_state(&with_hand));

        let mut with_board = blank;
        with_board.board.toggle(card("Q", "♦"));
        assert!(has_valid_state(&with_board));
    }

    #[test]
    fn fresh_session_already_carries_a_stack() {
        // default stack of 100BB makes a brand-new session valid
        assert!(has_valid_state(&SessionState::default()));
    }
}
