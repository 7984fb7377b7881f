// src/session/state.rs
// The per-hand snapshot the formatting pipeline reads and the recognizer
// writes into. One instance per session, owned by the interaction loop.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::recognizer::RecognitionResponse;
use crate::cards::Card;
use crate::session::selection::{Board, Hand};

/// Betting rounds, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Preflop,
    Flop,
    Turn,
    River,
}

pub const STAGES: [Stage; 4] = [Stage::Preflop, Stage::Flop, Stage::Turn, Stage::River];

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Stage::Preflop => "Preflop",
            Stage::Flop => "Flop",
            Stage::Turn => "Turn",
            Stage::River => "River",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Stage, String> {
        match s.to_lowercase().as_str() {
            "preflop" => Ok(Stage::Preflop),
            "flop" => Ok(Stage::Flop),
            "turn" => Ok(Stage::Turn),
            "river" => Ok(Stage::River),
            other => Err(format!("unknown stage: {}", other)),
        }
    }
}

/// Seat designations offered by the position selector.
pub const POSITIONS: [&str; 6] = ["BTN", "SB", "BB", "UTG", "MP", "CO"];

pub const STACK_MIN_BB: u32 = 10;
pub const STACK_MAX_BB: u32 = 200;
pub const STACK_DEFAULT_BB: u32 = 100;

/// Everything the advisor needs to know about the hand in progress.
/// Serializes to the wire shape the chat endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    pub position: String, // "" = unset
    pub stage: Stage,
    pub stack_size: u32,
    #[serde(rename = "board_cards")]
    pub board: Board,
    #[serde(rename = "player_cards")]
    pub hand: Hand,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            position: String::new(),
            stage: Stage::Preflop,
            stack_size: STACK_DEFAULT_BB,
            board: Board::default(),
            hand: Hand::default(),
        }
    }
}

impl SessionState {
    pub fn set_stack_size(&mut self, bb: u32) {
        self.stack_size = bb.clamp(STACK_MIN_BB, STACK_MAX_BB);
    }

    /// Fold a recognizer result into the session. The recognizer is
    /// authoritative for whatever it reports, so present fields replace
    /// wholesale; absent fields stay as they were. A failed or shapeless
    /// response changes nothing and surfaces no error here.
    pub fn apply_recognition(&mut self, response: &RecognitionResponse) {
        if !response.success {
            return;
        }
        let Some(data) = response.data.as_ref() else {
            return;
        };
        if let Some(cards) = data.player_hand.as_ref() {
            self.hand.replace_with(cards.iter().map(Card::normalized));
        }
        if let Some(cards) = data.board_cards.as_ref() {
            self.board.replace_with(cards.iter().map(Card::normalized));
        }
        if let Some(position) = data.current_user_position.as_ref() {
            self.position = position.to_uppercase();
        }
    }
}
