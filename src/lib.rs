// src/lib.rs
// Session-state core for a hold'em advisory client: card normalization,
// hand/board selection, one-line state summaries, advisory markup, and
// HTTP wrappers for the recognizer and advisor collaborators.

pub mod api;
pub mod cards;
pub mod format;
pub mod session;

pub use api::{api_base_url, ModelParams, DEFAULT_API_BASE};
pub use cards::Card;
pub use format::{format_advisory, format_card, format_game_state, has_valid_state};
pub use session::{Board, Hand, Message, Role, Session, SessionState, SlotPicker, Stage};
