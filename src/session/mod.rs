// src/session/mod.rs
// The session container owned by the interaction loop: one hand's state,
// the chat transcript, the slot picker, and the recognition sequencer.

pub mod selection;
pub mod sequencer;
pub mod state;

pub use selection::{Board, Hand, SlotPicker, BOARD_MAX, HAND_SLOTS};
pub use sequencer::RequestSequencer;
pub use state::{
    SessionState, Stage, POSITIONS, STACK_DEFAULT_BB, STACK_MAX_BB, STACK_MIN_BB, STAGES,
};

use std::time::SystemTime;

use crate::api::advisor::{self, ChatRequest, ModelParams};
use crate::api::recognizer;
use crate::cards::Card;
use crate::format::markup::format_advisory;
use crate::format::summary::{format_game_state, has_valid_state};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// One transcript entry. User messages carry the state snapshot they were
/// sent with; bot messages arrive already marked up for display.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub role: Role,
    pub timestamp: SystemTime,
    pub game_state: Option<SessionState>,
}

pub struct Session {
    http: reqwest::Client,
    base_url: String,
    pub state: SessionState,
    pub picker: SlotPicker,
    pub model_params: ModelParams,
    transcript: Vec<Message>,
    recognitions: RequestSequencer,
}

impl Session {
    pub fn new(base_url: impl Into<String>) -> Session {
        Session {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            state: SessionState::default(),
            picker: SlotPicker::default(),
            model_params: ModelParams::default(),
            transcript: Vec::new(),
            recognitions: RequestSequencer::default(),
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    // ---- manual selection ----

    pub fn select_hand_card(&mut self, card: Card) {
        self.state.hand.select(card.normalized());
    }

    pub fn toggle_board_card(&mut self, card: Card) {
        self.state.board.toggle(card.normalized());
    }

    pub fn click_slot(&mut self, slot: usize) {
        self.picker.click_slot(slot);
    }

    pub fn click_rank(&mut self, rank: &str) {
        self.picker.click_rank(rank);
    }

    /// A suit click commits the picker's pending choice, if any, straight
    /// into the targeted hand slot.
    pub fn click_suit(&mut self, suit: &str) {
        if let Some((slot, card)) = self.picker.click_suit(suit) {
            tracing::debug!(slot, card = %format!("{}{}", card.rank, card.suit), "slot commit");
            self.state.hand.set_slot(slot, card);
        }
    }

    pub fn set_position(&mut self, position: &str) {
        self.state.position = position.to_uppercase();
    }

    pub fn set_stage(&mut self, stage: Stage) {
        self.state.stage = stage;
    }

    pub fn set_stack_size(&mut self, bb: u32) {
        self.state.set_stack_size(bb);
    }

    // ---- collaborator round-trips ----

    /// Send a screenshot to the recognizer and fold the result into the
    /// session. Responses overtaken by a newer upload are discarded, so
    /// the newest request always wins regardless of arrival order.
    pub async fn upload_screenshot(
        &mut self,
        image: Vec<u8>,
        filename: &str,
    ) -> Result<(), String> {
        let ticket = self.recognitions.begin();
        let response =
            recognizer::recognize_image(&self.http, &self.base_url, image, filename).await?;
        if !self.recognitions.is_current(ticket) {
            tracing::warn!(ticket, "discarding stale recognition response");
            return Ok(());
        }
        if let Some(data) = response.data.as_ref() {
            if let Some(options) = data.current_action_options.as_ref() {
                tracing::debug!(options = options.len(), "recognizer offered action options");
            }
        }
        self.state.apply_recognition(&response);
        tracing::info!(state = %format_game_state(&self.state), "recognition applied");
        Ok(())
    }

    /// One chat round-trip: decorate the outgoing text with the state
    /// summary when there is one, record both sides in the transcript,
    /// and turn any failure into an inline bot message rather than an
    /// error. Returns the bot message.
    pub async fn send_message(&mut self, input: &str) -> Message {
        let text = if has_valid_state(&self.state) {
            format!(
                "{}\n\nGame State: {}",
                input,
                format_game_state(&self.state)
            )
        } else {
            input.to_string()
        };
        self.transcript.push(Message {
            text: text.clone(),
            role: Role::User,
            timestamp: SystemTime::now(),
            game_state: Some(self.state.clone()),
        });

        let request = ChatRequest {
            message: &text,
            game_state: Some(&self.state),
            model_params: Some(&self.model_params),
        };
        let reply = match advisor::request_advice(&self.http, &self.base_url, &request).await {
            Ok(prose) => format_advisory(&prose),
            Err(err) => {
                tracing::warn!(error = %err, "advisory call failed");
                format!(
                    "Error: {}. Please check if the backend server is running.",
                    err
                )
            }
        };
        let message = Message {
            text: reply,
            role: Role::Bot,
            timestamp: SystemTime::now(),
            game_state: None,
        };
        self.transcript.push(message.clone());
        message
    }
}
