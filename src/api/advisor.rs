// src/api/advisor.rs

use serde::{Deserialize, Serialize};

use crate::session::state::SessionState;

/// Models the advisory backend accepts, with their display labels.
pub const MODEL_CATALOG: [(&str, &str); 2] = [
    (
        "ft:gpt-4o-mini-2024-07-18:personal::Af1GA1or",
        "Fine-tuned Poker Model",
    ),
    ("gpt-4o-mini", "Standard GPT-4o Mini"),
];

/// Sampling configuration passed through to the backend verbatim; the
/// core never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelParams {
    pub model_id: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        ModelParams {
            model_id: MODEL_CATALOG[0].0.to_string(),
            temperature: 0.7,
            max_tokens: 512,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

impl ModelParams {
    /// Clamp every knob into the range the backend accepts.
    pub fn clamped(mut self) -> ModelParams {
        self.temperature = self.temperature.clamp(0.0, 1.0);
        self.max_tokens = self.max_tokens.clamp(1, 2048);
        self.top_p = self.top_p.clamp(0.0, 1.0);
        self.frequency_penalty = self.frequency_penalty.clamp(-2.0, 2.0);
        self.presence_penalty = self.presence_penalty.clamp(-2.0, 2.0);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub game_state: Option<&'a SessionState>,
    pub model_params: Option<&'a ModelParams>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ChatData>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatData {
    pub message: String,
}

/// Ask the advisory backend for commentary. Returns the prose on success
/// and a displayable description of what went wrong otherwise.
pub async fn request_advice(
    client: &reqwest::Client,
    base_url: &str,
    request: &ChatRequest<'_>,
) -> Result<String, String> {
    let response = client
        .post(format!("{}/chat", base_url))
        .json(request)
        .send()
        .await
        .map_err(|e| format!("Advisor error: {}", e))?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(format!("Advisor error ({}): {}", status, error_text));
    }

    let parsed: ChatResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse advisor response: {}", e))?;

    if !parsed.success {
        return Err(parsed
            .error
            .unwrap_or_else(|| "Advisor reported a failure".to_string()));
    }
    parsed
        .data
        .map(|d| d.message)
        .ok_or_else(|| "Advisor returned no message".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_the_catalog_head() {
        let params = ModelParams::default();
        assert_eq!(params.model_id, MODEL_CATALOG[0].0);
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.max_tokens, 512);
    }

    #[test]
    fn clamping_pins_every_knob_to_its_range() {
        let params = ModelParams {
            model_id: "gpt-4o-mini".to_string(),
            temperature: 3.0,
            max_tokens: 0,
            top_p: -1.0,
            frequency_penalty: 9.0,
            presence_penalty: -9.0,
        }
        .clamped();
        assert_eq!(params.temperature, 1.0);
        assert_eq!(params.max_tokens, 1);
        assert_eq!(params.top_p, 0.0);
        assert_eq!(params.frequency_penalty, 2.0);
        assert_eq!(params.presence_penalty, -2.0);
    }

    #[test]
    fn chat_request_serializes_the_wire_shape() {
        let state = SessionState::default();
        let params = ModelParams::default();
        let request = ChatRequest {
            message: "what now?",
            game_state: Some(&state),
            model_params: Some(&params),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["message"], "what now?");
        assert_eq!(value["game_state"]["stage"], "Preflop");
        assert_eq!(value["game_state"]["stack_size"], 100);
        assert!(value["game_state"]["player_cards"].as_array().unwrap().is_empty());
        assert_eq!(value["model_params"]["max_tokens"], 512);
    }
}
