// src/api/recognizer.rs

use serde::Deserialize;
use uuid::Uuid;

use crate::cards::Card;

#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<RecognitionData>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Structured guesses from the recognizer. Every field is optional; the
/// session only replaces what is actually reported.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecognitionData {
    #[serde(default)]
    pub player_hand: Option<Vec<Card>>,
    #[serde(default)]
    pub board_cards: Option<Vec<Card>>,
    #[serde(default)]
    pub current_user_position: Option<String>,
    #[serde(default)]
    pub actions_until_now: Option<Vec<RecognizedAction>>,
    #[serde(default)]
    pub current_action_options: Option<Vec<ActionOption>>,
}

/// One action the recognizer read from the table history.
#[derive(Debug, Clone, Deserialize)]
pub struct RecognizedAction {
    pub position: String,
    pub action: String,
    #[serde(default)]
    pub bet_size: Option<f64>,
}

/// An action the recognizer believes is currently available, with its
/// suggested frequency.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionOption {
    pub action: String,
    pub frequency: f64,
}

/// Ship a screenshot to the recognizer and return its structured guess.
/// The upload travels under a fresh unique name; only the extension of
/// the user's file is kept.
pub async fn recognize_image(
    client: &reqwest::Client,
    base_url: &str,
    image: Vec<u8>,
    filename: &str,
) -> Result<RecognitionResponse, String> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or("png");
    let upload_name = format!("{}.{}", Uuid::new_v4(), extension);
    let mime = match extension.to_lowercase().as_str() {
        "png" => "image/png",
        _ => "image/jpeg",
    };

    let part = reqwest::multipart::Part::bytes(image)
        .file_name(upload_name)
        .mime_str(mime)
        .map_err(|e| format!("Invalid upload type: {}", e))?;
    let form = reqwest::multipart::Form::new().part("file", part);

    let response = client
        .post(format!("{}/poker/upload", base_url))
        .multipart(form)
        .send()
        .await
        .map_err(|e| format!("Recognizer error: {}", e))?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(format!("Recognizer error ({}): {}", status, error_text));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse recognizer response: {}", e))
}
