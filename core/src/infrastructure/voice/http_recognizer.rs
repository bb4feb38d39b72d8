use std::path::PathBuf;

use reqwest::{Client, multipart};
use serde::Deserialize;

use crate::domain::{common::entities::app_errors::CoreError, voice::ports::SpeechRecognizer};

/// OpenAI-compatible `/audio/transcriptions` endpoint.
#[derive(Debug, Clone)]
pub struct HttpSpeechRecognizer {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

impl HttpSpeechRecognizer {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            client: Client::new(),
        }
    }
}

impl SpeechRecognizer for HttpSpeechRecognizer {
    async fn transcribe(&self, input: PathBuf) -> Result<Option<String>, CoreError> {
        let audio = tokio::fs::read(&input).await?;
        let file_name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.wav".to_string());

        let part = multipart::Part::bytes(audio)
            .file_name(file_name)
            .mime_str("audio/wav")
            .map_err(|e| CoreError::ExternalServiceError(e.to_string()))?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("model", self.model.clone());

        let url = format!("{}/audio/transcriptions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Transcription request failed: {}", e);
                CoreError::ExternalServiceError(format!(
                    "Could not request results from speech recognition service; {}",
                    e
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Transcription API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "STT API error {}: {}",
                status, error_text
            )));
        }

        let transcription: TranscriptionResponse = response.json().await.map_err(|e| {
            CoreError::ExternalServiceError(format!("Failed to parse transcription: {}", e))
        })?;
        let text = transcription.text.trim().to_string();

        Ok((!text.is_empty()).then_some(text))
    }
}
