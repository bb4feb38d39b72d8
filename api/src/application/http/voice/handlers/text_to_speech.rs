use axum::extract::State;
use menubot_core::domain::voice::{entities::AudioClip, ports::VoiceService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    voice::validators::TextToSpeechValidator,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TextToSpeechResponse {
    pub data: AudioClip,
    /// Where the clip can be fetched.
    pub url: String,
}

#[utoipa::path(
    post,
    path = "/tts",
    tag = "voice",
    summary = "Synthesize speech",
    description = "Writes the text as a WAV clip into the audio directory.",
    request_body = TextToSpeechValidator,
    responses(
        (status = 201, body = TextToSpeechResponse),
        (status = 502, description = "Synthesizer failed")
    )
)]
pub async fn text_to_speech(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<TextToSpeechValidator>,
) -> Result<Response<TextToSpeechResponse>, ApiError> {
    let clip = state.service.synthesize_clip(payload.text).await?;
    let url = format!(
        "{}/static/audio/{}",
        state.args.server.root_path, clip.file_name
    );

    Ok(Response::Created(TextToSpeechResponse { data: clip, url }))
}
