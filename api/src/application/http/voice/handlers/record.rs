use axum::extract::State;
use menubot_core::domain::voice::ports::VoiceService;
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
    voice::validators::{RecordAction, RecordValidator},
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecordResponse {
    pub status: String,
    /// Set when a stopped recording was understood.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[utoipa::path(
    post,
    path = "/record",
    tag = "voice",
    summary = "Start or stop recording",
    description = "Starts recording from the server's microphone, or stops the running recording and transcribes it. Only one recording runs at a time.",
    request_body = RecordValidator,
    responses(
        (status = 200, body = RecordResponse),
        (status = 400, description = "No recording to stop"),
        (status = 409, description = "A recording is already running"),
        (status = 502, description = "Recorder or recognizer failed")
    )
)]
pub async fn record(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecordValidator>,
) -> Result<Response<RecordResponse>, ApiError> {
    match payload.action {
        RecordAction::Start => {
            state.service.start_recording().await?;

            Ok(Response::OK(RecordResponse {
                status: "recording".to_string(),
                text: None,
            }))
        }
        RecordAction::Stop => {
            let transcript = state.service.stop_recording().await?;
            let status = if transcript.text.is_some() {
                "transcribed"
            } else {
                "not_understood"
            };

            Ok(Response::OK(RecordResponse {
                status: status.to_string(),
                text: transcript.text,
            }))
        }
    }
}
