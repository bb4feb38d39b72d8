use axum::{extract::State, http::StatusCode};
use menubot_core::domain::voice::ports::VoiceService;

use crate::application::http::{
    server::{
        api_entities::api_error::{ApiError, ValidateJson},
        app_state::AppState,
    },
    voice::validators::DeleteAudioValidator,
};

#[utoipa::path(
    delete,
    path = "/delete_audio",
    tag = "voice",
    summary = "Delete a clip",
    request_body = DeleteAudioValidator,
    responses(
        (status = 204, description = "Clip deleted"),
        (status = 400, description = "File name is not a bare clip name"),
        (status = 404, description = "Clip not found")
    )
)]
pub async fn delete_audio(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DeleteAudioValidator>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_clip(payload.file_name).await?;

    Ok(StatusCode::NO_CONTENT)
}
