use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use menubot_core::domain::{
    common::entities::app_errors::CoreError, voice::ports::VoiceService,
};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

fn content_type(file_name: &str) -> &'static str {
    match file_name.rsplit_once('.').map(|(_, extension)| extension) {
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mpeg",
        Some("ogg") => "audio/ogg",
        _ => "application/octet-stream",
    }
}

#[utoipa::path(
    get,
    path = "/static/audio/{file_name}",
    tag = "voice",
    summary = "Download a clip",
    params(
        ("file_name" = String, Path, description = "Clip file name"),
    ),
    responses(
        (status = 200, content_type = "audio/wav", body = Vec<u8>),
        (status = 404, description = "Clip not found")
    )
)]
pub async fn get_audio(
    Path(file_name): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let path = state.service.clip_path(file_name.clone()).await?;
    let bytes = tokio::fs::read(&path).await.map_err(CoreError::from)?;

    Ok(([(header::CONTENT_TYPE, content_type(&file_name))], bytes))
}
