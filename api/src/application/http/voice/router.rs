use super::handlers::delete_audio::{__path_delete_audio, delete_audio};
use super::handlers::get_audio::{__path_get_audio, get_audio};
use super::handlers::record::{__path_record, record};
use super::handlers::text_to_speech::{__path_text_to_speech, text_to_speech};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(record, text_to_speech, get_audio, delete_audio))]
pub struct VoiceApiDoc;

pub fn voice_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/record", root_path), post(record))
        .route(&format!("{}/tts", root_path), post(text_to_speech))
        .route(
            &format!("{}/static/audio/{{file_name}}", root_path),
            get(get_audio),
        )
        .route(&format!("{}/delete_audio", root_path), delete(delete_audio))
}
