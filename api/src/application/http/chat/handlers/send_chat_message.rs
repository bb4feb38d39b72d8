use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use menubot_core::domain::chat::{
    entities::ChatTurn, ports::ChatService, value_objects::SendChatMessageInput,
};

use crate::application::http::{
    chat::validators::SendChatMessageValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    session::resolve_session,
};

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    summary = "Talk to the ordering assistant",
    description = "Sends one message in the session's ordering conversation. Saying 'Confirm my order' ends it and returns the parsed order.",
    request_body = SendChatMessageValidator,
    responses(
        (status = 200, body = ChatTurn),
        (status = 502, description = "The language model could not be reached")
    )
)]
pub async fn send_chat_message(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidateJson(payload): ValidateJson<SendChatMessageValidator>,
) -> Result<(CookieJar, Response<ChatTurn>), ApiError> {
    let (jar, session_id) = resolve_session(jar);

    let turn = state
        .service
        .send_chat_message(SendChatMessageInput {
            session_id,
            message: payload.message,
        })
        .await?;

    Ok((jar, Response::OK(turn)))
}
