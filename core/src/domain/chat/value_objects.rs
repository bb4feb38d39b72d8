use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SendChatMessageInput {
    pub session_id: Uuid,
    pub message: String,
}
