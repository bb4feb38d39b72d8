use std::future::Future;

use crate::domain::{
    chat::{
        entities::{ChatMessage, ChatTurn, Conversation},
        value_objects::SendChatMessageInput,
    },
    common::entities::app_errors::CoreError,
};

/// Hosted language model taking the whole message list and answering
/// with the assistant's content.
#[cfg_attr(test, mockall::automock)]
pub trait ChatClient: Send + Sync {
    fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    /// A fresh conversation seeded with the menu and ordering rules.
    fn start_order_conversation(
        &self,
    ) -> impl Future<Output = Result<Conversation, CoreError>> + Send;

    /// Apply one user input. The conversation is handed back with the
    /// new messages appended.
    fn reply(
        &self,
        conversation: Conversation,
        input: String,
    ) -> impl Future<Output = Result<(Conversation, ChatTurn), CoreError>> + Send;

    /// `reply` against the conversation stored in the caller's session.
    fn send_chat_message(
        &self,
        input: SendChatMessageInput,
    ) -> impl Future<Output = Result<ChatTurn, CoreError>> + Send;
}
