use tracing::instrument;

use crate::domain::{
    chat::{
        entities::{ChatTurn, Conversation, Role},
        helpers::{build_order_system_prompt, is_order_confirmation, parse_order_summary},
        ports::{ChatClient, ChatService},
        value_objects::SendChatMessageInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
    menu::{helpers::render_menu_text, ports::MenuRepository, value_objects::MenuTextStyle},
    payment::ports::EthereumClient,
    session::{entities::SessionData, ports::SessionRepository},
    voice::ports::{AudioPlayer, AudioRecorder, SpeechRecognizer, SpeechSynthesizer},
};

impl<M, L, S, E, TTS, STT, AR, AP> ChatService for Service<M, L, S, E, TTS, STT, AR, AP>
where
    M: MenuRepository,
    L: ChatClient,
    S: SessionRepository,
    E: EthereumClient,
    TTS: SpeechSynthesizer,
    STT: SpeechRecognizer,
    AR: AudioRecorder,
    AP: AudioPlayer,
{
    async fn start_order_conversation(&self) -> Result<Conversation, CoreError> {
        let menu = self.menu_repository.fetch_menu().await?;
        let menu_text = render_menu_text(&menu, MenuTextStyle::PriceOnly);

        Ok(Conversation::with_system_prompt(build_order_system_prompt(
            &menu_text,
        )))
    }

    #[instrument(skip(self, conversation, input), fields(messages = conversation.len()))]
    async fn reply(
        &self,
        mut conversation: Conversation,
        input: String,
    ) -> Result<(Conversation, ChatTurn), CoreError> {
        if is_order_confirmation(&input) {
            let order = conversation
                .last_assistant_message()
                .map(|message| parse_order_summary(&message.content))
                .unwrap_or_default();

            tracing::info!(lines = order.len(), "Order confirmed");

            return Ok((conversation, ChatTurn::OrderConfirmed { order }));
        }

        conversation.add_message(Role::User, input);

        let content = self
            .llm_client
            .chat_completion(conversation.messages.clone())
            .await?;

        conversation.add_message(Role::Assistant, content.clone());

        Ok((conversation, ChatTurn::Reply { content }))
    }

    #[instrument(skip(self, input), fields(session_id = %input.session_id))]
    async fn send_chat_message(&self, input: SendChatMessageInput) -> Result<ChatTurn, CoreError> {
        let session = self
            .session_repository
            .get_session(input.session_id)
            .await?;

        let conversation = match session.conversation {
            Some(conversation) => conversation,
            None => self.start_order_conversation().await?,
        };
        let known = conversation.len();

        let (conversation, turn) = self.reply(conversation, input.message).await?;
        let confirmed = matches!(turn, ChatTurn::OrderConfirmed { .. });

        // Other requests on this session may have moved the conversation on
        // while the model was answering: append this turn to what is stored.
        self.session_repository
            .update_session(
                input.session_id,
                Box::new(move |session: &mut SessionData| -> Result<(), CoreError> {
                    // A confirmed order closes the conversation; the next message starts over.
                    if confirmed {
                        session.conversation = None;
                        return Ok(());
                    }

                    session.conversation = match session.conversation.take() {
                        Some(mut stored) => {
                            stored
                                .messages
                                .extend(conversation.messages.into_iter().skip(known));
                            Some(stored)
                        }
                        None => Some(conversation),
                    };
                    Ok(())
                }),
            )
            .await?;

        Ok(turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        chat::entities::OrderLine,
        common::{
            generate_uuid_v7,
            test_support::{sample_menu, test_service},
        },
        session::ports::SessionRepository,
    };

    #[tokio::test]
    async fn test_start_order_conversation_lists_in_stock_menu() {
        let (service, _) = test_service(sample_menu());

        let conversation = service.start_order_conversation().await.unwrap();

        assert_eq!(conversation.len(), 1);
        let prompt = &conversation.messages[0];
        assert_eq!(prompt.role, Role::System);
        assert!(prompt.content.contains("Burgers: $8.99"));
        assert!(!prompt.content.contains("Veggie Wrap"));
    }

    #[tokio::test]
    async fn test_reply_appends_user_and_assistant_messages() {
        let (service, fakes) = test_service(sample_menu());
        fakes.chat.push_reply("Two burgers coming up.");

        let conversation = service.start_order_conversation().await.unwrap();
        let (conversation, turn) = service
            .reply(conversation, "Burgers: 2".to_string())
            .await
            .unwrap();

        assert_eq!(
            turn,
            ChatTurn::Reply {
                content: "Two burgers coming up.".to_string()
            }
        );
        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation.messages[1].content, "Burgers: 2");
        assert_eq!(conversation.messages[2].role, Role::Assistant);

        // the model saw the system prompt and the user message
        let sent = fakes.chat.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].len(), 2);
    }

    #[tokio::test]
    async fn test_confirmation_skips_model_and_parses_last_summary() {
        let (service, fakes) = test_service(sample_menu());

        let mut conversation = service.start_order_conversation().await.unwrap();
        conversation
            .add_message(Role::User, "Burgers: 2, French Fries: 1")
            .add_message(
                Role::Assistant,
                "* 2 Burgers: $8.99 x 2 = $17.98\n* 1 French Fries: $2.99",
            );

        let (_, turn) = service
            .reply(conversation, "Confirm my order".to_string())
            .await
            .unwrap();

        assert_eq!(
            turn,
            ChatTurn::OrderConfirmed {
                order: vec![
                    OrderLine {
                        quantity: 2,
                        name: "Burgers".to_string()
                    },
                    OrderLine {
                        quantity: 1,
                        name: "French Fries".to_string()
                    },
                ]
            }
        );
        assert!(fakes.chat.requests().is_empty());
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let (service, _) = test_service(sample_menu());

        let conversation = service.start_order_conversation().await.unwrap();
        let result = service.reply(conversation, "hello".to_string()).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_send_chat_message_keeps_conversation_in_session() {
        let (service, fakes) = test_service(sample_menu());
        fakes.chat.push_reply("Hi! What can I get you?");
        fakes.chat.push_reply("Added fries.");
        let session_id = generate_uuid_v7();

        for message in ["hello", "French Fries: 1"] {
            service
                .send_chat_message(SendChatMessageInput {
                    session_id,
                    message: message.to_string(),
                })
                .await
                .unwrap();
        }

        let session = service
            .session_repository
            .get_session(session_id)
            .await
            .unwrap();
        assert_eq!(session.conversation.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_interleaved_messages_on_one_session_are_both_kept() {
        let (service, fakes) = test_service(sample_menu());
        fakes.chat.push_reply("Burgers added.");
        fakes.chat.push_reply("Cola added.");
        let session_id = generate_uuid_v7();

        let send = |message: &str| {
            service.send_chat_message(SendChatMessageInput {
                session_id,
                message: message.to_string(),
            })
        };
        let (first, second) = futures::join!(send("Burgers: 1"), send("Cola: 1"));
        first.unwrap();
        second.unwrap();

        let conversation = service
            .session_repository
            .get_session(session_id)
            .await
            .unwrap()
            .conversation
            .unwrap();
        assert_eq!(conversation.len(), 5);
        let contents: Vec<_> = conversation
            .messages
            .iter()
            .map(|message| message.content.as_str())
            .collect();
        assert!(contents.contains(&"Burgers: 1"));
        assert!(contents.contains(&"Cola: 1"));
    }
}
