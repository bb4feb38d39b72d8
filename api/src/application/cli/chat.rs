use anyhow::Context;
use menubot_core::{
    application::MenubotService,
    domain::{
        chat::{entities::ChatTurn, ports::ChatService},
        voice::ports::VoiceService,
    },
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const VOICE_MESSAGE: &str = "voice message";

#[derive(Debug, PartialEq, Eq)]
enum ChatInput {
    Quit,
    Voice,
    Text(String),
}

fn classify_input(line: &str) -> ChatInput {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" | "exit" | "quit" => ChatInput::Quit,
        VOICE_MESSAGE => ChatInput::Voice,
        _ => ChatInput::Text(line.to_string()),
    }
}

/// Order from the terminal until the user quits or confirms the order.
pub async fn run_chat(service: MenubotService, voice: bool) -> Result<(), anyhow::Error> {
    let mut conversation = service
        .start_order_conversation()
        .await
        .context("could not prepare the conversation")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    println!("Type your order, '{VOICE_MESSAGE}' to speak it, or 'exit' to leave.");

    loop {
        stdout.write_all(b"User: ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let message = match classify_input(&line) {
            ChatInput::Quit => break,
            ChatInput::Text(text) => text,
            ChatInput::Voice => match service.listen().await? {
                Some(text) => {
                    println!("You said: {text}");
                    text
                }
                None => {
                    println!("Sorry, I could not understand the audio.");
                    break;
                }
            },
        };

        let (next, turn) = match service.reply(conversation.clone(), message).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, "Chat completion failed");
                println!("pAI: Sorry, something went wrong. Please try again.");
                continue;
            }
        };
        conversation = next;

        match turn {
            ChatTurn::Reply { content } => {
                println!("pAI: {content}");
                if voice && let Err(e) = service.speak(content).await {
                    tracing::warn!(error = %e, "Could not speak the reply");
                }
            }
            ChatTurn::OrderConfirmed { order } => {
                println!("Your order:");
                for line in &order {
                    println!("  {line}");
                }
                break;
            }
        }
    }

    Ok(())
}
