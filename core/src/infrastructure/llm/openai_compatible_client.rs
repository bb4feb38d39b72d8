use futures::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    chat::{entities::ChatMessage, ports::ChatClient},
    common::entities::app_errors::CoreError,
};

/// Sampling knobs understood by AwanLLM. OpenAI rejects the
/// `repetition_penalty` and `top_k` fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplingOptions {
    pub repetition_penalty: f32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_tokens: u32,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            repetition_penalty: 1.1,
            temperature: 0.7,
            top_p: 0.9,
            top_k: 40,
            max_tokens: 1024,
        }
    }
}

/// Options sent alongside every request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompletionOptions {
    #[serde(flatten)]
    pub sampling: Option<SamplingOptions>,
    pub stream: bool,
}

/// Client for `/chat/completions` style APIs (AwanLLM, OpenAI and
/// anything mimicking them).
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    base_url: String,
    api_key: String,
    model: String,
    options: CompletionOptions,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(flatten)]
    options: &'a CompletionOptions,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: Delta,
}

#[derive(Debug, Default, Deserialize)]
struct Delta {
    content: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum StreamEvent {
    Delta(String),
    Done,
}

/// One line of a server-sent event stream. Blank lines, comments and
/// chunks without content yield `None`.
pub fn parse_stream_line(line: &str) -> Option<StreamEvent> {
    let data = line.trim().strip_prefix("data:")?.trim();

    if data == "[DONE]" {
        return Some(StreamEvent::Done);
    }

    match serde_json::from_str::<StreamChunk>(data) {
        Ok(chunk) => chunk
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta.content)
            .filter(|content| !content.is_empty())
            .map(StreamEvent::Delta),
        Err(e) => {
            tracing::debug!(error = %e, "Skipping unparsable stream chunk");
            None
        }
    }
}

pub fn join_stream_deltas(deltas: Vec<String>) -> Result<String, CoreError> {
    let content = deltas.concat();

    if content.is_empty() {
        return Err(CoreError::ExternalServiceError(
            "no bot responses".to_string(),
        ));
    }

    Ok(content)
}

/// Collects deltas from raw stream bytes, which may split lines anywhere.
#[derive(Debug, Default)]
pub struct StreamAccumulator {
    buffer: Vec<u8>,
    deltas: Vec<String>,
    done: bool,
}

impl StreamAccumulator {
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        if self.done {
            return;
        }
        self.buffer.extend_from_slice(bytes);

        while let Some(newline) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=newline).collect();
            self.push_line(&String::from_utf8_lossy(&line));
            if self.done {
                self.buffer.clear();
                return;
            }
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn finish(mut self) -> Result<String, CoreError> {
        if !self.done && !self.buffer.is_empty() {
            let rest = std::mem::take(&mut self.buffer);
            self.push_line(&String::from_utf8_lossy(&rest));
        }

        join_stream_deltas(self.deltas)
    }

    fn push_line(&mut self, line: &str) {
        match parse_stream_line(line) {
            Some(StreamEvent::Delta(content)) => self.deltas.push(content),
            Some(StreamEvent::Done) => self.done = true,
            None => {}
        }
    }
}

impl OpenAICompatibleClient {
    pub fn new(base_url: String, api_key: String, model: String, options: CompletionOptions) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            options,
            client: Client::new(),
        }
    }

    pub fn options(&self) -> &CompletionOptions {
        &self.options
    }

    async fn send(&self, messages: &[ChatMessage]) -> Result<reqwest::Response, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            options: &self.options,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Chat completion request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Chat completion API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "HTTP error! status: {} - {}",
                status, error_text
            )));
        }

        Ok(response)
    }

    async fn read_full(&self, response: reqwest::Response) -> Result<String, CoreError> {
        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse chat completion: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }

    async fn read_stream(&self, response: reqwest::Response) -> Result<String, CoreError> {
        let mut stream = response.bytes_stream();
        let mut accumulator = StreamAccumulator::default();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                CoreError::ExternalServiceError(format!("LLM stream error: {}", e))
            })?;
            accumulator.push_bytes(&chunk);
            if accumulator.is_done() {
                break;
            }
        }

        accumulator.finish()
    }
}

impl ChatClient for OpenAICompatibleClient {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String, CoreError> {
        tracing::debug!(
            model = %self.model,
            messages = messages.len(),
            stream = self.options.stream,
            "Requesting chat completion"
        );

        let response = self.send(&messages).await?;

        if self.options.stream {
            self.read_stream(response).await
        } else {
            self.read_full(response).await
        }
    }
}
