pub mod gemini_client;
pub mod openai_compatible_client;
pub mod provider;

pub use gemini_client::GeminiClient;
pub use openai_compatible_client::{CompletionOptions, OpenAICompatibleClient, SamplingOptions};
pub use provider::LlmClient;
