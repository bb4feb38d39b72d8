use crate::{
    domain::{
        chat::{entities::ChatMessage, ports::ChatClient},
        common::{LLMConfig, LLMProvider, entities::app_errors::CoreError},
    },
    infrastructure::llm::{
        gemini_client::GeminiClient,
        openai_compatible_client::{CompletionOptions, OpenAICompatibleClient, SamplingOptions},
    },
};

pub const MISSING_CREDENTIALS: &str = "Please provide the API key, model name";

/// The configured chat backend.
#[derive(Debug, Clone)]
pub enum LlmClient {
    OpenAICompatible(OpenAICompatibleClient),
    Gemini(GeminiClient),
}

impl LlmClient {
    pub fn from_config(config: &LLMConfig) -> Result<Self, CoreError> {
        let (Some(api_key), Some(model)) = (
            config.api_key.clone().filter(|key| !key.trim().is_empty()),
            config.model.clone().filter(|model| !model.trim().is_empty()),
        ) else {
            return Err(CoreError::Configuration(MISSING_CREDENTIALS.to_string()));
        };

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| config.provider.default_base_url().to_string());

        tracing::info!(provider = ?config.provider, %model, %base_url, "Using chat backend");

        Ok(match config.provider {
            LLMProvider::AwanLLM | LLMProvider::OpenAI => {
                LlmClient::OpenAICompatible(OpenAICompatibleClient::new(
                    base_url,
                    api_key,
                    model,
                    completion_options(config),
                ))
            }
            LLMProvider::Gemini => LlmClient::Gemini(GeminiClient::new(api_key, model, base_url)),
        })
    }
}

/// AwanLLM gets the full sampling set; OpenAI only the model defaults.
fn completion_options(config: &LLMConfig) -> CompletionOptions {
    CompletionOptions {
        sampling: (config.provider == LLMProvider::AwanLLM).then(SamplingOptions::default),
        stream: config.stream,
    }
}

impl ChatClient for LlmClient {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String, CoreError> {
        match self {
            LlmClient::OpenAICompatible(client) => client.chat_completion(messages).await,
            LlmClient::Gemini(client) => client.chat_completion(messages).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>, model: Option<&str>) -> LLMConfig {
        LLMConfig {
            provider: LLMProvider::AwanLLM,
            api_key: api_key.map(str::to_string),
            model: model.map(str::to_string),
            base_url: None,
            stream: true,
        }
    }

    #[test]
    fn test_missing_credentials_are_rejected() {
        for config in [
            config(None, Some("Meta-Llama-3-8B-Instruct")),
            config(Some("key"), None),
            config(Some(" "), Some("Meta-Llama-3-8B-Instruct")),
        ] {
            assert_eq!(
                LlmClient::from_config(&config).unwrap_err(),
                CoreError::Configuration(MISSING_CREDENTIALS.to_string())
            );
        }
    }

    #[test]
    fn test_provider_selects_client() {
        let client =
            LlmClient::from_config(&config(Some("key"), Some("Meta-Llama-3-8B-Instruct"))).unwrap();
        assert!(matches!(client, LlmClient::OpenAICompatible(_)));

        let gemini = LlmClient::from_config(&LLMConfig {
            provider: LLMProvider::Gemini,
            ..config(Some("key"), Some("gemini-1.5-flash"))
        })
        .unwrap();
        assert!(matches!(gemini, LlmClient::Gemini(_)));
    }

    #[test]
    fn test_sampling_options_only_for_awanllm() {
        let awan = LlmClient::from_config(&config(Some("key"), Some("Meta-Llama-3-8B-Instruct")))
            .unwrap();
        let LlmClient::OpenAICompatible(awan) = awan else {
            panic!("expected an OpenAI-compatible client");
        };
        assert_eq!(awan.options().sampling, Some(SamplingOptions::default()));

        let openai = LlmClient::from_config(&LLMConfig {
            provider: LLMProvider::OpenAI,
            ..config(Some("key"), Some("gpt-4o-mini"))
        })
        .unwrap();
        let LlmClient::OpenAICompatible(openai) = openai else {
            panic!("expected an OpenAI-compatible client");
        };
        assert_eq!(openai.options().sampling, None);
        assert!(openai.options().stream);
    }
}
