use std::path::PathBuf;

use crate::{
    domain::{
        common::{SpeechRecognitionConfig, entities::app_errors::CoreError},
        voice::ports::SpeechRecognizer,
    },
    infrastructure::voice::{
        command_recognizer::CommandSpeechRecognizer, http_recognizer::HttpSpeechRecognizer,
    },
};

/// The configured speech-to-text backend.
#[derive(Debug, Clone)]
pub enum SpeechRecognizerClient {
    Command(CommandSpeechRecognizer),
    Http(HttpSpeechRecognizer),
}

impl From<&SpeechRecognitionConfig> for SpeechRecognizerClient {
    fn from(config: &SpeechRecognitionConfig) -> Self {
        match config {
            SpeechRecognitionConfig::Command { program, args } => SpeechRecognizerClient::Command(
                CommandSpeechRecognizer::new(program.clone(), args.clone()),
            ),
            SpeechRecognitionConfig::Http {
                base_url,
                api_key,
                model,
            } => SpeechRecognizerClient::Http(HttpSpeechRecognizer::new(
                base_url.clone(),
                api_key.clone(),
                model.clone(),
            )),
        }
    }
}

impl SpeechRecognizer for SpeechRecognizerClient {
    async fn transcribe(&self, input: PathBuf) -> Result<Option<String>, CoreError> {
        match self {
            SpeechRecognizerClient::Command(recognizer) => recognizer.transcribe(input).await,
            SpeechRecognizerClient::Http(recognizer) => recognizer.transcribe(input).await,
        }
    }
}
