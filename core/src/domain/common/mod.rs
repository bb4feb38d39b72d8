use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

#[derive(Clone, Debug)]
pub struct MenubotConfig {
    pub menu: MenuConfig,
    pub llm: LLMConfig,
    pub voice: VoiceConfig,
    pub ethereum: Option<EthereumConfig>,
}

#[derive(Clone, Debug)]
pub struct MenuConfig {
    pub path: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LLMProvider {
    AwanLLM,
    OpenAI,
    Gemini,
}

impl LLMProvider {
    pub fn default_base_url(&self) -> &'static str {
        match self {
            LLMProvider::AwanLLM => "https://api.awanllm.com/v1",
            LLMProvider::OpenAI => "https://api.openai.com/v1",
            LLMProvider::Gemini => "https://generativelanguage.googleapis.com",
        }
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub provider: LLMProvider,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub stream: bool,
}

#[derive(Clone, Debug)]
pub enum SpeechRecognitionConfig {
    Command {
        program: String,
        args: Vec<String>,
    },
    Http {
        base_url: String,
        api_key: String,
        model: String,
    },
}

#[derive(Clone, Debug)]
pub struct VoiceConfig {
    pub tts_program: String,
    pub tts_args: Vec<String>,
    pub recognition: SpeechRecognitionConfig,
    pub ffmpeg_program: String,
    pub input_format: String,
    pub input_device: String,
    pub record_duration: Duration,
    pub ffplay_program: String,
    /// Clips served over HTTP live here.
    pub audio_dir: PathBuf,
    /// Scratch space for recordings and spoken replies.
    pub work_dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct EthereumConfig {
    pub endpoint: String,
    pub wallet_address: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
