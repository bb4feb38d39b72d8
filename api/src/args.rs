use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use menubot_core::domain::common::{
    EthereumConfig, LLMConfig, LLMProvider, MenuConfig, MenubotConfig, SpeechRecognitionConfig,
    VoiceConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "menubot", version, about = "Food-ordering assistant")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub menu: MenuArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub voice: VoiceArgs,

    #[command(flatten)]
    pub ethereum: EthereumArgs,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the web shop.
    Serve,
    /// Order from the terminal.
    Chat {
        /// Speak replies out loud.
        #[arg(long, default_value_t = false)]
        voice: bool,
    },
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(
        long = "log-filter",
        env = "LOG_FILTER",
        default_value = "info"
    )]
    pub filter: String,

    #[arg(
        long = "log-json",
        env = "LOG_JSON",
        action = ArgAction::Set,
        default_value_t = false
    )]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix for every route, e.g. `/shop`.
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values = ["http://localhost:8000", "http://127.0.0.1:8000"]
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct MenuArgs {
    #[arg(long = "menu-path", env = "MENU_PATH", default_value = "menu.json")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmProviderArg {
    Awanllm,
    Openai,
    Gemini,
}

impl From<LlmProviderArg> for LLMProvider {
    fn from(provider: LlmProviderArg) -> Self {
        match provider {
            LlmProviderArg::Awanllm => LLMProvider::AwanLLM,
            LlmProviderArg::Openai => LLMProvider::OpenAI,
            LlmProviderArg::Gemini => LLMProvider::Gemini,
        }
    }
}

impl LlmProviderArg {
    pub fn api_key_env(&self) -> &'static str {
        match self {
            LlmProviderArg::Awanllm => "AWANLLM_API_KEY",
            LlmProviderArg::Openai => "OPENAI_API_KEY",
            LlmProviderArg::Gemini => "GEMINI_API_KEY",
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "llm-provider", env = "LLM_PROVIDER", value_enum, default_value_t = LlmProviderArg::Awanllm)]
    pub provider: LlmProviderArg,

    /// Falls back to the provider's own variable (`AWANLLM_API_KEY`,
    /// `OPENAI_API_KEY` or `GEMINI_API_KEY`) when unset.
    #[arg(long = "api-key", env = "LLM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "model", env = "MODEL_NAME")]
    pub model: Option<String>,

    #[arg(long = "llm-base-url", env = "LLM_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(
        long = "llm-stream",
        env = "LLM_STREAM",
        action = ArgAction::Set,
        default_value_t = true
    )]
    pub stream: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct VoiceArgs {
    #[arg(long = "tts-program", env = "TTS_PROGRAM", default_value = "espeak-ng")]
    pub tts_program: String,

    /// `{output}` is replaced by the file to write.
    #[arg(
        long = "tts-args",
        env = "TTS_ARGS",
        value_delimiter = ' ',
        allow_hyphen_values = true,
        default_values = ["-w", "{output}"]
    )]
    pub tts_args: Vec<String>,

    #[arg(
        long = "stt-program",
        env = "STT_PROGRAM",
        default_value = "pocketsphinx_continuous"
    )]
    pub stt_program: String,

    /// `{input}` is replaced by the recording to transcribe.
    #[arg(
        long = "stt-args",
        env = "STT_ARGS",
        value_delimiter = ' ',
        allow_hyphen_values = true,
        default_values = ["-infile", "{input}", "-logfn", "/dev/null"]
    )]
    pub stt_args: Vec<String>,

    /// When set, recordings go to this OpenAI-compatible transcription API
    /// instead of the local program.
    #[arg(long = "stt-api-url", env = "STT_API_URL")]
    pub stt_api_url: Option<String>,

    #[arg(long = "stt-api-key", env = "STT_API_KEY", hide_env_values = true)]
    pub stt_api_key: Option<String>,

    #[arg(long = "stt-model", env = "STT_MODEL", default_value = "whisper-1")]
    pub stt_model: String,

    #[arg(long = "ffmpeg-program", env = "FFMPEG_PROGRAM", default_value = "ffmpeg")]
    pub ffmpeg_program: String,

    #[arg(long = "input-format", env = "FFMPEG_INPUT_FORMAT")]
    pub input_format: Option<String>,

    #[arg(long = "input-device", env = "FFMPEG_INPUT_DEVICE")]
    pub input_device: Option<String>,

    #[arg(long = "record-seconds", env = "RECORD_SECONDS", default_value_t = 10)]
    pub record_seconds: u64,

    #[arg(long = "ffplay-program", env = "FFPLAY_PROGRAM", default_value = "ffplay")]
    pub ffplay_program: String,

    #[arg(long = "audio-dir", env = "AUDIO_DIR", default_value = "static/audio")]
    pub audio_dir: PathBuf,

    #[arg(long = "voice-work-dir", env = "VOICE_WORK_DIR")]
    pub work_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct EthereumArgs {
    #[arg(long = "eth-endpoint", env = "SEPOLIA_ETH_ENDPOINT")]
    pub endpoint: Option<String>,

    #[arg(long = "wallet-address", env = "SEPOLIA_WALLET_ADDRESS")]
    pub wallet_address: Option<String>,
}

/// ffmpeg capture backend and device for the current platform.
fn default_capture_input() -> (&'static str, &'static str) {
    if cfg!(target_os = "macos") {
        ("avfoundation", ":0")
    } else if cfg!(target_os = "windows") {
        ("dshow", "audio=Microphone")
    } else {
        ("pulse", "default")
    }
}

fn resolve_api_key(
    explicit: Option<String>,
    provider: LlmProviderArg,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    explicit
        .filter(|key| !key.trim().is_empty())
        .or_else(|| lookup(provider.api_key_env()))
}

impl From<Args> for MenubotConfig {
    fn from(args: Args) -> Self {
        let recognition = match (args.voice.stt_api_url, args.voice.stt_api_key) {
            (Some(base_url), api_key) => SpeechRecognitionConfig::Http {
                base_url,
                api_key: api_key.unwrap_or_default(),
                model: args.voice.stt_model,
            },
            (None, _) => SpeechRecognitionConfig::Command {
                program: args.voice.stt_program,
                args: args.voice.stt_args,
            },
        };

        let (default_format, default_device) = default_capture_input();

        let ethereum = match (args.ethereum.endpoint, args.ethereum.wallet_address) {
            (Some(endpoint), Some(wallet_address)) => Some(EthereumConfig {
                endpoint,
                wallet_address,
            }),
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!(
                    "Both SEPOLIA_ETH_ENDPOINT and SEPOLIA_WALLET_ADDRESS are needed for payments"
                );
                None
            }
            (None, None) => None,
        };

        MenubotConfig {
            menu: MenuConfig {
                path: args.menu.path,
            },
            llm: LLMConfig {
                provider: args.llm.provider.into(),
                api_key: resolve_api_key(args.llm.api_key, args.llm.provider, |name| {
                    std::env::var(name).ok()
                }),
                model: args.llm.model,
                base_url: args.llm.base_url,
                stream: args.llm.stream,
            },
            voice: VoiceConfig {
                tts_program: args.voice.tts_program,
                tts_args: args.voice.tts_args,
                recognition,
                ffmpeg_program: args.voice.ffmpeg_program,
                input_format: args
                    .voice
                    .input_format
                    .unwrap_or_else(|| default_format.to_string()),
                input_device: args
                    .voice
                    .input_device
                    .unwrap_or_else(|| default_device.to_string()),
                record_duration: Duration::from_secs(args.voice.record_seconds),
                ffplay_program: args.voice.ffplay_program,
                audio_dir: args.voice.audio_dir,
                work_dir: args
                    .voice
                    .work_dir
                    .unwrap_or_else(|| std::env::temp_dir().join("menubot")),
            },
            ethereum,
        }
    }
}
