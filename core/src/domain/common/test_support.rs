//! In-memory port implementations for service tests.

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tempfile::TempDir;

use crate::{
    domain::{
        chat::{entities::ChatMessage, ports::ChatClient},
        common::{entities::app_errors::CoreError, services::Service},
        menu::{
            entities::{Menu, MenuItem},
            ports::MenuRepository,
        },
        payment::{
            entities::{OnChainTransaction, PaymentGateway},
            ports::EthereumClient,
        },
        session::ports::SessionRepository,
        voice::{
            ports::{ActiveRecording, AudioPlayer, AudioRecorder, SpeechRecognizer, SpeechSynthesizer},
            value_objects::VoiceSettings,
        },
    },
    infrastructure::session::InMemorySessionRepository,
};

pub const WALLET_ADDRESS: &str = "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd";

pub fn tx_hash(n: u8) -> String {
    format!("0x{}", format!("{n:02x}").repeat(32))
}

fn item(name: &str, price: f64, category: &str, in_stock: bool) -> MenuItem {
    MenuItem {
        item: name.to_string(),
        price,
        amount: Some(10),
        in_stock,
        category: Some(category.to_string()),
        description: Some(format!("House {}", name.to_lowercase())),
    }
}

pub fn sample_menu() -> Menu {
    Menu::new(vec![
        item("Burgers", 8.99, "Mains", true),
        item("Veggie Wrap", 7.5, "Mains", false),
        item("French Fries", 2.99, "Sides", true),
        item("Cola", 1.5, "Drinks", true),
    ])
}

#[derive(Clone)]
pub struct FakeMenuRepository {
    menu: Menu,
}

impl MenuRepository for FakeMenuRepository {
    async fn fetch_menu(&self) -> Result<Menu, CoreError> {
        Ok(self.menu.clone())
    }
}

/// Answers with scripted replies in order and records every request.
#[derive(Clone, Default)]
pub struct FakeChatClient {
    replies: Arc<Mutex<VecDeque<String>>>,
    requests: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl FakeChatClient {
    pub fn push_reply(&self, reply: &str) {
        self.replies.lock().unwrap().push_back(reply.to_string());
    }

    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().unwrap().clone()
    }
}

impl ChatClient for FakeChatClient {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String, CoreError> {
        self.requests.lock().unwrap().push(messages);
        // let concurrent requests interleave like a real network call would
        tokio::task::yield_now().await;

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| CoreError::ExternalServiceError("no scripted reply".to_string()))
    }
}

#[derive(Clone, Default)]
pub struct FakeEthereumClient {
    transactions: Arc<Mutex<HashMap<String, OnChainTransaction>>>,
}

impl FakeEthereumClient {
    pub fn insert(&self, transaction: OnChainTransaction) {
        self.transactions
            .lock()
            .unwrap()
            .insert(transaction.hash.clone(), transaction);
    }
}

impl EthereumClient for FakeEthereumClient {
    async fn client_version(&self) -> Result<String, CoreError> {
        Ok("FakeChain/v1".to_string())
    }

    async fn get_transaction_by_hash(
        &self,
        hash: String,
    ) -> Result<Option<OnChainTransaction>, CoreError> {
        Ok(self.transactions.lock().unwrap().get(&hash).cloned())
    }
}

/// Writes the text itself as the "audio".
#[derive(Clone, Default)]
pub struct FakeSpeechSynthesizer {
    texts: Arc<Mutex<Vec<String>>>,
    failing: Arc<Mutex<bool>>,
}

impl FakeSpeechSynthesizer {
    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }

    /// Later calls write part of the file and then fail.
    pub fn fail_midway(&self) {
        *self.failing.lock().unwrap() = true;
    }
}

impl SpeechSynthesizer for FakeSpeechSynthesizer {
    async fn synthesize_to_file(&self, text: String, output: PathBuf) -> Result<(), CoreError> {
        tokio::fs::write(&output, text.as_bytes()).await?;
        if *self.failing.lock().unwrap() {
            return Err(CoreError::VoiceCommandFailed("synthesizer crashed".to_string()));
        }
        self.texts.lock().unwrap().push(text);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeSpeechRecognizer {
    transcripts: Arc<Mutex<VecDeque<Option<String>>>>,
}

impl FakeSpeechRecognizer {
    pub fn push_transcript(&self, transcript: Option<&str>) {
        self.transcripts
            .lock()
            .unwrap()
            .push_back(transcript.map(str::to_string));
    }
}

impl SpeechRecognizer for FakeSpeechRecognizer {
    async fn transcribe(&self, input: PathBuf) -> Result<Option<String>, CoreError> {
        if !input.exists() {
            return Err(CoreError::NotFound);
        }

        Ok(self.transcripts.lock().unwrap().pop_front().flatten())
    }
}

pub struct FakeRecording {
    output: PathBuf,
}

impl ActiveRecording for FakeRecording {
    async fn stop(self) -> Result<PathBuf, CoreError> {
        tokio::fs::write(&self.output, b"RIFF").await?;
        Ok(self.output)
    }
}

/// Holds the scratch directory so it lives as long as the service.
#[derive(Clone)]
pub struct FakeAudioRecorder {
    recorded: Arc<Mutex<Vec<PathBuf>>>,
    _scratch: Arc<TempDir>,
}

impl FakeAudioRecorder {
    pub fn recorded(&self) -> Vec<PathBuf> {
        self.recorded.lock().unwrap().clone()
    }
}

impl AudioRecorder for FakeAudioRecorder {
    type Recording = FakeRecording;

    async fn record(&self, output: PathBuf, _duration: Duration) -> Result<(), CoreError> {
        tokio::fs::write(&output, b"RIFF").await?;
        self.recorded.lock().unwrap().push(output);
        Ok(())
    }

    async fn start(&self, output: PathBuf) -> Result<FakeRecording, CoreError> {
        self.recorded.lock().unwrap().push(output.clone());
        Ok(FakeRecording { output })
    }
}

#[derive(Clone, Default)]
pub struct FakeAudioPlayer {
    played: Arc<Mutex<Vec<PathBuf>>>,
}

impl FakeAudioPlayer {
    pub fn played(&self) -> Vec<PathBuf> {
        self.played.lock().unwrap().clone()
    }
}

impl AudioPlayer for FakeAudioPlayer {
    async fn play(&self, input: PathBuf) -> Result<(), CoreError> {
        if !input.exists() {
            return Err(CoreError::NotFound);
        }
        self.played.lock().unwrap().push(input);
        Ok(())
    }
}

pub type TestService = Service<
    FakeMenuRepository,
    FakeChatClient,
    InMemorySessionRepository,
    FakeEthereumClient,
    FakeSpeechSynthesizer,
    FakeSpeechRecognizer,
    FakeAudioRecorder,
    FakeAudioPlayer,
>;

/// Handles onto the fakes wired into a [`TestService`].
pub struct Fakes {
    pub chat: FakeChatClient,
    pub ethereum: FakeEthereumClient,
    pub synthesizer: FakeSpeechSynthesizer,
    pub recognizer: FakeSpeechRecognizer,
    pub recorder: FakeAudioRecorder,
    pub player: FakeAudioPlayer,
}

pub fn test_service(menu: Menu) -> (TestService, Fakes) {
    service_with(FakeMenuRepository { menu }, InMemorySessionRepository::new())
}

/// Like [`test_service`] but with the menu and session ports supplied by
/// the caller, typically mocks.
pub fn service_with<M, S>(
    menu_repository: M,
    session_repository: S,
) -> (
    Service<
        M,
        FakeChatClient,
        S,
        FakeEthereumClient,
        FakeSpeechSynthesizer,
        FakeSpeechRecognizer,
        FakeAudioRecorder,
        FakeAudioPlayer,
    >,
    Fakes,
)
where
    M: MenuRepository,
    S: SessionRepository,
{
    let scratch = Arc::new(tempfile::tempdir().unwrap());
    let voice_settings = VoiceSettings {
        audio_dir: scratch.path().join("audio"),
        work_dir: scratch.path().join("work"),
        record_duration: Duration::from_secs(1),
    };

    let fakes = Fakes {
        chat: FakeChatClient::default(),
        ethereum: FakeEthereumClient::default(),
        synthesizer: FakeSpeechSynthesizer::default(),
        recognizer: FakeSpeechRecognizer::default(),
        recorder: FakeAudioRecorder {
            recorded: Arc::default(),
            _scratch: scratch,
        },
        player: FakeAudioPlayer::default(),
    };

    let service = Service::new(
        menu_repository,
        fakes.chat.clone(),
        session_repository,
        Some(PaymentGateway::new(fakes.ethereum.clone(), WALLET_ADDRESS)),
        fakes.synthesizer.clone(),
        fakes.recognizer.clone(),
        fakes.recorder.clone(),
        fakes.player.clone(),
        voice_settings,
    );

    (service, fakes)
}
