use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    chat::ports::ChatClient,
    menu::ports::MenuRepository,
    payment::{entities::PaymentGateway, ports::EthereumClient},
    session::ports::SessionRepository,
    voice::{
        ports::{AudioPlayer, AudioRecorder, SpeechRecognizer, SpeechSynthesizer},
        value_objects::VoiceSettings,
    },
};

/// Every feature service is implemented on this one value; the type
/// parameters are the adapters plugged into its ports.
pub struct Service<M, L, S, E, TTS, STT, AR, AP>
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
    pub(crate) menu_repository: M,
    pub(crate) llm_client: L,
    pub(crate) session_repository: S,
    pub(crate) payment: Option<PaymentGateway<E>>,
    pub(crate) speech_synthesizer: TTS,
    pub(crate) speech_recognizer: STT,
    pub(crate) audio_recorder: AR,
    pub(crate) audio_player: AP,
    pub(crate) voice_settings: VoiceSettings,
    pub(crate) active_recording: Arc<Mutex<Option<AR::Recording>>>,
}

impl<M, L, S, E, TTS, STT, AR, AP> Service<M, L, S, E, TTS, STT, AR, AP>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        menu_repository: M,
        llm_client: L,
        session_repository: S,
        payment: Option<PaymentGateway<E>>,
        speech_synthesizer: TTS,
        speech_recognizer: STT,
        audio_recorder: AR,
        audio_player: AP,
        voice_settings: VoiceSettings,
    ) -> Self {
        Self {
            menu_repository,
            llm_client,
            session_repository,
            payment,
            speech_synthesizer,
            speech_recognizer,
            audio_recorder,
            audio_player,
            voice_settings,
            active_recording: Arc::new(Mutex::new(None)),
        }
    }
}

// Written out by hand: a derive would also require `AR::Recording: Clone`.
impl<M, L, S, E, TTS, STT, AR, AP> Clone for Service<M, L, S, E, TTS, STT, AR, AP>
where
    M: MenuRepository + Clone,
    L: ChatClient + Clone,
    S: SessionRepository + Clone,
    E: EthereumClient + Clone,
    TTS: SpeechSynthesizer + Clone,
    STT: SpeechRecognizer + Clone,
    AR: AudioRecorder + Clone,
    AP: AudioPlayer + Clone,
{
    fn clone(&self) -> Self {
        Self {
            menu_repository: self.menu_repository.clone(),
            llm_client: self.llm_client.clone(),
            session_repository: self.session_repository.clone(),
            payment: self.payment.clone(),
            speech_synthesizer: self.speech_synthesizer.clone(),
            speech_recognizer: self.speech_recognizer.clone(),
            audio_recorder: self.audio_recorder.clone(),
            audio_player: self.audio_player.clone(),
            voice_settings: self.voice_settings.clone(),
            active_recording: Arc::clone(&self.active_recording),
        }
    }
}
