use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::domain::{
    chat::ports::ChatClient,
    common::{
        entities::app_errors::CoreError, generate_timestamp, generate_uuid_v7, services::Service,
    },
    menu::ports::MenuRepository,
    payment::ports::EthereumClient,
    session::ports::SessionRepository,
    voice::{
        entities::{AudioClip, Transcript},
        helpers::{sanitize_for_speech, validate_clip_name},
        ports::{
            ActiveRecording, AudioPlayer, AudioRecorder, SpeechRecognizer, SpeechSynthesizer,
            VoiceService,
        },
    },
};

async fn remove_quietly(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await
        && e.kind() != std::io::ErrorKind::NotFound
    {
        tracing::warn!(path = %path.display(), error = %e, "Failed to remove audio file");
    }
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
    async fn work_file(&self, prefix: &str, extension: &str) -> Result<PathBuf, CoreError> {
        tokio::fs::create_dir_all(&self.voice_settings.work_dir).await?;

        Ok(self
            .voice_settings
            .work_dir
            .join(format!("{prefix}-{}.{extension}", generate_uuid_v7())))
    }

    async fn transcribe_and_discard(&self, recording: PathBuf) -> Result<Option<String>, CoreError> {
        let transcript = self.speech_recognizer.transcribe(recording.clone()).await;
        remove_quietly(&recording).await;

        let transcript = transcript?;
        match &transcript {
            Some(text) => tracing::info!(chars = text.len(), "Recognized speech"),
            None => tracing::info!("Could not understand audio"),
        }

        Ok(transcript)
    }
}

impl<M, L, S, E, TTS, STT, AR, AP> VoiceService for Service<M, L, S, E, TTS, STT, AR, AP>
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
    #[instrument(skip(self, text))]
    async fn speak(&self, text: String) -> Result<(), CoreError> {
        let output = self.work_file("reply", "wav").await?;

        let result = async {
            self.speech_synthesizer
                .synthesize_to_file(sanitize_for_speech(&text), output.clone())
                .await?;
            self.audio_player.play(output.clone()).await
        }
        .await;

        remove_quietly(&output).await;
        result
    }

    #[instrument(skip(self))]
    async fn listen(&self) -> Result<Option<String>, CoreError> {
        let output = self.work_file("recording", "wav").await?;

        tracing::info!(
            seconds = self.voice_settings.record_duration.as_secs(),
            "Recording"
        );
        if let Err(e) = self
            .audio_recorder
            .record(output.clone(), self.voice_settings.record_duration)
            .await
        {
            remove_quietly(&output).await;
            return Err(e);
        }

        self.transcribe_and_discard(output).await
    }

    #[instrument(skip(self, text))]
    async fn synthesize_clip(&self, text: String) -> Result<AudioClip, CoreError> {
        if text.trim().is_empty() {
            return Err(CoreError::InvalidInput("text is required".to_string()));
        }

        tokio::fs::create_dir_all(&self.voice_settings.audio_dir).await?;

        let (created_at, _) = generate_timestamp();
        let file_name = format!("{}.wav", generate_uuid_v7());
        let output = self.voice_settings.audio_dir.join(&file_name);

        if let Err(e) = self
            .speech_synthesizer
            .synthesize_to_file(sanitize_for_speech(&text), output.clone())
            .await
        {
            remove_quietly(&output).await;
            return Err(e);
        }

        tracing::info!(%file_name, "Synthesized clip");

        Ok(AudioClip {
            file_name,
            created_at,
        })
    }

    async fn clip_path(&self, file_name: String) -> Result<PathBuf, CoreError> {
        validate_clip_name(&file_name)?;

        let path = self.voice_settings.audio_dir.join(&file_name);
        if !tokio::fs::try_exists(&path).await? {
            return Err(CoreError::NotFound);
        }

        Ok(path)
    }

    #[instrument(skip(self))]
    async fn delete_clip(&self, file_name: String) -> Result<(), CoreError> {
        validate_clip_name(&file_name)?;

        tokio::fs::remove_file(self.voice_settings.audio_dir.join(&file_name)).await?;

        tracing::info!(%file_name, "Deleted clip");

        Ok(())
    }

    async fn start_recording(&self) -> Result<(), CoreError> {
        let mut active = self.active_recording.lock().await;
        if active.is_some() {
            return Err(CoreError::RecordingInProgress);
        }

        let output = self.work_file("recording", "wav").await?;
        *active = Some(self.audio_recorder.start(output).await?);

        tracing::info!("Recording started");

        Ok(())
    }

    async fn stop_recording(&self) -> Result<Transcript, CoreError> {
        let recording = self
            .active_recording
            .lock()
            .await
            .take()
            .ok_or(CoreError::NoActiveRecording)?;

        let output = recording.stop().await?;
        tracing::info!("Recording stopped");

        let text = self.transcribe_and_discard(output).await?;

        Ok(Transcript { text })
    }
}
