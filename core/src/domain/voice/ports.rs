use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::{
    common::entities::app_errors::CoreError,
    voice::entities::{AudioClip, Transcript},
};

#[cfg_attr(test, mockall::automock)]
pub trait SpeechSynthesizer: Send + Sync {
    /// Write spoken `text` to `output`.
    fn synthesize_to_file(
        &self,
        text: String,
        output: PathBuf,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SpeechRecognizer: Send + Sync {
    /// `Ok(None)` means the audio was received but not understood.
    fn transcribe(
        &self,
        input: PathBuf,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}

/// A recording that keeps running until stopped.
pub trait ActiveRecording: Send + 'static {
    /// Finish the recording and return the file it was written to.
    fn stop(self) -> impl Future<Output = Result<PathBuf, CoreError>> + Send;
}

pub trait AudioRecorder: Send + Sync {
    type Recording: ActiveRecording;

    fn record(
        &self,
        output: PathBuf,
        duration: Duration,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn start(
        &self,
        output: PathBuf,
    ) -> impl Future<Output = Result<Self::Recording, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AudioPlayer: Send + Sync {
    fn play(&self, input: PathBuf) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait VoiceService: Send + Sync {
    /// Say `text` out loud on the local audio device.
    fn speak(&self, text: String) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Record from the microphone for the configured duration.
    fn listen(&self) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn synthesize_clip(
        &self,
        text: String,
    ) -> impl Future<Output = Result<AudioClip, CoreError>> + Send;

    fn clip_path(
        &self,
        file_name: String,
    ) -> impl Future<Output = Result<PathBuf, CoreError>> + Send;

    fn delete_clip(&self, file_name: String)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    fn start_recording(&self) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn stop_recording(&self) -> impl Future<Output = Result<Transcript, CoreError>> + Send;
}
