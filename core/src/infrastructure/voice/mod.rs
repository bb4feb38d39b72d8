pub mod command_recognizer;
pub mod command_synthesizer;
pub mod ffmpeg_recorder;
pub mod ffplay_player;
pub mod http_recognizer;
pub mod recognizer;

pub use command_recognizer::CommandSpeechRecognizer;
pub use command_synthesizer::CommandSpeechSynthesizer;
pub use ffmpeg_recorder::{FfmpegRecorder, FfmpegRecording};
pub use ffplay_player::FfplayPlayer;
pub use http_recognizer::HttpSpeechRecognizer;
pub use recognizer::SpeechRecognizerClient;

use std::path::Path;
use std::process::ExitStatus;

use crate::domain::common::entities::app_errors::CoreError;

/// Replace `placeholder` in each argument with `path`. When no argument
/// mentions it, the path is appended.
pub(crate) fn substitute_path(args: &[String], placeholder: &str, path: &Path) -> Vec<String> {
    let path = path.to_string_lossy();
    let mut substituted: Vec<String> = args
        .iter()
        .map(|arg| arg.replace(placeholder, &path))
        .collect();

    if !args.iter().any(|arg| arg.contains(placeholder)) {
        substituted.push(path.into_owned());
    }

    substituted
}

pub(crate) fn spawn_error(program: &str, error: std::io::Error) -> CoreError {
    tracing::error!(%program, "Failed to run audio command: {}", error);

    match error.kind() {
        std::io::ErrorKind::NotFound => {
            CoreError::VoiceCommandFailed(format!("{program} is not installed or not on PATH"))
        }
        _ => CoreError::VoiceCommandFailed(format!("{program}: {error}")),
    }
}

pub(crate) fn check_status(program: &str, status: ExitStatus) -> Result<(), CoreError> {
    if status.success() {
        return Ok(());
    }

    tracing::error!(%program, %status, "Audio command failed");
    Err(CoreError::VoiceCommandFailed(format!(
        "{program} exited with {status}"
    )))
}
