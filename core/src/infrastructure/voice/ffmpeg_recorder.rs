use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        voice::ports::{ActiveRecording, AudioRecorder},
    },
    infrastructure::voice::{check_status, spawn_error},
};

/// Microphone capture through ffmpeg as 16 kHz 16-bit stereo WAV.
#[derive(Debug, Clone)]
pub struct FfmpegRecorder {
    program: String,
    input_format: String,
    input_device: String,
}

impl FfmpegRecorder {
    pub fn new(program: String, input_format: String, input_device: String) -> Self {
        Self {
            program,
            input_format,
            input_device,
        }
    }

    /// Without a duration ffmpeg records until it reads `q` on stdin.
    pub fn recording_args(&self, output: &Path, duration: Option<Duration>) -> Vec<String> {
        let mut args = vec![
            "-y".to_string(),
            "-f".to_string(),
            self.input_format.clone(),
            "-i".to_string(),
            self.input_device.clone(),
        ];
        if let Some(duration) = duration {
            args.push("-t".to_string());
            args.push(duration.as_secs().to_string());
        }
        args.extend(
            ["-acodec", "pcm_s16le", "-ar", "16000", "-ac", "2"]
                .into_iter()
                .map(str::to_string),
        );
        args.push(output.to_string_lossy().into_owned());
        args
    }
}

/// A running open-ended ffmpeg capture.
#[derive(Debug)]
pub struct FfmpegRecording {
    program: String,
    child: Child,
    output: PathBuf,
}

impl ActiveRecording for FfmpegRecording {
    async fn stop(mut self) -> Result<PathBuf, CoreError> {
        if let Some(mut stdin) = self.child.stdin.take() {
            if let Err(e) = stdin.write_all(b"q").await {
                tracing::warn!("Could not ask ffmpeg to stop, killing it: {}", e);
                self.child.start_kill()?;
            }
        }

        let status = self
            .child
            .wait()
            .await
            .map_err(|e| spawn_error(&self.program, e))?;

        if !tokio::fs::try_exists(&self.output).await? {
            check_status(&self.program, status)?;
            return Err(CoreError::VoiceCommandFailed(
                "recording produced no audio".to_string(),
            ));
        }

        Ok(self.output)
    }
}

impl AudioRecorder for FfmpegRecorder {
    type Recording = FfmpegRecording;

    async fn record(&self, output: PathBuf, duration: Duration) -> Result<(), CoreError> {
        let status = Command::new(&self.program)
            .args(self.recording_args(&output, Some(duration)))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| spawn_error(&self.program, e))?;

        check_status(&self.program, status)
    }

    async fn start(&self, output: PathBuf) -> Result<FfmpegRecording, CoreError> {
        let child = Command::new(&self.program)
            .args(self.recording_args(&output, None))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| spawn_error(&self.program, e))?;

        Ok(FfmpegRecording {
            program: self.program.clone(),
            child,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_duration_args() {
        let recorder = FfmpegRecorder::new(
            "ffmpeg".to_string(),
            "avfoundation".to_string(),
            ":0".to_string(),
        );

        let args = recorder.recording_args(Path::new("output.wav"), Some(Duration::from_secs(10)));

        assert_eq!(
            args,
            [
                "-y", "-f", "avfoundation", "-i", ":0", "-t", "10", "-acodec", "pcm_s16le",
                "-ar", "16000", "-ac", "2", "output.wav"
            ]
        );
    }

    #[test]
    fn test_open_ended_args_have_no_duration() {
        let recorder =
            FfmpegRecorder::new("ffmpeg".to_string(), "pulse".to_string(), "default".to_string());

        let args = recorder.recording_args(Path::new("output.wav"), None);

        assert!(!args.contains(&"-t".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("output.wav"));
    }

    #[tokio::test]
    async fn test_missing_ffmpeg_is_reported() {
        let recorder = FfmpegRecorder::new(
            "menubot-no-such-ffmpeg".to_string(),
            "pulse".to_string(),
            "default".to_string(),
        );

        let result = recorder
            .record(PathBuf::from("/tmp/unused.wav"), Duration::from_secs(1))
            .await;

        assert!(matches!(result, Err(CoreError::VoiceCommandFailed(_))));
    }
}
