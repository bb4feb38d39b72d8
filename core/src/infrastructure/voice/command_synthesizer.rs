use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::{
    domain::{common::entities::app_errors::CoreError, voice::ports::SpeechSynthesizer},
    infrastructure::voice::{check_status, spawn_error, substitute_path},
};

pub const OUTPUT_PLACEHOLDER: &str = "{output}";

/// Runs a local TTS program (espeak-ng, piper, say...) with the text on
/// stdin; `{output}` in the arguments names the file to write.
#[derive(Debug, Clone)]
pub struct CommandSpeechSynthesizer {
    program: String,
    args: Vec<String>,
}

impl CommandSpeechSynthesizer {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

impl SpeechSynthesizer for CommandSpeechSynthesizer {
    async fn synthesize_to_file(&self, text: String, output: PathBuf) -> Result<(), CoreError> {
        let mut child = Command::new(&self.program)
            .args(substitute_path(&self.args, OUTPUT_PLACEHOLDER, &output))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| spawn_error(&self.program, e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| spawn_error(&self.program, e))?;
        check_status(&self.program, status)?;

        tracing::debug!(output = %output.display(), "Synthesized speech");

        Ok(())
    }
}
