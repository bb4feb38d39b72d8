use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;

use crate::{
    domain::{common::entities::app_errors::CoreError, voice::ports::SpeechRecognizer},
    infrastructure::voice::{check_status, spawn_error, substitute_path},
};

pub const INPUT_PLACEHOLDER: &str = "{input}";

/// Offline recognizer: a program that prints the transcript of `{input}`.
#[derive(Debug, Clone)]
pub struct CommandSpeechRecognizer {
    program: String,
    args: Vec<String>,
}

impl CommandSpeechRecognizer {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

impl SpeechRecognizer for CommandSpeechRecognizer {
    async fn transcribe(&self, input: PathBuf) -> Result<Option<String>, CoreError> {
        let output = Command::new(&self.program)
            .args(substitute_path(&self.args, INPUT_PLACEHOLDER, &input))
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| spawn_error(&self.program, e))?;
        check_status(&self.program, output.status)?;

        let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();

        Ok((!transcript.is_empty()).then_some(transcript))
    }
}
