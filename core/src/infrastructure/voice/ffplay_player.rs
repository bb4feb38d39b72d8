use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;

use crate::{
    domain::{common::entities::app_errors::CoreError, voice::ports::AudioPlayer},
    infrastructure::voice::{check_status, spawn_error},
};

#[derive(Debug, Clone)]
pub struct FfplayPlayer {
    program: String,
}

impl FfplayPlayer {
    pub fn new(program: String) -> Self {
        Self { program }
    }
}

impl AudioPlayer for FfplayPlayer {
    async fn play(&self, input: PathBuf) -> Result<(), CoreError> {
        let status = Command::new(&self.program)
            .arg("-nodisp")
            .arg("-autoexit")
            .arg(&input)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| spawn_error(&self.program, e))?;

        check_status(&self.program, status)
    }
}
