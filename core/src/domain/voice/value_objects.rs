use std::path::PathBuf;
use std::time::Duration;

use crate::domain::common::VoiceConfig;

#[derive(Debug, Clone)]
pub struct VoiceSettings {
    pub audio_dir: PathBuf,
    pub work_dir: PathBuf,
    pub record_duration: Duration,
}

impl From<&VoiceConfig> for VoiceSettings {
    fn from(config: &VoiceConfig) -> Self {
        Self {
            audio_dir: config.audio_dir.clone(),
            work_dir: config.work_dir.clone(),
            record_duration: config.record_duration,
        }
    }
}
