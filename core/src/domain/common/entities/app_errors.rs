use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error")]
    InternalServerError,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Menu could not be loaded: {0}")]
    MenuUnavailable(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Payments are not configured")]
    PaymentsDisabled,

    #[error("Voice command failed: {0}")]
    VoiceCommandFailed(String),

    #[error("A recording is already in progress")]
    RecordingInProgress,

    #[error("No recording in progress")]
    NoActiveRecording,

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CoreError {
    fn from(error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound,
            _ => CoreError::Io(error.to_string()),
        }
    }
}
