use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecordAction {
    Start,
    Stop,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordValidator {
    pub action: RecordAction,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct TextToSpeechValidator {
    #[validate(length(min = 1, max = 5000, message = "text must be 1 to 5000 characters"))]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeleteAudioValidator {
    #[validate(length(min = 1, message = "file_name is required"))]
    pub file_name: String,
}
