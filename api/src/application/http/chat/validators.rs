use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SendChatMessageValidator {
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}
