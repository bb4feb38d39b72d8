pub mod delete_audio;
pub mod get_audio;
pub mod record;
pub mod text_to_speech;
