use crate::domain::common::entities::app_errors::CoreError;

/// Rewrite symbols a speech engine would read literally or skip.
pub fn sanitize_for_speech(text: &str) -> String {
    text.replace('*', "")
        .replace('$', "USD: ")
        .replace('=', "equals")
        .replace(" x ", " times ")
        .replace(" + ", " plus ")
}

/// Clip names are bare file names inside the audio directory.
pub fn validate_clip_name(file_name: &str) -> Result<(), CoreError> {
    let invalid = file_name.is_empty()
        || file_name.starts_with('.')
        || file_name.contains(['/', '\\'])
        || file_name.contains("..");

    if invalid {
        return Err(CoreError::InvalidInput(format!(
            "invalid audio file name: {file_name:?}"
        )));
    }

    Ok(())
}
