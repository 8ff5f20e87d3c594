use serde::Serialize;

use crate::provider::VoiceProvider;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValidation {
    pub valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_count: Option<usize>,
}

impl KeyValidation {
    fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
            voice_count: None,
        }
    }
}

/// Exercises the provider's authentication with a voice-list call.
/// Unlike voice listing, failures are reported rather than masked.
pub async fn validate_key(provider: Option<&dyn VoiceProvider>) -> KeyValidation {
    let Some(provider) = provider else {
        return KeyValidation::invalid("API key not configured");
    };

    match provider.list_voices().await {
        Ok(voices) => KeyValidation {
            valid: true,
            message: "API key is valid".to_string(),
            voice_count: Some(voices.len()),
        },
        Err(e) => {
            tracing::error!("API key validation error: {}", e);
            KeyValidation::invalid(e.detail_message().unwrap_or("Invalid API key"))
        }
    }
}
