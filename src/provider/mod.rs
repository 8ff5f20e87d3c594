pub mod elevenlabs;

#[cfg(test)]
pub mod fake;

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use elevenlabs::ElevenLabsClient;

#[derive(thiserror::Error, Debug, Clone)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(String),

    #[error("provider returned HTTP {status}")]
    Status {
        status: u16,
        body: serde_json::Value,
    },

    #[error("unexpected provider response: {0}")]
    Decode(String),
}

impl ProviderError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw diagnostic payload: the provider's error body when there is one,
    /// otherwise the error message.
    pub fn details(&self) -> serde_json::Value {
        match self {
            ProviderError::Status { body, .. } => body.clone(),
            other => serde_json::Value::String(other.to_string()),
        }
    }

    /// Human-readable `detail.message` from the provider's error body.
    pub fn detail_message(&self) -> Option<&str> {
        match self {
            ProviderError::Status { body, .. } => body
                .get("detail")
                .and_then(|detail| detail.get("message"))
                .and_then(|message| message.as_str()),
            _ => None,
        }
    }
}

/// A voice as reported by the provider's voice-list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderVoice {
    pub voice_id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub labels: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
pub struct VoiceList {
    #[serde(default)]
    pub voices: Option<Vec<ProviderVoice>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesisParams {
    pub text: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
}

#[async_trait]
pub trait VoiceProvider: Send + Sync {
    /// Provider voice list, exactly as returned.
    async fn voices_raw(&self) -> Result<serde_json::Value, ProviderError>;

    /// Synthesizes `params.text` with the given provider voice, returning the encoded audio.
    async fn synthesize(
        &self,
        voice_id: &str,
        params: &SynthesisParams,
    ) -> Result<Vec<u8>, ProviderError>;

    async fn list_voices(&self) -> Result<Vec<ProviderVoice>, ProviderError> {
        let raw = self.voices_raw().await?;
        let list: VoiceList =
            serde_json::from_value(raw).map_err(|e| ProviderError::Decode(e.to_string()))?;
        Ok(list.voices.unwrap_or_default())
    }
}
