use std::sync::Arc;

use crate::error::AppError;
use crate::provider::{ProviderError, ProviderVoice, VoiceProvider};

use super::{fallback_voices, VoiceDescriptor};

/// Resolves voices against the live provider, degrading to the fallback catalog.
///
/// `provider` is `None` when no usable API key is configured.
#[derive(Clone)]
pub struct VoiceResolver {
    provider: Option<Arc<dyn VoiceProvider>>,
}

impl VoiceResolver {
    pub fn new(provider: Option<Arc<dyn VoiceProvider>>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> Option<&Arc<dyn VoiceProvider>> {
        self.provider.as_ref()
    }

    /// Live voices when the provider answers with at least one, fallback voices otherwise.
    /// Never fails.
    pub async fn list_voices(&self) -> Vec<VoiceDescriptor> {
        let Some(provider) = &self.provider else {
            tracing::info!("Using fallback voices (no API key)");
            return fallback_voices();
        };

        tracing::info!("Fetching voices from ElevenLabs...");
        match provider.list_voices().await {
            Ok(voices) if voices.is_empty() => {
                tracing::info!("No voices found in API response, using fallback voices");
                fallback_voices()
            }
            Ok(voices) => {
                tracing::info!("Returning {} voices from ElevenLabs", voices.len());
                voices.into_iter().map(VoiceDescriptor::from).collect()
            }
            Err(e) => {
                tracing::warn!("Error fetching voices from ElevenLabs, using fallback voices: {}", e);
                fallback_voices()
            }
        }
    }

    /// Live voices are matched on provider id; fallback voices on their own id
    /// or their provider id.
    pub async fn resolve_voice(&self, voice_id: &str) -> Result<VoiceDescriptor, AppError> {
        let live = match self.live_voices().await {
            Ok(voices) => voices,
            Err(e) => {
                tracing::warn!("Error fetching voices for TTS, trying fallback voices: {}", e);
                Vec::new()
            }
        };

        if let Some(voice) = live.into_iter().find(|v| v.voice_id == voice_id) {
            return Ok(voice.into());
        }

        tracing::debug!("Voice {} not found in ElevenLabs, trying fallback voices", voice_id);
        fallback_voices()
            .into_iter()
            .find(|v| v.id == voice_id || v.provider_voice_id == voice_id)
            .ok_or_else(|| {
                tracing::info!("Voice {} not found in any source", voice_id);
                AppError::VoiceNotFound(voice_id.to_string())
            })
    }

    async fn live_voices(&self) -> Result<Vec<ProviderVoice>, ProviderError> {
        match &self.provider {
            Some(provider) => provider.list_voices().await,
            None => Ok(Vec::new()),
        }
    }
}
