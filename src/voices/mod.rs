pub mod fallback;
pub mod resolver;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::provider::ProviderVoice;

pub use fallback::fallback_voices;
pub use resolver::VoiceResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceStatus {
    Ready,
}

/// A selectable voice, from either the live provider list or the fallback catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "elevenlabs_voice_id")]
    pub provider_voice_id: String,
    pub created_at: DateTime<Utc>,
    pub status: VoiceStatus,
    pub is_free: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<ProviderVoice> for VoiceDescriptor {
    fn from(voice: ProviderVoice) -> Self {
        let is_free = matches!(voice.category.as_deref(), Some("premade" | "cloned"));
        let description = voice
            .labels
            .as_ref()
            .and_then(|labels| labels.get("description"))
            .filter(|d| !d.is_empty())
            .cloned()
            .or_else(|| voice.category.clone().filter(|c| !c.is_empty()))
            .unwrap_or_else(|| "ElevenLabs voice".to_string());

        Self {
            id: voice.voice_id.clone(),
            name: voice.name,
            description,
            provider_voice_id: voice.voice_id,
            created_at: Utc::now(),
            status: VoiceStatus::Ready,
            is_free,
            category: voice.category,
        }
    }
}
