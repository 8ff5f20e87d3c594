use chrono::Utc;

use super::{VoiceDescriptor, VoiceStatus};

// (id, name, description, provider voice id)
const FALLBACK_VOICES: [(&str, &str, &str, &str); 3] = [
    (
        "fallback-1",
        "Rachel",
        "Friendly and energetic voice",
        "21m00Tcm4TlvDq8ikWAM",
    ),
    (
        "fallback-2",
        "Domi",
        "Warm and engaging voice",
        "AZnzlk1XvdvUeBnXmlld",
    ),
    (
        "fallback-3",
        "Bella",
        "Clear and professional voice",
        "EXAVITQu4vr4xnSDxMaL",
    ),
];

/// Static voices used when the provider is unconfigured or unreachable.
/// `created_at` is stamped per call.
pub fn fallback_voices() -> Vec<VoiceDescriptor> {
    let now = Utc::now();
    FALLBACK_VOICES
        .iter()
        .map(|&(id, name, description, provider_voice_id)| VoiceDescriptor {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            provider_voice_id: provider_voice_id.to_string(),
            created_at: now,
            status: VoiceStatus::Ready,
            is_free: true,
            category: None,
        })
        .collect()
}
