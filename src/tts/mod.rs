pub mod audio;

use serde::Serialize;

use crate::error::AppError;
use crate::provider::{SynthesisParams, VoiceSettings};
use crate::voices::VoiceResolver;

pub use audio::AudioStore;

pub const DEFAULT_MODEL_ID: &str = "eleven_monolingual_v1";
pub const DEFAULT_VOICE_SETTINGS: VoiceSettings = VoiceSettings {
    stability: 0.5,
    similarity_boost: 0.5,
};

/// Bytes per "second" for the duration estimate. Not derived from the audio
/// encoding; the figure is a rough size-based approximation.
const APPROX_BYTES_PER_SECOND: f64 = 16000.0;

#[derive(Debug, Clone, Serialize)]
pub struct SynthesisResult {
    pub audio_url: String,
    pub text: String,
    pub voice_id: String,
    /// Approximate seconds, from the response size only.
    #[serde(rename = "duration")]
    pub approximate_duration_seconds: f64,
}

pub fn approximate_duration(audio_len: usize) -> f64 {
    audio_len as f64 / APPROX_BYTES_PER_SECOND
}

pub struct TtsService {
    voices: VoiceResolver,
    audio: AudioStore,
}

impl TtsService {
    pub fn new(voices: VoiceResolver, audio: AudioStore) -> Self {
        Self { voices, audio }
    }

    pub async fn synthesize(&self, text: &str, voice_id: &str) -> Result<SynthesisResult, AppError> {
        // 1. Validate input
        if text.is_empty() || voice_id.is_empty() {
            return Err(AppError::InvalidRequest(
                "Text and voice_id are required".into(),
            ));
        }

        let provider = self.voices.provider().ok_or(AppError::Configuration)?;

        // 2. Resolve voice
        let voice = self.voices.resolve_voice(voice_id).await?;
        tracing::info!(
            "Generating speech for voice {} ({}) with text: {:.50}",
            voice.name,
            voice.provider_voice_id,
            text
        );

        // 3. Synthesize
        let params = SynthesisParams {
            text: text.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            voice_settings: DEFAULT_VOICE_SETTINGS,
        };
        let audio = provider
            .synthesize(&voice.provider_voice_id, &params)
            .await
            .map_err(|e| {
                tracing::error!("Error generating speech: {}", e);
                AppError::from_synthesis(e)
            })?;
        tracing::info!("Speech generated successfully, response size: {}", audio.len());

        // 4. Persist
        let audio_url = self.audio.save(&audio).await?;

        Ok(SynthesisResult {
            audio_url,
            text: text.to_string(),
            voice_id: voice_id.to_string(),
            approximate_duration_seconds: approximate_duration(audio.len()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::fake::FakeProvider;
    use crate::provider::{ProviderError, VoiceProvider};
    use serde_json::json;
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn service(provider: Option<FakeProvider>) -> (TtsService, Option<Arc<FakeProvider>>, TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let provider = provider.map(Arc::new);
        let shared = provider
            .clone()
            .map(|p| -> Arc<dyn VoiceProvider> { p });
        let tts = TtsService::new(
            VoiceResolver::new(shared),
            AudioStore::new(tmp.path().join("audio")),
        );
        (tts, provider, tmp)
    }

    fn audio_files(root: &Path) -> usize {
        std::fs::read_dir(root.join("audio"))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    #[tokio::test]
    async fn test_empty_fields_rejected_without_provider_call() {
        let (tts, provider, _tmp) = service(Some(FakeProvider::healthy()));
        let provider = provider.unwrap();

        for (text, voice) in [("", "live-adam"), ("Hello", ""), ("", "")] {
            let err = tts.synthesize(text, voice).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidRequest(_)));
        }
        assert_eq!(provider.list_calls(), 0);
        assert_eq!(provider.synth_calls(), 0);
    }

    #[tokio::test]
    async fn test_unconfigured_is_configuration_error() {
        let (tts, _, tmp) = service(None);
        let err = tts
            .synthesize("Hello world", "21m00Tcm4TlvDq8ikWAM")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration));
        assert_eq!(audio_files(tmp.path()), 0);
    }

    #[tokio::test]
    async fn test_unknown_voice_writes_nothing() {
        let (tts, provider, tmp) = service(Some(FakeProvider::healthy()));
        let err = tts.synthesize("Hello", "nobody").await.unwrap_err();

        assert!(matches!(err, AppError::VoiceNotFound(_)));
        assert_eq!(provider.unwrap().synth_calls(), 0);
        assert_eq!(audio_files(tmp.path()), 0);
    }

    #[tokio::test]
    async fn test_synthesize_live_voice() {
        let (tts, provider, tmp) = service(Some(FakeProvider::healthy()));
        let result = tts.synthesize("Hello world", "live-adam").await.unwrap();

        assert!(result.audio_url.starts_with("/audio/"));
        assert_eq!(result.text, "Hello world");
        assert_eq!(result.voice_id, "live-adam");
        assert_eq!(result.approximate_duration_seconds, 2.0);
        assert_eq!(audio_files(tmp.path()), 1);

        let provider = provider.unwrap();
        let (voice, params) = provider.last_synthesis.lock().unwrap().clone().unwrap();
        assert_eq!(voice, "live-adam");
        assert_eq!(params.model_id, DEFAULT_MODEL_ID);
        assert_eq!(params.voice_settings, DEFAULT_VOICE_SETTINGS);
    }

    #[tokio::test]
    async fn test_fallback_voice_uses_provider_id() {
        let (tts, provider, _tmp) = service(Some(FakeProvider::healthy()));
        let result = tts.synthesize("Hi", "fallback-1").await.unwrap();

        assert_eq!(result.voice_id, "fallback-1");
        let (voice, _) = provider
            .unwrap()
            .last_synthesis
            .lock()
            .unwrap()
            .clone()
            .unwrap();
        assert_eq!(voice, "21m00Tcm4TlvDq8ikWAM");
    }

    #[tokio::test]
    async fn test_identical_requests_make_distinct_files() {
        let (tts, _, tmp) = service(Some(FakeProvider::healthy()));
        let first = tts.synthesize("Again", "live-sam").await.unwrap();
        let second = tts.synthesize("Again", "live-sam").await.unwrap();

        assert_ne!(first.audio_url, second.audio_url);
        assert_eq!(audio_files(tmp.path()), 2);
    }

    #[tokio::test]
    async fn test_provider_errors_mapped() {
        let cases = [
            (401, "auth"),
            (429, "rate"),
            (500, "failed"),
        ];
        for (status, expected) in cases {
            let provider = FakeProvider::healthy().with_audio(Err(ProviderError::Status {
                status,
                body: json!({"detail": {"message": "nope"}}),
            }));
            let (tts, _, tmp) = service(Some(provider));
            let err = tts.synthesize("Hello", "live-adam").await.unwrap_err();

            match (expected, err) {
                ("auth", AppError::ProviderAuth) | ("rate", AppError::RateLimited) => {}
                ("failed", AppError::SynthesisFailed(details)) => {
                    assert_eq!(details["detail"]["message"], "nope")
                }
                (expected, err) => panic!("expected {}, got {:?}", expected, err),
            }
            assert_eq!(audio_files(tmp.path()), 0);
        }
    }

    #[test]
    fn test_approximate_duration() {
        assert_eq!(approximate_duration(0), 0.0);
        assert_eq!(approximate_duration(8000), 0.5);
        assert_eq!(approximate_duration(48000), 3.0);
    }
}
