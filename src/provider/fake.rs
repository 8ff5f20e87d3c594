use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use super::{ProviderError, SynthesisParams, VoiceProvider};

/// In-process provider with canned responses and call counters.
pub struct FakeProvider {
    voices: Result<serde_json::Value, ProviderError>,
    audio: Result<Vec<u8>, ProviderError>,
    pub list_calls: AtomicUsize,
    pub synth_calls: AtomicUsize,
    pub last_synthesis: Mutex<Option<(String, SynthesisParams)>>,
}

impl FakeProvider {
    pub fn new(
        voices: Result<serde_json::Value, ProviderError>,
        audio: Result<Vec<u8>, ProviderError>,
    ) -> Self {
        Self {
            voices,
            audio,
            list_calls: AtomicUsize::new(0),
            synth_calls: AtomicUsize::new(0),
            last_synthesis: Mutex::new(None),
        }
    }

    /// Two live voices ("live-adam", premade; "live-sam", generated) and 32000 bytes of audio.
    pub fn healthy() -> Self {
        Self::new(
            Ok(json!({
                "voices": [
                    {
                        "voice_id": "live-adam",
                        "name": "Adam",
                        "category": "premade",
                        "labels": {"description": "Deep narrator"}
                    },
                    {"voice_id": "live-sam", "name": "Sam", "category": "generated"}
                ]
            })),
            Ok(vec![7u8; 32000]),
        )
    }

    pub fn unreachable() -> Self {
        Self::new(
            Err(ProviderError::Transport("connection refused".into())),
            Err(ProviderError::Transport("connection refused".into())),
        )
    }

    pub fn with_audio(mut self, audio: Result<Vec<u8>, ProviderError>) -> Self {
        self.audio = audio;
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn synth_calls(&self) -> usize {
        self.synth_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VoiceProvider for FakeProvider {
    async fn voices_raw(&self) -> Result<serde_json::Value, ProviderError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.voices.clone()
    }

    async fn synthesize(
        &self,
        voice_id: &str,
        params: &SynthesisParams,
    ) -> Result<Vec<u8>, ProviderError> {
        self.synth_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_synthesis.lock().unwrap() = Some((voice_id.to_string(), params.clone()));
        self.audio.clone()
    }
}
