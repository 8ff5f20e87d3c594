use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use super::{json_body, ConversationRequest, HealthResponse, TtsRequest};
use crate::api::routes::AppState;
use crate::conversations::ConversationRecord;
use crate::error::AppError;
use crate::tts::SynthesisResult;
use crate::validator::{self, KeyValidation};
use crate::voices::VoiceDescriptor;

pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<Vec<VoiceDescriptor>> {
    Json(state.voices.list_voices().await)
}

pub async fn validate_key(State(state): State<Arc<AppState>>) -> Json<KeyValidation> {
    let provider = state.voices.provider().map(|p| p.as_ref());
    Json(validator::validate_key(provider).await)
}

pub async fn text_to_speech(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TtsRequest>, JsonRejection>,
) -> Result<Json<SynthesisResult>, AppError> {
    let request = json_body(payload)?;
    let text = request.text.unwrap_or_default();
    let voice_id = request.voice_id.unwrap_or_default();

    let result = state.tts.synthesize(&text, &voice_id).await?;
    Ok(Json(result))
}

/// Voice cloning needs a paid provider plan and is switched off.
pub async fn create_voice() -> AppError {
    AppError::VoiceCloningDisabled
}

/// Debug passthrough of the provider's voice list.
pub async fn provider_voices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, AppError> {
    let provider = state.voices.provider().ok_or(AppError::Configuration)?;
    let voices = provider.voices_raw().await.map_err(|e| {
        tracing::error!("Error fetching ElevenLabs voices: {}", e);
        AppError::ProviderUnavailable(e.details())
    })?;
    Ok(Json(voices))
}

pub async fn save_conversation(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ConversationRequest>, JsonRejection>,
) -> Result<Json<ConversationRecord>, AppError> {
    let request = json_body(payload)?;
    let record = state.conversations.save(request.voice_id, request.messages);
    Ok(Json(record))
}

pub async fn list_conversations(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<ConversationRecord>> {
    Json(state.conversations.list_all())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
