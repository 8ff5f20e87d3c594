use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::provider::ProviderError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("ElevenLabs API key not configured")]
    Configuration,

    #[error("Voice not found: {0}")]
    VoiceNotFound(String),

    #[error("Provider rejected the API key")]
    ProviderAuth,

    #[error("Provider rate limit exceeded")]
    RateLimited,

    #[error("Speech synthesis failed: {0}")]
    SynthesisFailed(serde_json::Value),

    #[error("Failed to fetch voices: {0}")]
    ProviderUnavailable(serde_json::Value),

    #[error("Voice cloning is disabled")]
    VoiceCloningDisabled,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    /// Maps a failed synthesis call onto the caller-facing taxonomy.
    pub fn from_synthesis(err: ProviderError) -> Self {
        match err.status() {
            Some(401) => AppError::ProviderAuth,
            Some(429) => AppError::RateLimited,
            _ => AppError::SynthesisFailed(err.details()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            message: None,
            details: None,
            voice_id: None,
        }
    }

    fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(msg, "INVALID_REQUEST"),
            ),
            AppError::InvalidJson(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Invalid JSON body", "INVALID_JSON").message(msg),
            ),
            AppError::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("ElevenLabs API key not configured", "CONFIGURATION_ERROR")
                    .message("Please set your ELEVENLABS_API_KEY in the .env file"),
            ),
            AppError::VoiceNotFound(voice_id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    voice_id: Some(voice_id),
                    ..ErrorResponse::new("Voice not found", "VOICE_NOT_FOUND")
                },
            ),
            AppError::ProviderAuth => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new("Invalid API key", "AUTH_ERROR")
                    .message("Please check your ElevenLabs API key"),
            ),
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorResponse::new("Rate limit exceeded", "RATE_LIMITED")
                    .message("You have reached your ElevenLabs usage limit"),
            ),
            AppError::SynthesisFailed(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Failed to generate speech", "SYNTHESIS_FAILED")
                    .details(details),
            ),
            AppError::ProviderUnavailable(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Failed to fetch voices", "PROVIDER_UNAVAILABLE")
                    .details(details),
            ),
            AppError::VoiceCloningDisabled => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new("Voice cloning requires a paid subscription", "FORBIDDEN")
                    .message(
                        "Please upgrade to a paid plan to create custom voices, \
                         or use the free voices available.",
                    ),
            ),
            AppError::IoError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(e.to_string(), "IO_ERROR"),
            ),
        };

        tracing::error!("Request failed: {} - {}", body.code, body.error);

        (status, Json(body)).into_response()
    }
}
