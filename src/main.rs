use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod conversations;
mod error;
mod provider;
mod tts;
mod validator;
mod voices;

use api::routes::{create_router, AppState};
use config::Config;
use conversations::ConversationStore;
use provider::{ElevenLabsClient, VoiceProvider};
use tts::{AudioStore, TtsService};
use voices::VoiceResolver;

#[tokio::main]
async fn main() {
    // Load .env before reading configuration
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    tracing::info!("Voice proxy server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", config.addr);
    tracing::info!("Public directory: {}", config.public_dir.display());

    // Create provider client
    let provider: Option<Arc<dyn VoiceProvider>> = match &config.api_key {
        Some(key) => {
            let client = ElevenLabsClient::new(key.clone(), &config.base_url, config.provider_timeout)
                .expect("Failed to create ElevenLabs client");
            tracing::info!("ElevenLabs API key configured");
            let client: Arc<dyn VoiceProvider> = Arc::new(client);
            Some(client)
        }
        None => {
            tracing::warn!("ElevenLabs API key not set! Using fallback voices only.");
            None
        }
    };

    // Create app state
    let voices = VoiceResolver::new(provider);
    let state = Arc::new(AppState {
        tts: TtsService::new(voices.clone(), AudioStore::new(config.audio_dir())),
        voices,
        conversations: ConversationStore::new(),
    });

    // Create router
    let app = create_router(state, &config.public_dir);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
