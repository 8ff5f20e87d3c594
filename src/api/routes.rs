use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::conversations::ConversationStore;
use crate::tts::TtsService;
use crate::voices::VoiceResolver;

pub struct AppState {
    pub voices: VoiceResolver,
    pub tts: TtsService,
    pub conversations: ConversationStore,
}

pub fn create_router(state: Arc<AppState>, public_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route(
            "/voices",
            get(handlers::list_voices).post(handlers::create_voice),
        )
        .route("/validate-key", get(handlers::validate_key))
        .route("/tts", post(handlers::text_to_speech))
        .route(
            "/conversations",
            get(handlers::list_conversations).post(handlers::save_conversation),
        )
        .route("/elevenlabs/voices", get(handlers::provider_voices))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
