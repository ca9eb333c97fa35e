//! Vida Carioca Backend
//!
//! In-memory REST backend for a curated directory of Rio de Janeiro spots, with
//! an admin panel and AI-assisted translation of the listing.

mod api;
mod config;
mod display;
mod errors;
mod filter;
mod images;
mod models;
mod session;
mod store;
mod translate;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use display::DisplayProjector;
use images::SpotDraft;
use session::AdminSession;
use store::ContentStore;
use translate::{GeminiTranslator, Translator};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub display: Arc<DisplayProjector>,
    pub session: Arc<AdminSession>,
    pub draft: Arc<Mutex<SpotDraft>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the state around a content store and a translator.
    pub async fn new(config: Config, store: ContentStore, translator: Arc<dyn Translator>) -> Self {
        let content = store.snapshot().await;
        let draft = SpotDraft::new(
            content.categories.first().map(|c| c.name.as_str()),
            content.neighborhoods.first().map(String::as_str),
        );

        Self {
            display: Arc::new(DisplayProjector::new(translator, &content)),
            store: Arc::new(store),
            session: Arc::new(AdminSession::new()),
            draft: Arc::new(Mutex::new(draft)),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vida Carioca Backend");
    if let Some(raw) = &config.rejected_bind_addr {
        tracing::warn!("Invalid VIDA_BIND_ADDR {:?}, using {}", raw, config.bind_addr);
    }
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Translation model: {}", config.gemini_model);

    if config.gemini_api_key.is_none() {
        tracing::warn!(
            "No Gemini API key configured (VIDA_GEMINI_API_KEY). Content will only be shown in Portuguese!"
        );
    }

    let translator: Arc<dyn Translator> = Arc::new(GeminiTranslator::from_config(&config)?);
    let store = ContentStore::seeded();
    tracing::info!("Content store seeded with {} spots", store.spot_count().await);

    let bind_addr = config.bind_addr;
    let state = AppState::new(config, store, translator).await;

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let admin_session = state.session.clone();
    let upload_limit = state.config.max_upload_bytes;

    // Admin routes, only reachable with an open admin session
    let admin_routes = Router::new()
        // Spots
        .route("/spots", post(api::create_spot))
        .route("/spots/{id}", delete(api::delete_spot))
        // Categories
        .route("/categories", post(api::create_category))
        .route("/category-icons", post(api::upload_category_icon))
        .route("/categories/{name}", delete(api::delete_category))
        // Neighborhoods
        .route("/neighborhoods", post(api::create_neighborhood))
        .route("/neighborhoods/{name}", delete(api::delete_neighborhood))
        // Labels
        .route("/menu-labels", put(api::update_menu_labels))
        // Draft
        .route("/draft", get(api::get_draft))
        .route("/draft", put(api::update_draft))
        .route("/draft/images/url", post(api::add_draft_image_url))
        .route("/draft/images/upload", post(api::upload_draft_image))
        .route("/draft/images/{index}", delete(api::remove_draft_image))
        .route("/draft/submit", post(api::submit_draft))
        .layer(DefaultBodyLimit::max(upload_limit))
        .layer(middleware::from_fn(move |req, next| {
            session::admin_gate(admin_session.clone(), req, next)
        }));

    // Public routes
    let api_routes = Router::new()
        // Content
        .route("/content", get(api::get_content))
        .route("/spots", get(api::list_spots))
        .route("/categories", get(api::list_categories))
        .route("/neighborhoods", get(api::list_neighborhoods))
        .route("/menu-labels", get(api::get_menu_labels))
        // View
        .route("/view", get(api::get_view))
        .route("/view", put(api::update_view))
        // Session
        .route("/session", get(api::get_session))
        .route("/session/login", post(api::login))
        .route("/session/logout", post(api::logout))
        // Chat
        .route("/chat", post(api::ask_guide))
        .nest("/admin", admin_routes);

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
