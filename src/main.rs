use axum::http::HeaderValue;
use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use cardvault_api::config::{self, Environment};
use cardvault_api::database::manager::DatabaseManager;
use cardvault_api::handlers;
use cardvault_api::middleware::auth_gate;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting cardvault API in {:?} mode", config.environment);

    // Apply migrations when the database is reachable; the server still
    // binds either way so liveness checks keep working
    if let Err(e) = DatabaseManager::migrate().await {
        tracing::warn!("Skipping migrations, database not ready: {}", e);
    }

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("CARDVAULT_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8080);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("cardvault API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes
        .merge(auth_routes())
        // Public catalog
        .merge(catalog_routes())
        // Authenticated collection management
        .merge(collection_routes())
        // Global middleware; the auth gate runs before every handler and
        // attaches an identity when a valid bearer token is present
        .layer(axum::middleware::from_fn(auth_gate))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn auth_routes() -> Router {
    use axum::routing::post;
    use handlers::auth;

    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
}

fn catalog_routes() -> Router {
    Router::new()
        .route("/api/cards", get(handlers::cards::search))
        .route("/api/packs", get(handlers::packs::list))
        .route("/api/rarities", get(handlers::rarities::list))
}

fn collection_routes() -> Router {
    use axum::routing::{delete, post};
    use handlers::collections;

    Router::new()
        .route(
            "/api/my-collections",
            get(collections::list_categories).post(collections::create_category),
        )
        .route(
            "/api/my-collections/:id",
            get(collections::category_detail)
                .put(collections::update_category)
                .delete(collections::delete_category),
        )
        .route("/api/my-collections/:id/cards", post(collections::add_card))
        .route(
            "/api/my-collections/:id/cards/:card_id",
            delete(collections::remove_card),
        )
}

fn cors_layer() -> CorsLayer {
    let config = config::config();
    if !config.security.enable_cors {
        return CorsLayer::new();
    }
    match config.environment {
        Environment::Development => CorsLayer::permissive(),
        _ => {
            let origins: Vec<HeaderValue> = config
                .security
                .cors_origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "cardvault API",
        "version": version,
        "description": "Card collection backend built with Rust (Axum)",
        "endpoints": {
            "auth": "/api/auth/register, /api/auth/login (public)",
            "cards": "/api/cards?packId=&name=&rarityId=&type=&attribute= (public)",
            "packs": "/api/packs (public)",
            "rarities": "/api/rarities (public)",
            "collections": "/api/my-collections[/:id[/cards[/:cardId]]] (requires bearer token)",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
