pub mod request_id;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{
    command::CommandController, health, oauth::OAuthController, player::PlayerController,
};
use crate::infrastructure::config::Config;

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    oauth_controller: Arc<OAuthController>,
    player_controller: Arc<PlayerController>,
    command_controller: Arc<CommandController>,
) -> Result<(), Box<dyn std::error::Error>> {
    // OAuth routes (drive the Spotify authorization flow)
    let oauth_routes = Router::new()
        .route("/login", get(OAuthController::login))
        .route("/callback", get(OAuthController::callback))
        .route("/refresh", get(OAuthController::refresh))
        .with_state(oauth_controller.clone());

    // Playback routes (require a stored token set)
    let player_routes = Router::new()
        .route("/current-song", get(PlayerController::current_song))
        .route("/play", get(PlayerController::play))
        .route("/pause", get(PlayerController::pause))
        .route("/next", get(PlayerController::next_track))
        .route("/previous", get(PlayerController::previous_track))
        .route("/volume", get(PlayerController::set_volume))
        .route("/playlists", get(PlayerController::playlists))
        .with_state(player_controller.clone());

    // Free-text command route
    let command_routes = Router::new()
        .route("/mcp-command", get(CommandController::dispatch))
        .with_state(command_controller.clone());

    // Build application routes
    let app = Router::new()
        .route("/health", get(health::health))
        .merge(oauth_routes)
        .merge(player_routes)
        .merge(command_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http());

    // Start server
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
