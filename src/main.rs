use spotify_remote::infrastructure::config::{Config, LogFormat};
use spotify_remote::infrastructure::http::start_http_server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Spotify Remote on {}:{}",
        config.host,
        config.port
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate the token store (process memory, single account)
    tracing::info!("Instantiating token store...");
    let token_store: Arc<dyn spotify_remote::domain::auth::TokenStore> =
        Arc::new(spotify_remote::domain::auth::InMemoryTokenStore::new());

    // 2. Instantiate Spotify clients
    tracing::info!("Instantiating Spotify clients...");
    let oauth_client = Arc::new(
        spotify_remote::infrastructure::spotify::SpotifyOAuthClient::new(
            config.spotify_accounts_url.clone(),
            config.spotify_client_id.clone(),
            config.spotify_client_secret.clone(),
            config.spotify_redirect_uri.clone(),
        ),
    );
    let player_client = Arc::new(
        spotify_remote::infrastructure::spotify::SpotifyPlayerClient::new(
            config.spotify_api_url.clone(),
        ),
    );

    // 3. Instantiate services (inject store and clients)
    tracing::info!("Instantiating services...");
    let auth_service = Arc::new(spotify_remote::domain::auth::AuthService::new(
        oauth_client.clone(),
        token_store.clone(),
    ));
    let player_service = Arc::new(spotify_remote::domain::player::PlayerService::new(
        token_store.clone(),
        player_client.clone(),
    ));
    let command_service = Arc::new(spotify_remote::domain::command::CommandService::new(
        player_service.clone(),
    ));

    // 4. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let oauth_controller = Arc::new(spotify_remote::controllers::oauth::OAuthController::new(
        auth_service,
    ));
    let player_controller = Arc::new(spotify_remote::controllers::player::PlayerController::new(
        player_service,
    ));
    let command_controller = Arc::new(
        spotify_remote::controllers::command::CommandController::new(command_service),
    );

    // Start HTTP server with all routes
    start_http_server(
        config,
        oauth_controller,
        player_controller,
        command_controller,
    )
    .await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "spotify_remote=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "spotify_remote=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
