use anyhow::Result;
use axum::Router;
use spotify_remote::domain::auth::TokenStore;
use spotify_remote::infrastructure::config::{Config, LogFormat};
use std::sync::Arc;
use tokio::net::TcpListener;
use wiremock::MockServer;


use api_client::TestClient;
use fixtures::TestFixtures;

pub struct TestContext {
    pub client: TestClient,
    pub spotify: MockServer,
    #[allow(dead_code)]
    pub config: Config,
    pub fixtures: TestFixtures,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        // One wiremock server stands in for both Spotify hosts
        let spotify = MockServer::start().await;

        // Create test configuration
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0, // Will be assigned by the OS
            log_format: LogFormat::Pretty,
            spotify_client_id: "test_spotify_client_id".to_string(),
            spotify_client_secret: "test_spotify_client_secret".to_string(),
            spotify_redirect_uri: "http://localhost:5500/callback".to_string(),
            spotify_accounts_url: spotify.uri(),
            spotify_api_url: spotify.uri(),
        };

        let (app, token_store) = create_app(config.clone());

        // Start server
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Create test client and fixtures
        let client = TestClient::new(&base_url);
        let fixtures = TestFixtures::new(token_store);

        Ok(Self {
            client,
            spotify,
            config,
            fixtures,
        })
    }
}

/// Wire the application exactly as main does, but hand back the token store
/// so fixtures can seed it.
fn create_app(config: Config) -> (Router, Arc<dyn TokenStore>) {
    use axum::{middleware, routing::get};
    use spotify_remote::{
        controllers::{
            command::CommandController, health, oauth::OAuthController, player::PlayerController,
        },
        domain::{
            auth::{AuthService, InMemoryTokenStore},
            command::CommandService,
            player::PlayerService,
        },
        infrastructure::{
            http::request_id_middleware,
            spotify::{SpotifyOAuthClient, SpotifyPlayerClient},
        },
    };
    use tower_http::trace::TraceLayer;

    let config = Arc::new(config);

    let token_store: Arc<dyn TokenStore> = Arc::new(InMemoryTokenStore::new());

    let oauth_client = Arc::new(SpotifyOAuthClient::new(
        config.spotify_accounts_url.clone(),
        config.spotify_client_id.clone(),
        config.spotify_client_secret.clone(),
        config.spotify_redirect_uri.clone(),
    ));
    let player_client = Arc::new(SpotifyPlayerClient::new(config.spotify_api_url.clone()));

    let auth_service = Arc::new(AuthService::new(oauth_client, token_store.clone()));
    let player_service = Arc::new(PlayerService::new(token_store.clone(), player_client));
    let command_service = Arc::new(CommandService::new(player_service.clone()));

    let oauth_controller = Arc::new(OAuthController::new(auth_service));
    let player_controller = Arc::new(PlayerController::new(player_service));
    let command_controller = Arc::new(CommandController::new(command_service));

    // OAuth routes (drive the Spotify authorization flow)
    let oauth_routes = Router::new()
        .route("/login", get(OAuthController::login))
        .route("/callback", get(OAuthController::callback))
        .route("/refresh", get(OAuthController::refresh))
        .with_state(oauth_controller);

    // Playback routes (require a stored token set)
    let player_routes = Router::new()
        .route("/current-song", get(PlayerController::current_song))
        .route("/play", get(PlayerController::play))
        .route("/pause", get(PlayerController::pause))
        .route("/next", get(PlayerController::next_track))
        .route("/previous", get(PlayerController::previous_track))
        .route("/volume", get(PlayerController::set_volume))
        .route("/playlists", get(PlayerController::playlists))
        .with_state(player_controller);

    // Free-text command route
    let command_routes = Router::new()
        .route("/mcp-command", get(CommandController::dispatch))
        .with_state(command_controller);

    let app = Router::new()
        .route("/health", get(health::health))
        .merge(oauth_routes)
        .merge(player_routes)
        .merge(command_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http());

    (app, token_store)
}
