use crate::domain::auth::{TokenSet, TokenSetPatch};
use crate::error::{AppError, AppResult};

const AUTHORIZE_PATH: &str = "/authorize";
const TOKEN_PATH: &str = "/api/token";

/// Scopes requested on login: playback state read/write plus playlist
/// listing, space-joined the way the authorize endpoint expects them.
const SCOPES: &str =
    "user-read-playback-state user-modify-playback-state playlist-read-private playlist-modify-public";

pub struct SpotifyOAuthClient {
    accounts_url: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    http_client: reqwest::Client,
}

impl SpotifyOAuthClient {
    pub fn new(
        accounts_url: String,
        client_id: String,
        client_secret: String,
        redirect_uri: String,
    ) -> Self {
        Self {
            accounts_url,
            client_id,
            client_secret,
            redirect_uri,
            http_client: reqwest::Client::new(),
        }
    }

    /// Generate the consent-page URL for the authorization-code flow.
    /// Pure string construction, no network call.
    pub fn authorization_url(&self) -> String {
        format!(
            "{}{}?client_id={}&response_type=code&redirect_uri={}&scope={}",
            self.accounts_url,
            AUTHORIZE_PATH,
            self.client_id,
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(SCOPES),
        )
    }

    /// Exchange an authorization code for a full token set.
    ///
    /// The response shape is deliberately not validated: whatever JSON object
    /// the token endpoint answers with deserializes into a (possibly
    /// defaulted) `TokenSet` for the caller to store as-is.
    pub async fn exchange_code(&self, code: &str) -> AppResult<TokenSet> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = self
            .http_client
            .post(format!("{}{}", self.accounts_url, TOKEN_PATH))
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("token exchange failed: {}", e)))?;

        response
            .json::<TokenSet>()
            .await
            .map_err(|e| AppError::Transport(format!("failed to parse token response: {}", e)))
    }

    /// Exchange the stored refresh token for a fresh access token.
    pub async fn refresh_token(&self, refresh_token: &str) -> AppResult<TokenSetPatch> {
        let params = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = self
            .http_client
            .post(format!("{}{}", self.accounts_url, TOKEN_PATH))
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("token refresh failed: {}", e)))?;

        response
            .json::<TokenSetPatch>()
            .await
            .map_err(|e| AppError::Transport(format!("failed to parse refresh response: {}", e)))
    }
}
