use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::infrastructure::spotify::SpotifyOAuthClient;

use super::TokenStore;

pub struct AuthService {
    oauth_client: Arc<SpotifyOAuthClient>,
    token_store: Arc<dyn TokenStore>,
}

impl AuthService {
    pub fn new(oauth_client: Arc<SpotifyOAuthClient>, token_store: Arc<dyn TokenStore>) -> Self {
        Self {
            oauth_client,
            token_store,
        }
    }

    /// Build the consent-page URL the login route redirects to. No network
    /// call, no state change.
    pub fn begin_login(&self) -> String {
        self.oauth_client.authorization_url()
    }

    /// Complete the authorization-code exchange and store the answered token
    /// set wholesale, replacing whatever was there. A missing or empty code
    /// never reaches the exchange.
    pub async fn handle_callback(&self, code: Option<&str>) -> AppResult<()> {
        let code = code
            .filter(|c| !c.is_empty())
            .ok_or(AppError::MissingAuthorizationCode)?;

        let tokens = self.oauth_client.exchange_code(code).await?;
        self.token_store.set(tokens).await;

        tracing::info!("Spotify authorization complete, token set stored");
        Ok(())
    }

    /// Trade the stored refresh token for a new access token, merging the
    /// answer into the stored set so omitted fields keep their values.
    ///
    /// Nothing calls this on a schedule or on upstream failures; it runs
    /// only when the refresh route is hit.
    pub async fn refresh(&self) -> AppResult<()> {
        let tokens = self
            .token_store
            .get()
            .await
            .ok_or(AppError::NoRefreshTokenAvailable)?;
        if tokens.refresh_token.is_empty() {
            return Err(AppError::NoRefreshTokenAvailable);
        }

        let patch = self.oauth_client.refresh_token(&tokens.refresh_token).await?;
        self.token_store.merge(patch).await;

        tracing::info!("Spotify access token refreshed");
        Ok(())
    }
}
