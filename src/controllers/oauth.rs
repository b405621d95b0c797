use axum::{
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{domain::auth::AuthService, error::AppResult};

const AUTHORIZED: &str = "Authorization successful! You can now control Spotify.";
const REFRESHED: &str = "Access token refreshed.";

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
}

pub struct OAuthController {
    auth_service: Arc<AuthService>,
}

impl OAuthController {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    /// GET /login - Redirect the browser to the Spotify consent page
    pub async fn login(State(controller): State<Arc<OAuthController>>) -> Redirect {
        let auth_url = controller.auth_service.begin_login();
        Redirect::temporary(&auth_url)
    }

    /// GET /callback - Exchange the authorization code Spotify redirected
    /// back with for a token set
    pub async fn callback(
        State(controller): State<Arc<OAuthController>>,
        Query(params): Query<CallbackParams>,
    ) -> AppResult<&'static str> {
        controller
            .auth_service
            .handle_callback(params.code.as_deref())
            .await?;
        Ok(AUTHORIZED)
    }

    /// GET /refresh - Trade the stored refresh token for a new access token
    pub async fn refresh(
        State(controller): State<Arc<OAuthController>>,
    ) -> AppResult<&'static str> {
        controller.auth_service.refresh().await?;
        Ok(REFRESHED)
    }
}
