use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Error: No authorization code received.")]
    MissingAuthorizationCode,

    #[error("Not authenticated with Spotify. Visit /login to connect an account.")]
    NotAuthenticated,

    #[error("No refresh token available. Visit /login to connect an account.")]
    NoRefreshTokenAvailable,

    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Spotify returned status {0}")]
    Upstream(u16),

    #[error("Spotify request failed: {0}")]
    Transport(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingAuthorizationCode | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotAuthenticated | Self::NoRefreshTokenAvailable => StatusCode::UNAUTHORIZED,
            Self::Upstream(_) | Self::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers.
/// Errors leave the HTTP boundary as plain text; this relay never answers JSON.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        (status, self.to_string()).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
