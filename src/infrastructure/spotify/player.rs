use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Currently-playing payload, reduced to the fields the relay displays.
#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentlyPlaying {
    pub item: Option<Track>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

/// One page of the user's playlists; the relay only ever reads the names.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistPage {
    #[serde(default)]
    pub items: Vec<Playlist>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Playlist {
    pub name: String,
}

/// Client for the player and playlist endpoints of the Spotify Web API.
///
/// Every method issues exactly one request carrying the caller's bearer
/// token. Nothing is retried and no timeout is set beyond reqwest's
/// defaults.
pub struct SpotifyPlayerClient {
    api_url: String,
    http_client: reqwest::Client,
}

impl SpotifyPlayerClient {
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            http_client: reqwest::Client::new(),
        }
    }

    /// Fetch the currently playing track. `Ok(None)` covers every non-200
    /// answer, the 204 "nothing playing" case included.
    pub async fn currently_playing(
        &self,
        access_token: &str,
    ) -> AppResult<Option<CurrentlyPlaying>> {
        let response = self
            .http_client
            .get(format!("{}/v1/me/player/currently-playing", self.api_url))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("currently-playing request failed: {}", e)))?;

        if response.status() != reqwest::StatusCode::OK {
            return Ok(None);
        }

        let playing = response.json::<CurrentlyPlaying>().await.map_err(|e| {
            AppError::Transport(format!("failed to parse currently-playing response: {}", e))
        })?;

        Ok(Some(playing))
    }

    /// Resume playback on the active device.
    pub async fn play(&self, access_token: &str) -> AppResult<()> {
        self.control(Method::PUT, "/v1/me/player/play", access_token)
            .await
    }

    /// Pause playback.
    pub async fn pause(&self, access_token: &str) -> AppResult<()> {
        self.control(Method::PUT, "/v1/me/player/pause", access_token)
            .await
    }

    /// Skip to the next track.
    pub async fn next_track(&self, access_token: &str) -> AppResult<()> {
        self.control(Method::POST, "/v1/me/player/next", access_token)
            .await
    }

    /// Return to the previous track.
    pub async fn previous_track(&self, access_token: &str) -> AppResult<()> {
        self.control(Method::POST, "/v1/me/player/previous", access_token)
            .await
    }

    /// Set the playback volume. The level goes upstream as the
    /// `volume_percent` query parameter, unvalidated; the provider rejects
    /// out-of-range values and that rejection surfaces like any other
    /// control failure.
    pub async fn set_volume(&self, access_token: &str, level: u8) -> AppResult<()> {
        let response = self
            .http_client
            .put(format!("{}/v1/me/player/volume", self.api_url))
            .query(&[("volume_percent", level.to_string())])
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("volume request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(status.as_u16()));
        }
        Ok(())
    }

    /// List the current user's playlists. `Ok(None)` covers every non-200
    /// answer.
    pub async fn playlists(&self, access_token: &str) -> AppResult<Option<PlaylistPage>> {
        let response = self
            .http_client
            .get(format!("{}/v1/me/playlists", self.api_url))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("playlists request failed: {}", e)))?;

        if response.status() != reqwest::StatusCode::OK {
            return Ok(None);
        }

        let page = response
            .json::<PlaylistPage>()
            .await
            .map_err(|e| AppError::Transport(format!("failed to parse playlists response: {}", e)))?;

        Ok(Some(page))
    }

    /// Forward one control call and reflect a non-2xx answer to the caller.
    async fn control(&self, method: Method, path: &str, access_token: &str) -> AppResult<()> {
        let response = self
            .http_client
            .request(method, format!("{}{}", self.api_url, path))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("player request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(status.as_u16()));
        }
        Ok(())
    }
}
