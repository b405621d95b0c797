use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::auth::TokenStore;
use crate::error::{AppError, AppResult};
use crate::infrastructure::spotify::SpotifyPlayerClient;

const NO_SONG_PLAYING: &str = "No song is currently playing.";
const PLAYBACK_STARTED: &str = "Playback started!";
const PLAYBACK_PAUSED: &str = "Playback paused!";
const SKIPPED_TO_NEXT: &str = "Skipped to next track!";
const WENT_TO_PREVIOUS: &str = "Went back to previous track!";
const PLAYLISTS_UNAVAILABLE: &str = "Could not retrieve playlists.";

/// Playback operations, each forwarding exactly one Spotify call and
/// answering a short line of text.
#[async_trait]
pub trait PlayerServiceApi: Send + Sync {
    async fn current_song(&self) -> AppResult<String>;

    async fn play(&self) -> AppResult<String>;

    async fn pause(&self) -> AppResult<String>;

    async fn next_track(&self) -> AppResult<String>;

    async fn previous_track(&self) -> AppResult<String>;

    async fn set_volume(&self, level: u8) -> AppResult<String>;

    async fn get_playlists(&self) -> AppResult<String>;
}

pub struct PlayerService {
    token_store: Arc<dyn TokenStore>,
    spotify: Arc<SpotifyPlayerClient>,
}

impl PlayerService {
    pub fn new(token_store: Arc<dyn TokenStore>, spotify: Arc<SpotifyPlayerClient>) -> Self {
        Self {
            token_store,
            spotify,
        }
    }

    /// Every operation needs the bearer token from the store; absence means
    /// the login flow has not completed yet, checked before any network call.
    async fn access_token(&self) -> AppResult<String> {
        let tokens = self
            .token_store
            .get()
            .await
            .ok_or(AppError::NotAuthenticated)?;
        Ok(tokens.access_token)
    }
}

#[async_trait]
impl PlayerServiceApi for PlayerService {
    async fn current_song(&self) -> AppResult<String> {
        let token = self.access_token().await?;
        let playing = self.spotify.currently_playing(&token).await?;

        // A 200 body without an item or without any artist counts as nothing
        // playing, same as the provider's own 204.
        let line = playing.and_then(|p| p.item).and_then(|track| {
            track
                .artists
                .first()
                .map(|artist| format!("Currently Playing: {} by {}", track.name, artist.name))
        });

        Ok(line.unwrap_or_else(|| NO_SONG_PLAYING.to_string()))
    }

    async fn play(&self) -> AppResult<String> {
        let token = self.access_token().await?;
        self.spotify.play(&token).await?;
        Ok(PLAYBACK_STARTED.to_string())
    }

    async fn pause(&self) -> AppResult<String> {
        let token = self.access_token().await?;
        self.spotify.pause(&token).await?;
        Ok(PLAYBACK_PAUSED.to_string())
    }

    async fn next_track(&self) -> AppResult<String> {
        let token = self.access_token().await?;
        self.spotify.next_track(&token).await?;
        Ok(SKIPPED_TO_NEXT.to_string())
    }

    async fn previous_track(&self) -> AppResult<String> {
        let token = self.access_token().await?;
        self.spotify.previous_track(&token).await?;
        Ok(WENT_TO_PREVIOUS.to_string())
    }

    async fn set_volume(&self, level: u8) -> AppResult<String> {
        let token = self.access_token().await?;
        self.spotify.set_volume(&token, level).await?;
        Ok(format!("Volume set to {}%", level))
    }

    async fn get_playlists(&self) -> AppResult<String> {
        let token = self.access_token().await?;
        let page = self.spotify.playlists(&token).await?;

        let reply = page.map(|page| {
            let names: Vec<String> = page.items.into_iter().map(|p| p.name).collect();
            format!("Your Playlists: {}", names.join(", "))
        });

        Ok(reply.unwrap_or_else(|| PLAYLISTS_UNAVAILABLE.to_string()))
    }
}
