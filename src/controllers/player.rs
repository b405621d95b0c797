use axum::extract::{Query, State};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    domain::player::{PlayerService, PlayerServiceApi},
    error::AppResult,
};

#[derive(Debug, Deserialize)]
pub struct VolumeParams {
    pub volume: u8,
}

pub struct PlayerController {
    player_service: Arc<PlayerService>,
}

impl PlayerController {
    pub fn new(player_service: Arc<PlayerService>) -> Self {
        Self { player_service }
    }

    /// GET /current-song - Name the track and artist Spotify reports playing
    pub async fn current_song(
        State(controller): State<Arc<PlayerController>>,
    ) -> AppResult<String> {
        controller.player_service.current_song().await
    }

    /// GET /play - Resume playback
    pub async fn play(State(controller): State<Arc<PlayerController>>) -> AppResult<String> {
        controller.player_service.play().await
    }

    /// GET /pause - Pause playback
    pub async fn pause(State(controller): State<Arc<PlayerController>>) -> AppResult<String> {
        controller.player_service.pause().await
    }

    /// GET /next - Skip to the next track
    pub async fn next_track(State(controller): State<Arc<PlayerController>>) -> AppResult<String> {
        controller.player_service.next_track().await
    }

    /// GET /previous - Return to the previous track
    pub async fn previous_track(
        State(controller): State<Arc<PlayerController>>,
    ) -> AppResult<String> {
        controller.player_service.previous_track().await
    }

    /// GET /volume?volume=<0-100> - Set the playback volume percent
    pub async fn set_volume(
        State(controller): State<Arc<PlayerController>>,
        Query(params): Query<VolumeParams>,
    ) -> AppResult<String> {
        controller.player_service.set_volume(params.volume).await
    }

    /// GET /playlists - List the user's playlists by name
    pub async fn playlists(State(controller): State<Arc<PlayerController>>) -> AppResult<String> {
        controller.player_service.get_playlists().await
    }
}
