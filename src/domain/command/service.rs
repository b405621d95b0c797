use std::sync::Arc;

use crate::domain::player::{PlayerService, PlayerServiceApi};
use crate::error::{AppError, AppResult};

use super::PlaybackCommand;

const UNKNOWN_COMMAND: &str = "Unknown command. Please try again.";

pub struct CommandService {
    player_service: Arc<PlayerService>,
}

impl CommandService {
    pub fn new(player_service: Arc<PlayerService>) -> Self {
        Self { player_service }
    }

    /// Map a free-text command onto one player operation. The level parsed
    /// out of a volume command is the level that goes upstream.
    pub async fn dispatch(&self, text: &str) -> AppResult<String> {
        match PlaybackCommand::classify(text) {
            PlaybackCommand::Play => self.player_service.play().await,
            PlaybackCommand::Pause => self.player_service.pause().await,
            PlaybackCommand::Next => self.player_service.next_track().await,
            PlaybackCommand::Previous => self.player_service.previous_track().await,
            PlaybackCommand::Volume(Some(level)) => self.player_service.set_volume(level).await,
            PlaybackCommand::Volume(None) => Err(AppError::BadRequest(
                "volume commands must end with a level between 0 and 100".to_string(),
            )),
            PlaybackCommand::Unknown => Ok(UNKNOWN_COMMAND.to_string()),
        }
    }
}
