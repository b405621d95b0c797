use axum::extract::{Query, State};
use serde::Deserialize;
use std::sync::Arc;

use crate::{domain::command::CommandService, error::AppResult};

#[derive(Debug, Deserialize)]
pub struct CommandParams {
    #[serde(default)]
    pub command: String,
}

pub struct CommandController {
    command_service: Arc<CommandService>,
}

impl CommandController {
    pub fn new(command_service: Arc<CommandService>) -> Self {
        Self { command_service }
    }

    /// GET /mcp-command?command=<text> - Run a free-text playback command
    pub async fn dispatch(
        State(controller): State<Arc<CommandController>>,
        Query(params): Query<CommandParams>,
    ) -> AppResult<String> {
        controller.command_service.dispatch(&params.command).await
    }
}
