pub mod model;
pub mod service;

pub use model::PlaybackCommand;
pub use service::CommandService;
