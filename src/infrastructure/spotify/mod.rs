pub mod oauth;
pub mod player;

pub use oauth::SpotifyOAuthClient;
pub use player::SpotifyPlayerClient;
