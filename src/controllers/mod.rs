pub mod command;
pub mod health;
pub mod oauth;
pub mod player;
