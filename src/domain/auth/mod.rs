pub mod dto;
pub mod service;
pub mod store;

pub use dto::{TokenSet, TokenSetPatch};
pub use service::AuthService;
pub use store::{InMemoryTokenStore, TokenStore};
