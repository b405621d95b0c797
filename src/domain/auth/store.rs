use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{TokenSet, TokenSetPatch};

/// Process-wide storage for the provider token set.
///
/// There is exactly one token set: the relay is a single-user tool and keeps
/// no sessions. Writers are the authorization callback (`set`) and the
/// refresh exchange (`merge`); everything else reads.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn get(&self) -> Option<TokenSet>;

    /// Replace the stored token set wholesale.
    async fn set(&self, tokens: TokenSet);

    /// Overwrite the fields present in `patch`, retain the rest. No-op while
    /// nothing is stored yet.
    async fn merge(&self, patch: TokenSetPatch);
}

/// In-memory store; contents are lost on restart.
#[derive(Default)]
pub struct InMemoryTokenStore {
    tokens: RwLock<Option<TokenSet>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn get(&self) -> Option<TokenSet> {
        self.tokens.read().await.clone()
    }

    async fn set(&self, tokens: TokenSet) {
        *self.tokens.write().await = Some(tokens);
    }

    async fn merge(&self, patch: TokenSetPatch) {
        let mut guard = self.tokens.write().await;
        if let Some(tokens) = guard.as_mut() {
            if let Some(access_token) = patch.access_token {
                tokens.access_token = access_token;
            }
            if let Some(refresh_token) = patch.refresh_token {
                tokens.refresh_token = refresh_token;
            }
            if let Some(expires_in) = patch.expires_in {
                tokens.expires_in = expires_in;
            }
            if let Some(token_type) = patch.token_type {
                tokens.token_type = token_type;
            }
            if let Some(scope) = patch.scope {
                tokens.scope = scope;
            }
        }
    }
}
