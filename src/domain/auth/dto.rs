use serde::{Deserialize, Serialize};

/// Token set answered by the provider's token endpoint and cached for the
/// lifetime of the process.
///
/// Every field is defaulted because the authorization exchange stores
/// whatever JSON object comes back, shape unchecked: an OAuth error payload
/// becomes an empty token set that fails on first use rather than at the
/// exchange itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenSet {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
}

/// Partial token set answered by the refresh exchange.
///
/// Fields the provider omits stay `None` and leave the stored value
/// untouched on merge; in particular a refresh response usually carries no
/// new refresh token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenSetPatch {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
}
