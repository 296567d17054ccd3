//! Operations on the `tokens` endpoint

use std::sync::Arc;

use crate::client::State;
use crate::error::Result;
use crate::models::GetTokenResponse;
use crate::paths;

/// Operations on the `tokens` endpoint.
pub struct Tokens {
    state: Arc<State>,
}

impl Tokens {
    pub(crate) fn new(state: Arc<State>) -> Self {
        Self { state }
    }

    /// Get information about the current session token. This is the
    /// introspection call itself, so no capability guard applies.
    pub async fn get_token(&self) -> Result<GetTokenResponse> {
        self.state.ensure_open()?;

        let data = self.state.transport().get(paths::tokens(), &[]).await?;
        Ok(GetTokenResponse::from_value(data)?)
    }
}
