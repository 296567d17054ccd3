//! Operations on the `users` endpoint

use std::sync::Arc;

use crate::client::State;
use crate::error::Result;
use crate::models::{
    BanEntryRequest, GetBansResponse, GetPronounsResponse, GetReputationResponse, GetUserResponse,
    GetWhitelistsResponse,
};
use crate::paths::UserPath;
use crate::validate;

/// Operations on the `users` endpoint.
pub struct Users {
    state: Arc<State>,
}

impl Users {
    pub(crate) fn new(state: Arc<State>) -> Self {
        Self { state }
    }

    /// Get extensive user information. Requires the `users` scope.
    pub async fn get_user(&self, user_id: u64) -> Result<GetUserResponse> {
        self.state.ensure_open()?;
        self.state.require_permission("users").await?;

        let path = UserPath::new(user_id);
        let data = self.state.transport().get(path.route(), &[]).await?;
        Ok(GetUserResponse::from_value(data)?)
    }

    /// Get a user's pronouns. Requires the `users.pronouns` scope.
    pub async fn get_pronouns(&self, user_id: u64) -> Result<GetPronounsResponse> {
        self.state.ensure_open()?;
        self.state.require_permission("users.pronouns").await?;

        let path = UserPath::new(user_id);
        let data = self.state.transport().get(&path.pronouns(), &[]).await?;
        Ok(GetPronounsResponse::from_value(data)?)
    }

    /// Get a user's bans and trust rating. Requires the `users.bans`
    /// scope.
    pub async fn get_bans(&self, user_id: u64) -> Result<GetBansResponse> {
        self.state.ensure_open()?;
        self.state.require_permission("users.bans").await?;

        let path = UserPath::new(user_id);
        let data = self.state.transport().get(&path.bans(), &[]).await?;
        Ok(GetBansResponse::from_value(data)?)
    }

    /// Add a ban entry for a user. Requires the `admin.bans` scope.
    ///
    /// Mutation only; returns no model.
    pub async fn add_ban(&self, user_id: u64, request: BanEntryRequest) -> Result<()> {
        self.state.ensure_open()?;
        self.state.require_permission("admin.bans").await?;

        validate::non_empty("provider", &request.provider)?;
        validate::non_empty("reason", &request.reason)?;
        if let Some(reason_key) = &request.reason_key {
            validate::non_empty("reason_key", reason_key)?;
        }

        let path = UserPath::new(user_id);
        self.state
            .transport()
            .post_json(&path.bans(), &request.to_json())
            .await?;
        Ok(())
    }

    /// Get a user's whitelists. Requires the `users.whitelists` scope.
    pub async fn get_whitelists(&self, user_id: u64) -> Result<GetWhitelistsResponse> {
        self.state.ensure_open()?;
        self.state.require_permission("users.whitelists").await?;

        let path = UserPath::new(user_id);
        let data = self.state.transport().get(&path.whitelists(), &[]).await?;
        Ok(GetWhitelistsResponse::from_value(data)?)
    }

    /// Get a user's reputation entries. Requires the `users.rep` scope.
    pub async fn get_reputation(&self, user_id: u64) -> Result<GetReputationResponse> {
        self.state.ensure_open()?;
        self.state.require_permission("users.rep").await?;

        let path = UserPath::new(user_id);
        let data = self.state.transport().get(&path.reputation(), &[]).await?;
        Ok(GetReputationResponse::from_value(data)?)
    }
}
