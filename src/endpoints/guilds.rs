//! Operations on the `guilds` endpoint

use std::sync::Arc;

use crate::client::State;
use crate::error::Result;
use crate::models::GetGuildResponse;
use crate::paths::GuildPath;

/// Operations on the `guilds` endpoint.
pub struct Guilds {
    state: Arc<State>,
}

impl Guilds {
    pub(crate) fn new(state: Arc<State>) -> Self {
        Self { state }
    }

    /// Get extensive guild information. Requires the `guilds` scope.
    pub async fn get_guild(&self, guild_id: u64) -> Result<GetGuildResponse> {
        self.state.ensure_open()?;
        self.state.require_permission("guilds").await?;

        let path = GuildPath::new(guild_id);
        let data = self.state.transport().get(path.route(), &[]).await?;
        Ok(GetGuildResponse::from_value(data)?)
    }
}
