//! Models for the `guilds` endpoint

use serde_json::Value;

use super::{BanEntry, Trust, required, required_array};
use crate::error::SchemaError;

/// Guild information from `GET /guilds/{id}`.
#[derive(Debug, Clone)]
pub struct GetGuildResponse {
    raw: Value,
    /// Aggregate trust rating for the guild.
    pub trust: Trust,
    /// Ban entries recorded against the guild.
    pub bans: Vec<BanEntry>,
}

impl GetGuildResponse {
    pub(crate) fn from_value(raw: Value) -> Result<Self, SchemaError> {
        const MODEL: &str = "GetGuildResponse";
        Ok(Self {
            trust: Trust::from_value(required(&raw, MODEL, "trust")?)?,
            bans: required_array(&raw, MODEL, "bans")?
                .iter()
                .map(BanEntry::from_value)
                .collect::<Result<Vec<_>, _>>()?,
            raw,
        })
    }

    /// The raw payload as returned by the API.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}
