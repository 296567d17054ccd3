//! Models for the `users` endpoint

use serde_json::Value;

use super::{
    BanEntry, Trust, optional_u64, required, required_array, required_f64, required_str,
};
use crate::error::SchemaError;

/// One entry in a user's whitelist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistEntry {
    /// Source for where the user is whitelisted.
    pub provider: String,
    /// Why the user is whitelisted.
    pub reason: String,
}

impl WhitelistEntry {
    pub(crate) fn from_value(data: &Value) -> Result<Self, SchemaError> {
        const MODEL: &str = "WhitelistEntry";
        Ok(Self {
            provider: required_str(data, MODEL, "provider")?,
            reason: required_str(data, MODEL, "reason")?,
        })
    }
}

/// One provider's reputation score for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct ReputationEntry {
    /// Source for the reputation data.
    pub provider: String,
    /// Normalized score between 0 and 1.
    pub score: f64,
    /// Amount of upvotes, where the provider reports them.
    pub upvotes: Option<u64>,
    /// Amount of downvotes, where the provider reports them.
    pub downvotes: Option<u64>,
}

impl ReputationEntry {
    pub(crate) fn from_value(data: &Value) -> Result<Self, SchemaError> {
        const MODEL: &str = "ReputationEntry";
        Ok(Self {
            provider: required_str(data, MODEL, "provider")?,
            score: required_f64(data, MODEL, "score")?,
            upvotes: optional_u64(data, "upvotes"),
            downvotes: optional_u64(data, "downvotes"),
        })
    }
}

fn ban_entries(
    data: &Value,
    model: &'static str,
) -> Result<Vec<BanEntry>, SchemaError> {
    required_array(data, model, "bans")?
        .iter()
        .map(BanEntry::from_value)
        .collect()
}

fn whitelist_entries(
    data: &Value,
    model: &'static str,
) -> Result<Vec<WhitelistEntry>, SchemaError> {
    required_array(data, model, "whitelists")?
        .iter()
        .map(WhitelistEntry::from_value)
        .collect()
}

fn reputation_entries(
    data: &Value,
    model: &'static str,
) -> Result<Vec<ReputationEntry>, SchemaError> {
    required_array(data, model, "rep")?
        .iter()
        .map(ReputationEntry::from_value)
        .collect()
}

/// Extensive user information from `GET /users/{id}`.
#[derive(Debug, Clone)]
pub struct GetUserResponse {
    raw: Value,
    /// The user's pronouns.
    pub pronouns: String,
    /// Aggregate trust rating.
    pub trust: Trust,
    /// Whitelist entries across providers.
    pub whitelists: Vec<WhitelistEntry>,
    /// Ban entries across providers.
    pub bans: Vec<BanEntry>,
    /// Reputation entries across providers.
    pub rep: Vec<ReputationEntry>,
}

impl GetUserResponse {
    pub(crate) fn from_value(raw: Value) -> Result<Self, SchemaError> {
        const MODEL: &str = "GetUserResponse";
        Ok(Self {
            pronouns: required_str(&raw, MODEL, "pronouns")?,
            trust: Trust::from_value(required(&raw, MODEL, "trust")?)?,
            whitelists: whitelist_entries(&raw, MODEL)?,
            bans: ban_entries(&raw, MODEL)?,
            rep: reputation_entries(&raw, MODEL)?,
            raw,
        })
    }

    /// The raw payload as returned by the API.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Pronouns from `GET /users/{id}/pronouns`.
#[derive(Debug, Clone)]
pub struct GetPronounsResponse {
    raw: Value,
    pub pronouns: String,
}

impl GetPronounsResponse {
    pub(crate) fn from_value(raw: Value) -> Result<Self, SchemaError> {
        Ok(Self {
            pronouns: required_str(&raw, "GetPronounsResponse", "pronouns")?,
            raw,
        })
    }

    /// The raw payload as returned by the API.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Bans and trust from `GET /users/{id}/bans`.
#[derive(Debug, Clone)]
pub struct GetBansResponse {
    raw: Value,
    pub trust: Trust,
    pub bans: Vec<BanEntry>,
}

impl GetBansResponse {
    pub(crate) fn from_value(raw: Value) -> Result<Self, SchemaError> {
        const MODEL: &str = "GetBansResponse";
        Ok(Self {
            trust: Trust::from_value(required(&raw, MODEL, "trust")?)?,
            bans: ban_entries(&raw, MODEL)?,
            raw,
        })
    }

    /// The raw payload as returned by the API.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Whitelists from `GET /users/{id}/whitelists`.
#[derive(Debug, Clone)]
pub struct GetWhitelistsResponse {
    raw: Value,
    pub whitelists: Vec<WhitelistEntry>,
}

impl GetWhitelistsResponse {
    pub(crate) fn from_value(raw: Value) -> Result<Self, SchemaError> {
        Ok(Self {
            whitelists: whitelist_entries(&raw, "GetWhitelistsResponse")?,
            raw,
        })
    }

    /// The raw payload as returned by the API.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Reputation from `GET /users/{id}/rep`.
#[derive(Debug, Clone)]
pub struct GetReputationResponse {
    raw: Value,
    pub rep: Vec<ReputationEntry>,
}

impl GetReputationResponse {
    pub(crate) fn from_value(raw: Value) -> Result<Self, SchemaError> {
        Ok(Self {
            rep: reputation_entries(&raw, "GetReputationResponse")?,
            raw,
        })
    }

    /// The raw payload as returned by the API.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Request body for `POST /users/{id}/bans`.
#[derive(Debug, Clone)]
pub struct BanEntryRequest {
    /// Source for where the user was banned.
    pub provider: String,
    /// Why the user was banned.
    pub reason: String,
    /// User ID of the responsible moderator.
    pub moderator: u64,
    /// Machine-readable version of the reason, only meaningful for the
    /// `ravy` and `dservices` providers.
    pub reason_key: Option<String>,
}

impl BanEntryRequest {
    pub fn new(
        provider: impl Into<String>,
        reason: impl Into<String>,
        moderator: u64,
    ) -> Self {
        Self {
            provider: provider.into(),
            reason: reason.into(),
            moderator,
            reason_key: None,
        }
    }

    pub fn reason_key(mut self, reason_key: impl Into<String>) -> Self {
        self.reason_key = Some(reason_key.into());
        self
    }

    /// The wire-format JSON body. `reason_key` is present iff set.
    pub(crate) fn to_json(&self) -> Value {
        let mut body = serde_json::json!({
            "provider": self.provider,
            "reason": self.reason,
            "moderator": self.moderator,
        });
        if let Some(reason_key) = &self.reason_key {
            body["reason_key"] = Value::String(reason_key.clone());
        }
        body
    }
}
