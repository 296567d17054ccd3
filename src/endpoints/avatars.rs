//! Operations on the `avatars` endpoint

use std::sync::Arc;

use crate::client::State;
use crate::error::Result;
use crate::models::CheckAvatarResponse;
use crate::paths;
use crate::validate;

/// An avatar to check: either a reference to the trusted CDN or the
/// image itself as an octet stream. The two input modes are mutually
/// exclusive and pick different wire shapes (query-parameter GET versus
/// multipart POST).
#[derive(Debug, Clone)]
pub enum Avatar {
    Url(String),
    Bytes(Vec<u8>),
}

impl Avatar {
    pub fn url(url: impl Into<String>) -> Self {
        Avatar::Url(url.into())
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Avatar::Bytes(bytes.into())
    }
}

/// Operations on the `avatars` endpoint.
pub struct Avatars {
    state: Arc<State>,
}

impl Avatars {
    pub(crate) fn new(state: Arc<State>) -> Self {
        Self { state }
    }

    /// Check whether an avatar matches a known fraudulent one. Requires
    /// the `avatars` scope.
    ///
    /// `threshold` is how similar the avatar needs to be for a match,
    /// in the closed interval [0, 1]. `method` is the matching
    /// algorithm, `"ssim"` or `"phash"`. URL inputs must point at
    /// `cdn.discordapp.com`.
    pub async fn check_avatar(
        &self,
        avatar: Avatar,
        threshold: f64,
        method: &str,
    ) -> Result<CheckAvatarResponse> {
        self.state.ensure_open()?;
        self.state.require_permission("avatars").await?;

        validate::threshold(threshold)?;
        validate::avatar_method(method)?;

        let data = match avatar {
            Avatar::Url(url) => {
                validate::trusted_avatar_url(&url)?;
                let params = [
                    ("avatar", url),
                    ("threshold", threshold.to_string()),
                    ("method", method.to_string()),
                ];
                self.state.transport().get(paths::avatars(), &params).await?
            }
            Avatar::Bytes(bytes) => {
                validate::non_empty_bytes("avatar", &bytes)?;
                let params = [
                    ("threshold", threshold.to_string()),
                    ("method", method.to_string()),
                ];
                self.state
                    .transport()
                    .post_multipart(paths::avatars(), &params, "avatar", bytes)
                    .await?
            }
        };

        Ok(CheckAvatarResponse::from_value(data)?)
    }
}
