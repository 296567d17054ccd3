//! Per-operation parameter validation
//!
//! Pure predicates over caller-supplied inputs, run before any route is
//! built or any network call is made. Type checks come first, then value
//! and range checks. Integer identifier typing is enforced by the method
//! signatures themselves.

use crate::error::ValidationError;

/// Hostname avatar references must originate from.
pub(crate) const TRUSTED_CDN_HOST: &str = "cdn.discordapp.com";

/// Methods accepted by the avatar matcher.
pub(crate) const AVATAR_METHODS: [&str; 2] = ["ssim", "phash"];

pub(crate) fn non_empty(param: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::InvalidValue {
            param,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

pub(crate) fn non_empty_bytes(param: &'static str, value: &[u8]) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::InvalidValue {
            param,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Similarity threshold: a finite float in the closed interval [0, 1].
pub(crate) fn threshold(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidType {
            param: "threshold",
            expected: "finite float",
        });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::InvalidValue {
            param: "threshold",
            reason: "must be between 0 and 1".to_string(),
        });
    }
    Ok(())
}

pub(crate) fn avatar_method(value: &str) -> Result<(), ValidationError> {
    if !AVATAR_METHODS.contains(&value) {
        return Err(ValidationError::InvalidValue {
            param: "method",
            reason: "must be either \"ssim\" or \"phash\"".to_string(),
        });
    }
    Ok(())
}

/// Remote avatar references must point at the trusted CDN.
pub(crate) fn trusted_avatar_url(value: &str) -> Result<(), ValidationError> {
    non_empty("avatar", value)?;

    let parsed = reqwest::Url::parse(value).map_err(|_| ValidationError::InvalidValue {
        param: "avatar",
        reason: format!("must be a URL on \"{TRUSTED_CDN_HOST}\""),
    })?;

    if parsed.host_str() != Some(TRUSTED_CDN_HOST) {
        return Err(ValidationError::InvalidValue {
            param: "avatar",
            reason: format!("must be a URL on \"{TRUSTED_CDN_HOST}\""),
        });
    }
    Ok(())
}

/// The phisherman credential pair is validated as a whole: the session
/// token and the per-call user ID must be supplied together or not at all.
pub(crate) fn phisherman_pair(
    token: Option<&str>,
    user: Option<u64>,
) -> Result<(), ValidationError> {
    match (token, user) {
        (None, Some(_)) => Err(ValidationError::InvalidValue {
            param: "phisherman_user",
            reason: "phisherman token required if phisherman user is set".to_string(),
        }),
        (Some(_), None) => Err(ValidationError::InvalidValue {
            param: "phisherman_user",
            reason: "phisherman user required if phisherman token is set".to_string(),
        }),
        _ => Ok(()),
    }
}
