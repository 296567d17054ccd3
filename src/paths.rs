//! Route construction for the Ravy API endpoints
//!
//! Routes are plain path strings built from already-validated identifiers.
//! Child routes are always derived by appending a suffix to the parent
//! route, so a change to the parent prefix propagates automatically. No
//! escaping or encoding happens here; freeform strings such as URLs are
//! pre-encoded by the caller where required.

/// Route for the `users` endpoint and its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPath {
    route: String,
    user_id: u64,
}

impl UserPath {
    pub fn new(user_id: u64) -> Self {
        Self {
            route: format!("/users/{user_id}"),
            user_id,
        }
    }

    /// The parent route, `/users/{id}`.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// The user ID this route was built from.
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    pub fn pronouns(&self) -> String {
        format!("{}/pronouns", self.route)
    }

    pub fn bans(&self) -> String {
        format!("{}/bans", self.route)
    }

    pub fn whitelists(&self) -> String {
        format!("{}/whitelists", self.route)
    }

    pub fn reputation(&self) -> String {
        format!("{}/rep", self.route)
    }
}

/// Route for the `guilds` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildPath {
    route: String,
    guild_id: u64,
}

impl GuildPath {
    pub fn new(guild_id: u64) -> Self {
        Self {
            route: format!("/guilds/{guild_id}"),
            guild_id,
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn guild_id(&self) -> u64 {
        self.guild_id
    }
}

/// The route for the `avatars` endpoint.
pub fn avatars() -> &'static str {
    "/avatars"
}

/// The route for the `ksoft` ban lookup for one user.
pub fn ksoft_bans(user_id: u64) -> String {
    format!("{}/bans/{user_id}", "/ksoft")
}

/// The route for current-token introspection.
pub fn tokens() -> &'static str {
    "/tokens/@current"
}

/// The route for the `urls` endpoint.
pub fn urls() -> &'static str {
    "/urls"
}

/// The route for editing one website entry. The URL segment is supplied
/// pre-encoded by the caller.
pub fn urls_edit(url: &str) -> String {
    format!("{}/{url}", urls())
}
