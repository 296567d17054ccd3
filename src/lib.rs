//! Async client for the Ravy moderation and reputation API
//!
//! Covers user reputation and ban lookups, avatar-similarity checks,
//! URL/phishing lookups, guild lookups, and token introspection against
//! `https://ravy.org/api/v1`.
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> ravy::Result<()> {
//! let client = ravy::Client::new("your-ravy-token")?;
//!
//! let user = client.users().get_user(123456789).await?;
//! println!("{} ({})", user.trust.label, user.pronouns);
//!
//! let website = client.urls().get_website("https%3A%2F%2Fexample.com", None, None).await?;
//! if website.is_fraudulent {
//!     println!("flagged: {}", website.message);
//! }
//!
//! client.close();
//! # Ok(())
//! # }
//! ```
//!
//! All operations are async and issue exactly one HTTP call. Validation
//! and capability failures surface before any network activity for the
//! operation; transport and schema failures propagate unmodified so
//! callers can tell a retryable network problem from a caller mistake.

mod client;
mod endpoints;
mod error;
mod models;
mod paths;
mod transport;
mod validate;

pub use client::Client;
pub use endpoints::{Avatar, Avatars, Guilds, KSoft, Tokens, Urls, Users};
pub use error::{AccessError, Error, Result, SchemaError, TransportError, ValidationError};
pub use models::{
    BanEntry, BanEntryRequest, CheckAvatarResponse, EditWebsiteRequest, GetBansResponse,
    GetGuildResponse, GetKSoftBanResponse, GetPronounsResponse, GetReputationResponse,
    GetTokenResponse, GetUserResponse, GetWebsiteResponse, GetWhitelistsResponse, ReputationEntry,
    Trust, WhitelistEntry,
};
pub use transport::{HttpTransport, Transport};
