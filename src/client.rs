//! Client facade for the Ravy API
//!
//! [`Client`] owns exactly one transport and exposes one facet per API
//! area. Shared session state (the cached token access list, the
//! optional phisherman token, the closed flag) lives in [`State`] behind
//! an `Arc` so concurrent calls through one client stay independent.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use crate::endpoints::{Avatars, Guilds, KSoft, Tokens, Urls, Users};
use crate::error::{AccessError, Error, Result, TransportError};
use crate::models::GetTokenResponse;
use crate::paths;
use crate::transport::{HttpTransport, Transport};

/// Shared per-session state behind the endpoint facets.
pub(crate) struct State {
    transport: Arc<dyn Transport>,
    /// Token access scopes, fetched lazily on the first guarded call.
    permissions: RwLock<Option<Vec<String>>>,
    phisherman_token: RwLock<Option<String>>,
    closed: AtomicBool,
}

impl State {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            permissions: RwLock::new(None),
            phisherman_token: RwLock::new(None),
            closed: AtomicBool::new(false),
        }
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Fail fast once the client has been closed, before any transport
    /// activity.
    pub(crate) fn ensure_open(&self) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(Error::ClientClosed);
        }
        Ok(())
    }

    /// Capability guard: check the session token carries the required
    /// scope, fetching and caching the token's access list on first use.
    pub(crate) async fn require_permission(&self, required: &str) -> Result<()> {
        if let Some(access) = self.permissions.read().await.as_deref() {
            return Self::check_scope(access, required);
        }

        // The write lock is held across the fetch so concurrent first
        // calls introspect the token exactly once.
        let mut slot = self.permissions.write().await;
        if slot.is_none() {
            let data = self.transport.get(paths::tokens(), &[]).await?;
            let token = GetTokenResponse::from_value(data)?;
            *slot = Some(token.access);
        }
        Self::check_scope(slot.as_deref().unwrap_or_default(), required)
    }

    fn check_scope(access: &[String], required: &str) -> Result<()> {
        if !access.iter().any(|scope| scope == required) {
            return Err(AccessError::new(required).into());
        }
        Ok(())
    }

    pub(crate) async fn phisherman_token(&self) -> Option<String> {
        self.phisherman_token.read().await.clone()
    }

    pub(crate) async fn set_phisherman_token(&self, token: Option<String>) {
        *self.phisherman_token.write().await = token;
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    #[cfg(test)]
    pub(crate) async fn prime_permissions(&self, scopes: &[&str]) {
        *self.permissions.write().await =
            Some(scopes.iter().map(|s| s.to_string()).collect());
    }
}

/// The client interface for interacting with the Ravy API.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> ravy::Result<()> {
/// let client = ravy::Client::new("token")?;
/// let bans = client.users().get_bans(123456789).await?;
/// println!("trust level {}", bans.trust.level);
/// client.close();
/// # Ok(())
/// # }
/// ```
pub struct Client {
    state: Arc<State>,
    avatars: Avatars,
    guilds: Guilds,
    ksoft: KSoft,
    tokens: Tokens,
    urls: Urls,
    users: Users,
}

impl Client {
    /// Create a client against the production API, authenticating with
    /// the given Ravy token.
    pub fn new(token: impl Into<String>) -> std::result::Result<Self, TransportError> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(token)?)))
    }

    /// Create a client against a custom base URL. Used for local
    /// servers and HTTP-level tests.
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> std::result::Result<Self, TransportError> {
        Ok(Self::with_transport(Arc::new(HttpTransport::with_base_url(
            token, base_url,
        )?)))
    }

    /// Create a client over any [`Transport`] implementation.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        let state = Arc::new(State::new(transport));
        Self {
            avatars: Avatars::new(Arc::clone(&state)),
            guilds: Guilds::new(Arc::clone(&state)),
            ksoft: KSoft::new(Arc::clone(&state)),
            tokens: Tokens::new(Arc::clone(&state)),
            urls: Urls::new(Arc::clone(&state)),
            users: Users::new(Arc::clone(&state)),
            state,
        }
    }

    /// Set the phisherman token for the session. Once set, URL lookups
    /// must also supply the paired `phisherman_user` argument.
    pub async fn set_phisherman_token(&self, token: impl Into<String>) -> &Self {
        self.state.set_phisherman_token(Some(token.into())).await;
        self
    }

    /// Clear the phisherman token for the session.
    pub async fn clear_phisherman_token(&self) -> &Self {
        self.state.set_phisherman_token(None).await;
        self
    }

    /// Close the client. Every subsequent operation fails fast with
    /// [`Error::ClientClosed`]; held connections are released when the
    /// client is dropped.
    pub fn close(&self) {
        self.state.close();
        log::info!("client closed");
    }

    /// Whether the client has been closed.
    pub fn is_closed(&self) -> bool {
        self.state.closed.load(Ordering::SeqCst)
    }

    /// The `avatars` endpoint.
    pub fn avatars(&self) -> &Avatars {
        &self.avatars
    }

    /// The `guilds` endpoint.
    pub fn guilds(&self) -> &Guilds {
        &self.guilds
    }

    /// The `ksoft` endpoint.
    pub fn ksoft(&self) -> &KSoft {
        &self.ksoft
    }

    /// The `tokens` endpoint.
    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    /// The `urls` endpoint.
    pub fn urls(&self) -> &Urls {
        &self.urls
    }

    /// The `users` endpoint.
    pub fn users(&self) -> &Users {
        &self.users
    }
}
