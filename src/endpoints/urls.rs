//! Operations on the `urls` endpoint

use std::sync::Arc;

use crate::client::State;
use crate::error::Result;
use crate::models::{EditWebsiteRequest, GetWebsiteResponse};
use crate::paths;
use crate::validate;

/// Operations on the `urls` endpoint.
pub struct Urls {
    state: Arc<State>,
}

impl Urls {
    pub(crate) fn new(state: Arc<State>) -> Self {
        Self { state }
    }

    /// Look up website information for a URL. Requires the
    /// `urls.cached` scope.
    ///
    /// `url` is supplied pre-encoded by the caller. `author` is the user
    /// that posted the message containing the URL. When a phisherman
    /// token is set on the session, `phisherman_user` (the Discord user
    /// ID of the token owner) becomes mandatory, and vice versa.
    pub async fn get_website(
        &self,
        url: &str,
        author: Option<u64>,
        phisherman_user: Option<u64>,
    ) -> Result<GetWebsiteResponse> {
        self.state.ensure_open()?;
        self.state.require_permission("urls.cached").await?;

        validate::non_empty("url", url)?;
        let phisherman_token = self.state.phisherman_token().await;
        validate::phisherman_pair(phisherman_token.as_deref(), phisherman_user)?;

        let mut params: Vec<(&str, String)> = vec![("url", url.to_string())];
        if let Some(author) = author {
            params.push(("author", author.to_string()));
        }
        if let Some(token) = phisherman_token {
            params.push(("phisherman_token", token));
        }
        if let Some(user) = phisherman_user {
            params.push(("phisherman_user", user.to_string()));
        }

        let data = self.state.transport().get(paths::urls(), &params).await?;
        Ok(GetWebsiteResponse::from_value(data)?)
    }

    /// Edit website information for a URL. Requires the `admin.urls`
    /// scope. Mutation only; returns no model.
    ///
    /// `url` is supplied pre-encoded by the caller. With `encode` set,
    /// the message is form-urlencoded before sending, matching the live
    /// API's expectations.
    pub async fn edit_website(
        &self,
        url: &str,
        is_fraudulent: bool,
        message: &str,
        encode: bool,
    ) -> Result<()> {
        self.state.ensure_open()?;
        self.state.require_permission("admin.urls").await?;

        validate::non_empty("url", url)?;
        validate::non_empty("message", message)?;

        let message = if encode {
            form_urlencoded::byte_serialize(message.as_bytes()).collect()
        } else {
            message.to_string()
        };

        let request = EditWebsiteRequest {
            is_fraudulent,
            message,
        };
        self.state
            .transport()
            .post_json(&paths::urls_edit(url), &request.to_json())
            .await?;
        Ok(())
    }
}
