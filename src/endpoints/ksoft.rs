//! Operations on the `ksoft` endpoint

use std::sync::Arc;

use crate::client::State;
use crate::error::Result;
use crate::models::GetKSoftBanResponse;
use crate::paths;

/// Operations on the `ksoft` endpoint.
pub struct KSoft {
    state: Arc<State>,
}

impl KSoft {
    pub(crate) fn new(state: Arc<State>) -> Self {
        Self { state }
    }

    /// Get a user's KSoft ban status. Requires the `ksoft.bans` scope.
    pub async fn get_ban(&self, user_id: u64) -> Result<GetKSoftBanResponse> {
        self.state.ensure_open()?;
        self.state.require_permission("ksoft.bans").await?;

        let data = self
            .state
            .transport()
            .get(&paths::ksoft_bans(user_id), &[])
            .await?;
        Ok(GetKSoftBanResponse::from_value(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::transport::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_ban_route_and_model() {
        let mock = Arc::new(
            MockTransport::new()
                .with_response(
                    "GET",
                    "/ksoft/bans/123",
                    json!({ "found": true, "id": "123", "moderator": "0" }),
                )
                .await,
        );
        let state = Arc::new(State::new(mock.clone()));
        state.prime_permissions(&["ksoft.bans"]).await;
        let ksoft = KSoft::new(state);

        let response = ksoft.get_ban(123).await.unwrap();
        assert!(response.found);
        assert_eq!(response.user_id, Some(123));
        assert_eq!(response.moderator, None);
        assert_eq!(mock.captured().await[0].path, "/ksoft/bans/123");
    }

    #[tokio::test]
    async fn test_missing_found_surfaces_schema_error() {
        let mock = Arc::new(
            MockTransport::new()
                .with_response("GET", "/ksoft/bans/1", json!({ "id": "1" }))
                .await,
        );
        let state = Arc::new(State::new(mock));
        state.prime_permissions(&["ksoft.bans"]).await;
        let ksoft = KSoft::new(state);

        let result = ksoft.get_ban(1).await;
        assert!(matches!(result, Err(Error::Schema(_))));
    }
}
