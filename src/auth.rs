//! Service principal authentication against Azure AD.

use reqwest::Client;

use crate::error::{Result, SharePointError};
use crate::models::TokenResponse;

/// Default Azure AD authority.
pub const DEFAULT_AUTHORITY: &str = "https://login.microsoftonline.com";

/// OAuth2 grant type for app-only authentication.
const GRANT_TYPE: &str = "client_credentials";

/// Authenticator holding a service principal's credentials.
pub struct Authenticator {
    authority: String,
    tenant_id: String,
    client_id: String,
    client_secret: String,
    resource_url: String,
    http: Client,
}

impl Authenticator {
    pub fn new(
        authority: String,
        tenant_id: String,
        client_id: String,
        client_secret: String,
        resource_url: String,
    ) -> Self {
        Self {
            authority,
            tenant_id,
            client_id,
            client_secret,
            resource_url,
            http: Client::new(),
        }
    }

    /// Tenant-scoped v2.0 token endpoint.
    fn token_url(&self) -> String {
        format!("{}/{}/oauth2/v2.0/token", self.authority, self.tenant_id)
    }

    /// Exchange the client id/secret for a bearer token.
    ///
    /// A denied grant is an error here, not a token-less success: callers
    /// never observe a client without a usable token.
    pub async fn acquire_token(&self) -> Result<String> {
        let scope = format!("{}.default", self.resource_url);
        let params = [
            ("grant_type", GRANT_TYPE),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("scope", scope.as_str()),
        ];

        let response = self
            .http
            .post(self.token_url())
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let payload: TokenResponse = match serde_json::from_str(&body) {
            Ok(payload) => payload,
            Err(_) => {
                return Err(SharePointError::AuthenticationFailed(format!(
                    "token endpoint returned HTTP {}: {}",
                    status, body
                )))
            }
        };

        if let Some(error) = payload.error {
            let description = payload.error_description.unwrap_or_default();
            return Err(SharePointError::AuthenticationFailed(format!(
                "{}: {}",
                error, description
            )));
        }

        payload.access_token.ok_or_else(|| {
            SharePointError::AuthenticationFailed(
                "token response carried no access_token".to_string(),
            )
        })
    }
}
