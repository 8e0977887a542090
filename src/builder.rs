//! Builder for configuring and authenticating a SharePoint client.

use std::fs;
use std::path::Path;

use crate::auth::{Authenticator, DEFAULT_AUTHORITY};
use crate::client::{SharePointClient, DEFAULT_GRAPH_BASE};
use crate::error::{Result, SharePointError};
use crate::models::AppCredentials;

/// Fluent builder for [`SharePointClient`].
///
/// All four credential fields must be set (non-empty) before [`build`]
/// succeeds; the setters may be chained in any order.
///
/// [`build`]: SharePointClientBuilder::build
#[derive(Default)]
pub struct SharePointClientBuilder {
    tenant_id: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    resource_url: Option<String>,
    authority: Option<String>,
    graph_base: Option<String>,
}

impl SharePointClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the four credential fields from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let credentials: AppCredentials = serde_json::from_str(&content)?;
        Ok(Self::new()
            .with_tenant_id(credentials.tenant_id)
            .with_client_id(credentials.client_id)
            .with_client_secret(credentials.client_secret)
            .with_resource_url(credentials.resource_url))
    }

    pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn with_resource_url(mut self, resource_url: impl Into<String>) -> Self {
        self.resource_url = Some(resource_url.into());
        self
    }

    /// Override the Azure AD authority (sovereign clouds, stubbed tests).
    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = Some(authority.into());
        self
    }

    /// Override the Graph base URL (sovereign clouds, stubbed tests).
    pub fn with_graph_base(mut self, graph_base: impl Into<String>) -> Self {
        self.graph_base = Some(graph_base.into());
        self
    }

    /// Validate the configuration, then construct and authenticate a client.
    ///
    /// Fails with [`SharePointError::IncompleteConfig`] naming every missing
    /// field before any network I/O. On a complete configuration this
    /// performs the token exchange, so a successful `build()` always hands
    /// back an authenticated client; a denied grant surfaces as
    /// [`SharePointError::AuthenticationFailed`].
    pub async fn build(self) -> Result<SharePointClient> {
        let mut missing = Vec::new();
        require(&self.tenant_id, "tenant_id", &mut missing);
        require(&self.client_id, "client_id", &mut missing);
        require(&self.client_secret, "client_secret", &mut missing);
        require(&self.resource_url, "resource_url", &mut missing);
        if !missing.is_empty() {
            return Err(SharePointError::IncompleteConfig { missing });
        }

        let authority = self
            .authority
            .unwrap_or_else(|| DEFAULT_AUTHORITY.to_string());
        let graph_base = self
            .graph_base
            .unwrap_or_else(|| DEFAULT_GRAPH_BASE.to_string());

        let authenticator = Authenticator::new(
            authority,
            self.tenant_id.unwrap_or_default(),
            self.client_id.unwrap_or_default(),
            self.client_secret.unwrap_or_default(),
            self.resource_url.unwrap_or_default(),
        );
        let token = authenticator.acquire_token().await?;

        Ok(SharePointClient::new(graph_base, token))
    }
}

fn require(field: &Option<String>, name: &'static str, missing: &mut Vec<&'static str>) {
    if field.as_deref().map_or(true, str::is_empty) {
        missing.push(name);
    }
}
