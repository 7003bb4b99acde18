use serde::Deserialize;

use crate::error::{AppError, Result};

/// Default SaaS domain for production tenants.
pub const DEFAULT_DOMAIN: &str = "snapcenter.cloudmanager.cloud.netapp.com";

/// Connection settings supplied by the host platform's asset store.
///
/// Immutable per invocation; `client_id` and `client_secret` are sensitive
/// and must never appear in logs or summaries.
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    /// SaaS domain name.
    #[serde(default = "default_domain")]
    pub domain: String,
    /// Client ID for authentication.
    pub client_id: String,
    /// Client secret for authentication.
    pub client_secret: String,
    /// Account ID for the SaaS tenant.
    pub account_id: String,
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

impl Asset {
    pub fn new(
        domain: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            account_id: account_id.into(),
        }
    }

    /// Read the asset from process env vars (host glue for the CLI entry).
    pub fn from_env() -> Result<Asset> {
        let domain =
            std::env::var("RRS_SAAS_DOMAIN").unwrap_or_else(|_| DEFAULT_DOMAIN.to_string());
        let client_id = required_var("RRS_CLIENT_ID")?;
        let client_secret = required_var("RRS_CLIENT_SECRET")?;
        let account_id = required_var("RRS_ACCOUNT_ID")?;

        Ok(Asset {
            domain,
            client_id,
            client_secret,
            account_id,
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| AppError::Configuration(format!("{} must be set", name)))
        .and_then(|value| {
            if value.trim().is_empty() {
                Err(AppError::Configuration(format!("{} cannot be empty", name)))
            } else {
                Ok(value)
            }
        })
}
