use std::time::Duration;

// Production endpoints. Staging deployments override these through the
// RRS_OAUTH_URL / RRS_SERVICE_URL / RRS_SSL_VERIFY environment variables
// (staging terminates TLS with self-signed certificates).
pub const OAUTH_URL: &str = "https://netapp-cloud-account.auth0.com/oauth/token";
pub const OAUTH_AUDIENCE: &str = "https://api.cloud.netapp.com";
pub const OAUTH_GRANT_TYPE: &str = "client_credentials";

/// Path under the service domain holding the per-account resource namespace.
pub const SERVICE_PATH: &str = "/rps/v1/account";

// API endpoints, relative to the account base URL
pub const ENDPOINT_ENRICH_IP: &str = "/enrich/ip-address";
pub const ENDPOINT_ENRICH_STORAGE: &str = "/enrich/storage";
pub const ENDPOINT_VOLUME_OFFLINE: &str = "/storage/take-volume-offline";
pub const ENDPOINT_TAKE_SNAPSHOT: &str = "/storage/take-snapshot";
pub const ENDPOINT_JOB_STATUS: &str = "/job/status";

// Timeout settings (in seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Deployment environment for the connector.
#[derive(Debug, Clone)]
pub struct Environment {
    /// OAuth token endpoint.
    pub oauth_url: String,
    /// Audience claim requested with the client-credentials grant.
    pub audience: String,
    /// Full service base URL override (staging); when unset the base URL is
    /// derived from the asset's domain.
    pub service_url: Option<String>,
    /// TLS certificate verification; disabled only for staging.
    pub verify_ssl: bool,
    /// Per-request timeout applied to every outbound call.
    pub timeout: Duration,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            oauth_url: OAUTH_URL.to_string(),
            audience: OAUTH_AUDIENCE.to_string(),
            service_url: None,
            verify_ssl: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Environment {
    /// Build the environment from process env vars, falling back to the
    /// production defaults.
    pub fn init() -> Environment {
        let oauth_url =
            std::env::var("RRS_OAUTH_URL").unwrap_or_else(|_| OAUTH_URL.to_string());
        let audience =
            std::env::var("RRS_OAUTH_AUDIENCE").unwrap_or_else(|_| OAUTH_AUDIENCE.to_string());
        let service_url = std::env::var("RRS_SERVICE_URL").ok();
        let verify_ssl = std::env::var("RRS_SSL_VERIFY")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        Environment {
            oauth_url,
            audience,
            service_url,
            verify_ssl,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
