//! URL builder for the per-account resource namespace.

use crate::asset::Asset;
use crate::config::{Environment, SERVICE_PATH};
use crate::error::{AppError, Result};

/// Normalize a configured domain: trim whitespace, strip one leading scheme
/// and one trailing slash.
fn normalize_domain(domain: &str) -> &str {
    let domain = domain.trim();
    let domain = domain
        .strip_prefix("https://")
        .or_else(|| domain.strip_prefix("http://"))
        .unwrap_or(domain);
    domain.strip_suffix('/').unwrap_or(domain)
}

/// Construct the canonical base URL for the account's resource namespace.
///
/// Produces `https://{domain}/rps/v1/account/{account_id}`, or
/// `{service_url}/{account_id}` when the environment carries a staging
/// override. Pure; fails only on empty required fields.
pub fn build_base_url(asset: &Asset, env: &Environment) -> Result<String> {
    let account_id = asset.account_id.trim();
    if account_id.is_empty() {
        return Err(AppError::Configuration(
            "account_id cannot be empty".to_string(),
        ));
    }

    if let Some(service_url) = &env.service_url {
        let service_url = service_url.trim().trim_end_matches('/');
        if service_url.is_empty() {
            return Err(AppError::Configuration(
                "service URL override cannot be empty".to_string(),
            ));
        }
        return Ok(format!("{}/{}", service_url, account_id));
    }

    let domain = normalize_domain(&asset.domain);
    if domain.is_empty() {
        return Err(AppError::Configuration(
            "domain cannot be empty".to_string(),
        ));
    }

    Ok(format!("https://{}{}/{}", domain, SERVICE_PATH, account_id))
}
