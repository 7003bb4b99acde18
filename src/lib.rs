//! SOAR connector for the Ransomware Resilience SaaS.
//!
//! Exposes the storage/ransomware-resilience cloud service as a set of
//! invokable actions: test connectivity, enrich IP address, enrich storage,
//! check job status, take snapshot and take volume offline. Every action
//! acquires a fresh OAuth token, performs exactly one REST call and maps the
//! JSON response into a typed output.

pub mod asset;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod services;
pub mod soar;
pub mod url;
pub mod views;

// Re-export commonly used types
pub use asset::Asset;
pub use config::Environment;
pub use error::{ActionFailure, AppError, Result};
pub use soar::{ActionReport, SoarClient};
