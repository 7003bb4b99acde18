//! Service calls: OAuth token acquisition and one REST request per action.

pub mod auth;
pub mod enrich_ip;
pub mod enrich_storage;
pub mod job_status;
pub mod request;
pub mod take_snapshot;
pub mod volume_offline;

pub use auth::get_oauth_token;
