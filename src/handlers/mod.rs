//! Action handlers: per-action orchestration of auth, service call and
//! success/failure reporting towards the host platform.

pub mod connectivity;
pub mod enrich_ip;
pub mod enrich_storage;
pub mod job_status;
pub mod take_snapshot;
pub mod volume_offline;

pub use connectivity::test_connectivity_handler;
pub use enrich_ip::enrich_ip_address_handler;
pub use enrich_storage::enrich_storage_handler;
pub use job_status::job_status_handler;
pub use take_snapshot::take_snapshot_handler;
pub use volume_offline::volume_offline_handler;
