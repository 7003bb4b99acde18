//! Typed parameter and output records, one pair per action.

pub mod enrich_ip;
pub mod enrich_storage;
pub mod job_status;
pub mod take_snapshot;
pub mod volume_offline;

pub use enrich_ip::{EnrichIpOutput, EnrichIpParams, JobItem};
pub use enrich_storage::{EnrichStorageOutput, EnrichStorageParams, VolumeInfo};
pub use job_status::{JobRecord, JobStatusOutput, JobStatusParams};
pub use take_snapshot::{TakeSnapshotOutput, TakeSnapshotParams};
pub use volume_offline::{VolumeOfflineOutput, VolumeOfflineParams};
