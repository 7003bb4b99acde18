//! View renderers: pure, lossless flattening of typed outputs into generic
//! mappings for template consumption.

pub mod enrich_ip;
pub mod enrich_storage;
pub mod take_snapshot;
pub mod volume_offline;

pub use enrich_ip::render_enrich_ip_jobs;
pub use enrich_storage::render_enrich_storage;
pub use take_snapshot::render_take_snapshot;
pub use volume_offline::render_volume_offline;
