//! Serializable views of scales for tooling and regression tests.

mod json_contract;
mod scale_snapshot;

pub use json_contract::{SCALE_SNAPSHOT_JSON_SCHEMA_V1, ScaleSnapshotJsonContractV1};
pub use scale_snapshot::ScaleSnapshot;
