//! Thin storage interfaces for images and detection metadata.
//!
//! The detection core treats object storage as a key-value blob store and
//! the relational database as a record store keyed by generated ids.
//! Network-backed clients live with the caller; this module fixes the
//! traits, the record shapes and the configuration structs, and ships
//! in-memory implementations for tests and local pipelines.

mod blob;
mod config;
mod error;
mod record;
mod records;

pub use blob::{BlobStore, MemoryBlobStore};
pub use config::{DatabaseConfig, ObjectStoreConfig};
pub use error::StoreError;
pub use record::{MemoryRecordStore, RecordStore};
pub use records::{
    DetectionRecord, DetectionSummary, DeviceRecord, ImageRecord, NewDetection, NewImage,
};
