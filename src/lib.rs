//! SSD (MobileNetV2) detection post-processing in Rust.
//!
//! This crate covers everything that happens after the convolutional
//! network has run: deterministic anchor-box generation, greedy per-image
//! non-maximum suppression, and assembly of final (box, label, score)
//! results for a batch, plus the thin storage interfaces used to persist
//! images and detection metadata.
//!
//! The network itself is pluggable via [`FeatureNetwork`]; pair any
//! backend with a [`Postprocessor`] through [`DetectionPipeline`].

pub mod detection;
pub mod integration;
pub mod store;

pub use detection::{
    Anchor, AnchorConfig, BBox, DetectionError, DetectionResult, NmsConfig, Postprocessor, nms,
};
pub use integration::{DetectionPipeline, FeatureNetwork, PipelineError};
pub use store::{
    BlobStore, DatabaseConfig, MemoryBlobStore, MemoryRecordStore, ObjectStoreConfig, RecordStore,
    StoreError,
};
