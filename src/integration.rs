//! Integration module for connecting feature-extraction backends with the
//! detection post-processing core.
//!
//! The convolutional network (backbone and head) is treated as an opaque
//! function boundary: raw image bytes in, two index-aligned prediction
//! arrays out. Implement [`FeatureNetwork`] for your inference backend and
//! wrap it in a [`DetectionPipeline`].

mod network;
mod pipeline;

pub use network::FeatureNetwork;
pub use pipeline::{DetectionPipeline, PipelineError};
