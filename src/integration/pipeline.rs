//! DetectionPipeline for combining network inference with post-processing.

use thiserror::Error;
use tracing::debug;

use crate::detection::{DetectionError, DetectionResult, Postprocessor};

use super::FeatureNetwork;

/// Error type for pipeline failures: either the network backend failed, or
/// its outputs did not fit the configured anchor layout.
#[derive(Debug, Error)]
pub enum PipelineError<E> {
    /// The inference backend failed.
    #[error("network inference failed: {0}")]
    Network(E),
    /// The network output did not match the anchor layout.
    #[error(transparent)]
    Postprocess(#[from] DetectionError),
}

/// An end-to-end detector that bundles a feature network with SSD
/// post-processing.
///
/// This struct provides a convenient way to go from raw image bytes to a
/// final [`DetectionResult`] by combining any [`FeatureNetwork`] with a
/// [`Postprocessor`].
pub struct DetectionPipeline<N: FeatureNetwork> {
    network: N,
    postprocessor: Postprocessor,
}

impl<N: FeatureNetwork> DetectionPipeline<N> {
    /// Create a new detection pipeline with the given network and
    /// postprocessor.
    pub fn new(network: N, postprocessor: Postprocessor) -> Self {
        Self {
            network,
            postprocessor,
        }
    }

    /// Run detection on a single image.
    ///
    /// Runs the network forward pass and post-processes its output.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    pub fn process_image(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<DetectionResult, PipelineError<N::Error>> {
        let (loc_preds, cls_scores) = self
            .network
            .forward(input, width, height)
            .map_err(PipelineError::Network)?;

        debug!(
            anchors = loc_preds.nrows(),
            classes = cls_scores.ncols(),
            "network forward pass complete"
        );

        let result = self
            .postprocessor
            .process_image(loc_preds.view(), cls_scores.view())?;
        Ok(result)
    }

    /// Get a reference to the underlying network.
    pub fn network(&self) -> &N {
        &self.network
    }

    /// Get a mutable reference to the underlying network.
    pub fn network_mut(&mut self) -> &mut N {
        &mut self.network
    }

    /// Get a reference to the postprocessor.
    pub fn postprocessor(&self) -> &Postprocessor {
        &self.postprocessor
    }
}
