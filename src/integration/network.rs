//! Trait for feature-extraction network backends.

use ndarray::Array2;

/// Trait for the convolutional feature-extraction network (backbone plus
/// detection head).
///
/// The network itself is out of scope for this crate; implement this trait
/// to connect any inference backend. The contract is that the two output
/// arrays are index-aligned to the anchor layout the downstream
/// [`Postprocessor`](crate::detection::Postprocessor) was built for.
///
/// # Example
///
/// ```ignore
/// use ssdlite_rs::{FeatureNetwork};
/// use ndarray::Array2;
///
/// struct MyBackend {
///     // Your model here
/// }
///
/// impl FeatureNetwork for MyBackend {
///     type Error = std::io::Error;
///
///     fn forward(&mut self, input: &[u8], width: u32, height: u32)
///         -> Result<(Array2<f32>, Array2<f32>), Self::Error>
///     {
///         // Run inference and return (loc_preds, cls_scores)
///         todo!()
///     }
/// }
/// ```
pub trait FeatureNetwork {
    /// Error type for inference failures.
    type Error;

    /// Run inference on raw image data for a single image.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// `(loc_preds, cls_scores)` with shapes [anchor_count, 4] and
    /// [anchor_count, num_classes], location predictions already decoded
    /// into corner coordinates.
    fn forward(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<(Array2<f32>, Array2<f32>), Self::Error>;
}
