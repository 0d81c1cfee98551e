mod anchors;
mod error;
mod nms;
mod postprocess;
mod rect;

pub use anchors::{Anchor, AnchorConfig};
pub use error::DetectionError;
pub use nms::{NmsConfig, nms};
pub use postprocess::{DetectionResult, Postprocessor};
pub use rect::BBox;
