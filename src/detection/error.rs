//! Error types for the detection core.

use thiserror::Error;

/// Errors raised by the detection core.
///
/// Degenerate numeric cases (zero-area boxes, zero-union IoU) are handled
/// locally with defined fallback values and never surface here.
#[derive(Debug, Error)]
pub enum DetectionError {
    /// Anchor generator inputs of mismatched lengths. Raised at
    /// configuration time, before any inference.
    #[error("invalid anchor configuration: {0}")]
    Configuration(String),

    /// Per-image prediction arrays inconsistent with the expected anchor
    /// count or with each other.
    #[error("prediction shape mismatch: expected {expected}, got {got} ({context})")]
    ShapeMismatch {
        expected: usize,
        got: usize,
        context: &'static str,
    },
}
