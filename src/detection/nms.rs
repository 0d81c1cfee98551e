//! Greedy non-maximum suppression.

use crate::detection::rect::BBox;

/// Configuration for the NMS stage.
#[derive(Debug, Clone, Copy)]
pub struct NmsConfig {
    /// Candidates with IoU strictly greater than this against a kept box
    /// are suppressed; a candidate at exactly the threshold survives.
    pub iou_threshold: f32,
    /// Maximum number of boxes kept per image.
    pub top_k: usize,
}

impl Default for NmsConfig {
    fn default() -> Self {
        Self {
            iou_threshold: 0.5,
            top_k: 200,
        }
    }
}

/// Select a deduplicated subset of `boxes` by greedy non-maximum
/// suppression.
///
/// Returns indices into the input, descending by score, at most
/// `min(top_k, boxes.len())` of them. Candidates are visited in descending
/// score order with ties kept in original index order, so the output is
/// deterministic for any input. Suppression is class-agnostic; callers that
/// want per-class NMS partition the input first.
///
/// # Panics
///
/// Panics if `boxes` and `scores` have different lengths.
pub fn nms(boxes: &[BBox], scores: &[f32], iou_threshold: f32, top_k: usize) -> Vec<usize> {
    assert_eq!(
        boxes.len(),
        scores.len(),
        "boxes and scores must be parallel"
    );

    if boxes.is_empty() {
        return Vec::new();
    }

    // Stable sort keeps equal scores in original index order.
    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut keep = Vec::new();
    let mut cursor = 0;

    while cursor < order.len() && keep.len() < top_k {
        let i = order[cursor];
        keep.push(i);
        cursor += 1;

        let best = &boxes[i];
        let retained: Vec<usize> = order[cursor..]
            .iter()
            .copied()
            .filter(|&j| best.iou(&boxes[j]) <= iou_threshold)
            .collect();

        order.truncate(cursor);
        order.extend(retained);
    }

    keep
}
