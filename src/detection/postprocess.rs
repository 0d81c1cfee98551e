//! Detection orchestration: best-class reduction, NMS and result assembly.

use ndarray::{ArrayView2, ArrayView3};
use tracing::debug;

use crate::detection::anchors::AnchorConfig;
use crate::detection::error::DetectionError;
use crate::detection::nms::{NmsConfig, nms};
use crate::detection::rect::BBox;

/// Final detections for one image.
///
/// The three vectors are parallel and ordered as NMS emitted them:
/// descending by score. Length is bounded by the configured `top_k`.
#[derive(Debug, Clone, Default)]
pub struct DetectionResult {
    /// Kept boxes, corner format
    pub boxes: Vec<BBox>,
    /// Class index per kept box
    pub labels: Vec<usize>,
    /// Confidence score per kept box
    pub scores: Vec<f32>,
}

impl DetectionResult {
    /// Number of kept detections.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the image produced no detections.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Iterate over (box, label, score) triples.
    pub fn iter(&self) -> impl Iterator<Item = (BBox, usize, f32)> + '_ {
        self.boxes
            .iter()
            .zip(&self.labels)
            .zip(&self.scores)
            .map(|((&b, &l), &s)| (b, l, s))
    }
}

/// Turns raw SSD head outputs into per-image [`DetectionResult`]s.
///
/// Location predictions are expected to be already decoded into corner
/// coordinates, index-aligned to the anchor layout the postprocessor was
/// built for. That alignment is a silent contract in the tensors
/// themselves, so the anchor count is checked explicitly on every call.
#[derive(Debug, Clone)]
pub struct Postprocessor {
    anchor_count: usize,
    nms: NmsConfig,
}

impl Postprocessor {
    /// Create a postprocessor expecting `anchor_count` predictions per
    /// image.
    pub fn new(anchor_count: usize, nms: NmsConfig) -> Self {
        Self { anchor_count, nms }
    }

    /// Create a postprocessor matched to an anchor configuration.
    pub fn for_anchors(config: &AnchorConfig, nms: NmsConfig) -> Self {
        Self::new(config.anchor_count(), nms)
    }

    /// The anchor count every prediction tensor must match.
    pub fn anchor_count(&self) -> usize {
        self.anchor_count
    }

    /// Post-process one image.
    ///
    /// `loc_preds` has shape [anchor_count, 4] (corner boxes), `cls_scores`
    /// shape [anchor_count, num_classes]. Each anchor's score vector is
    /// reduced to its best (label, score) pair — ties go to the lowest
    /// class index — and the whole candidate set is fed through NMS.
    pub fn process_image(
        &self,
        loc_preds: ArrayView2<'_, f32>,
        cls_scores: ArrayView2<'_, f32>,
    ) -> Result<DetectionResult, DetectionError> {
        self.check_image_shapes(&loc_preds, &cls_scores)?;

        let boxes: Vec<BBox> = loc_preds
            .rows()
            .into_iter()
            .map(|r| BBox::new(r[0], r[1], r[2], r[3]))
            .collect();

        let mut labels = Vec::with_capacity(boxes.len());
        let mut scores = Vec::with_capacity(boxes.len());
        for row in cls_scores.rows() {
            let (label, score) = best_class(row);
            labels.push(label);
            scores.push(score);
        }

        let keep = nms(&boxes, &scores, self.nms.iou_threshold, self.nms.top_k);
        debug!(
            candidates = boxes.len(),
            kept = keep.len(),
            "post-processed image"
        );

        Ok(DetectionResult {
            boxes: keep.iter().map(|&i| boxes[i]).collect(),
            labels: keep.iter().map(|&i| labels[i]).collect(),
            scores: keep.iter().map(|&i| scores[i]).collect(),
        })
    }

    /// Post-process a batch.
    ///
    /// `loc_preds` has shape [batch, anchor_count, 4], `cls_scores` shape
    /// [batch, anchor_count, num_classes]. Results come back in batch
    /// order, one per image. Pure function of its inputs; images are
    /// independent, so callers may also split the batch and process images
    /// on separate threads.
    pub fn process_batch(
        &self,
        loc_preds: ArrayView3<'_, f32>,
        cls_scores: ArrayView3<'_, f32>,
    ) -> Result<Vec<DetectionResult>, DetectionError> {
        if loc_preds.dim().0 != cls_scores.dim().0 {
            return Err(DetectionError::ShapeMismatch {
                expected: loc_preds.dim().0,
                got: cls_scores.dim().0,
                context: "batch dimension of class scores",
            });
        }

        loc_preds
            .outer_iter()
            .zip(cls_scores.outer_iter())
            .map(|(loc, cls)| self.process_image(loc, cls))
            .collect()
    }

    fn check_image_shapes(
        &self,
        loc_preds: &ArrayView2<'_, f32>,
        cls_scores: &ArrayView2<'_, f32>,
    ) -> Result<(), DetectionError> {
        if loc_preds.nrows() != self.anchor_count {
            return Err(DetectionError::ShapeMismatch {
                expected: self.anchor_count,
                got: loc_preds.nrows(),
                context: "anchor dimension of location predictions",
            });
        }
        if loc_preds.ncols() != 4 {
            return Err(DetectionError::ShapeMismatch {
                expected: 4,
                got: loc_preds.ncols(),
                context: "box coordinate dimension",
            });
        }
        if cls_scores.nrows() != self.anchor_count {
            return Err(DetectionError::ShapeMismatch {
                expected: self.anchor_count,
                got: cls_scores.nrows(),
                context: "anchor dimension of class scores",
            });
        }
        if cls_scores.ncols() == 0 {
            return Err(DetectionError::ShapeMismatch {
                expected: 1,
                got: 0,
                context: "class dimension of class scores",
            });
        }
        Ok(())
    }
}

/// Reduce a score vector to (best_label, best_score). Ties break to the
/// lowest class index; the scan uses strict greater-than so the first
/// maximum wins.
fn best_class(scores: ndarray::ArrayView1<'_, f32>) -> (usize, f32) {
    let mut best_label = 0;
    let mut best_score = scores[0];
    for (label, &score) in scores.iter().enumerate().skip(1) {
        if score > best_score {
            best_label = label;
            best_score = score;
        }
    }
    (best_label, best_score)
}
