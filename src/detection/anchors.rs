//! Deterministic SSD anchor (default box) generation.
//!
//! Location and class-score predictions coming out of the SSD head are
//! index-aligned to the anchor layout produced here. The emission order is
//! therefore part of the model contract: feature maps in configuration
//! order, cells row-major within a map, and within a cell the square anchor
//! first, then the two rectangular anchors per non-unit aspect ratio.

use crate::detection::error::DetectionError;
use crate::detection::rect::BBox;

/// A reference box at a fixed position and size, used as a baseline for
/// predicting object locations.
///
/// All fields are normalized to [0, 1] relative to the image dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Center x coordinate
    pub cx: f32,
    /// Center y coordinate
    pub cy: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Anchor {
    /// Convert to corner format.
    #[inline]
    pub fn to_bbox(&self) -> BBox {
        BBox::from_cxcywh(self.cx, self.cy, self.width, self.height)
    }
}

/// Static anchor layout for one model architecture.
///
/// The three lists are parallel: entry `i` of `scales` and `aspect_ratios`
/// applies to the feature map with side length `feature_map_sizes[i]`.
#[derive(Debug, Clone)]
pub struct AnchorConfig {
    /// Side length of each (square) feature map, in cells
    pub feature_map_sizes: Vec<usize>,
    /// Base anchor scale per feature map, normalized
    pub scales: Vec<f32>,
    /// Aspect ratios per feature map; a ratio of 1 adds no extra anchors
    pub aspect_ratios: Vec<Vec<f32>>,
}

impl AnchorConfig {
    /// The canonical SSD300 layout used with the MobileNetV2 backbone.
    pub fn ssd300() -> Self {
        Self {
            feature_map_sizes: vec![38, 19, 10, 5, 3, 1],
            scales: vec![0.1, 0.2, 0.375, 0.55, 0.725, 0.9],
            aspect_ratios: vec![vec![1.0, 2.0, 0.5]; 6],
        }
    }

    /// Number of anchors this configuration generates, without generating
    /// them: sum over feature maps of `S² · (1 + 2·|{ar != 1}|)`.
    pub fn anchor_count(&self) -> usize {
        self.feature_map_sizes
            .iter()
            .zip(&self.aspect_ratios)
            .map(|(&size, ratios)| {
                let extra = ratios.iter().filter(|&&ar| ar != 1.0).count();
                size * size * (1 + 2 * extra)
            })
            .sum()
    }

    fn validate(&self) -> Result<(), DetectionError> {
        if self.scales.len() != self.feature_map_sizes.len() {
            return Err(DetectionError::Configuration(format!(
                "scales has {} entries for {} feature maps",
                self.scales.len(),
                self.feature_map_sizes.len()
            )));
        }
        if self.aspect_ratios.len() != self.feature_map_sizes.len() {
            return Err(DetectionError::Configuration(format!(
                "aspect_ratios has {} entries for {} feature maps",
                self.aspect_ratios.len(),
                self.feature_map_sizes.len()
            )));
        }
        Ok(())
    }

    /// Generate the full anchor sequence for this configuration.
    ///
    /// The result is deterministic and immutable for the lifetime of the
    /// model configuration; generate once at startup and share it.
    pub fn generate(&self) -> Result<Vec<Anchor>, DetectionError> {
        self.validate()?;

        let mut anchors = Vec::with_capacity(self.anchor_count());
        for (i, &size) in self.feature_map_sizes.iter().enumerate() {
            generate_for_feature_map(size, self.scales[i], &self.aspect_ratios[i], &mut anchors);
        }
        Ok(anchors)
    }
}

fn generate_for_feature_map(size: usize, scale: f32, aspect_ratios: &[f32], out: &mut Vec<Anchor>) {
    for row in 0..size {
        for col in 0..size {
            let cx = (col as f32 + 0.5) / size as f32;
            let cy = (row as f32 + 0.5) / size as f32;

            out.push(Anchor {
                cx,
                cy,
                width: scale,
                height: scale,
            });

            for &ar in aspect_ratios {
                if ar == 1.0 {
                    continue;
                }
                let sqrt_ar = ar.sqrt();
                out.push(Anchor {
                    cx,
                    cy,
                    width: scale * sqrt_ar,
                    height: scale / sqrt_ar,
                });
                out.push(Anchor {
                    cx,
                    cy,
                    width: scale / sqrt_ar,
                    height: scale * sqrt_ar,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_count_formula() {
        let config = AnchorConfig {
            feature_map_sizes: vec![4, 2],
            scales: vec![0.2, 0.5],
            aspect_ratios: vec![vec![1.0, 2.0, 0.5], vec![1.0]],
        };

        // 4x4 cells with 1 + 2*2 = 5 anchors each, 2x2 cells with 1 anchor.
        assert_eq!(config.anchor_count(), 16 * 5 + 4);

        let anchors = config.generate().unwrap();
        assert_eq!(anchors.len(), config.anchor_count());
    }

    #[test]
    fn test_ssd300_count() {
        let config = AnchorConfig::ssd300();
        let per_cell = 5; // 1 square + 2 each for ar=2 and ar=0.5
        let expected: usize = [38usize, 19, 10, 5, 3, 1]
            .iter()
            .map(|s| s * s * per_cell)
            .sum();
        assert_eq!(config.anchor_count(), expected);
        assert_eq!(config.generate().unwrap().len(), expected);
    }

    #[test]
    fn test_emission_order() {
        let config = AnchorConfig {
            feature_map_sizes: vec![2],
            scales: vec![0.4],
            aspect_ratios: vec![vec![1.0, 4.0]],
        };
        let anchors = config.generate().unwrap();
        assert_eq!(anchors.len(), 2 * 2 * 3);

        // First cell is (row 0, col 0): center (0.25, 0.25).
        assert_eq!(anchors[0].cx, 0.25);
        assert_eq!(anchors[0].cy, 0.25);
        assert_eq!(anchors[0].width, 0.4);
        assert_eq!(anchors[0].height, 0.4);

        // ar=4: wide anchor first (scale*2, scale/2), then tall.
        assert!((anchors[1].width - 0.8).abs() < 1e-6);
        assert!((anchors[1].height - 0.2).abs() < 1e-6);
        assert!((anchors[2].width - 0.2).abs() < 1e-6);
        assert!((anchors[2].height - 0.8).abs() < 1e-6);

        // Row-major: second cell is (row 0, col 1), center (0.75, 0.25).
        assert_eq!(anchors[3].cx, 0.75);
        assert_eq!(anchors[3].cy, 0.25);
        // Third cell starts the second row.
        assert_eq!(anchors[6].cx, 0.25);
        assert_eq!(anchors[6].cy, 0.75);
    }

    #[test]
    fn test_generate_deterministic() {
        let config = AnchorConfig::ssd300();
        let a = config.generate().unwrap();
        let b = config.generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_mismatched_scales_rejected() {
        let config = AnchorConfig {
            feature_map_sizes: vec![4, 2],
            scales: vec![0.2],
            aspect_ratios: vec![vec![1.0], vec![1.0]],
        };
        assert!(matches!(
            config.generate(),
            Err(DetectionError::Configuration(_))
        ));
    }

    #[test]
    fn test_mismatched_aspect_ratios_rejected() {
        let config = AnchorConfig {
            feature_map_sizes: vec![4, 2],
            scales: vec![0.2, 0.5],
            aspect_ratios: vec![vec![1.0]],
        };
        assert!(matches!(
            config.generate(),
            Err(DetectionError::Configuration(_))
        ));
    }
}
