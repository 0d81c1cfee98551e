/// Axis-aligned bounding box in corner format.
///
/// Coordinates are (x_min, y_min, x_max, y_max). The detection core keeps
/// everything in this format because it is what IoU and NMS consume; use the
/// constructors to convert from the other common layouts:
/// - CXCYWH: Center X, Center Y, Width, Height (anchor format)
/// - TLWH: Top-Left X, Top-Left Y, Width, Height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BBox {
    /// Left edge
    pub x_min: f32,
    /// Top edge
    pub y_min: f32,
    /// Right edge
    pub x_max: f32,
    /// Bottom edge
    pub y_max: f32,
}

impl BBox {
    /// Create a new BBox from corner coordinates.
    #[inline]
    pub fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Create a BBox from CXCYWH format (center x, center y, width, height).
    #[inline]
    pub fn from_cxcywh(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            x_min: cx - width / 2.0,
            y_min: cy - height / 2.0,
            x_max: cx + width / 2.0,
            y_max: cy + height / 2.0,
        }
    }

    /// Create a BBox from TLWH format (top-left x, top-left y, width, height).
    #[inline]
    pub fn from_tlwh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    /// Corner coordinates as an array: [x_min, y_min, x_max, y_max].
    #[inline]
    pub fn to_corners(&self) -> [f32; 4] {
        [self.x_min, self.y_min, self.x_max, self.y_max]
    }

    /// Convert to CXCYWH format: [center_x, center_y, width, height].
    #[inline]
    pub fn to_cxcywh(&self) -> [f32; 4] {
        [
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
            self.x_max - self.x_min,
            self.y_max - self.y_min,
        ]
    }

    /// Get the center point of the bounding box.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Get the area of the bounding box.
    ///
    /// Degenerate boxes (x_max < x_min or y_max < y_min) yield a negative
    /// area; callers that care clamp it themselves.
    #[inline]
    pub fn area(&self) -> f32 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }

    /// Intersection area with another box, clamped to zero when the boxes
    /// do not overlap.
    #[inline]
    pub fn intersection(&self, other: &BBox) -> f32 {
        let x1 = self.x_min.max(other.x_min);
        let y1 = self.y_min.max(other.y_min);
        let x2 = self.x_max.min(other.x_max);
        let y2 = self.y_max.min(other.y_max);

        (x2 - x1).max(0.0) * (y2 - y1).max(0.0)
    }

    /// Calculate Intersection over Union (IoU) with another bounding box.
    ///
    /// A zero (or negative) union is defined as IoU = 0 rather than NaN, so
    /// degenerate boxes never suppress anything.
    pub fn iou(&self, other: &BBox) -> f32 {
        let inter_area = self.intersection(other);
        let union_area = self.area() + other.area() - inter_area;

        if union_area > 0.0 {
            inter_area / union_area
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_conversions() {
        let b = BBox::new(10.0, 20.0, 40.0, 60.0);

        assert_eq!(b.to_corners(), [10.0, 20.0, 40.0, 60.0]);
        assert_eq!(b.to_cxcywh(), [25.0, 40.0, 30.0, 40.0]);
        assert_eq!(b.center(), (25.0, 40.0));
        assert_eq!(b.area(), 1200.0);
    }

    #[test]
    fn test_from_cxcywh() {
        let b = BBox::from_cxcywh(25.0, 40.0, 30.0, 40.0);
        assert!((b.x_min - 10.0).abs() < 1e-6);
        assert!((b.y_min - 20.0).abs() < 1e-6);
        assert!((b.x_max - 40.0).abs() < 1e-6);
        assert!((b.y_max - 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_tlwh() {
        let b = BBox::from_tlwh(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.to_corners(), [10.0, 20.0, 40.0, 60.0]);
    }

    #[test]
    fn test_iou() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BBox::new(5.0, 5.0, 15.0, 15.0);

        // Intersection: 5x5 = 25
        // Union: 100 + 100 - 25 = 175
        let iou = a.iou(&b);
        assert!((iou - 25.0 / 175.0).abs() < 1e-6);
    }

    #[test]
    fn test_iou_no_overlap() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BBox::new(20.0, 20.0, 30.0, 30.0);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_iou_same_box() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0);
        assert!((a.iou(&a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_iou_zero_union() {
        // Two identical zero-area boxes: union is 0, IoU is defined as 0.
        let a = BBox::new(5.0, 5.0, 5.0, 5.0);
        assert_eq!(a.iou(&a), 0.0);
    }
}
