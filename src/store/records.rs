//! Record types persisted by the relational store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of the `images` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub image_id: Uuid,
    pub device_id: String,
    pub image_url: String,
    pub capture_timestamp: DateTime<Utc>,
    pub is_trainable: bool,
    /// Resolution string such as "1920x1080"
    pub image_resolution: String,
    /// Augmentation applied to the image, if any
    pub augmentation: Option<String>,
}

/// Input for inserting an image record; the store generates the id and
/// defaults the capture timestamp to now.
#[derive(Debug, Clone)]
pub struct NewImage {
    pub device_id: String,
    pub image_url: String,
    pub is_trainable: bool,
    pub image_resolution: String,
    pub augmentation: Option<String>,
    /// Capture time; `None` means "now"
    pub capture_timestamp: Option<DateTime<Utc>>,
}

/// A persisted detection: one (label, score, box) triple tied to an image.
/// The box geometry itself lives in the blob store under `bbox_key`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub detection_id: Uuid,
    pub image_id: Uuid,
    pub label: String,
    pub confidence_score: f32,
    pub bbox_key: String,
}

/// Input for inserting a detection record; the store generates the id.
#[derive(Debug, Clone)]
pub struct NewDetection {
    pub image_id: Uuid,
    pub label: String,
    pub confidence_score: f32,
    pub bbox_key: String,
}

/// Capture device metadata, joined into [`DetectionSummary`] rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub device_id: String,
    pub factory_name: String,
    pub device_type: String,
    pub is_data_collector: bool,
}

/// A row of the `detection_summary` view: detections joined with their
/// image and device metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSummary {
    pub image_id: Uuid,
    pub capture_timestamp: DateTime<Utc>,
    pub label_name: String,
    pub confidence_score: f32,
    pub factory_name: String,
    pub device_type: String,
    pub is_trainable: bool,
    pub is_data_collector: bool,
    pub bbox_file_url: String,
}
