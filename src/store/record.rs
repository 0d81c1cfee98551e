//! Relational record storage for images, devices and detections.

use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::store::error::StoreError;
use crate::store::records::{
    DetectionRecord, DetectionSummary, DeviceRecord, ImageRecord, NewDetection, NewImage,
};

/// The record-store operations the pipeline's callers need.
///
/// Identifiers are generated by the store and returned from the insert
/// operations. A Postgres-backed implementation belongs to the caller; the
/// in-memory implementation below serves tests and local pipelines.
pub trait RecordStore {
    /// Insert an image record, generating its id. A missing capture
    /// timestamp defaults to the current time.
    fn insert_image(&mut self, image: NewImage) -> Result<Uuid, StoreError>;

    /// Insert a detection record for a previously inserted image.
    fn insert_detection(&mut self, detection: NewDetection) -> Result<Uuid, StoreError>;

    /// Fetch all image records.
    fn fetch_images(&self) -> Result<Vec<ImageRecord>, StoreError>;

    /// Fetch the detection summary: detections joined with image and
    /// device metadata.
    fn fetch_detection_summary(&self) -> Result<Vec<DetectionSummary>, StoreError>;
}

/// In-memory record store for tests and local pipelines.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    images: Vec<ImageRecord>,
    detections: Vec<DetectionRecord>,
    devices: HashMap<String, DeviceRecord>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capture device so the detection summary can join its
    /// metadata. Unknown devices surface as "unknown" in summaries rather
    /// than failing the fetch.
    pub fn register_device(&mut self, device: DeviceRecord) {
        self.devices.insert(device.device_id.clone(), device);
    }
}

impl RecordStore for MemoryRecordStore {
    fn insert_image(&mut self, image: NewImage) -> Result<Uuid, StoreError> {
        let image_id = Uuid::new_v4();
        let record = ImageRecord {
            image_id,
            device_id: image.device_id,
            image_url: image.image_url,
            capture_timestamp: image.capture_timestamp.unwrap_or_else(Utc::now),
            is_trainable: image.is_trainable,
            image_resolution: image.image_resolution,
            augmentation: image.augmentation,
        };
        debug!(%image_id, device = %record.device_id, "inserted image record");
        self.images.push(record);
        Ok(image_id)
    }

    fn insert_detection(&mut self, detection: NewDetection) -> Result<Uuid, StoreError> {
        if !self.images.iter().any(|i| i.image_id == detection.image_id) {
            return Err(StoreError::UnknownImage(detection.image_id));
        }

        let detection_id = Uuid::new_v4();
        debug!(%detection_id, image_id = %detection.image_id, label = %detection.label,
            "inserted detection record");
        self.detections.push(DetectionRecord {
            detection_id,
            image_id: detection.image_id,
            label: detection.label,
            confidence_score: detection.confidence_score,
            bbox_key: detection.bbox_key,
        });
        Ok(detection_id)
    }

    fn fetch_images(&self) -> Result<Vec<ImageRecord>, StoreError> {
        Ok(self.images.clone())
    }

    fn fetch_detection_summary(&self) -> Result<Vec<DetectionSummary>, StoreError> {
        let summaries = self
            .detections
            .iter()
            .filter_map(|det| {
                let image = self.images.iter().find(|i| i.image_id == det.image_id)?;
                let device = self.devices.get(&image.device_id);
                Some(DetectionSummary {
                    image_id: image.image_id,
                    capture_timestamp: image.capture_timestamp,
                    label_name: det.label.clone(),
                    confidence_score: det.confidence_score,
                    factory_name: device
                        .map(|d| d.factory_name.clone())
                        .unwrap_or_else(|| "unknown".to_string()),
                    device_type: device
                        .map(|d| d.device_type.clone())
                        .unwrap_or_else(|| "unknown".to_string()),
                    is_trainable: image.is_trainable,
                    is_data_collector: device.map(|d| d.is_data_collector).unwrap_or(false),
                    bbox_file_url: det.bbox_key.clone(),
                })
            })
            .collect();
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> NewImage {
        NewImage {
            device_id: "cam-07".to_string(),
            image_url: "images/cam-07/0001.jpg".to_string(),
            is_trainable: true,
            image_resolution: "1920x1080".to_string(),
            augmentation: None,
            capture_timestamp: None,
        }
    }

    #[test]
    fn test_insert_image_generates_distinct_ids() {
        let mut store = MemoryRecordStore::new();
        let a = store.insert_image(sample_image()).unwrap();
        let b = store.insert_image(sample_image()).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.fetch_images().unwrap().len(), 2);
    }

    #[test]
    fn test_insert_detection_requires_known_image() {
        let mut store = MemoryRecordStore::new();
        let err = store
            .insert_detection(NewDetection {
                image_id: Uuid::new_v4(),
                label: "person".to_string(),
                confidence_score: 0.9,
                bbox_key: "bboxes/x.json".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownImage(_)));
    }

    #[test]
    fn test_detection_summary_joins_device_metadata() {
        let mut store = MemoryRecordStore::new();
        store.register_device(DeviceRecord {
            device_id: "cam-07".to_string(),
            factory_name: "plant-a".to_string(),
            device_type: "fixed-camera".to_string(),
            is_data_collector: true,
        });

        let image_id = store.insert_image(sample_image()).unwrap();
        store
            .insert_detection(NewDetection {
                image_id,
                label: "person".to_string(),
                confidence_score: 0.87,
                bbox_key: "bboxes/0001.json".to_string(),
            })
            .unwrap();

        let summary = store.fetch_detection_summary().unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].label_name, "person");
        assert_eq!(summary[0].factory_name, "plant-a");
        assert!(summary[0].is_data_collector);
        assert_eq!(summary[0].bbox_file_url, "bboxes/0001.json");
    }

    #[test]
    fn test_summary_for_unregistered_device() {
        let mut store = MemoryRecordStore::new();
        let image_id = store.insert_image(sample_image()).unwrap();
        store
            .insert_detection(NewDetection {
                image_id,
                label: "helmet".to_string(),
                confidence_score: 0.5,
                bbox_key: "bboxes/0002.json".to_string(),
            })
            .unwrap();

        let summary = store.fetch_detection_summary().unwrap();
        assert_eq!(summary[0].factory_name, "unknown");
        assert!(!summary[0].is_data_collector);
    }
}
