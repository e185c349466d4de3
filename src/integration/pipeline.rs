//! TrackerPipeline for combining marker detection with tracking.

use image::RgbImage;

use crate::error::TrackerError;
use crate::tracker::{FrameReport, MarkerTracker, TrackerConfig};

use super::DetectionSource;

/// A combined tracker that bundles a detection source with the marker tracker.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: MarkerTracker,
    last_report: FrameReport,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    /// Create a new tracking pipeline with the given detector and tracker config.
    pub fn new(detector: D, config: TrackerConfig) -> Result<Self, TrackerError> {
        Ok(Self {
            detector,
            tracker: MarkerTracker::new(config)?,
            last_report: FrameReport::default(),
        })
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(detector: D) -> Self {
        Self {
            detector,
            tracker: MarkerTracker::default(),
            last_report: FrameReport::default(),
        }
    }

    /// Process a single frame and return it with ghost overlays drawn.
    ///
    /// Detection runs on the untouched frame; overlays are drawn afterwards.
    pub fn process_frame(&mut self, mut frame: RgbImage) -> Result<RgbImage, D::Error> {
        let detections = self.detector.detect(&frame)?;
        self.last_report = self.tracker.process_frame(&mut frame, detections);
        Ok(frame)
    }

    /// Report of the most recently processed frame.
    pub fn last_report(&self) -> &FrameReport {
        &self.last_report
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &MarkerTracker {
        &self.tracker
    }
}
