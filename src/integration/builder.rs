//! Builder for creating Detection objects from a frame and a candidate center.

use image::RgbImage;
use image::imageops::{self, FilterType};

use crate::error::TrackerError;
use crate::tracker::{Detection, Point, TrackerConfig};

/// Crops and size-normalizes marker patches around candidate centers.
#[derive(Debug, Clone)]
pub struct DetectionBuilder {
    patch_size: u32,
    capture_radius: u32,
}

impl Default for DetectionBuilder {
    fn default() -> Self {
        Self::from_config(&TrackerConfig::default())
    }
}

impl DetectionBuilder {
    /// Create a new detection builder with default sizes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the patch size and capture radius of a tracker config.
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            patch_size: config.patch_size,
            capture_radius: config.capture_radius,
        }
    }

    /// Set the side of the output patch.
    pub fn patch_size(mut self, patch_size: u32) -> Self {
        self.patch_size = patch_size;
        self
    }

    /// Set the half side of the cropped window.
    pub fn capture_radius(mut self, capture_radius: u32) -> Self {
        self.capture_radius = capture_radius;
        self
    }

    /// Build a `Detection` for the candidate at `center`.
    ///
    /// The `2 * capture_radius` window is clamped to the frame before being
    /// resized, so candidates near the border still yield a full patch.
    pub fn build(&self, frame: &RgbImage, center: Point) -> Result<Detection, TrackerError> {
        let (width, height) = frame.dimensions();
        let inside = center.x >= 0
            && center.y >= 0
            && (center.x as u32) < width
            && (center.y as u32) < height;
        if !inside {
            return Err(TrackerError::CandidateOutOfFrame {
                x: center.x,
                y: center.y,
                width,
                height,
            });
        }

        let (cx, cy) = (center.x as u32, center.y as u32);
        let r = self.capture_radius.max(1);
        let x0 = cx.saturating_sub(r);
        let y0 = cy.saturating_sub(r);
        let x1 = cx.saturating_add(r).min(width);
        let y1 = cy.saturating_add(r).min(height);

        let window = imageops::crop_imm(frame, x0, y0, x1 - x0, y1 - y0).to_image();
        let patch = imageops::resize(
            &window,
            self.patch_size,
            self.patch_size,
            FilterType::Triangle,
        );
        Ok(Detection::from_point(center, patch))
    }
}
