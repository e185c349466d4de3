//! Tunables for the marker tracker.

use crate::error::TrackerError;
use crate::tracker::similarity::DEFAULT_BINS;

/// Configuration for the [`MarkerTracker`](super::MarkerTracker).
///
/// All thresholds count frames except `distance_threshold`, which is in
/// pixels. Values are fixed once a tracker is built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    /// Maximum distance for a detection to count as the same marker.
    pub distance_threshold: f64,
    /// A track seen less than this many frames ago is matched on proximity alone.
    pub recent_threshold: u32,
    /// Unconfirmed tracks unseen for longer than this are evicted.
    pub decay_threshold: u32,
    /// Refresh count at which a track stops being treated as noise.
    pub confirmation_threshold: u32,
    /// Ghost overlays stop being drawn once a track is unseen for longer than this.
    pub display_threshold: u32,
    /// Maximum number of concurrent tracks.
    pub capacity: usize,
    /// Side of the square, size-normalized detection patch.
    pub patch_size: u32,
    /// Half side of the window cropped around a candidate before resizing.
    pub capture_radius: u32,
    /// Side of the square ghost icon.
    pub icon_size: u32,
    /// Offset from the track position to the icon's bottom-right corner.
    pub icon_offset: i32,
    /// Number of intensity histogram bins used for similarity.
    pub histogram_bins: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 20.0,
            recent_threshold: 5,
            decay_threshold: 5,
            confirmation_threshold: 4,
            display_threshold: 666,
            capacity: 5,
            patch_size: 24,
            capture_radius: 11,
            icon_size: 11,
            icon_offset: 5,
            histogram_bins: DEFAULT_BINS,
        }
    }
}

impl TrackerConfig {
    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if !self.distance_threshold.is_finite() || self.distance_threshold < 0.0 {
            return Err(invalid(
                "distance_threshold",
                format!("must be finite and non-negative, got {}", self.distance_threshold),
            ));
        }
        if self.capacity == 0 {
            return Err(invalid("capacity", "must be at least 1".to_string()));
        }
        if self.patch_size == 0 {
            return Err(invalid("patch_size", "must be at least 1".to_string()));
        }
        if self.capture_radius == 0 {
            return Err(invalid("capture_radius", "must be at least 1".to_string()));
        }
        if self.icon_size == 0 {
            return Err(invalid("icon_size", "must be at least 1".to_string()));
        }
        if !(1..=256).contains(&self.histogram_bins) {
            return Err(invalid(
                "histogram_bins",
                format!("must be within 1..=256, got {}", self.histogram_bins),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> TrackerError {
    TrackerError::InvalidConfig { field, reason }
}
