//! A single tracked marker.

use image::GrayImage;
use image::imageops::{self, FilterType};
use ndarray::Array1;

use crate::tracker::geometry::Point;
use crate::tracker::similarity::{Patch, intensity_histogram};
use crate::tracker::track_state::TrackState;

/// Registry-unique track identifier, assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackId(pub u64);

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One continuously identified marker.
///
/// The reference patch and everything derived from it are fixed at
/// creation. Only the registry mutates a track.
#[derive(Debug, Clone)]
pub struct Track {
    id: TrackId,
    position: Point,
    last_seen: u32,
    existence: u32,
    reference_patch: Patch,
    histogram: Array1<f64>,
    ghost: GrayImage,
}

impl Track {
    pub(crate) fn new(
        id: TrackId,
        position: Point,
        reference_patch: Patch,
        histogram_bins: usize,
        icon_size: u32,
    ) -> Self {
        let histogram = intensity_histogram(&reference_patch, histogram_bins);
        let gray = imageops::grayscale(&reference_patch);
        let ghost = imageops::resize(&gray, icon_size, icon_size, FilterType::Triangle);
        Self {
            id,
            position,
            last_seen: 0,
            existence: 0,
            reference_patch,
            histogram,
            ghost,
        }
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    /// Last known position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Frames since the last successful match; 0 means matched this frame.
    pub fn last_seen(&self) -> u32 {
        self.last_seen
    }

    /// Number of successful refreshes since creation.
    pub fn existence(&self) -> u32 {
        self.existence
    }

    pub fn reference_patch(&self) -> &Patch {
        &self.reference_patch
    }

    /// Intensity histogram of the reference patch.
    pub fn histogram(&self) -> &Array1<f64> {
        &self.histogram
    }

    /// Grayscale, downsampled reference patch drawn while the track is lost.
    pub fn ghost_icon(&self) -> &GrayImage {
        &self.ghost
    }

    pub fn state(&self, recent_threshold: u32, display_threshold: u32) -> TrackState {
        TrackState::classify(self.last_seen, recent_threshold, display_threshold)
    }

    pub fn is_confirmed(&self, confirmation_threshold: u32) -> bool {
        self.existence >= confirmation_threshold
    }

    pub(crate) fn refresh(&mut self, position: Point) {
        self.position = position;
        self.last_seen = 0;
        self.existence = self.existence.saturating_add(1);
    }

    pub(crate) fn age(&mut self) {
        self.last_seen = self.last_seen.saturating_add(1);
    }
}
