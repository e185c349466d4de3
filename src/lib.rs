//! Marker tracking for bird's-eye map frames.
//!
//! Detections (a position plus a small image patch) are associated with a
//! bounded set of tracks every frame. Tracks that stop being detected are
//! drawn back onto the frame as a grayscale "last seen" ghost icon until they
//! are considered gone.

pub mod error;
pub mod integration;
pub mod tracker;

pub use error::TrackerError;
pub use integration::{CandidateDetector, DetectionBuilder, DetectionSource, TrackerPipeline};
pub use tracker::{
    Detection, FrameReport, MarkerTracker, Patch, Point, Track, TrackId, TrackRegistry,
    TrackState, TrackerConfig, distance, similarity,
};
