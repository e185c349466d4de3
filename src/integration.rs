//! Integration module for connecting marker detectors with the tracker.
//!
//! The image pipeline that finds marker candidates (color thresholding,
//! circle detection) lives outside this crate. This module defines the
//! contract it has to satisfy and the glue that feeds its output into a
//! [`MarkerTracker`](crate::MarkerTracker).

mod builder;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{CandidateDetector, DetectionSource};
pub use pipeline::TrackerPipeline;
