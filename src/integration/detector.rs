//! Trait for marker detection backends.

use image::RgbImage;
use tracing::debug;

use super::DetectionBuilder;
use crate::tracker::{Detection, Point};

/// Trait for marker detection backends.
///
/// Implement this trait to connect any candidate finder to the tracker.
///
/// # Example
///
/// ```ignore
/// use lastseen_rs::{DetectionSource, Detection};
/// use image::RgbImage;
///
/// struct MyDetector;
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, frame: &RgbImage) -> Result<Vec<Detection>, Self::Error> {
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Find markers in `frame`, in the order the backend produced them.
    ///
    /// Every returned patch should already have the tracker's patch size.
    fn detect(&mut self, frame: &RgbImage) -> Result<Vec<Detection>, Self::Error>;
}

/// A `DetectionSource` built from a function returning candidate centers.
///
/// Patches are cropped from the frame with a [`DetectionBuilder`].
/// Candidates outside the frame are skipped.
pub struct CandidateDetector<F> {
    find_candidates: F,
    builder: DetectionBuilder,
}

impl<F> CandidateDetector<F>
where
    F: FnMut(&RgbImage) -> Vec<Point>,
{
    pub fn new(find_candidates: F, builder: DetectionBuilder) -> Self {
        Self {
            find_candidates,
            builder,
        }
    }
}

impl<F> DetectionSource for CandidateDetector<F>
where
    F: FnMut(&RgbImage) -> Vec<Point>,
{
    type Error = std::convert::Infallible;

    fn detect(&mut self, frame: &RgbImage) -> Result<Vec<Detection>, Self::Error> {
        let candidates = (self.find_candidates)(frame);
        let mut detections = Vec::with_capacity(candidates.len());
        for center in candidates {
            match self.builder.build(frame, center) {
                Ok(det) => detections.push(det),
                Err(err) => debug!(%err, "skipping candidate"),
            }
        }
        Ok(detections)
    }
}
