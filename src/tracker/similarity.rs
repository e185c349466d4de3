//! Histogram-based visual similarity between image patches.

use image::{Pixel, RgbImage};
use ndarray::Array1;

/// A size-normalized RGB image patch.
pub type Patch = RgbImage;

/// Default bin count, one bin per 8-bit intensity level.
pub const DEFAULT_BINS: usize = 256;

/// Build the intensity histogram of a patch.
///
/// Intensity is the luma of each pixel; `bins` buckets span the full
/// 0..=255 range evenly. `bins` must be within 1..=256.
pub fn intensity_histogram(patch: &Patch, bins: usize) -> Array1<f64> {
    let mut hist = Array1::zeros(bins);
    for pixel in patch.pixels() {
        let luma = pixel.to_luma()[0] as usize;
        hist[luma * bins / 256] += 1.0;
    }
    hist
}

/// Correlation between two histograms, in [-1, 1].
///
/// Follows the usual histogram-correlation convention: when either
/// histogram is flat the score is 1.0.
pub fn compare_histograms(h1: &Array1<f64>, h2: &Array1<f64>) -> f64 {
    let (Some(mean1), Some(mean2)) = (h1.mean(), h2.mean()) else {
        return 1.0;
    };
    let d1 = h1 - mean1;
    let d2 = h2 - mean2;

    let num = d1.dot(&d2);
    let denom = d1.dot(&d1) * d2.dot(&d2);
    if denom.abs() > f64::EPSILON {
        num / denom.sqrt()
    } else {
        1.0
    }
}

/// Visual similarity between two patches of the same size.
///
/// Higher is more similar; identical patches score 1.0. Comparing a cached
/// [`intensity_histogram`] with [`compare_histograms`] gives the same score.
pub fn similarity(patch_a: &Patch, patch_b: &Patch, bins: usize) -> f64 {
    compare_histograms(
        &intensity_histogram(patch_a, bins),
        &intensity_histogram(patch_b, bins),
    )
}
