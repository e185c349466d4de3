//! Pixel-space geometry helpers.

/// Integer pixel coordinate on the frame.
pub type Point = nalgebra::Point2<i32>;

/// Euclidean distance between two pixel coordinates.
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    nalgebra::distance(&a.cast::<f64>(), &b.cast::<f64>())
}
