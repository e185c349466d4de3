//! Drawing of last-known-position ghosts.

use image::{GrayImage, Rgb, RgbImage};

use crate::tracker::geometry::Point;

/// Paint `icon` onto `frame` as gray RGB pixels.
///
/// The icon's bottom-right corner (exclusive) lands at `anchor + offset`.
/// Anything outside the frame is clipped. Returns the number of pixels
/// written.
pub fn draw_ghost(frame: &mut RgbImage, icon: &GrayImage, anchor: Point, offset: i32) -> usize {
    let (icon_w, icon_h) = icon.dimensions();
    let left = i64::from(anchor.x) + i64::from(offset) - i64::from(icon_w);
    let top = i64::from(anchor.y) + i64::from(offset) - i64::from(icon_h);
    let (frame_w, frame_h) = (i64::from(frame.width()), i64::from(frame.height()));

    let mut written = 0;
    for (ix, iy, luma) in icon.enumerate_pixels() {
        let x = left + i64::from(ix);
        let y = top + i64::from(iy);
        if x < 0 || y < 0 || x >= frame_w || y >= frame_h {
            continue;
        }
        let v = luma[0];
        frame.put_pixel(x as u32, y as u32, Rgb([v, v, v]));
        written += 1;
    }
    written
}
