//! Detection input and the per-detection association rule.

use crate::tracker::geometry::Point;
use crate::tracker::registry::TrackRegistry;
use crate::tracker::similarity::Patch;
use crate::tracker::track::TrackId;

/// Detection input for the tracker.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Marker center in frame pixels
    pub position: Point,
    /// Size-normalized crop around the marker
    pub patch: Patch,
}

impl Detection {
    pub fn new(x: i32, y: i32, patch: Patch) -> Self {
        Self {
            position: Point::new(x, y),
            patch,
        }
    }

    pub fn from_point(position: Point, patch: Patch) -> Self {
        Self { position, patch }
    }
}

/// How a single detection should be applied to the registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Association {
    /// A recently seen track lies close enough; treat as the same marker moving.
    Continue(TrackId),
    /// Nothing trustworthy nearby and there is room for a new marker.
    Create,
    /// Registry is full; the visually closest track jumped here.
    Reassign { track: TrackId, score: f64 },
}

/// Decide how `detection` relates to the current tracks.
///
/// Returns `None` only when the registry is full and empty at once, which
/// a validated config rules out.
pub fn associate(registry: &TrackRegistry, detection: &Detection) -> Option<Association> {
    let config = registry.config();
    if let Some(track) = registry
        .nearest(detection.position)
        .filter(|t| t.last_seen() < config.recent_threshold)
    {
        return Some(Association::Continue(track.id()));
    }

    if !registry.is_full() {
        return Some(Association::Create);
    }

    registry
        .most_similar(&detection.patch)
        .map(|(track, score)| Association::Reassign { track, score })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::config::TrackerConfig;
    use image::Rgb;

    fn patch(v: u8) -> Patch {
        Patch::from_pixel(24, 24, Rgb([v, v, v]))
    }

    #[test]
    fn test_continue_recent_nearby_track() {
        let config = TrackerConfig::default();
        let mut reg = TrackRegistry::new(config);
        let id = reg.create(Point::new(40, 40), patch(10));

        let det = Detection::new(45, 42, patch(200));
        assert_eq!(associate(&reg, &det), Some(Association::Continue(id)));
    }

    #[test]
    fn test_create_when_nearby_track_is_stale() {
        let config = TrackerConfig::default();
        let mut reg = TrackRegistry::new(config);
        reg.create(Point::new(40, 40), patch(10));
        for _ in 0..5 {
            reg.age_all();
        }

        let det = Detection::new(41, 40, patch(10));
        assert_eq!(associate(&reg, &det), Some(Association::Create));
    }

    #[test]
    fn test_reassign_when_full() {
        let config = TrackerConfig {
            capacity: 2,
            ..Default::default()
        };
        let mut reg = TrackRegistry::new(config);
        reg.create(Point::new(0, 0), patch(10));
        let bright = reg.create(Point::new(100, 0), patch(240));

        let det = Detection::new(300, 300, patch(240));
        match associate(&reg, &det) {
            Some(Association::Reassign { track, .. }) => assert_eq!(track, bright),
            other => panic!("unexpected association: {other:?}"),
        }
    }
}
