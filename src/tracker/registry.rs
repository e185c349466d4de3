//! Owner of the active track set.

use tracing::{debug, trace};

use crate::tracker::config::TrackerConfig;
use crate::tracker::geometry::{Point, distance};
use crate::tracker::similarity::{Patch, compare_histograms, intensity_histogram};
use crate::tracker::track::{Track, TrackId};

/// The set of active tracks, in creation order.
#[derive(Debug, Clone)]
pub struct TrackRegistry {
    tracks: Vec<Track>,
    next_id: u64,
    config: TrackerConfig,
}

impl TrackRegistry {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            tracks: Vec::with_capacity(config.capacity),
            next_id: 0,
            config,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Whether the registry holds `capacity` tracks or more.
    pub fn is_full(&self) -> bool {
        self.tracks.len() >= self.config.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id() == id)
    }

    /// Closest track to `point`, if it lies within the distance threshold.
    ///
    /// On equal distances the earliest created track wins.
    pub fn nearest(&self, point: Point) -> Option<&Track> {
        let mut best: Option<(&Track, f64)> = None;
        for track in &self.tracks {
            let d = distance(&track.position(), &point);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((track, d));
            }
        }

        best.filter(|&(_, d)| d <= self.config.distance_threshold).map(|(track, _)| track)
    }

    /// Move a track to `position` and mark it as matched this frame.
    ///
    /// Returns `None` if no track has this id.
    pub fn refresh(&mut self, id: TrackId, position: Point) -> Option<&Track> {
        let track = self.tracks.iter_mut().find(|t| t.id() == id)?;
        track.refresh(position);
        Some(track)
    }

    /// Start a new track. Capacity is not checked here.
    pub fn create(&mut self, position: Point, patch: Patch) -> TrackId {
        self.next_id += 1;
        let id = TrackId(self.next_id);
        debug!(track = %id, x = position.x, y = position.y, "new track");
        self.tracks.push(Track::new(
            id,
            position,
            patch,
            self.config.histogram_bins,
            self.config.icon_size,
        ));
        id
    }

    /// Track whose reference patch looks most like `patch`, with its score.
    ///
    /// Scores match [`similarity`](crate::tracker::similarity()) at the
    /// configured bin count. On equal scores the earliest created track wins.
    pub fn most_similar(&self, patch: &Patch) -> Option<(TrackId, f64)> {
        let hist = intensity_histogram(patch, self.config.histogram_bins);
        let mut best: Option<(TrackId, f64)> = None;
        for track in &self.tracks {
            let score = compare_histograms(track.histogram(), &hist);
            trace!(track = %track.id(), score, "similarity");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((track.id(), score));
            }
        }
        best
    }

    /// Remove unconfirmed tracks that have gone unseen past the decay threshold.
    ///
    /// Confirmed tracks are kept no matter how stale. Returns the removed ids.
    pub fn decay_and_evict(&mut self) -> Vec<TrackId> {
        let decay = self.config.decay_threshold;
        let confirmation = self.config.confirmation_threshold;

        let evicted: Vec<TrackId> = self
            .tracks
            .iter()
            .filter(|t| t.last_seen() > decay && !t.is_confirmed(confirmation))
            .map(|t| t.id())
            .collect();

        if !evicted.is_empty() {
            self.tracks.retain(|t| !evicted.contains(&t.id()));
            debug!(?evicted, remaining = self.tracks.len(), "evicted unconfirmed tracks");
        }
        evicted
    }

    /// Advance `last_seen` of every track by one frame.
    pub fn age_all(&mut self) {
        for track in &mut self.tracks {
            track.age();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::similarity::similarity;
    use image::Rgb;

    fn patch(v: [u8; 3]) -> Patch {
        Patch::from_pixel(24, 24, Rgb(v))
    }

    fn registry() -> TrackRegistry {
        TrackRegistry::new(TrackerConfig::default())
    }

    #[test]
    fn test_nearest_empty_registry() {
        assert!(registry().nearest(Point::new(10, 10)).is_none());
    }

    #[test]
    fn test_nearest_within_threshold() {
        let mut reg = registry();
        let id = reg.create(Point::new(100, 100), patch([200, 0, 0]));

        let found = reg.nearest(Point::new(112, 110)).map(|t| t.id());
        assert_eq!(found, Some(id));
        // Exactly on the threshold still matches.
        assert!(reg.nearest(Point::new(120, 100)).is_some());
    }

    #[test]
    fn test_nearest_beyond_threshold() {
        let mut reg = registry();
        reg.create(Point::new(100, 100), patch([200, 0, 0]));
        assert!(reg.nearest(Point::new(121, 100)).is_none());
        assert!(reg.nearest(Point::new(115, 115)).is_none());
    }

    #[test]
    fn test_nearest_picks_closest() {
        let mut reg = registry();
        reg.create(Point::new(100, 100), patch([200, 0, 0]));
        let close = reg.create(Point::new(110, 100), patch([0, 200, 0]));
        let found = reg.nearest(Point::new(108, 100)).map(|t| t.id());
        assert_eq!(found, Some(close));
    }

    #[test]
    fn test_nearest_tie_keeps_first_created() {
        let mut reg = registry();
        let first = reg.create(Point::new(90, 100), patch([0, 0, 0]));
        reg.create(Point::new(110, 100), patch([0, 0, 0]));
        let found = reg.nearest(Point::new(100, 100)).map(|t| t.id());
        assert_eq!(found, Some(first));
    }

    #[test]
    fn test_is_full_at_capacity() {
        let mut reg = TrackRegistry::new(TrackerConfig {
            capacity: 2,
            ..Default::default()
        });
        reg.create(Point::new(0, 0), patch([0, 0, 0]));
        assert!(!reg.is_full());
        reg.create(Point::new(100, 0), patch([0, 0, 0]));
        assert!(reg.is_full());
    }

    #[test]
    fn test_refresh_increments_existence_by_one() {
        let mut reg = registry();
        let id = reg.create(Point::new(10, 10), patch([1, 2, 3]));
        for expected in 1..=6 {
            reg.age_all();
            let t = reg.refresh(id, Point::new(10 + expected as i32, 10)).unwrap();
            assert_eq!(t.existence(), expected);
            assert_eq!(t.last_seen(), 0);
        }
    }

    #[test]
    fn test_refresh_unknown_id() {
        let mut reg = registry();
        assert!(reg.refresh(TrackId(99), Point::new(0, 0)).is_none());
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut reg = registry();
        let a = reg.create(Point::new(0, 0), patch([0, 0, 0]));
        let b = reg.create(Point::new(50, 0), patch([0, 0, 0]));
        assert!(a < b);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_evicts_stale_unconfirmed() {
        let mut reg = registry();
        let id = reg.create(Point::new(0, 0), patch([9, 9, 9]));
        for _ in 0..3 {
            reg.refresh(id, Point::new(0, 0));
        }
        for _ in 0..6 {
            reg.age_all();
        }
        assert_eq!(reg.get(id).unwrap().last_seen(), 6);
        assert_eq!(reg.decay_and_evict(), vec![id]);
        assert!(reg.is_empty());
    }

    #[test]
    fn test_keeps_stale_confirmed() {
        let mut reg = registry();
        let id = reg.create(Point::new(0, 0), patch([9, 9, 9]));
        for _ in 0..4 {
            reg.refresh(id, Point::new(0, 0));
        }
        for _ in 0..6 {
            reg.age_all();
        }
        assert!(reg.decay_and_evict().is_empty());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_keeps_unconfirmed_within_decay() {
        let mut reg = registry();
        reg.create(Point::new(0, 0), patch([9, 9, 9]));
        for _ in 0..5 {
            reg.age_all();
        }
        assert!(reg.decay_and_evict().is_empty());
    }

    #[test]
    fn test_most_similar() {
        let mut reg = registry();
        reg.create(Point::new(0, 0), patch([200, 20, 20]));
        let blue = reg.create(Point::new(60, 0), patch([20, 20, 200]));
        reg.create(Point::new(120, 0), patch([20, 200, 20]));

        let (id, score) = reg.most_similar(&patch([20, 20, 200])).unwrap();
        assert_eq!(id, blue);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_most_similar_score_uses_configured_bins() {
        let gradient = |shift: u32| {
            Patch::from_fn(24, 24, |x, y| {
                let v = ((x + y * 24 + shift) % 256) as u8;
                Rgb([v, v, v])
            })
        };
        let mut reg = TrackRegistry::new(TrackerConfig {
            histogram_bins: 8,
            ..Default::default()
        });
        let id = reg.create(Point::new(0, 0), gradient(0));
        let query = gradient(100);

        let (best, score) = reg.most_similar(&query).unwrap();
        assert_eq!(best, id);
        let expected = similarity(reg.get(id).unwrap().reference_patch(), &query, 8);
        assert!((score - expected).abs() < 1e-12, "score={score} expected={expected}");
    }

    #[test]
    fn test_most_similar_empty() {
        assert!(registry().most_similar(&patch([0, 0, 0])).is_none());
    }
}
