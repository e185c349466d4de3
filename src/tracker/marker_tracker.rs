//! Per-frame association, eviction and ghost rendering.

use image::RgbImage;
use image::imageops::{self, FilterType};
use tracing::{debug, warn};

use crate::error::TrackerError;
use crate::tracker::config::TrackerConfig;
use crate::tracker::matching::{self, Association, Detection};
use crate::tracker::overlay::draw_ghost;
use crate::tracker::registry::TrackRegistry;
use crate::tracker::track::{Track, TrackId};
use crate::tracker::track_state::TrackState;

/// What happened to the registry during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub frame_id: u64,
    pub created: usize,
    pub refreshed: usize,
    pub reassigned: usize,
    pub evicted: Vec<TrackId>,
    pub overlays: usize,
}

/// Frame-by-frame marker tracker.
///
/// Every frame runs the same phases in a fixed order: associate, decay and
/// evict, render, age. [`process_frame`](Self::process_frame) composes them;
/// each phase is also callable on its own.
#[derive(Debug, Clone)]
pub struct MarkerTracker {
    registry: TrackRegistry,
    frame_id: u64,
}

impl Default for MarkerTracker {
    fn default() -> Self {
        Self {
            registry: TrackRegistry::new(TrackerConfig::default()),
            frame_id: 0,
        }
    }
}

impl MarkerTracker {
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        config.validate()?;
        Ok(Self {
            registry: TrackRegistry::new(config),
            frame_id: 0,
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        self.registry.config()
    }

    pub fn registry(&self) -> &TrackRegistry {
        &self.registry
    }

    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.registry.iter()
    }

    /// Number of frames processed so far.
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    /// Run a full frame and draw ghosts for lost tracks onto `frame`.
    pub fn process_frame(
        &mut self,
        frame: &mut RgbImage,
        detections: Vec<Detection>,
    ) -> FrameReport {
        self.frame_id += 1;

        let mut report = self.associate(detections);
        report.frame_id = self.frame_id;
        report.evicted = self.decay_and_evict();
        report.overlays = self.render(frame);
        self.age_all();

        debug!(
            frame = report.frame_id,
            created = report.created,
            refreshed = report.refreshed,
            reassigned = report.reassigned,
            evicted = report.evicted.len(),
            overlays = report.overlays,
            tracks = self.registry.len(),
            "frame processed"
        );
        report
    }

    /// Match each detection, in order, against the registry.
    ///
    /// The returned report only carries association counts.
    pub fn associate(&mut self, detections: Vec<Detection>) -> FrameReport {
        let mut report = FrameReport::default();

        for detection in detections {
            let detection = self.normalize(detection);
            match matching::associate(&self.registry, &detection) {
                Some(Association::Continue(id)) => {
                    self.registry.refresh(id, detection.position);
                    report.refreshed += 1;
                }
                Some(Association::Create) => {
                    self.registry.create(detection.position, detection.patch);
                    report.created += 1;
                }
                Some(Association::Reassign { track, score }) => {
                    debug!(
                        track = %track,
                        score,
                        x = detection.position.x,
                        y = detection.position.y,
                        "registry full, reassigning most similar track"
                    );
                    self.registry.refresh(track, detection.position);
                    report.reassigned += 1;
                }
                None => {}
            }
        }

        report
    }

    /// Drop stale tracks that never got confirmed.
    pub fn decay_and_evict(&mut self) -> Vec<TrackId> {
        self.registry.decay_and_evict()
    }

    /// Draw a ghost for every lost but still displayable track.
    ///
    /// Returns how many ghosts touched the frame.
    pub fn render(&self, frame: &mut RgbImage) -> usize {
        let config = self.registry.config();
        let mut drawn = 0;
        for track in self.registry.iter() {
            let state = track.state(config.recent_threshold, config.display_threshold);
            if state != TrackState::Lost || track.last_seen() == config.recent_threshold {
                continue;
            }
            if draw_ghost(frame, track.ghost_icon(), track.position(), config.icon_offset) > 0 {
                drawn += 1;
            }
        }
        drawn
    }

    pub fn age_all(&mut self) {
        self.registry.age_all();
    }

    fn normalize(&self, mut detection: Detection) -> Detection {
        let size = self.registry.config().patch_size;
        let (w, h) = detection.patch.dimensions();
        if (w, h) != (size, size) {
            warn!(
                width = w,
                height = h,
                expected = size,
                "detection patch has unexpected size, resizing"
            );
            detection.patch = imageops::resize(&detection.patch, size, size, FilterType::Triangle);
        }
        detection
    }
}
