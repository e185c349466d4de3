mod config;
mod geometry;
mod marker_tracker;
mod matching;
mod overlay;
mod registry;
mod similarity;
mod track;
mod track_state;

pub use config::TrackerConfig;
pub use geometry::{Point, distance};
pub use marker_tracker::{FrameReport, MarkerTracker};
pub use matching::{Association, Detection, associate};
pub use overlay::draw_ghost;
pub use registry::TrackRegistry;
pub use similarity::{DEFAULT_BINS, Patch, compare_histograms, intensity_histogram, similarity};
pub use track::{Track, TrackId};
pub use track_state::TrackState;
