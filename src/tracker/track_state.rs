/// Track state derived from how long ago a marker was last matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// Seen recently enough to be matched on proximity alone
    #[default]
    Tracked,
    /// Not seen for a while; shown as a last-known-position ghost
    Lost,
    /// Unseen for too long to be worth displaying
    Hidden,
}

impl TrackState {
    /// Classify `last_seen` against the recent and display thresholds.
    pub fn classify(last_seen: u32, recent_threshold: u32, display_threshold: u32) -> Self {
        if last_seen < recent_threshold {
            TrackState::Tracked
        } else if last_seen <= display_threshold {
            TrackState::Lost
        } else {
            TrackState::Hidden
        }
    }
}
