use crate::ArPose;

/// Turns the per-frame hit-test stream plus a discrete select trigger into a
/// committed placement.
#[derive(Debug, Clone, Default)]
pub struct ArPlacementTracker {
    tracking: Option<ArPose>,
    placement: Option<ArPose>,
    frames_since_hit: u64,
}

impl ArPlacementTracker {
    pub fn new() -> ArPlacementTracker {
        Default::default()
    }

    /// Moves the tracking indicator to the latest surface hit.
    pub fn on_hit_pose(&mut self, pose: ArPose) {
        self.tracking = Some(pose);
        self.frames_since_hit = 0;
    }

    /// Frames without a hit leave the indicator where it was.
    pub fn on_frame(&mut self, hit: Option<ArPose>) {
        match hit {
            Some(pose) => self.on_hit_pose(pose),
            None => self.frames_since_hit = self.frames_since_hit.saturating_add(1),
        }
    }

    /// Commits a copy of the current tracking pose. Returns the committed
    /// pose, or `None` when no surface has been hit yet.
    pub fn on_select_trigger(&mut self) -> Option<ArPose> {
        let pose = self.tracking?;
        self.placement = Some(pose);
        Some(pose)
    }

    pub fn current_tracking_pose(&self) -> Option<ArPose> {
        self.tracking
    }

    pub fn current_placement(&self) -> Option<ArPose> {
        self.placement
    }

    pub fn frames_since_hit(&self) -> u64 {
        self.frames_since_hit
    }

    pub fn is_empty(&self) -> bool {
        self.tracking.is_none() && self.placement.is_none()
    }

    /// Forgets both the indicator and the placement.
    pub fn reset(&mut self) {
        *self = ArPlacementTracker::default();
    }
}
