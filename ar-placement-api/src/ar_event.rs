use crate::ArPose;

/// Per-frame data delivered while a session is active.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct ArFrame {
    // Milliseconds, monotonically increasing within a session.
    pub timestamp: f64,

    // Where the hit-test ray met a surface this frame, if it did.
    pub hit: Option<ArPose>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum ArEvent {
    // A frame was rendered.
    Frame(ArFrame),

    // The user tapped the screen or pulled a controller trigger.
    Select,

    // The platform ended the session without being asked to.
    SessionEnd,
}
