use crate::{ArPose, SessionStartError};

pub enum MockArControlMsg {
    // Answers a deferred capability query.
    ReportSupport(bool),
    GrantSession,
    DenySession(SessionStartError),
    // One frame with a surface hit.
    Hit(ArPose),
    // One frame with a hit delivered as a column-major matrix.
    HitMatrix([f32; 16]),
    // One frame without a hit.
    Miss,
    Select,
    // Confirms a pending end request.
    ConfirmEnd,
    // The platform tears the session down on its own.
    EndSession,
}
