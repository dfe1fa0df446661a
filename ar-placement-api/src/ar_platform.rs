use crate::{ArEvent, ArFuture, ArSessionHandle, ArSessionInit, CapabilityError, SessionStartError};

/// The host runtime that owns the camera, tracking and hit testing.
pub trait ArPlatform: Send {
    /// Asks whether immersive AR sessions can be created at all.
    fn is_session_supported(&mut self) -> ArFuture<Result<bool, CapabilityError>>;

    /// Starts an immersive AR session. May prompt the user.
    fn request_session(&mut self, init: &ArSessionInit)
                       -> ArFuture<Result<ArSessionHandle, SessionStartError>>;

    /// Ends a running session. Resolves once the platform has torn it down.
    fn end_session(&mut self, session: &ArSessionHandle) -> ArFuture<()>;

    /// Drains frame, input and session events produced since the last call.
    fn poll_events(&mut self) -> Vec<ArEvent>;
}

pub trait ArPlatformCreator {
    fn new_platform(&self) -> Box<dyn ArPlatform>;
}
