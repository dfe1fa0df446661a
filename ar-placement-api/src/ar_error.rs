use crate::{ArFeature, ArSessionState};
use thiserror::Error;

/// The device cannot run immersive AR. Terminal for the lifecycle.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum CapabilityError {
    #[error("immersive AR is not supported on this device")]
    NotSupported,

    #[error("AR capability check unavailable: {0}")]
    Unavailable(String),
}

/// A session request did not produce a session. Recoverable: the user may
/// retry.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum SessionStartError {
    #[error("permission to start the AR session was denied")]
    PermissionDenied,

    #[error("required feature `{0}` is not available")]
    FeatureUnavailable(ArFeature),

    #[error("AR session request timed out")]
    Timeout,

    #[error("platform refused the AR session: {0}")]
    Platform(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArError {
    #[error(transparent)]
    Capability(#[from] CapabilityError),

    #[error(transparent)]
    SessionStart(#[from] SessionStartError),

    #[error("AR session is busy ({0:?})")]
    Busy(ArSessionState),

    #[error("cannot {command} while the AR session is {state:?}")]
    InvalidState {
        command: &'static str,
        state: ArSessionState,
    },

    #[error("invalid color `{0}`, expected #rrggbb")]
    InvalidColor(String),

    #[error("pending platform result was abandoned")]
    Abandoned,

    #[error("platform result was already resolved")]
    AlreadyResolved,
}

impl ArError {
    /// Whether the enter affordance stays usable after this error.
    pub fn is_recoverable(&self) -> bool {
        match *self {
            ArError::Capability(_) => false,
            _ => true,
        }
    }
}
