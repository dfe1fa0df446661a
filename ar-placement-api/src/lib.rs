#[macro_use]
macro_rules! identity_matrix {
    () => ([1.0, 0.0, 0.0, 0.0,  0.0, 1.0, 0.0, 0.0,  0.0, 0.0, 1.0, 0.0,  0.0, 0.0, 0.0, 1.0]);
}

#[cfg(feature = "serde-serialization")]
#[macro_use]
extern crate serde_derive;

pub mod utils;

pub mod ar_error;
pub mod ar_event;
pub mod ar_future;
pub mod ar_platform;
pub mod ar_pose;
pub mod ar_session_init;
pub mod ar_session_state;
pub mod mock;

pub use ar_error::{ArError, CapabilityError, SessionStartError};
pub use ar_event::{ArEvent, ArFrame};
pub use ar_future::{ArFuture, ArResolver};
pub use ar_platform::{ArPlatform, ArPlatformCreator};
pub use ar_pose::ArPose;
pub use ar_session_init::{ArFeature, ArSessionHandle, ArSessionInit};
pub use ar_session_state::ArSessionState;
