extern crate ar_placement_api;
#[macro_use]
extern crate log;
#[cfg(feature = "serde-serialization")]
#[macro_use]
extern crate serde_derive;

pub mod api;
mod ar_config;
mod ar_lifecycle;
mod ar_model;
mod ar_placement;
mod ar_scene;

pub use ar_placement_api::*;
pub use ar_config::{ArModelConfig, ArSceneConfig};
pub use ar_lifecycle::ArSessionLifecycle;
pub use ar_model::ArModel;
pub use ar_placement::ArPlacementTracker;
pub use ar_scene::ArScene;
