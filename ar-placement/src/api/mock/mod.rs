mod platform;

use crate::{ArFeature, ArPlatform, ArPlatformCreator};
use crate::mock::MockArControlMsg;
use std::sync::mpsc::{channel, Sender};

pub use self::platform::MockArPlatform;

/// How the mock platform answers before any control message arrives.
#[derive(Debug, Clone)]
pub struct MockArInit {
    // Answer to the capability query.
    pub supported: bool,
    // Fails the capability query itself with this message.
    pub capability_error: Option<String>,
    // Holds the capability query until `ReportSupport` arrives.
    pub defer_capability: bool,
    // Features the simulated device offers.
    pub features: Vec<ArFeature>,
    // Grants session requests without waiting for `GrantSession`.
    pub auto_grant: bool,
    // Confirms end requests without waiting for `ConfirmEnd`.
    pub auto_confirm_end: bool,
}

impl Default for MockArInit {
    fn default() -> MockArInit {
        MockArInit {
            supported: true,
            capability_error: None,
            defer_capability: false,
            features: vec![ArFeature::HitTest, ArFeature::LocalFloor, ArFeature::DomOverlay],
            auto_grant: true,
            auto_confirm_end: true,
        }
    }
}

pub struct MockArPlatformCreator {
    init: MockArInit,
}

impl MockArPlatformCreator {
    pub fn new() -> Box<dyn ArPlatformCreator> {
        Self::with_init(MockArInit::default())
    }

    pub fn with_init(init: MockArInit) -> Box<dyn ArPlatformCreator> {
        Box::new(MockArPlatformCreator { init: init })
    }

    pub fn new_platform_with_remote(init: MockArInit) -> (Box<dyn ArPlatform>, Sender<MockArControlMsg>) {
        let (send, rcv) = channel();
        let platform = MockArPlatform::new_with_receiver(init, rcv);
        (Box::new(platform), send)
    }
}

impl ArPlatformCreator for MockArPlatformCreator {
    fn new_platform(&self) -> Box<dyn ArPlatform> {
        Box::new(MockArPlatform::new(self.init.clone()))
    }
}
