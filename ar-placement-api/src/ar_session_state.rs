/// Lifecycle of the immersive AR session as seen by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum ArSessionState {
    // The capability query has not resolved yet.
    Detecting,

    // The platform cannot run immersive AR. Terminal.
    Unsupported,

    // Supported, no session running. Initial once detection succeeds.
    Inactive,

    // An enter request is waiting on the platform or the user.
    Requesting,

    // The session is live and the hit-test pose stream is flowing.
    Active,

    // Teardown was requested and the platform has not confirmed it yet.
    Ending,
}

impl Default for ArSessionState {
    fn default() -> ArSessionState {
        ArSessionState::Detecting
    }
}

impl ArSessionState {
    pub fn is_active(&self) -> bool {
        *self == ArSessionState::Active
    }

    /// Whether an asynchronous platform call is outstanding.
    pub fn is_pending(&self) -> bool {
        match *self {
            ArSessionState::Detecting | ArSessionState::Requesting | ArSessionState::Ending => true,
            _ => false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == ArSessionState::Unsupported
    }
}
