use crate::{ArError, ArEvent, ArFuture, ArPlatform, ArSessionHandle, ArSessionInit, ArSessionState};
use crate::{CapabilityError, SessionStartError};
use std::mem;

enum Pending {
    Idle,
    Capability(ArFuture<Result<bool, CapabilityError>>),
    Request(ArFuture<Result<ArSessionHandle, SessionStartError>>),
    End(ArFuture<()>),
}

/// Gates AR behaviour behind platform capability and owns the boundary
/// between an active session and everything else.
///
/// Platform results are only applied from `poll`, so every state change
/// happens inside a single `&mut self` call and readers never see a
/// half-applied transition.
pub struct ArSessionLifecycle {
    platform: Box<dyn ArPlatform>,
    init: ArSessionInit,
    state: ArSessionState,
    session: Option<ArSessionHandle>,
    pending: Pending,
    last_error: Option<ArError>,
}

impl Drop for ArSessionLifecycle {
    fn drop(&mut self) {
        // A request the platform already granted still owns a session.
        let session = match mem::replace(&mut self.pending, Pending::Idle) {
            Pending::Request(mut future) => match future.try_take() {
                Ok(Some(Ok(session))) => Some(session),
                _ => None,
            },
            _ if self.state.is_active() => self.session.take(),
            _ => None,
        };
        if let Some(session) = session {
            debug!("Ending AR session {} on drop", session.session_id);
            let _ = self.platform.end_session(&session);
        }
    }
}

impl ArSessionLifecycle {
    /// Issues the capability query. The state stays `Detecting` until the
    /// answer is picked up by `poll`.
    pub fn new(mut platform: Box<dyn ArPlatform>, init: ArSessionInit) -> ArSessionLifecycle {
        let capability = platform.is_session_supported();
        ArSessionLifecycle {
            platform: platform,
            init: init,
            state: ArSessionState::Detecting,
            session: None,
            pending: Pending::Capability(capability),
            last_error: None,
        }
    }

    pub fn state(&self) -> ArSessionState {
        self.state
    }

    pub fn session(&self) -> Option<&ArSessionHandle> {
        self.session.as_ref()
    }

    pub fn init(&self) -> &ArSessionInit {
        &self.init
    }

    /// The most recent platform failure, kept until the next enter request.
    pub fn last_error(&self) -> Option<&ArError> {
        self.last_error.as_ref()
    }

    /// Whether the "enter AR" affordance should be presented.
    pub fn enter_offered(&self) -> bool {
        self.state == ArSessionState::Inactive
    }

    /// Whether the "exit AR" affordance should be presented.
    pub fn exit_offered(&self) -> bool {
        self.state.is_active()
    }

    pub fn request_enter(&mut self) -> Result<(), ArError> {
        match self.state {
            ArSessionState::Inactive => {},
            state if state.is_terminal() => return Err(CapabilityError::NotSupported.into()),
            state if state.is_pending() => return Err(ArError::Busy(state)),
            state => return Err(ArError::InvalidState {
                command: "enter AR",
                state: state,
            }),
        }

        self.last_error = None;
        self.pending = Pending::Request(self.platform.request_session(&self.init));
        self.set_state(ArSessionState::Requesting);
        Ok(())
    }

    /// Exit while an enter request is outstanding is rejected as busy; the
    /// caller may retry once the request resolves.
    pub fn request_exit(&mut self) -> Result<(), ArError> {
        match self.state {
            ArSessionState::Active => {},
            ArSessionState::Ending => return Ok(()),
            ArSessionState::Requesting => return Err(ArError::Busy(self.state)),
            state => return Err(ArError::InvalidState {
                command: "exit AR",
                state: state,
            }),
        }

        let end = match self.session {
            Some(ref session) => self.platform.end_session(session),
            None => {
                error!("Active AR session without a handle");
                self.set_state(ArSessionState::Inactive);
                return Ok(());
            },
        };
        self.pending = Pending::End(end);
        self.set_state(ArSessionState::Ending);
        Ok(())
    }

    /// Drains platform events and applies any resolved platform results.
    /// Returns frame and select events received while the session was active.
    pub fn poll(&mut self) -> Vec<ArEvent> {
        let mut forwarded = Vec::new();
        for event in self.platform.poll_events() {
            match event {
                ArEvent::SessionEnd => self.on_platform_end(),
                event => {
                    if self.state.is_active() {
                        forwarded.push(event);
                    } else {
                        debug!("Dropping {:?} while {:?}", event, self.state);
                    }
                },
            }
        }
        self.resolve_pending();
        forwarded
    }
}

impl ArSessionLifecycle {
    fn set_state(&mut self, state: ArSessionState) {
        if self.state != state {
            info!("AR session {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    fn resolve_pending(&mut self) {
        match mem::replace(&mut self.pending, Pending::Idle) {
            Pending::Idle => {},
            Pending::Capability(mut future) => match future.try_take() {
                Ok(None) => self.pending = Pending::Capability(future),
                Ok(Some(Ok(true))) => self.set_state(ArSessionState::Inactive),
                Ok(Some(Ok(false))) => self.fail_capability(CapabilityError::NotSupported),
                Ok(Some(Err(e))) => self.fail_capability(e),
                Err(e) => self.fail_capability(CapabilityError::Unavailable(e.to_string())),
            },
            Pending::Request(mut future) => match future.try_take() {
                Ok(None) => self.pending = Pending::Request(future),
                Ok(Some(Ok(session))) => {
                    info!("AR session {} started with {:?}", session.session_id, session.enabled_features);
                    self.session = Some(session);
                    self.set_state(ArSessionState::Active);
                },
                Ok(Some(Err(e))) => self.fail_request(e.into()),
                Err(e) => self.fail_request(e),
            },
            Pending::End(mut future) => match future.try_take() {
                Ok(None) => self.pending = Pending::End(future),
                Ok(Some(())) => self.finish_session(),
                Err(e) => {
                    warn!("AR session end was not confirmed: {}", e);
                    self.finish_session();
                },
            },
        }
    }

    fn on_platform_end(&mut self) {
        match self.state {
            ArSessionState::Active | ArSessionState::Ending => {
                info!("AR session ended by the platform");
                self.pending = Pending::Idle;
                self.finish_session();
            },
            state => debug!("Ignoring platform session end while {:?}", state),
        }
    }

    fn finish_session(&mut self) {
        self.session = None;
        self.set_state(ArSessionState::Inactive);
    }

    fn fail_capability(&mut self, e: CapabilityError) {
        warn!("Immersive AR unavailable: {}", e);
        self.last_error = Some(e.into());
        self.set_state(ArSessionState::Unsupported);
    }

    fn fail_request(&mut self, e: ArError) {
        warn!("AR session request failed: {}", e);
        self.last_error = Some(e);
        self.set_state(ArSessionState::Inactive);
    }
}
