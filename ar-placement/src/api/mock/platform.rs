use crate::{ArEvent, ArFrame, ArFuture, ArPlatform, ArPose, ArResolver, ArSessionHandle, ArSessionInit};
use crate::{CapabilityError, SessionStartError};
use crate::mock::MockArControlMsg;
use crate::utils;
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::sync::mpsc::Receiver;
use super::MockArInit;

type SessionResolver = ArResolver<Result<ArSessionHandle, SessionStartError>>;
type SharedSession = Arc<Mutex<Option<ArSessionHandle>>>;

/// In-process platform driven by `MockArControlMsg`s.
///
/// Control messages are applied when the platform is polled, so a test sees
/// their effects on the next `poll_events` call and never earlier.
pub struct MockArPlatform {
    init: MockArInit,
    receiver: Option<Receiver<MockArControlMsg>>,
    capability: Option<ArResolver<Result<bool, CapabilityError>>>,
    request: Option<(SessionResolver, ArSessionHandle)>,
    end: Option<ArResolver<()>>,
    session: SharedSession,
    events: Vec<ArEvent>,
}

impl MockArPlatform {
    pub fn new(init: MockArInit) -> MockArPlatform {
        MockArPlatform {
            init: init,
            receiver: None,
            capability: None,
            request: None,
            end: None,
            session: Arc::new(Mutex::new(None)),
            events: Vec::new(),
        }
    }

    pub fn new_with_receiver(init: MockArInit, rcv: Receiver<MockArControlMsg>) -> MockArPlatform {
        MockArPlatform {
            receiver: Some(rcv),
            ..MockArPlatform::new(init)
        }
    }

    /// The session the simulated device is running, if any.
    pub fn session(&self) -> Option<ArSessionHandle> {
        self.current().clone()
    }

    /// Shared view of the running session that outlives the platform box.
    pub fn session_handle(&self) -> Arc<Mutex<Option<ArSessionHandle>>> {
        self.session.clone()
    }

    fn current(&self) -> MutexGuard<Option<ArSessionHandle>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn handle_msg(&mut self, msg: MockArControlMsg) {
        match msg {
            MockArControlMsg::ReportSupport(supported) => match self.capability.take() {
                Some(mut resolver) => {
                    if let Err(e) = resolver.resolve(Ok(supported)) {
                        warn!("Mock capability answer dropped: {}", e);
                    }
                },
                None => warn!("No capability query is pending"),
            },
            MockArControlMsg::GrantSession => match self.request.take() {
                Some((mut resolver, handle)) => match resolver.resolve(Ok(handle.clone())) {
                    Ok(()) => *self.current() = Some(handle),
                    Err(e) => warn!("Mock session grant dropped: {}", e),
                },
                None => warn!("No session request is pending"),
            },
            MockArControlMsg::DenySession(reason) => match self.request.take() {
                Some((mut resolver, _)) => {
                    if let Err(e) = resolver.resolve(Err(reason)) {
                        warn!("Mock session denial dropped: {}", e);
                    }
                },
                None => warn!("No session request is pending"),
            },
            MockArControlMsg::Hit(pose) => self.push_frame(Some(pose)),
            MockArControlMsg::HitMatrix(matrix) => self.push_frame(Some(ArPose::from_matrix(&matrix))),
            MockArControlMsg::Miss => self.push_frame(None),
            MockArControlMsg::Select => {
                if self.current().is_some() {
                    self.events.push(ArEvent::Select);
                }
            },
            MockArControlMsg::ConfirmEnd => match self.end.take() {
                Some(mut resolver) => {
                    *self.current() = None;
                    if let Err(e) = resolver.resolve(()) {
                        warn!("Mock end confirmation dropped: {}", e);
                    }
                },
                None => warn!("No end request is pending"),
            },
            MockArControlMsg::EndSession => {
                let ended = self.current().take();
                if ended.is_some() {
                    if let Some(mut resolver) = self.end.take() {
                        let _ = resolver.resolve(());
                    }
                    self.events.push(ArEvent::SessionEnd);
                }
            },
        }
    }

    fn push_frame(&mut self, hit: Option<ArPose>) {
        if self.current().is_none() {
            debug!("Mock frame without a session ignored");
            return;
        }
        self.events.push(ArEvent::Frame(ArFrame {
            timestamp: utils::timestamp(),
            hit: hit,
        }));
    }
}

impl ArPlatform for MockArPlatform {
    fn is_session_supported(&mut self) -> ArFuture<Result<bool, CapabilityError>> {
        if let Some(ref msg) = self.init.capability_error {
            return ArFuture::resolved(Err(CapabilityError::Unavailable(msg.clone())));
        }
        if self.init.defer_capability {
            let (resolver, future) = ArFuture::blocked();
            self.capability = Some(resolver);
            return future;
        }
        ArFuture::resolved(Ok(self.init.supported))
    }

    fn request_session(&mut self, init: &ArSessionInit)
                       -> ArFuture<Result<ArSessionHandle, SessionStartError>> {
        if !self.init.supported {
            return ArFuture::resolved(Err(SessionStartError::Platform("immersive-ar unsupported".into())));
        }
        if let Some(missing) = init.required_features.iter().find(|f| !self.init.features.contains(*f)) {
            return ArFuture::resolved(Err(SessionStartError::FeatureUnavailable(*missing)));
        }

        let mut enabled = init.required_features.clone();
        enabled.extend(init.optional_features.iter().filter(|f| self.init.features.contains(*f)));
        let handle = ArSessionHandle {
            session_id: utils::new_id(),
            enabled_features: enabled,
        };

        if self.init.auto_grant {
            *self.current() = Some(handle.clone());
            return ArFuture::resolved(Ok(handle));
        }
        let (resolver, future) = ArFuture::blocked();
        self.request = Some((resolver, handle));
        future
    }

    fn end_session(&mut self, session: &ArSessionHandle) -> ArFuture<()> {
        let current = self.current().as_ref().map(|s| s.session_id);
        if current != Some(session.session_id) {
            warn!("Mock asked to end unknown session {}", session.session_id);
            return ArFuture::resolved(());
        }
        if self.init.auto_confirm_end {
            *self.current() = None;
            return ArFuture::resolved(());
        }
        let (resolver, future) = ArFuture::blocked();
        self.end = Some(resolver);
        future
    }

    fn poll_events(&mut self) -> Vec<ArEvent> {
        let mut messages = Vec::new();
        if let Some(ref rcv) = self.receiver {
            while let Ok(msg) = rcv.try_recv() {
                messages.push(msg);
            }
        }
        for msg in messages {
            self.handle_msg(msg);
        }
        mem::replace(&mut self.events, Vec::new())
    }
}
