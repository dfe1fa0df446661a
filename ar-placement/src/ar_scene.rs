use crate::{ArError, ArEvent, ArFrame, ArModel, ArPlacementTracker, ArPlatform, ArPlatformCreator};
use crate::{ArPose, ArSceneConfig, ArSessionLifecycle, ArSessionState};

/// Drives one tap-to-place experience from the render loop.
///
/// Call `tick` once per rendered frame. Events are handled in the order the
/// platform delivered them, so a select commits the hit of its own frame and
/// never one reported after it.
pub struct ArScene {
    lifecycle: ArSessionLifecycle,
    tracker: ArPlacementTracker,
    model: ArModel,
    frames: u64,
}

impl ArScene {
    pub fn new(platform: Box<dyn ArPlatform>, config: ArSceneConfig) -> Result<ArScene, ArError> {
        let model = ArModel::new(&config.model)?;
        Ok(ArScene {
            lifecycle: ArSessionLifecycle::new(platform, config.session),
            tracker: ArPlacementTracker::new(),
            model: model,
            frames: 0,
        })
    }

    pub fn from_creator(creator: &dyn ArPlatformCreator, config: ArSceneConfig) -> Result<ArScene, ArError> {
        ArScene::new(creator.new_platform(), config)
    }

    pub fn tick(&mut self) {
        let events = self.lifecycle.poll();
        if !self.lifecycle.state().is_active() {
            self.discard_placement();
            return;
        }

        for event in events {
            match event {
                ArEvent::Frame(frame) => self.on_frame(frame),
                ArEvent::Select => {
                    self.commit_placement();
                },
                // The lifecycle consumes session ends and never forwards them.
                ArEvent::SessionEnd => debug!("Ignoring session end already handled by the lifecycle"),
            }
        }
    }

    /// Direct user-input path for a tap or controller trigger.
    pub fn select(&mut self) -> Option<ArPose> {
        if !self.lifecycle.state().is_active() {
            debug!("Select ignored while {:?}", self.lifecycle.state());
            return None;
        }
        self.commit_placement()
    }

    pub fn request_enter(&mut self) -> Result<(), ArError> {
        self.lifecycle.request_enter()
    }

    pub fn request_exit(&mut self) -> Result<(), ArError> {
        self.lifecycle.request_exit()
    }

    pub fn state(&self) -> ArSessionState {
        self.lifecycle.state()
    }

    pub fn lifecycle(&self) -> &ArSessionLifecycle {
        &self.lifecycle
    }

    /// The tracking indicator, only while the session is active.
    pub fn tracking_pose(&self) -> Option<ArPose> {
        if self.lifecycle.state().is_active() {
            self.tracker.current_tracking_pose()
        } else {
            None
        }
    }

    pub fn placement(&self) -> Option<ArPose> {
        self.tracker.current_placement()
    }

    pub fn tracker(&self) -> &ArPlacementTracker {
        &self.tracker
    }

    pub fn model(&self) -> &ArModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut ArModel {
        &mut self.model
    }

    /// Where to draw the placed model, if anything has been placed.
    pub fn model_matrix(&self) -> Option<[f32; 16]> {
        self.placement().map(|pose| self.model.model_matrix(&pose))
    }

    /// Where to draw the tracking indicator, if a surface has been hit.
    pub fn reticle_matrix(&self) -> Option<[f32; 16]> {
        self.tracking_pose().map(|pose| pose.to_matrix())
    }

    /// Frames rendered during active sessions.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl ArScene {
    fn on_frame(&mut self, frame: ArFrame) {
        self.frames += 1;
        self.tracker.on_frame(frame.hit);
        if self.tracker.current_placement().is_some() {
            self.model.advance_frame();
        }
    }

    fn commit_placement(&mut self) -> Option<ArPose> {
        match self.tracker.on_select_trigger() {
            Some(pose) => {
                info!("Placed model at {:?}", pose.position);
                Some(pose)
            },
            None => {
                debug!("Select ignored, no surface hit yet");
                None
            },
        }
    }

    fn discard_placement(&mut self) {
        if !self.tracker.is_empty() {
            debug!("Session left active, discarding placement");
            self.tracker.reset();
            self.model.reset_spin();
        }
    }
}
