pub mod link;
pub mod message;
pub mod opener;
pub mod surface;
pub mod ticks;

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::config::FlowConfig;
use crate::cooldown::CooldownGuard;
use crate::error::FlowError;
use crate::submission::fields::{FieldId, SubmissionRequest, TemplateKind};
use crate::submission::rules::{ValidationResult, Validator};

use self::opener::Opener;
use self::surface::Surface;
use self::ticks::TickSource;

/// States of one hand-off attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlowState {
    Idle,
    Validating,
    Composing,
    AwaitingConfirmation,
    Opening,
    Opened,
    PopupBlocked,
    Redirected,
    OpenFailed,
    ManualLinkShown,
}

impl FlowState {
    /// Terminal states all leave the user with a path to the destination.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FlowState::Opened | FlowState::Redirected | FlowState::ManualLinkShown
        )
    }
}

/// How an attempt concluded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum HandoffOutcome {
    Opened,
    Redirected,
    ManualLinkShown { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct HandoffReport {
    pub attempt_id: Uuid,
    pub kind: TemplateKind,
    pub link: String,
    pub shortened: bool,
    pub outcome: HandoffOutcome,
    pub trace: Vec<FlowState>,
}

/// Tracks one attempt through the state machine, keeping the transition trace.
/// Exactly one instance exists per attempt; it is destroyed with the attempt.
struct Machine {
    attempt_id: Uuid,
    state: FlowState,
    trace: Vec<FlowState>,
}

impl Machine {
    fn new(attempt_id: Uuid) -> Self {
        Self {
            attempt_id,
            state: FlowState::Idle,
            trace: vec![FlowState::Idle],
        }
    }

    fn advance(&mut self, next: FlowState) {
        tracing::debug!("attempt {}: {:?} -> {:?}", self.attempt_id, self.state, next);
        self.state = next;
        self.trace.push(next);
    }
}

/// Hand-off orchestrator: validates a submission read from the surface,
/// composes the message payload, runs the countdown, and opens the messaging
/// deep link with the blocked/failed fallback chain.
pub struct HandoffFlow {
    config: FlowConfig,
    validator: Validator,
    surface: Arc<dyn Surface>,
    opener: Arc<dyn Opener>,
    ticks: Arc<dyn TickSource>,
    cooldown: CooldownGuard,
}

impl HandoffFlow {
    pub fn new(
        config: FlowConfig,
        surface: Arc<dyn Surface>,
        opener: Arc<dyn Opener>,
        ticks: Arc<dyn TickSource>,
    ) -> Result<Self, FlowError> {
        let validator = Validator::new(&config.phone).map_err(FlowError::Config)?;
        Ok(Self {
            config,
            validator,
            surface,
            opener,
            ticks,
            cooldown: CooldownGuard::new(),
        })
    }

    /// Revalidate a single field, e.g. when it loses focus: sets or clears its
    /// inline indicator.
    pub fn revalidate_field(&self, kind: TemplateKind, field: FieldId) {
        let value = self.surface.field_value(field).unwrap_or_default();
        match self.validator.check_field(kind, field, &value) {
            Some(failure) => self.surface.show_field_error(field, failure.message()),
            None => self.surface.clear_field_error(field),
        }
    }

    /// Run one submission attempt end to end. The submit control is disabled
    /// for the whole attempt and re-enabled once the cool-down window elapses.
    pub async fn submit(&self, kind: TemplateKind) -> Result<HandoffReport, FlowError> {
        if let Err(remaining) = self.cooldown.check(kind, self.config.cooldown) {
            tracing::debug!("{kind:?} submit suppressed, {remaining}ms of cool-down left");
            return Err(FlowError::CoolingDown(remaining));
        }

        self.surface.set_submit_enabled(false);

        let result = self.run_attempt(kind).await;

        self.cooldown.arm(kind);
        self.schedule_reenable();

        result
    }

    async fn run_attempt(&self, kind: TemplateKind) -> Result<HandoffReport, FlowError> {
        let attempt_id = Uuid::now_v7();
        tracing::info!("attempt {attempt_id}: {kind:?} submission received");

        // Collect and trim before the machine exists; an absent required key
        // is the caller's construction error, not a validation failure.
        let request = match SubmissionRequest::collect(kind, |f| self.surface.field_value(f)) {
            Ok(request) => request,
            Err(err) => {
                tracing::error!("attempt {attempt_id}: {err}");
                self.surface
                    .show_notice("Some required data is missing. Please check the form.");
                return Err(err);
            }
        };

        let mut machine = Machine::new(attempt_id);
        machine.advance(FlowState::Validating);

        let result = self.validator.validate(kind, &request);
        self.render_validation(&result);
        if !result.is_ok() {
            tracing::info!(
                "attempt {attempt_id}: validation failed with {} problem(s)",
                result.failures().len()
            );
            self.surface
                .show_notice("Please fill all required fields correctly");
            machine.advance(FlowState::Idle);
            return Err(FlowError::Validation(result));
        }

        machine.advance(FlowState::Composing);
        let payload = message::compose(kind, &request, &self.config);
        let short = message::compose_short(kind, &request, &self.config);
        let (link, shortened) = link::build_within_budget(&self.config, &payload, &short);
        if shortened {
            tracing::warn!(
                "attempt {attempt_id}: link over {} chars, shortened payload substituted",
                self.config.link_budget
            );
        }

        machine.advance(FlowState::AwaitingConfirmation);
        self.surface.show_success(&request.first_name);
        self.surface.scroll_to_confirmation();
        for remaining in (1..=self.config.countdown_ticks).rev() {
            self.surface.set_countdown(remaining);
            self.ticks.tick().await;
        }

        machine.advance(FlowState::Opening);
        let outcome = match self.opener.open_new_context(&link).await {
            Ok(Some(handle)) => {
                tracing::info!("attempt {attempt_id}: opened context {}", handle.id());
                machine.advance(FlowState::Opened);
                HandoffOutcome::Opened
            }
            Ok(None) => {
                tracing::warn!("attempt {attempt_id}: popup blocked, falling back to full navigation");
                machine.advance(FlowState::PopupBlocked);
                self.opener.navigate_current(&link).await;
                machine.advance(FlowState::Redirected);
                HandoffOutcome::Redirected
            }
            Err(err) => {
                tracing::error!("attempt {attempt_id}: open failed: {err}");
                machine.advance(FlowState::OpenFailed);
                self.surface.show_manual_link(&link, &err.message);
                machine.advance(FlowState::ManualLinkShown);
                HandoffOutcome::ManualLinkShown {
                    reason: err.message,
                }
            }
        };

        Ok(HandoffReport {
            attempt_id,
            kind,
            link,
            shortened,
            outcome,
            trace: machine.trace,
        })
    }

    /// Indicators for failing fields; clear the rest so corrected fields recover.
    fn render_validation(&self, result: &ValidationResult) {
        for field in FieldId::ALL {
            match result.failures().iter().find(|f| f.field == field) {
                Some(failure) => self
                    .surface
                    .show_field_error(field, failure.kind.message()),
                None => self.surface.clear_field_error(field),
            }
        }
    }

    fn schedule_reenable(&self) {
        let surface = Arc::clone(&self.surface);
        let window = self.config.cooldown;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            surface.set_submit_enabled(true);
        });
    }
}
