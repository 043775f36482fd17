pub mod config;
pub mod error;
pub mod cooldown;
pub mod submission;
pub mod handoff;
pub mod console;

use std::sync::Arc;

use crate::config::FlowConfig;
use crate::error::FlowError;
use crate::handoff::opener::Opener;
use crate::handoff::surface::Surface;
use crate::handoff::ticks::TickSource;
use crate::handoff::HandoffFlow;

/// Assemble a hand-off flow from a configuration and its collaborators.
pub fn build_flow(
    config: FlowConfig,
    surface: Arc<dyn Surface>,
    opener: Arc<dyn Opener>,
    ticks: Arc<dyn TickSource>,
) -> Result<HandoffFlow, FlowError> {
    HandoffFlow::new(config, surface, opener, ticks)
}
