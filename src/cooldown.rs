use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::submission::fields::TemplateKind;

/// Per-form duplicate-submission guard. Armed when an attempt concludes;
/// submits inside the window are rejected with the remaining time.
pub struct CooldownGuard {
    entries: DashMap<TemplateKind, Instant>,
}

impl CooldownGuard {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Check whether a new attempt may start. Returns Err with remaining ms.
    pub fn check(&self, kind: TemplateKind, window: Duration) -> Result<(), u64> {
        let Some(armed) = self.entries.get(&kind) else {
            return Ok(());
        };

        let elapsed = armed.elapsed();
        if elapsed >= window {
            return Ok(());
        }

        Err((window - elapsed).as_millis() as u64)
    }

    /// Arm the guard for a form whose attempt just concluded.
    pub fn arm(&self, kind: TemplateKind) {
        self.entries.insert(kind, Instant::now());
    }
}
