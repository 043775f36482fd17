use std::time::Duration;

use async_trait::async_trait;

/// Cooperative countdown tick source, injected so the sequence is observable
/// without wall-clock timing.
#[async_trait]
pub trait TickSource: Send + Sync {
    /// Wait for one countdown interval.
    async fn tick(&self);
}

/// Wall-clock ticks, one per second by default.
pub struct IntervalTicks {
    period: Duration,
}

impl IntervalTicks {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn per_second() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl TickSource for IntervalTicks {
    async fn tick(&self) {
        tokio::time::sleep(self.period).await;
    }
}
