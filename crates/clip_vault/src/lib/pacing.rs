use std::{future::Future, time::Duration};

/// Pacing policy applied after every chunk summarization call.
pub trait Pacer {
    fn pause(&self) -> impl Future<Output = ()> + Send;
}

/// Unconditional fixed pause between generation calls, as a simple
/// rate-limit mitigation.
#[derive(Debug, Clone)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Pacer for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// No pacing at all. Useful in tests and for backends without rate limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pacer for NoPause {
    async fn pause(&self) {}
}
