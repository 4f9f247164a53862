use std::future::Future;
use std::time::Duration;

/// Waits between consecutive chunk requests.
pub trait Pacer {
    fn pause(&self) -> impl Future<Output = ()> + Send;
}

/// Sleeps a fixed interval on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        Self(Duration::from_secs(1))
    }
}

impl Pacer for FixedDelay {
    async fn pause(&self) {
        tokio::time::sleep(self.0).await;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    async fn pause(&self) {}
}
