use async_trait::async_trait;
use std::time::Duration;

use crate::domain::delivery::Sleeper;

/// Waits on the tokio timer; only the calling task is suspended.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sleep_advances_virtual_time() {
        let started = tokio::time::Instant::now();

        TokioSleeper.sleep(Duration::from_secs(8)).await;

        assert!(started.elapsed() >= Duration::from_secs(8));
    }
}
