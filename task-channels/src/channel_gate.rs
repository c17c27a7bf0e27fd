use std::sync::Arc;

use async_trait::async_trait;
use leibniz_pi_core::CompletionSignaling;
use tokio::sync::watch;

/// Countdown gate over a watch channel holding the remaining count
#[derive(Clone)]
pub struct ChannelCompletionGate {
    remaining: Arc<watch::Sender<usize>>,
}

#[async_trait]
impl CompletionSignaling for ChannelCompletionGate {
    fn with_count(count: usize) -> Self {
        let (remaining, _) = watch::channel(count);
        Self {
            remaining: Arc::new(remaining),
        }
    }

    fn count_down(&self) {
        self.remaining
            .send_modify(|count| *count = count.saturating_sub(1));
    }

    async fn wait(&self) {
        let mut receiver = self.remaining.subscribe();
        // Checks the current value first, so a count_down that happened
        // before this call still releases the waiter. Cannot fail: self
        // keeps the sender alive for the whole wait.
        let _ = receiver.wait_for(|count| *count == 0).await;
    }
}
