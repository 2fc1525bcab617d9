use std::future::Future;

use tokio::sync::watch;

/// Cloneable cancellation flag shared between the app and a running load.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: watch::Sender<bool>,
    rx: watch::Receiver<bool>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx, rx }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        // The sender lives in `self`, so this only returns once the flag flips.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }

    /// Runs `fut` unless the token fires first.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.is_cancelled() {
            return None;
        }

        tokio::select! {
            biased;
            _ = self.cancelled() => None,
            out = fut => Some(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn run_completes_without_cancel() {
        let token = CancelToken::new();
        assert_eq!(token.run(async { 3 }).await, Some(3));
    }

    #[tokio::test]
    async fn cancel_interrupts_pending_future() {
        let token = CancelToken::new();
        let waiter = token.clone();

        let handle = tokio::spawn(async move {
            waiter
                .run(tokio::time::sleep(Duration::from_secs(60)))
                .await
        });

        token.cancel();
        assert_eq!(handle.await.unwrap(), None);
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn already_cancelled_skips_future() {
        let token = CancelToken::new();
        token.cancel();

        let mut polled = false;
        let out = token.run(async { polled = true }).await;
        assert!(out.is_none());
        assert!(!polled);
    }
}
