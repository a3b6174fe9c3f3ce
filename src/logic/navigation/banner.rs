//! Banner Auto-Dismiss Timer
//!
//! The in-page warning banner removes itself after a fixed delay unless the
//! user dismissed it first. The timer is scoped: dropping the guard cancels
//! the pending removal, so a timer can never fire against a banner that a
//! newer navigation already tore down.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;

use super::types::TabId;
use crate::logic::host::{best_effort, HostActions};

/// Handle to a pending auto-dismiss. Dropping it cancels the timer.
pub struct BannerGuard {
    cancel: Option<oneshot::Sender<()>>,
}

impl BannerGuard {
    /// Cancel the pending auto-dismiss without removing the banner.
    pub fn cancel(mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for BannerGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }
}

/// Schedule banner removal for `tab` after `delay`.
pub fn spawn_auto_dismiss<H: HostActions>(
    host: Arc<H>,
    tab: TabId,
    delay: Duration,
) -> BannerGuard {
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(delay) => {
                best_effort("auto-dismiss banner", host.remove_banner(tab));
            }
            _ = rx => {
                // Cancelled: banner was dismissed or the tab navigated away
            }
        }
    });

    BannerGuard { cancel: Some(tx) }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::host::testing::RecordingHost;

    // Paused clock: sleeping in the test lets the runtime auto-advance past
    // the spawned timer's deadline once every task is idle.

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_fires_after_delay() {
        let host = Arc::new(RecordingHost::default());
        let _guard = spawn_auto_dismiss(host.clone(), 3, Duration::from_secs(10));

        tokio::time::sleep(Duration::from_secs(11)).await;

        assert_eq!(host.removed_banners.lock().as_slice(), &[3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_has_not_fired_early() {
        let host = Arc::new(RecordingHost::default());
        let _guard = spawn_auto_dismiss(host.clone(), 3, Duration::from_secs(10));

        tokio::time::sleep(Duration::from_secs(9)).await;

        assert!(host.removed_banners.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_guard_cancels_timer() {
        let host = Arc::new(RecordingHost::default());
        let guard = spawn_auto_dismiss(host.clone(), 3, Duration::from_secs(10));
        drop(guard);

        tokio::time::sleep(Duration::from_secs(11)).await;

        assert!(host.removed_banners.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_cancel() {
        let host = Arc::new(RecordingHost::default());
        let guard = spawn_auto_dismiss(host.clone(), 3, Duration::from_secs(10));
        guard.cancel();

        tokio::time::sleep(Duration::from_secs(11)).await;

        assert!(host.removed_banners.lock().is_empty());
    }
}
