use std::time::Duration;

/// How long a single click keeps the button raised.
pub const BOUNCE_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BouncePhase {
    Idle,
    Bouncing,
}

/// View state of a [`BounceButton`](super::BounceButton).
///
/// Every click raises the flag and owes one revert. Reverts are never
/// cancelled by a newer click, so the first one to land drops the flag even
/// if later clicks are still pending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonViewState {
    is_bouncing: bool,
    pending: usize,
}

impl ButtonViewState {
    pub fn phase(&self) -> BouncePhase {
        if self.is_bouncing {
            BouncePhase::Bouncing
        } else {
            BouncePhase::Idle
        }
    }

    /// Number of reverts scheduled but not yet fired.
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn click(&mut self) {
        self.is_bouncing = true;
        self.pending += 1;
    }

    /// Fired by a revert timer. Idempotent on the flag.
    pub fn settle(&mut self) {
        self.is_bouncing = false;
        self.pending = self.pending.saturating_sub(1);
    }
}

/// Sleep for `delay` on whichever timer the build target provides, then run
/// `settle`.
pub async fn settle_after(delay: Duration, settle: impl FnOnce()) {
    #[cfg(feature = "server")]
    tokio::time::sleep(delay).await;
    #[cfg(not(feature = "server"))]
    gloo_timers::future::sleep(delay).await;

    settle();
}
