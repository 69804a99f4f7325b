//! Request spacing for polite crawling
//!
//! The limiter enforces a minimum wall-clock interval between the completion
//! of one request and the start of the next. Time is read through a [`Clock`]
//! so tests can drive it without sleeping.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Source of monotonic time for the rate limiter
pub trait Clock: Send + Sync {
    /// Returns the current instant
    fn now(&self) -> Instant;
}

/// Clock backed by [`Instant::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Enforces a minimum delay between outbound requests
///
/// The limiter tracks the earliest instant the next request may start.
/// [`RateLimiter::acquire`] reserves that slot under the lock before
/// sleeping, so concurrent callers sharing one limiter are released one
/// `min_delay` apart instead of all at once. [`RateLimiter::record_request`]
/// pushes the next slot to `min_delay` after the completion of an attempt.
pub struct RateLimiter {
    /// Minimum time between the end of one request and the start of the next
    min_delay: Duration,

    /// Earliest start of the next request, None before the first one
    next_allowed: Mutex<Option<Instant>>,

    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    /// Creates a rate limiter driven by the system clock
    pub fn new(min_delay: Duration) -> Self {
        Self::with_clock(min_delay, Arc::new(SystemClock))
    }

    /// Creates a rate limiter reading time from `clock`
    pub fn with_clock(min_delay: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            min_delay,
            next_allowed: Mutex::new(None),
            clock,
        }
    }

    /// Calculates the time until the next request may start
    ///
    /// Returns None if a request can be made now, or the duration to wait otherwise.
    pub fn time_until_ready(&self) -> Option<Duration> {
        let next = (*self.lock_next_allowed())?;
        let wait = next.saturating_duration_since(self.clock.now());

        if wait.is_zero() {
            None
        } else {
            Some(wait)
        }
    }

    /// Waits until a request may start
    ///
    /// The caller's start slot is claimed before sleeping, and the slot after
    /// it is pushed back by `min_delay`.
    pub async fn acquire(&self) {
        let wait = {
            let mut next_allowed = self.lock_next_allowed();
            let now = self.clock.now();
            let slot = match *next_allowed {
                Some(next) if next > now => next,
                _ => now,
            };
            *next_allowed = Some(slot + self.min_delay);
            slot.saturating_duration_since(now)
        };

        if !wait.is_zero() {
            tracing::trace!("Rate limiter waiting {:?}", wait);
            tokio::time::sleep(wait).await;
        }
    }

    /// Records that a request attempt has just completed
    ///
    /// Called after the response (or failure) is in hand, so the delay is
    /// measured from the end of the previous request.
    pub fn record_request(&self) {
        let mut next_allowed = self.lock_next_allowed();
        let after_completion = self.clock.now() + self.min_delay;
        *next_allowed = Some(match *next_allowed {
            Some(reserved) if reserved > after_completion => reserved,
            _ => after_completion,
        });
    }

    fn lock_next_allowed(&self) -> std::sync::MutexGuard<'_, Option<Instant>> {
        // The guarded value is a plain timestamp, so a poisoned lock is still usable.
        self.next_allowed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("min_delay", &self.min_delay)
            .field("next_allowed", &*self.lock_next_allowed())
            .finish()
    }
}
