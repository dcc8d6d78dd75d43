//! Submission cooldown for the lead form
//!
//! Keeps people (and scripts) from firing the same form repeatedly. One
//! submission is accepted, then every attempt inside the cooldown window is
//! turned away.
//!
//! # Usage Example
//!
//! ```rust
//! use leadpage::core::rate_limiter::CooldownLimiter;
//!
//! let mut limiter = CooldownLimiter::default();
//!
//! assert!(limiter.try_acquire(10_000));
//! assert!(!limiter.try_acquire(12_000));
//! assert!(limiter.try_acquire(15_000));
//! ```
//!
//! The limiter takes `&mut self`, so on a single-threaded host nothing else is
//! required. Sharing one instance between threads needs a `Mutex` around it so
//! the check and the update stay one step.

/// Default cooldown between accepted submissions (5 seconds)
pub const DEFAULT_COOLDOWN_MS: u64 = 5000;

/// Cooldown-based rate limiter
///
/// Remembers when the last attempt was accepted. Rejected attempts leave that
/// timestamp untouched, so it never moves backwards.
#[derive(Debug, Clone)]
pub struct CooldownLimiter {
    /// Minimum distance between two accepted attempts
    cooldown_ms: u64,
    /// When the last attempt was accepted, if any
    last_accepted_at_ms: Option<u64>,
}

impl CooldownLimiter {
    /// Create a limiter with a custom cooldown
    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            last_accepted_at_ms: None,
        }
    }

    /// Accept the attempt at `now_ms` if the cooldown has elapsed
    ///
    /// Returns `true` and records `now_ms` when accepted, `false` otherwise.
    /// A clock that jumps backwards reads as "still cooling down".
    pub fn try_acquire(&mut self, now_ms: u64) -> bool {
        if self.remaining_ms(now_ms) > 0 {
            tracing::debug!(now_ms, "submission rejected by cooldown");
            return false;
        }

        self.last_accepted_at_ms = Some(now_ms);
        true
    }

    /// Time left before the next attempt would be accepted (0 when ready)
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        match self.last_accepted_at_ms {
            None => 0,
            Some(last) if now_ms < last => self.cooldown_ms,
            Some(last) => self.cooldown_ms.saturating_sub(now_ms - last),
        }
    }

    /// Get the configured cooldown
    pub fn cooldown_ms(&self) -> u64 {
        self.cooldown_ms
    }

    /// Timestamp of the last accepted attempt
    pub fn last_accepted_at_ms(&self) -> Option<u64> {
        self.last_accepted_at_ms
    }

    /// Forget the last accepted attempt
    pub fn reset(&mut self) {
        self.last_accepted_at_ms = None;
    }
}

impl Default for CooldownLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN_MS)
    }
}
