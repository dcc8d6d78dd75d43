//! Trailing-edge debouncing
//!
//! Bursts of calls (resize, scroll) collapse into a single invocation that
//! happens once the burst has been quiet for `wait_ms`. Only the arguments of
//! the last call survive.
//!
//! The debouncer itself never looks at a clock. The host feeds it timestamps
//! and polls it when its timer fires, which keeps it usable from tests and
//! from the browser alike.
//!
//! # Example
//! ```
//! # use leadpage::core::debounce::Debouncer;
//! let mut debouncer = Debouncer::new(250);
//!
//! debouncer.call("first", 0);
//! debouncer.call("second", 100);
//!
//! assert_eq!(debouncer.poll(300), None);
//! assert_eq!(debouncer.poll(350), Some("second"));
//! assert_eq!(debouncer.poll(1_000), None);
//! ```

/// Default debounce window for window resize handling
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;

#[derive(Debug, Clone)]
pub struct Debouncer<A> {
    wait_ms: u64,
    pending: Option<A>,
    deadline_ms: u64,
}

impl<A> Debouncer<A> {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            pending: None,
            deadline_ms: 0,
        }
    }

    /// Record a call, replacing any pending arguments and pushing the
    /// deadline back to `now_ms + wait_ms`
    pub fn call(&mut self, args: A, now_ms: u64) {
        self.pending = Some(args);
        self.deadline_ms = now_ms.saturating_add(self.wait_ms);
    }

    /// Take the pending arguments if the quiet period is over
    pub fn poll(&mut self, now_ms: u64) -> Option<A> {
        if self.pending.is_some() && now_ms >= self.deadline_ms {
            self.pending.take()
        } else {
            None
        }
    }

    /// When the pending call becomes due, if there is one
    pub fn deadline_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|_| self.deadline_ms)
    }
}
