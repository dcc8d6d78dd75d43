//! Konami code easter egg: ↑ ↑ ↓ ↓ ← → ← → B A
//!
//! Key codes go into a rolling window as long as the target sequence. The
//! window matches only when its contents equal the sequence exactly, so the
//! keys must be pressed consecutively with nothing in between.

use std::collections::VecDeque;

/// `keyCode` values of the Konami sequence
pub const KONAMI_SEQUENCE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

/// How long the rainbow effect runs after a match
pub const EFFECT_DURATION_MS: u64 = 5000;

/// CSS animation applied to `<body>` while the effect runs
pub const RAINBOW_ANIMATION: &str = "rainbow 2s infinite";

/// Keyframes backing [`RAINBOW_ANIMATION`]
pub const RAINBOW_KEYFRAMES: &str = "@keyframes rainbow {\n    0% { filter: hue-rotate(0deg); }\n    100% { filter: hue-rotate(360deg); }\n}";

/// Rolling-window key sequence matcher
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    target: Vec<u32>,
    buffer: VecDeque<u32>,
}

impl SequenceMatcher {
    pub fn new(target: impl Into<Vec<u32>>) -> Self {
        let target = target.into();
        Self {
            buffer: VecDeque::with_capacity(target.len() + 1),
            target,
        }
    }

    /// Matcher for the Konami code
    pub fn konami() -> Self {
        Self::new(KONAMI_SEQUENCE)
    }

    /// Record a key press; `true` when the window now equals the target
    ///
    /// The window is left as is after a match, so the sequence has to be
    /// typed in full again to match again.
    pub fn push(&mut self, code: u32) -> bool {
        self.buffer.push_back(code);
        if self.buffer.len() > self.target.len() {
            self.buffer.pop_front();
        }

        !self.target.is_empty() && self.buffer.iter().eq(self.target.iter())
    }

    /// Most recent key codes, oldest first
    pub fn buffer(&self) -> impl Iterator<Item = u32> + '_ {
        self.buffer.iter().copied()
    }
}

impl Default for SequenceMatcher {
    fn default() -> Self {
        Self::konami()
    }
}

/// Matcher plus the timed effect it unlocks
///
/// The effect ends on its own after [`EFFECT_DURATION_MS`]; a new match while
/// it runs pushes the end back. Callers pass the current time and ask
/// [`KonamiListener::effect_until_ms`] when to schedule the end.
#[derive(Debug, Clone, Default)]
pub struct KonamiListener {
    matcher: SequenceMatcher,
    effect_until_ms: Option<u64>,
    activations: u32,
}

impl KonamiListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a keydown; returns `true` when the effect (re)starts
    pub fn on_key_down(&mut self, code: u32, now_ms: u64) -> bool {
        if !self.matcher.push(code) {
            return false;
        }

        self.activations += 1;
        self.effect_until_ms = Some(now_ms + EFFECT_DURATION_MS);
        tracing::info!(activations = self.activations, "konami code activated");
        true
    }

    /// End the effect if its time is up; `true` when it just ended
    pub fn on_effect_timer(&mut self, now_ms: u64) -> bool {
        match self.effect_until_ms {
            Some(until) if now_ms >= until => {
                self.effect_until_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_effect_active(&self) -> bool {
        self.effect_until_ms.is_some()
    }

    /// When the running effect ends
    pub fn effect_until_ms(&self) -> Option<u64> {
        self.effect_until_ms
    }

    /// How many times the sequence was matched
    pub fn activations(&self) -> u32 {
        self.activations
    }
}
