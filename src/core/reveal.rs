//! Scroll-triggered reveal animations
//!
//! Cards, FAQ items and the author profile start faded out and slightly
//! lowered, then slide into place the first time enough of them enters the
//! viewport. A revealed element stays revealed, whatever happens to the scroll
//! position afterwards.
//!
//! The browser's `IntersectionObserver` does the geometry on the page;
//! [`intersection_ratio`] reproduces the same arithmetic so the thresholds can
//! be tested without one.

use std::collections::HashMap;
use std::hash::Hash;

/// Fraction of an element that must be visible before it is revealed
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// The viewport bottom is pulled up by this much, so elements reveal a
/// little after they peek in
pub const DEFAULT_BOTTOM_MARGIN_PX: f64 = -50.0;

/// Vertical offset of a hidden element
pub const HIDDEN_OFFSET_PX: u32 = 30;

/// CSS transition used when revealing
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Axis-aligned rectangle in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }

    fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Root margins, in the same order as the CSS shorthand
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    /// `rootMargin` string for `IntersectionObserverInit`
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }

    /// Grow (positive) or shrink (negative) a rectangle by these margins
    pub fn apply(&self, rect: Rect) -> Rect {
        Rect {
            x: rect.x - self.left,
            y: rect.y - self.top,
            width: rect.width + self.left + self.right,
            height: rect.height + self.top + self.bottom,
        }
    }
}

/// Observer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: Margins,
}

impl RevealOptions {
    pub fn new(threshold: f64, root_margin: Margins) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin,
        }
    }

    /// Whether an observation with this visible fraction triggers the reveal
    pub fn is_crossed(&self, ratio: f64, is_intersecting: bool) -> bool {
        is_intersecting && ratio >= self.threshold
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::new(
            DEFAULT_REVEAL_THRESHOLD,
            Margins {
                bottom: DEFAULT_BOTTOM_MARGIN_PX,
                ..Margins::default()
            },
        )
    }
}

/// Visible fraction of `target` inside `viewport` adjusted by `margin`
///
/// Zero-area targets count as fully visible when they touch the adjusted
/// viewport, matching the observer's behavior.
pub fn intersection_ratio(target: Rect, viewport: Rect, margin: Margins) -> f64 {
    let root = margin.apply(viewport);

    let left = target.x.max(root.x);
    let top = target.y.max(root.y);
    let right = target.right().min(root.right());
    let bottom = target.bottom().min(root.bottom());

    if right < left || bottom < top {
        return 0.0;
    }

    let target_area = target.area();
    if target_area == 0.0 {
        return 1.0;
    }

    ((right - left) * (bottom - top) / target_area).clamp(0.0, 1.0)
}

/// Reveal state of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }

    /// Inline style for the element in this state
    pub fn style(&self) -> String {
        match self {
            RevealState::Hidden => format!(
                "opacity: 0; transform: translateY({HIDDEN_OFFSET_PX}px); transition: {REVEAL_TRANSITION};"
            ),
            RevealState::Revealed => {
                format!("opacity: 1; transform: translateY(0); transition: {REVEAL_TRANSITION};")
            }
        }
    }
}

/// Tracks reveal state for a set of observed elements
#[derive(Debug, Clone)]
pub struct VisibilityAnimator<K> {
    options: RevealOptions,
    states: HashMap<K, RevealState>,
}

impl<K: Eq + Hash> VisibilityAnimator<K> {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            states: HashMap::new(),
        }
    }

    pub fn options(&self) -> RevealOptions {
        self.options
    }

    /// Start watching elements; each starts hidden
    ///
    /// Re-observing an element keeps its current state.
    pub fn observe(&mut self, elements: impl IntoIterator<Item = K>) {
        for key in elements {
            self.states.entry(key).or_default();
        }
    }

    /// Feed one observer entry
    ///
    /// Returns `true` only on the observation that reveals the element.
    pub fn on_intersection(&mut self, key: &K, ratio: f64, is_intersecting: bool) -> bool {
        let Some(state) = self.states.get_mut(key) else {
            return false;
        };

        if state.is_revealed() || !self.options.is_crossed(ratio, is_intersecting) {
            return false;
        }

        *state = RevealState::Revealed;
        true
    }

    /// Current state, `None` for elements that were never observed
    pub fn state(&self, key: &K) -> Option<RevealState> {
        self.states.get(key).copied()
    }

    pub fn observed_count(&self) -> usize {
        self.states.len()
    }

    /// Whether every observed element has been revealed
    pub fn is_complete(&self) -> bool {
        self.states.values().all(RevealState::is_revealed)
    }
}

impl<K: Eq + Hash> Default for VisibilityAnimator<K> {
    fn default() -> Self {
        Self::new(RevealOptions::default())
    }
}
