//! Analytics event fan-out
//!
//! Events go to whichever analytics hooks are installed (Google Analytics,
//! Facebook Pixel, ...). Tracking is best effort: every event is logged, hook
//! failures are logged and swallowed, and the caller never sees an error.

use serde_json::{Value, json};

/// Event emitted when a page section scrolls into view
pub const SECTION_VIEW_EVENT: &str = "section_view";

/// Visible fraction of a section that counts as a view
pub const SECTION_VIEW_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackingError {
    #[error("analytics hook `{0}` is not loaded")]
    Unavailable(String),

    #[error("analytics hook `{hook}` failed: {reason}")]
    HookFailed { hook: String, reason: String },

    #[error("event payload could not be encoded: {0}")]
    Encode(String),
}

/// A destination for tracked events
pub trait AnalyticsHook {
    /// Short name used in logs
    fn name(&self) -> &str;

    fn send(&self, event: &str, data: &Value) -> Result<(), TrackingError>;
}

/// Fans events out to every installed hook
#[derive(Default)]
pub struct Tracker {
    hooks: Vec<Box<dyn AnalyticsHook>>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hook(mut self, hook: impl AnalyticsHook + 'static) -> Self {
        self.add_hook(hook);
        self
    }

    pub fn add_hook(&mut self, hook: impl AnalyticsHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn hook_names(&self) -> Vec<&str> {
        self.hooks.iter().map(|hook| hook.name()).collect()
    }

    /// Record an event; returns how many hooks accepted it
    pub fn track_event(&self, name: &str, data: Value) -> usize {
        tracing::info!(event = name, data = %data, "event tracked");

        self.hooks
            .iter()
            .filter(|hook| match hook.send(name, &data) {
                Ok(()) => true,
                Err(TrackingError::Unavailable(_)) => false,
                Err(err) => {
                    tracing::warn!(hook = hook.name(), error = %err, "analytics hook failed");
                    false
                }
            })
            .count()
    }
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("hooks", &self.hook_names())
            .finish()
    }
}

/// Section name reported for a `<section>`: its first class
pub fn section_name(class_attr: &str) -> &str {
    class_attr.split_whitespace().next().unwrap_or_default()
}

/// Payload of a [`SECTION_VIEW_EVENT`]
pub fn section_view_payload(class_attr: &str) -> Value {
    json!({ "section": section_name(class_attr) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<(String, Value)>>>;

    struct RecordingHook {
        log: Log,
    }

    impl AnalyticsHook for RecordingHook {
        fn name(&self) -> &str {
            "recording"
        }

        fn send(&self, event: &str, data: &Value) -> Result<(), TrackingError> {
            self.log.borrow_mut().push((event.to_string(), data.clone()));
            Ok(())
        }
    }

    struct FailingHook;

    impl AnalyticsHook for FailingHook {
        fn name(&self) -> &str {
            "failing"
        }

        fn send(&self, _event: &str, _data: &Value) -> Result<(), TrackingError> {
            Err(TrackingError::HookFailed {
                hook: "failing".into(),
                reason: "boom".into(),
            })
        }
    }

    struct MissingHook;

    impl AnalyticsHook for MissingHook {
        fn name(&self) -> &str {
            "gtag"
        }

        fn send(&self, _event: &str, _data: &Value) -> Result<(), TrackingError> {
            Err(TrackingError::Unavailable("gtag".into()))
        }
    }

    #[test]
    fn test_no_hooks_is_a_noop() {
        let tracker = Tracker::new();
        assert_eq!(tracker.track_event("page_view", json!({})), 0);
    }

    #[test]
    fn test_event_reaches_every_hook() {
        let log: Log = Rc::default();
        let tracker = Tracker::new()
            .with_hook(RecordingHook { log: log.clone() })
            .with_hook(RecordingHook { log: log.clone() });

        let delivered = tracker.track_event("cta_click", json!({ "position": "hero" }));

        assert_eq!(delivered, 2);
        assert_eq!(log.borrow().len(), 2);
        assert_eq!(log.borrow()[0].0, "cta_click");
        assert_eq!(log.borrow()[0].1["position"], "hero");
    }

    #[test]
    fn test_failing_hook_does_not_stop_others() {
        let log: Log = Rc::default();
        let tracker = Tracker::new()
            .with_hook(FailingHook)
            .with_hook(MissingHook)
            .with_hook(RecordingHook { log: log.clone() });

        assert_eq!(tracker.track_event("x", Value::Null), 1);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(tracker.hook_names(), vec!["failing", "gtag", "recording"]);
    }

    #[test]
    fn test_section_name_is_first_class() {
        assert_eq!(section_name("hero section--dark"), "hero");
        assert_eq!(section_name("  faq  "), "faq");
        assert_eq!(section_name(""), "");
    }

    #[test]
    fn test_section_view_payload() {
        assert_eq!(
            section_view_payload("benefits grid"),
            json!({ "section": "benefits" })
        );
    }

    #[test]
    fn test_tracking_error_display() {
        let err = TrackingError::HookFailed {
            hook: "fbq".into(),
            reason: "not a function".into(),
        };
        assert_eq!(err.to_string(), "analytics hook `fbq` failed: not a function");
    }
}
