//! In-memory form port with a manual clock, for driving the lifecycle in tests

use std::collections::BTreeMap;

use super::submission::{FormMessage, FormPort, SubmissionController, TimerHandle};
use super::validation::InputCue;

#[derive(Debug, Default)]
pub struct RecordingPort {
    pub now_ms: u64,
    pub label: String,
    pub background: String,
    pub enabled: bool,
    pub cue: InputCue,
    pub message: Option<FormMessage>,
    pub input: String,
    /// Pending timers and the time they are due
    pub scheduled: BTreeMap<TimerHandle, u64>,
    pub cancelled: Vec<TimerHandle>,
    pub tracked: Vec<(String, serde_json::Value)>,
}

impl RecordingPort {
    /// Earliest pending timer due at or before `until_ms`
    fn next_due(&self, until_ms: u64) -> Option<(TimerHandle, u64)> {
        self.scheduled
            .iter()
            .filter(|&(_, &due)| due <= until_ms)
            .min_by_key(|&(handle, &due)| (due, *handle))
            .map(|(&handle, &due)| (handle, due))
    }
}

impl FormPort for RecordingPort {
    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn set_background(&mut self, background: &str) {
        self.background = background.to_string();
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn set_input_cue(&mut self, cue: InputCue) {
        self.cue = cue;
    }

    fn show_message(&mut self, message: Option<FormMessage>) {
        self.message = message;
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn schedule(&mut self, handle: TimerHandle, delay_ms: u64) {
        self.scheduled.insert(handle, self.now_ms + delay_ms);
    }

    fn cancel(&mut self, handle: TimerHandle) {
        let pending = self.scheduled.remove(&handle);
        assert!(pending.is_some(), "cancelled {handle:?}, which was not pending");
        self.cancelled.push(handle);
    }

    fn track(&mut self, event: &str, data: serde_json::Value) {
        self.tracked.push((event.to_string(), data));
    }
}

/// Move the clock to `until_ms`, firing due timers in expiry order
pub fn advance_to(ctrl: &mut SubmissionController<RecordingPort>, until_ms: u64) {
    while let Some((handle, due)) = ctrl.port().next_due(until_ms) {
        let port = ctrl.port_mut();
        port.scheduled.remove(&handle);
        port.now_ms = due;
        ctrl.on_timer(handle);
    }
    ctrl.port_mut().now_ms = until_ms;
}
