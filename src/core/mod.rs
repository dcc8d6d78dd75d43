//! Landing page behavior, independent of any rendering surface

pub mod accordion;
#[cfg(feature = "ssr")]
pub mod config;
pub mod debounce;
pub mod konami;
pub mod rate_limiter;
pub mod reveal;
pub mod scroll;
pub mod submission;
pub mod tracking;
pub mod validation;
pub mod viewport;

#[cfg(test)]
mod testing;

pub use submission::{
    ButtonState, FormMessage, FormPort, FormTimings, SubmissionAttempt, SubmissionController,
    SubmitError, TimerHandle,
};
pub use validation::{EmailVerdict, InputCue, validate_email};
