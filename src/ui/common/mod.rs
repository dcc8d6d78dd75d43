//! Common reusable UI components

pub mod message;

pub use message::{ErrorMessage, SuccessMessage};
