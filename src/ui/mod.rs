pub mod accordion;
pub mod common;
pub mod debounce;
pub mod icon;
pub mod konami;
pub mod lead_form;
pub mod pages;
pub mod reveal;
pub mod smooth_scroll;
pub mod tracking;
pub mod viewport;

pub use accordion::{Accordion, FaqEntry};
pub use icon::{Icon, icons};
pub use konami::KonamiEasterEgg;
pub use lead_form::LeadForm;
pub use reveal::{Reveal, RevealContext, provide_reveal_context, use_reveal_context};
pub use smooth_scroll::AnchorLink;
pub use tracking::{SectionViewTracker, TrackingContext, provide_tracking, use_tracking};
pub use viewport::ViewportLogger;

/// Milliseconds since the Unix epoch, from the browser clock when available
pub fn now_ms() -> u64 {
    #[cfg(not(feature = "ssr"))]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(feature = "ssr")]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default()
    }
}
