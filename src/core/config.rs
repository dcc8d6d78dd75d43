//! Page host configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Canonical URL used when `SITE_URL` is not set
pub const DEFAULT_SITE_URL: &str = "https://aprendeaprogramar.dev/";

/// Page host configuration loaded from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Public URL of the landing page, used for canonical and Open Graph tags
    /// Example: https://aprendeaprogramar.dev/
    pub site_url: Option<String>,

    /// Google Analytics measurement id
    /// Example: G-XXXXXXXXXX
    pub gtag_id: Option<String>,

    /// Facebook Pixel id
    pub fb_pixel_id: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    /// Blank values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let read_tag_id = |key: &str| {
            let value = read(key)?;
            if is_valid_tag_id(&value) {
                Some(value)
            } else {
                tracing::warn!(key, "ignoring malformed analytics id");
                None
            }
        };

        Self {
            site_url: read("SITE_URL"),
            gtag_id: read_tag_id("GTAG_ID"),
            fb_pixel_id: read_tag_id("FB_PIXEL_ID"),
        }
    }

    /// Canonical URL, falling back to [`DEFAULT_SITE_URL`]
    pub fn site_url(&self) -> &str {
        self.site_url.as_deref().unwrap_or(DEFAULT_SITE_URL)
    }

    /// Check if Google Analytics is configured
    pub fn has_gtag(&self) -> bool {
        self.gtag_id.is_some()
    }

    /// Check if the Facebook Pixel is configured
    pub fn has_fb_pixel(&self) -> bool {
        self.fb_pixel_id.is_some()
    }
}

/// Analytics ids end up inside inline scripts, so only plain tokens pass
pub fn is_valid_tag_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
