//! Email validation for the lead form
//!
//! The check is deliberately shallow: one `@`, no whitespace, and a dot in the
//! domain with text on both sides. Anything stricter belongs to the mail
//! provider that eventually receives the address.

use serde::{Deserialize, Serialize};

/// Border color applied to a field that holds a well-formed address
pub const ACCEPT_BORDER: &str = "var(--color-accent-green)";

/// Border color applied to a field that holds a malformed address
pub const REJECT_BORDER: &str = "#FF4444";

/// Border color of an untouched or emptied field
pub const NEUTRAL_BORDER: &str = "rgba(255, 255, 255, 0.1)";

/// Result of checking the current contents of the email field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmailVerdict {
    /// Nothing but whitespace was typed
    Empty,
    /// Something was typed but it does not look like an address
    Invalid,
    /// Looks like `local@domain.tld`
    Valid,
}

impl EmailVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, EmailVerdict::Valid)
    }

    /// Visual cue the input field should show for this verdict
    pub fn cue(&self) -> InputCue {
        match self {
            EmailVerdict::Empty => InputCue::Neutral,
            EmailVerdict::Invalid => InputCue::Reject,
            EmailVerdict::Valid => InputCue::Accept,
        }
    }
}

/// Visual state of the email input border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputCue {
    #[default]
    Neutral,
    Reject,
    Accept,
}

impl InputCue {
    /// CSS color for the input border
    pub fn border_color(&self) -> &'static str {
        match self {
            InputCue::Neutral => NEUTRAL_BORDER,
            InputCue::Reject => REJECT_BORDER,
            InputCue::Accept => ACCEPT_BORDER,
        }
    }
}

/// Classify raw input text
///
/// Leading and trailing whitespace is ignored. Total over every string.
///
/// # Example
/// ```
/// # use leadpage::core::validation::{validate_email, EmailVerdict};
/// assert_eq!(validate_email("  "), EmailVerdict::Empty);
/// assert_eq!(validate_email("a@b"), EmailVerdict::Invalid);
/// assert_eq!(validate_email(" a@b.co "), EmailVerdict::Valid);
/// ```
pub fn validate_email(text: &str) -> EmailVerdict {
    let email = text.trim();

    if email.is_empty() {
        EmailVerdict::Empty
    } else if matches_address_pattern(email) {
        EmailVerdict::Valid
    } else {
        EmailVerdict::Invalid
    }
}

/// `[^\s@]+@[^\s@]+\.[^\s@]+`, anchored at both ends
fn matches_address_pattern(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Any dot with at least one character on each side will do.
    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_are_empty() {
        for input in ["", " ", "   ", "\t", "\n \t  "] {
            assert_eq!(validate_email(input), EmailVerdict::Empty, "{input:?}");
        }
    }

    #[test]
    fn test_well_formed_addresses_are_valid() {
        for input in [
            "a@b.co",
            "toni@example.com",
            "first.last+tag@mail.example.org",
            "x@y.z",
            "a@b.c.d",
            "a@.b.c",
            "ñandú@correo.es",
        ] {
            assert_eq!(validate_email(input), EmailVerdict::Valid, "{input:?}");
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(validate_email("  a@b.co\n"), EmailVerdict::Valid);
    }

    #[test]
    fn test_malformed_addresses_are_invalid() {
        for input in [
            "a",
            "a@",
            "@b.co",
            "a@b",
            "a@b.",
            "a@.b",
            "a@@b.co",
            "a@b@c.co",
            "a b@c.co",
            "a@b .co",
            "a@b.c o",
            ".",
            "@",
        ] {
            assert_eq!(validate_email(input), EmailVerdict::Invalid, "{input:?}");
        }
    }

    #[test]
    fn test_cue_follows_verdict() {
        assert_eq!(EmailVerdict::Empty.cue(), InputCue::Neutral);
        assert_eq!(EmailVerdict::Invalid.cue(), InputCue::Reject);
        assert_eq!(EmailVerdict::Valid.cue(), InputCue::Accept);
    }

    #[test]
    fn test_cue_border_colors() {
        assert_eq!(InputCue::Accept.border_color(), ACCEPT_BORDER);
        assert_eq!(InputCue::Reject.border_color(), REJECT_BORDER);
        assert_eq!(InputCue::Neutral.border_color(), NEUTRAL_BORDER);
        assert_eq!(InputCue::default(), InputCue::Neutral);
    }

    #[test]
    fn test_is_valid() {
        assert!(EmailVerdict::Valid.is_valid());
        assert!(!EmailVerdict::Invalid.is_valid());
        assert!(!EmailVerdict::Empty.is_valid());
    }
}
