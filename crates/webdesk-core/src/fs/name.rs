//! Item naming rules.
//!
//! Every item name in the tree goes through [`validate_name`] before it is
//! stored: trimmed, NFC-composed, non-empty, and free of the path
//! separator. Sibling uniqueness is not checked here — that is the owning
//! directory's concern at registration time.

use crate::error::{CoreError, CoreResult};
use crate::nfc_string;

/// The path separator used throughout the tree.
pub const SEPARATOR: char = '/';

/// Validates a candidate item name and returns the canonical form.
///
/// The canonical form is trimmed of surrounding whitespace and normalised
/// to NFC so that decomposed Hangul/accented names compare equal to their
/// composed spellings.
///
/// # Errors
///
/// [`CoreError::InvalidName`] if the name is empty, whitespace-only, or
/// contains [`SEPARATOR`].
pub fn validate_name(raw: &str) -> CoreResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidName(raw.to_string()));
    }
    if trimmed.contains(SEPARATOR) {
        return Err(CoreError::InvalidName(raw.to_string()));
    }
    Ok(nfc_string(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_passes() {
        assert_eq!(validate_name("notes.txt").unwrap(), "notes.txt");
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(validate_name("  music  ").unwrap(), "music");
    }

    #[test]
    fn empty_name_rejected() {
        assert!(matches!(
            validate_name(""),
            Err(CoreError::InvalidName(_))
        ));
    }

    #[test]
    fn whitespace_only_rejected() {
        assert!(matches!(
            validate_name("   \t "),
            Err(CoreError::InvalidName(_))
        ));
    }

    #[test]
    fn separator_rejected() {
        assert!(matches!(
            validate_name("a/b"),
            Err(CoreError::InvalidName(_))
        ));
    }

    #[test]
    fn lone_separator_rejected() {
        assert!(matches!(
            validate_name("/"),
            Err(CoreError::InvalidName(_))
        ));
    }

    #[test]
    fn unicode_name_is_nfc_composed() {
        // "한" written as decomposed Jamo must normalise to the composed form.
        let decomposed = "\u{1112}\u{1161}\u{11ab}.txt";
        assert_eq!(validate_name(decomposed).unwrap(), "한.txt");
    }

    #[test]
    fn dot_names_allowed() {
        assert_eq!(validate_name(".env").unwrap(), ".env");
        assert_eq!(validate_name("..").unwrap(), "..");
    }
}
