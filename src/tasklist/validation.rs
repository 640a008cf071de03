//! Task text validation.
//!
//! Valid task text:
//! - Is trimmed of surrounding whitespace before any check
//! - Is not empty after trimming
//! - Is at most [`MAX_TEXT_LEN`] characters after trimming
//!
//! Both `add` and `edit` run text through [`validate_text`] before touching the store,
//! so a failed validation never mutates anything.

/// Maximum task length, counted in characters (not bytes).
pub const MAX_TEXT_LEN: usize = 100;

/// Validates task text and returns the trimmed form that should be stored.
///
/// # Examples
/// ```
/// use tasklist::validation::{validate_text, ValidationError};
///
/// assert_eq!(validate_text("  Buy milk ").unwrap(), "Buy milk");
/// assert_eq!(validate_text("   "), Err(ValidationError::Empty));
/// assert!(validate_text(&"x".repeat(101)).is_err());
/// ```
pub fn validate_text(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let len = trimmed.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong { len });
    }

    Ok(trimmed.to_string())
}

/// Error type for task text validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Text is empty or whitespace only
    Empty,
    /// Text exceeds [`MAX_TEXT_LEN`] characters after trimming
    TooLong { len: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "task text cannot be empty"),
            ValidationError::TooLong { len } => write!(
                f,
                "task text cannot exceed {} characters (got {})",
                MAX_TEXT_LEN, len
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_text() {
        assert_eq!(validate_text("Buy milk").unwrap(), "Buy milk");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(validate_text("\t Buy milk \n").unwrap(), "Buy milk");
    }

    #[test]
    fn test_keeps_inner_whitespace() {
        assert_eq!(validate_text(" a  b ").unwrap(), "a  b");
    }

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(validate_text(""), Err(ValidationError::Empty));
    }

    #[test]
    fn test_whitespace_only_is_rejected() {
        assert_eq!(validate_text("   "), Err(ValidationError::Empty));
        assert_eq!(validate_text("\n\t"), Err(ValidationError::Empty));
    }

    #[test]
    fn test_exactly_max_len_is_accepted() {
        let text = "a".repeat(MAX_TEXT_LEN);
        assert_eq!(validate_text(&text).unwrap(), text);
    }

    #[test]
    fn test_one_over_max_len_is_rejected() {
        let text = "a".repeat(MAX_TEXT_LEN + 1);
        assert_eq!(
            validate_text(&text),
            Err(ValidationError::TooLong { len: 101 })
        );
    }

    #[test]
    fn test_length_is_measured_after_trim() {
        let text = format!("  {}  ", "a".repeat(MAX_TEXT_LEN));
        assert!(validate_text(&text).is_ok());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 100 three-byte characters
        let text = "学".repeat(MAX_TEXT_LEN);
        assert!(validate_text(&text).is_ok());
        let text = "学".repeat(MAX_TEXT_LEN + 1);
        assert!(matches!(
            validate_text(&text),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Empty.to_string(),
            "task text cannot be empty"
        );
        assert_eq!(
            ValidationError::TooLong { len: 120 }.to_string(),
            "task text cannot exceed 100 characters (got 120)"
        );
    }
}
