//! Input rules applied by callers before they reach the store.

use thiserror::Error;

pub const MAX_POST_LENGTH: usize = 280;
pub const MAX_BIO_LENGTH: usize = 160;
pub const MAX_DISPLAY_NAME_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("post content may not be empty")]
    EmptyContent,
    #[error("post content is {len} characters; the limit is {max}")]
    ContentTooLong { len: usize, max: usize },
    #[error("display name is {len} characters; the limit is {max}")]
    DisplayNameTooLong { len: usize, max: usize },
    #[error("bio is {len} characters; the limit is {max}")]
    BioTooLong { len: usize, max: usize },
}

/// Trims post content and checks it is non-empty and within the length limit.
pub fn post_content(raw: &str) -> Result<String, ValidationError> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    let len = content.chars().count();
    if len > MAX_POST_LENGTH {
        return Err(ValidationError::ContentTooLong {
            len,
            max: MAX_POST_LENGTH,
        });
    }
    Ok(content.to_string())
}

pub fn display_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    let len = name.chars().count();
    if len > MAX_DISPLAY_NAME_LENGTH {
        return Err(ValidationError::DisplayNameTooLong {
            len,
            max: MAX_DISPLAY_NAME_LENGTH,
        });
    }
    Ok(name.to_string())
}

pub fn bio(raw: &str) -> Result<String, ValidationError> {
    let bio = raw.trim();
    let len = bio.chars().count();
    if len > MAX_BIO_LENGTH {
        return Err(ValidationError::BioTooLong {
            len,
            max: MAX_BIO_LENGTH,
        });
    }
    Ok(bio.to_string())
}

/// Characters left before `text` hits `max`. Negative once over the limit.
pub fn remaining(text: &str, max: usize) -> i64 {
    max as i64 - text.chars().count() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_trimmed() {
        assert_eq!(post_content("  hello \n").as_deref(), Ok("hello"));
    }

    #[test]
    fn blank_content_is_rejected() {
        assert_eq!(post_content("   \t"), Err(ValidationError::EmptyContent));
    }

    #[test]
    fn content_limit_counts_characters() {
        let at_limit = "あ".repeat(MAX_POST_LENGTH);
        assert!(post_content(&at_limit).is_ok());
        let over = "a".repeat(MAX_POST_LENGTH + 1);
        assert_eq!(
            post_content(&over),
            Err(ValidationError::ContentTooLong {
                len: MAX_POST_LENGTH + 1,
                max: MAX_POST_LENGTH
            })
        );
    }

    #[test]
    fn surrounding_whitespace_does_not_count_toward_limit() {
        let body = "a".repeat(MAX_POST_LENGTH);
        let padded = format!("   {body}\n\n");
        assert!(padded.chars().count() > MAX_POST_LENGTH);
        assert_eq!(post_content(&padded), Ok(body));

        let inner = format!("{} {}", "a".repeat(140), "b".repeat(140));
        assert_eq!(
            post_content(&format!("  {inner}  ")),
            Err(ValidationError::ContentTooLong {
                len: MAX_POST_LENGTH + 1,
                max: MAX_POST_LENGTH
            })
        );
    }

    #[test]
    fn profile_limits() {
        assert!(display_name(&"n".repeat(MAX_DISPLAY_NAME_LENGTH)).is_ok());
        assert!(matches!(
            display_name(&"n".repeat(MAX_DISPLAY_NAME_LENGTH + 1)),
            Err(ValidationError::DisplayNameTooLong { .. })
        ));
        assert_eq!(bio("").as_deref(), Ok(""));
        assert!(matches!(
            bio(&"b".repeat(MAX_BIO_LENGTH + 1)),
            Err(ValidationError::BioTooLong { .. })
        ));
    }

    #[test]
    fn remaining_goes_negative() {
        assert_eq!(remaining("abc", 5), 2);
        assert_eq!(remaining("abcdef", 5), -1);
    }
}
