use thiserror::Error;

/// Errors that can occur during tunecredit core operations.
///
/// Parsing a title never fails; these only surface while building a parser
/// or while decoding serialized records.
#[derive(Debug, Error)]
pub enum CreditError {
    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),

    /// A serialized version tag was empty. Absence of a tag is spelled "Original".
    #[error("version tag is empty; use \"Original\" for untagged tracks")]
    EmptyVersionTag,
}

/// Result type alias for tunecredit operations.
pub type Result<T> = std::result::Result<T, CreditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = CreditError::EmptyVersionTag;
        assert!(err.to_string().contains("Original"));

        let err = CreditError::from(regex::Regex::new("(").unwrap_err());
        assert!(err.to_string().starts_with("regex compilation error"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CreditError>();
    }
}
