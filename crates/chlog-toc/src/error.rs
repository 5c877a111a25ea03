//! Heading filter construction errors.

/// Error returned when a [`HeadingFilter`](crate::HeadingFilter) cannot be built.
#[derive(Debug, thiserror::Error)]
pub enum TocError {
    /// The version pattern is not a valid regular expression.
    #[error("Invalid version pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// The heading level range is empty or outside `1..=6`.
    #[error("Invalid heading levels: {min}..={max} (expected 1 <= min <= max <= 6)")]
    InvalidLevels {
        /// Requested lowest heading level.
        min: u8,
        /// Requested highest heading level.
        max: u8,
    },
}
