//! Error types for the hebrew_date crate.

/// Error type for all fallible conversions in the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The cleared input did not split into 3 or 4 tokens.
    #[error("Unrecognized date format: {input:?} ({tokens} tokens, expected 3 or 4)")]
    MalformedInput {
        /// Input after clearing non-Hebrew characters.
        input: String,
        /// Number of space-separated tokens found.
        tokens: usize,
    },

    /// The month token is not a known month spelling.
    #[error("Unknown month name: {0:?}")]
    UnknownMonth(String),

    /// Month number outside 1..=13.
    #[error("Invalid Hebrew month number: {0} (must be 1-13)")]
    InvalidMonthNumber(u8),

    /// The Gregorian triple has no serial day number.
    #[error("Invalid Gregorian date {day}/{month}/{year}")]
    InvalidGregorianDate { day: u8, month: u8, year: i32 },

    /// The Hebrew triple has no serial day number.
    #[error("Invalid Hebrew date {day}/{month}/{year}")]
    InvalidHebrewDate { day: u32, month: u8, year: u32 },

    /// The formatter only renders years 1..=9999.
    #[error("Hebrew year out of range: {0} (must be 1-9999)")]
    HebrewYearOutOfRange(u32),

    /// Format flags carry bits the formatter does not know.
    #[error("Unknown format flag bits: {0:#x}")]
    UnknownFormatFlags(u32),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConvertError>;
