//! Hebrew calendar dates written in Hebrew letters.
//!
//! Parses strings such as `ה' באייר תש"ח` (day and year in gematria, month by
//! name) into Gregorian dates, and renders Gregorian dates back as Hebrew text.
//!
//! ```
//! use hebrew_date::{FormatFlags, GregorianDate};
//!
//! let date = hebrew_date::to_gregorian("ה באייר תשח", true).unwrap();
//! assert_eq!(date, GregorianDate::new(14, 5, 1948));
//!
//! let text = hebrew_date::to_hebrew(14, 5, 1948, FormatFlags::ADD_GERESHAYIM).unwrap();
//! assert_eq!(text, "ה' אייר התש\"ח");
//! ```

mod calendar;
mod config;
mod consts;
mod encoding;
mod error;
mod format;
mod gematria;
mod months;
mod normalize;
mod prelude;
mod resolve;
mod types;

pub use calendar::{
    gregorian_to_jdn, hebrew_month_length, hebrew_to_jdn, hebrew_year_length,
    is_hebrew_leap_year, jdn_to_gregorian, jdn_to_hebrew,
};
pub use config::{ConverterConfig, Validation};
pub use consts::*;
pub use encoding::{utf8_to_windows_1255, windows_1255_to_utf8};
pub use error::{ConvertError, Result};
pub use format::{FormatFlags, format_hebrew, format_hebrew_windows_1255};
pub use gematria::{gematria_to_number, letter_value, number_to_gematria};
pub use months::{MONTH_NAMES, month_from_name};
pub use normalize::{clear, get_date_parts};
pub use resolve::date_parts_as_numbers;
pub use types::{DateParts, GregorianDate, HebrewDate, HebrewMonth, NumericDate};

use tracing::{debug, warn};

/// Converts between Hebrew date strings and Gregorian dates under one
/// [`ConverterConfig`].
///
/// Holds no state besides its configuration; a single instance can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HebrewDateConverter {
    config: ConverterConfig,
}

impl HebrewDateConverter {
    /// Creates a converter after validating `config`.
    ///
    /// # Errors
    /// Returns the error from [`ConverterConfig::validate`].
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub const fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Splits and resolves a Hebrew date string into numbers.
    ///
    /// # Errors
    /// `ConvertError::MalformedInput` or `ConvertError::UnknownMonth`.
    pub fn parse(&self, input: &str) -> Result<NumericDate> {
        get_date_parts(input, self.config.remove_year_prefix())?.to_numbers()
    }

    /// Converts a Hebrew date string to a Gregorian date.
    ///
    /// With [`Validation::PassThrough`] nothing fails: unresolvable input and
    /// dates the calendar rejects come back as the all-zero date.
    ///
    /// # Errors
    /// Under [`Validation::Strict`], the parse errors of [`Self::parse`] and
    /// `ConvertError::InvalidHebrewDate` when the calendar has no day for the
    /// resolved numbers (day 0, day above 30, ...).
    pub fn to_gregorian(&self, input: &str) -> Result<GregorianDate> {
        let date = match (self.parse(input), self.config.validation()) {
            (Ok(date), _) => date,
            (Err(err), Validation::Strict) => return Err(err),
            (Err(err), Validation::PassThrough) => {
                warn!(input, error = %err, "passing unresolved date to the calendar");
                NumericDate::INVALID
            }
        };
        self.numbers_to_gregorian(date)
    }

    /// Converts a resolved Hebrew date to a Gregorian date.
    ///
    /// # Errors
    /// Under [`Validation::Strict`], `ConvertError::InvalidHebrewDate` when the
    /// calendar has no day for `date`.
    pub fn numbers_to_gregorian(&self, date: NumericDate) -> Result<GregorianDate> {
        let gregorian = hebrew_to_jdn(date.year, date.month, date.day).and_then(|jdn| {
            debug!(%date, jdn, "hebrew date to day number");
            jdn_to_gregorian(jdn)
        });

        match (gregorian, self.config.validation()) {
            (Some(gregorian), _) => Ok(gregorian),
            (None, Validation::Strict) => Err(ConvertError::InvalidHebrewDate {
                day: date.day,
                month: date.month,
                year: date.year,
            }),
            (None, Validation::PassThrough) => Ok(GregorianDate::default()),
        }
    }

    /// Renders a Gregorian date as a Hebrew date string using the configured
    /// format flags.
    ///
    /// # Errors
    /// Same as [`to_hebrew_date`] and [`format_hebrew`].
    pub fn to_hebrew(&self, date: GregorianDate) -> Result<String> {
        let hebrew = to_hebrew_date(date)?;
        format_hebrew(&hebrew, self.config.format_flags())
    }
}

/// Converts a Hebrew date string with default settings and strict validation.
///
/// Pass `remove_year_prefix = false` when the year's leading ה is a numeral
/// (5) rather than the thousands mark.
///
/// # Errors
/// See [`HebrewDateConverter::to_gregorian`].
pub fn to_gregorian(input: &str, remove_year_prefix: bool) -> Result<GregorianDate> {
    let config = ConverterConfig::new().with_remove_year_prefix(remove_year_prefix);
    HebrewDateConverter { config }.to_gregorian(input)
}

/// Renders a Gregorian day, month and year as a Hebrew date string.
///
/// The Gregorian day is only range-checked (1..=31); 31 February rolls over
/// into March.
///
/// # Errors
/// `ConvertError::InvalidGregorianDate` for a date with no day number and
/// `ConvertError::HebrewYearOutOfRange` for dates before AM 1 or after AM 9999.
pub fn to_hebrew(day: u8, month: u8, year: i32, flags: FormatFlags) -> Result<String> {
    let date = to_hebrew_date(GregorianDate::new(day, month, year))?;
    format_hebrew(&date, flags)
}

/// Hebrew calendar date of a Gregorian date.
///
/// # Errors
/// `ConvertError::InvalidGregorianDate` for a date with no day number and
/// `ConvertError::HebrewYearOutOfRange` for dates before 1 Tishrei AM 1.
pub fn to_hebrew_date(date: GregorianDate) -> Result<HebrewDate> {
    let jdn = gregorian_to_jdn(date.year, date.month, date.day).ok_or(
        ConvertError::InvalidGregorianDate {
            day: date.day,
            month: date.month,
            year: date.year,
        },
    )?;
    debug!(%date, jdn, "gregorian date to day number");
    jdn_to_hebrew(jdn).ok_or(ConvertError::HebrewYearOutOfRange(0))
}
