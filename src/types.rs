use crate::consts::MAX_HEBREW_MONTH;
use crate::error::ConvertError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A month of the Hebrew calendar, numbered from Tishrei.
///
/// `AdarI` and `AdarII` are distinct months only in leap years. In a common
/// year the calendar reads either number as the single Adar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum HebrewMonth {
    #[display(fmt = "תשרי")]
    Tishrei = 1,
    #[display(fmt = "חשון")]
    Cheshvan = 2,
    #[display(fmt = "כסלו")]
    Kislev = 3,
    #[display(fmt = "טבת")]
    Tevet = 4,
    #[display(fmt = "שבט")]
    Shevat = 5,
    #[display(fmt = "אדר א")]
    AdarI = 6,
    #[display(fmt = "אדר ב")]
    AdarII = 7,
    #[display(fmt = "ניסן")]
    Nisan = 8,
    #[display(fmt = "אייר")]
    Iyar = 9,
    #[display(fmt = "סיון")]
    Sivan = 10,
    #[display(fmt = "תמוז")]
    Tammuz = 11,
    #[display(fmt = "אב")]
    Av = 12,
    #[display(fmt = "אלול")]
    Elul = 13,
}

impl HebrewMonth {
    /// All months in calendar order.
    pub const ALL: [Self; MAX_HEBREW_MONTH as usize] = [
        Self::Tishrei,
        Self::Cheshvan,
        Self::Kislev,
        Self::Tevet,
        Self::Shevat,
        Self::AdarI,
        Self::AdarII,
        Self::Nisan,
        Self::Iyar,
        Self::Sivan,
        Self::Tammuz,
        Self::Av,
        Self::Elul,
    ];

    /// Month number, 1 (Tishrei) through 13 (Elul)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Looks up a month by its number.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidMonthNumber` outside 1..=13.
    pub fn from_number(value: u8) -> Result<Self, ConvertError> {
        value
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(usize::from(i)).copied())
            .ok_or(ConvertError::InvalidMonthNumber(value))
    }

    /// True for the two months that only exist separately in leap years.
    pub const fn is_leap_only(self) -> bool {
        matches!(self, Self::AdarI | Self::AdarII)
    }
}

impl TryFrom<u8> for HebrewMonth {
    type Error = ConvertError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<HebrewMonth> for u8 {
    fn from(month: HebrewMonth) -> Self {
        month.number()
    }
}

/// Raw tokens split out of a Hebrew date string.
///
/// `day` and `year` are gematria numerals; `month` is a month-table key with
/// the "in/at" prefix already removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateParts {
    pub day: String,
    pub month: String,
    pub year: String,
}

/// Numeric Hebrew date as resolved from a [`DateParts`].
///
/// The year includes the implied millennium. [`NumericDate::INVALID`] is the
/// all-zero triple that a failed resolution used to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[display(fmt = "{day}/{month}/{year}")]
pub struct NumericDate {
    pub day: u32,
    pub month: u8,
    pub year: u32,
}

impl NumericDate {
    /// All-zero triple, never a real calendar date
    pub const INVALID: Self = Self {
        day: 0,
        month: 0,
        year: 0,
    };

    pub const fn new(day: u32, month: u8, year: u32) -> Self {
        Self { day, month, year }
    }

    pub const fn is_invalid(&self) -> bool {
        self.day == 0 && self.month == 0 && self.year == 0
    }

    /// The month as a typed value, if it is in range
    pub fn hebrew_month(&self) -> Option<HebrewMonth> {
        HebrewMonth::from_number(self.month).ok()
    }
}

/// A proleptic Gregorian date. Years before 1 AD are negative, with no year 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[display(fmt = "{day}/{month}/{year}")]
pub struct GregorianDate {
    pub day: u8,
    pub month: u8,
    pub year: i32,
}

impl GregorianDate {
    pub const fn new(day: u8, month: u8, year: i32) -> Self {
        Self { day, month, year }
    }
}

impl From<(u8, u8, i32)> for GregorianDate {
    fn from((day, month, year): (u8, u8, i32)) -> Self {
        Self::new(day, month, year)
    }
}

impl From<GregorianDate> for (u8, u8, i32) {
    fn from(date: GregorianDate) -> Self {
        (date.day, date.month, date.year)
    }
}

/// A Hebrew calendar date produced by the calendar arithmetic.
///
/// Adar of a common year is reported as [`HebrewMonth::AdarII`], matching the
/// month number the calendar uses for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HebrewDate {
    pub year: u32,
    pub month: HebrewMonth,
    pub day: u8,
}

impl From<HebrewDate> for NumericDate {
    fn from(date: HebrewDate) -> Self {
        Self::new(u32::from(date.day), date.month.number(), date.year)
    }
}
