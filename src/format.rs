//! Renders Hebrew dates as "<day> <month> <year>" strings.

use crate::calendar::is_hebrew_leap_year;
use crate::consts::{ALAFIM, GERESH, GERSHAYIM, MAX_HEBREW_DAY, MAX_HEBREW_YEAR};
use crate::encoding::{utf8_to_windows_1255, windows_1255_to_utf8};
use crate::error::{ConvertError, Result};
use crate::gematria::{number_to_gematria, value_letter};
use crate::types::{HebrewDate, HebrewMonth};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

bitflags::bitflags! {
    /// Punctuation and spelling options for rendered dates.
    ///
    /// The bit values match the options long used by Hebrew date formatters,
    /// so stored integer flags keep their meaning.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FormatFlags: u32 {
        /// Apostrophe after the thousands letter: ה'תשפד
        const ADD_ALAFIM_GERESH = 2;
        /// The word "אלפים" after the thousands letter: ה אלפים תשפד
        const ADD_ALAFIM = 4;
        /// Geresh after a single letter, gershayim before the last of several: ט"ו
        const ADD_GERESHAYIM = 8;
    }
}

impl FormatFlags {
    /// Interprets an integer bitmask, rejecting unknown bits.
    ///
    /// # Errors
    /// Returns `ConvertError::UnknownFormatFlags` with the offending bits.
    pub fn from_legacy(bits: u32) -> Result<Self> {
        Self::from_bits(bits)
            .ok_or_else(|| ConvertError::UnknownFormatFlags(bits & !Self::all().bits()))
    }
}

/// Month name as rendered for `year`: Adar is split only in leap years.
fn month_name(month: HebrewMonth, year: u32) -> Cow<'static, str> {
    match (month, is_hebrew_leap_year(year)) {
        (HebrewMonth::AdarI, true) => Cow::Borrowed("אדר א'"),
        (HebrewMonth::AdarII, true) => Cow::Borrowed("אדר ב'"),
        (HebrewMonth::AdarI | HebrewMonth::AdarII, false) => Cow::Borrowed("אדר"),
        (month, _) => Cow::Owned(month.to_string()),
    }
}

/// Writes `n` (1..=9999) as Hebrew numeral letters.
fn push_numeral(out: &mut String, n: u32, flags: FormatFlags) {
    let thousands = n / 1000;
    if thousands > 0 {
        out.extend(value_letter(thousands));
        if flags.contains(FormatFlags::ADD_ALAFIM_GERESH) {
            out.push(GERESH);
        }
        if flags.contains(FormatFlags::ADD_ALAFIM) {
            out.push(' ');
            out.push_str(ALAFIM);
            out.push(' ');
        }
    }

    let letters = number_to_gematria(n);
    if flags.contains(FormatFlags::ADD_GERESHAYIM) {
        let mut chars = letters.chars();
        match (chars.next_back(), chars.as_str()) {
            (None, _) => {}
            (Some(last), "") => {
                out.push(last);
                out.push(GERESH);
            }
            (Some(last), head) => {
                out.push_str(head);
                out.push(GERSHAYIM);
                out.push(last);
            }
        }
    } else {
        out.push_str(&letters);
    }
}

fn render(date: &HebrewDate, flags: FormatFlags) -> Result<String> {
    if date.year == 0 || date.year > MAX_HEBREW_YEAR {
        return Err(ConvertError::HebrewYearOutOfRange(date.year));
    }
    if date.day == 0 || date.day > MAX_HEBREW_DAY {
        return Err(ConvertError::InvalidHebrewDate {
            day: u32::from(date.day),
            month: date.month.number(),
            year: date.year,
        });
    }

    let mut out = String::new();
    push_numeral(&mut out, u32::from(date.day), flags);
    out.push(' ');
    out.push_str(&month_name(date.month, date.year));
    out.push(' ');
    push_numeral(&mut out, date.year, flags);
    Ok(out)
}

/// Renders `date` in Windows-1255, the encoding legacy formatters emit.
///
/// # Errors
/// Returns `ConvertError::HebrewYearOutOfRange` outside years 1..=9999 and
/// `ConvertError::InvalidHebrewDate` for a day outside 1..=30.
pub fn format_hebrew_windows_1255(date: &HebrewDate, flags: FormatFlags) -> Result<Vec<u8>> {
    render(date, flags).map(|text| utf8_to_windows_1255(&text))
}

/// Renders `date` as Unicode text, e.g. `ה אייר התשח`.
///
/// # Errors
/// Same as [`format_hebrew_windows_1255`].
pub fn format_hebrew(date: &HebrewDate, flags: FormatFlags) -> Result<String> {
    format_hebrew_windows_1255(date, flags).map(|bytes| windows_1255_to_utf8(&bytes))
}
