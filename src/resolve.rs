use crate::consts::MILLENNIUM_OFFSET;
use crate::error::{ConvertError, Result};
use crate::gematria::gematria_to_number;
use crate::months::month_from_name;
use crate::types::{DateParts, NumericDate};
use tracing::debug;

/// Turns day, month and year tokens into numbers.
///
/// The year gains the implied millennium (5000). Leap-year validity of the
/// month is left to the calendar.
///
/// # Errors
/// Returns `ConvertError::UnknownMonth` if `month` is not in the month table.
pub fn date_parts_as_numbers(day: &str, month: &str, year: &str) -> Result<NumericDate> {
    let month =
        month_from_name(month).ok_or_else(|| ConvertError::UnknownMonth(month.to_owned()))?;

    let date = NumericDate::new(
        gematria_to_number(day),
        month.number(),
        MILLENNIUM_OFFSET.saturating_add(gematria_to_number(year)),
    );
    debug!(%date, "resolved hebrew date parts");
    Ok(date)
}

impl DateParts {
    /// Resolves these tokens with [`date_parts_as_numbers`].
    ///
    /// # Errors
    /// Returns `ConvertError::UnknownMonth` for an unrecognized month token.
    pub fn to_numbers(&self) -> Result<NumericDate> {
        date_parts_as_numbers(&self.day, &self.month, &self.year)
    }
}
