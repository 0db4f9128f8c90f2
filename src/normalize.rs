//! Splits a free-form Hebrew date string into day, month and year tokens.

use crate::consts::{FIRST_LETTER, LAST_LETTER, MONTH_PREFIX, TOKEN_SEPARATOR, YEAR_PREFIX};
use crate::error::{ConvertError, Result};
use crate::types::DateParts;
use tracing::debug;

/// Keeps Hebrew letters and spaces only, then trims.
///
/// Double spaces are replaced in a single left-to-right pass, so a run of
/// three spaces still leaves two behind (and an empty token after splitting).
pub fn clear(input: &str) -> String {
    let kept: String = input
        .chars()
        .filter(|c| *c == TOKEN_SEPARATOR || (FIRST_LETTER..=LAST_LETTER).contains(c))
        .collect();

    kept.replace("  ", " ").trim().to_owned()
}

/// Drops `prefix` if it is the first character of `token`.
fn strip_leading(token: &str, prefix: char) -> &str {
    token.strip_prefix(prefix).unwrap_or(token)
}

/// Extracts day, month and year tokens from a Hebrew date string.
///
/// Three tokens read as `day month year`, four as `day month month year`
/// (two-word months such as "אדר ב"). A leading ב is removed from the month.
/// With `remove_year_prefix` a leading ה is removed from the year; pass
/// `false` when that letter is a real numeral rather than the thousands mark.
///
/// # Errors
/// Returns `ConvertError::MalformedInput` for any other token count.
pub fn get_date_parts(input: &str, remove_year_prefix: bool) -> Result<DateParts> {
    let cleared = clear(input);
    let tokens: Vec<&str> = cleared.split(TOKEN_SEPARATOR).collect();
    debug!(input, cleared = %cleared, tokens = tokens.len(), "split hebrew date");

    let (day, month, year) = match tokens.as_slice() {
        [day, month, year] => (*day, (*month).to_owned(), *year),
        [day, first, second, year] => (*day, format!("{first} {second}"), *year),
        _ => {
            return Err(ConvertError::MalformedInput {
                input: cleared.clone(),
                tokens: tokens.len(),
            });
        }
    };

    let month = strip_leading(&month, MONTH_PREFIX).to_owned();
    let year = if remove_year_prefix {
        strip_leading(year, YEAR_PREFIX)
    } else {
        year
    };

    Ok(DateParts {
        day: day.to_owned(),
        month,
        year: year.to_owned(),
    })
}
