//! Hebrew numerals (gematria).
//!
//! Decoding is a plain additive sum: letter order does not matter and any
//! character outside the table contributes nothing.

use crate::consts::GEMATRIA;

/// Numeral value of a single letter, `None` for anything outside the 22 consonants.
pub fn letter_value(letter: char) -> Option<u32> {
    GEMATRIA
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, value)| *value)
}

/// Letter for a value in 1..=9, 10..=90 by tens or 100..=400 by hundreds.
pub(crate) fn value_letter(value: u32) -> Option<char> {
    GEMATRIA
        .iter()
        .find(|(_, v)| *v == value)
        .map(|(letter, _)| *letter)
}

/// Sums the gematria value of every recognized letter in `text`.
///
/// Never fails: empty input or input without a single known letter yields 0.
pub fn gematria_to_number(text: &str) -> u32 {
    text.chars()
        .filter_map(letter_value)
        .fold(0, u32::saturating_add)
}

/// Spells `n` (below 1000) as Hebrew numeral letters.
///
/// Hundreds above 400 repeat tav, and 15/16 are written ט״ו / ט״ז rather than
/// spelling a divine name. Thousands are the caller's concern.
pub fn number_to_gematria(n: u32) -> String {
    let mut out = String::new();
    let mut rest = n % 1000;

    while rest >= 400 {
        out.push('ת');
        rest -= 400;
    }
    if rest >= 100 {
        out.extend(value_letter(rest / 100 * 100));
        rest %= 100;
    }

    if rest == 15 || rest == 16 {
        out.push('ט');
        out.extend(value_letter(rest - 9));
    } else {
        if rest >= 10 {
            out.extend(value_letter(rest / 10 * 10));
            rest %= 10;
        }
        if rest > 0 {
            out.extend(value_letter(rest));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(gematria_to_number(""), 0);
    }

    #[test]
    fn test_single_letters() {
        assert_eq!(gematria_to_number("א"), 1);
        assert_eq!(gematria_to_number("י"), 10);
        assert_eq!(gematria_to_number("ת"), 400);
    }

    #[test]
    fn test_sums() {
        assert_eq!(gematria_to_number("יה"), 15);
        assert_eq!(gematria_to_number("טו"), 15);
        assert_eq!(gematria_to_number("תשעז"), 777);
        assert_eq!(gematria_to_number("תשח"), 708);
    }

    #[test]
    fn test_order_does_not_matter() {
        assert_eq!(gematria_to_number("זעשת"), gematria_to_number("תשעז"));
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        assert_eq!(gematria_to_number("abc"), 0);
        assert_eq!(gematria_to_number("ת\"שע'ז "), 777);
        // final forms are not numerals here
        assert_eq!(gematria_to_number("ךםןףץ"), 0);
    }

    #[test]
    fn test_table_is_complete() {
        let total: u32 = GEMATRIA.iter().map(|(_, v)| v).sum();
        assert_eq!(GEMATRIA.len(), 22);
        assert_eq!(total, 1495);
        assert!(GEMATRIA.iter().all(|(_, v)| *v > 0));
    }

    #[test]
    fn test_number_to_gematria() {
        struct TestCase {
            n: u32,
            expected: &'static str,
        }

        let cases = [
            TestCase { n: 0, expected: "" },
            TestCase { n: 1, expected: "א" },
            TestCase { n: 15, expected: "טו" },
            TestCase { n: 16, expected: "טז" },
            TestCase { n: 17, expected: "יז" },
            TestCase { n: 30, expected: "ל" },
            TestCase { n: 708, expected: "תשח" },
            TestCase { n: 784, expected: "תשפד" },
            TestCase { n: 915, expected: "תתקטו" },
            TestCase { n: 5784, expected: "תשפד" },
        ];

        for case in &cases {
            assert_eq!(
                number_to_gematria(case.n),
                case.expected,
                "number_to_gematria({})",
                case.n
            );
        }
    }
}
