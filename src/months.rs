//! Month-name lookup.
//!
//! Keys hold only Hebrew letters and single spaces, i.e. the shape a month
//! token has after normalization. Matching is exact.

use crate::types::HebrewMonth;

/// Every accepted month spelling, including variants and two-word forms.
pub const MONTH_NAMES: [(&str, HebrewMonth); 24] = [
    ("תשרי", HebrewMonth::Tishrei),
    ("חשוון", HebrewMonth::Cheshvan),
    ("חשון", HebrewMonth::Cheshvan),
    ("מר חשוון", HebrewMonth::Cheshvan),
    ("מר חשון", HebrewMonth::Cheshvan),
    ("מרחשוון", HebrewMonth::Cheshvan),
    ("מרחשון", HebrewMonth::Cheshvan),
    ("כסליו", HebrewMonth::Kislev),
    ("כסלו", HebrewMonth::Kislev),
    ("טבת", HebrewMonth::Tevet),
    ("שבט", HebrewMonth::Shevat),
    ("אדר", HebrewMonth::AdarI),
    ("אדר א", HebrewMonth::AdarI),
    ("אדרא", HebrewMonth::AdarI),
    ("אדר ב", HebrewMonth::AdarII),
    ("אדרב", HebrewMonth::AdarII),
    ("ניסן", HebrewMonth::Nisan),
    ("אייר", HebrewMonth::Iyar),
    ("איר", HebrewMonth::Iyar),
    ("סיוון", HebrewMonth::Sivan),
    ("סיון", HebrewMonth::Sivan),
    ("תמוז", HebrewMonth::Tammuz),
    ("אב", HebrewMonth::Av),
    ("אלול", HebrewMonth::Elul),
];

/// Looks up a normalized month token.
pub fn month_from_name(name: &str) -> Option<HebrewMonth> {
    MONTH_NAMES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, month)| *month)
}
