/// First letter of the Hebrew alphabet (alef)
pub const FIRST_LETTER: char = 'א';
/// Last letter of the Hebrew alphabet (tav)
pub const LAST_LETTER: char = 'ת';

/// Gematria values of the 22 consonants, in alphabet order.
/// Final forms (ך ם ן ף ץ) are not part of the table.
pub const GEMATRIA: [(char, u32); 22] = [
    ('א', 1),
    ('ב', 2),
    ('ג', 3),
    ('ד', 4),
    ('ה', 5),
    ('ו', 6),
    ('ז', 7),
    ('ח', 8),
    ('ט', 9),
    ('י', 10),
    ('כ', 20),
    ('ל', 30),
    ('מ', 40),
    ('נ', 50),
    ('ס', 60),
    ('ע', 70),
    ('פ', 80),
    ('צ', 90),
    ('ק', 100),
    ('ר', 200),
    ('ש', 300),
    ('ת', 400),
];

/// "In/at" preposition attached to month names (בתשרי)
pub const MONTH_PREFIX: char = 'ב';
/// Thousands marker in front of a year (התשעז)
pub const YEAR_PREFIX: char = 'ה';
/// Millennium omitted by a three- or four-letter year
pub const MILLENNIUM_OFFSET: u32 = 5000;

/// Token separator after normalization
pub const TOKEN_SEPARATOR: char = ' ';
/// Geresh, written after a single-letter numeral
pub const GERESH: char = '\'';
/// Gershayim, written before the last letter of a multi-letter numeral
pub const GERSHAYIM: char = '"';
/// Word written after the thousands letter with `FormatFlags::ADD_ALAFIM`
pub const ALAFIM: &str = "אלפים";

/// Number of months in a leap year (Tishrei = 1 .. Elul = 13)
pub const MAX_HEBREW_MONTH: u8 = 13;
/// Largest day of a Hebrew month
pub const MAX_HEBREW_DAY: u8 = 30;
/// Largest year the formatter will render
pub const MAX_HEBREW_YEAR: u32 = 9999;

// --- Hebrew calendar arithmetic ---

/// Parts (halakim) per hour
pub(crate) const HALAKIM_PER_HOUR: i64 = 1080;
/// Parts per day
pub(crate) const HALAKIM_PER_DAY: i64 = 25920;
/// Mean synodic month: 29 days, 12 hours, 793 parts
pub(crate) const HALAKIM_PER_LUNAR_CYCLE: i64 = 29 * HALAKIM_PER_DAY + 13753;
/// 235 lunar months per 19-year cycle
pub(crate) const HALAKIM_PER_METONIC_CYCLE: i64 = HALAKIM_PER_LUNAR_CYCLE * (12 * 19 + 7);

/// Serial day number of 1 Tishrei AM 1, minus one
pub(crate) const HEBREW_SDN_OFFSET: i64 = 347_997;
/// Last serial day number the Hebrew conversion accepts
pub(crate) const HEBREW_SDN_MAX: i64 = 324_542_846;
/// Molad of Tishrei AM 1 in parts after the epoch
pub(crate) const NEW_MOON_OF_CREATION: i64 = 31524;

pub(crate) const NOON: i64 = 18 * HALAKIM_PER_HOUR;
/// 3:11:20 AM (rule GaTaRaD)
pub(crate) const AM3_11_20: i64 = 9 * HALAKIM_PER_HOUR + 204;
/// 9:32:43 AM (rule BeTUTaKPaT)
pub(crate) const AM9_32_43: i64 = 15 * HALAKIM_PER_HOUR + 589;

pub(crate) const SUNDAY: i64 = 0;
pub(crate) const MONDAY: i64 = 1;
pub(crate) const TUESDAY: i64 = 2;
pub(crate) const WEDNESDAY: i64 = 3;
pub(crate) const FRIDAY: i64 = 5;

/// Months per year across the 19-year cycle (index = year-in-cycle, 0-based)
pub(crate) const MONTHS_PER_YEAR: [i64; 19] =
    [12, 12, 13, 12, 12, 13, 12, 13, 12, 12, 13, 12, 12, 13, 12, 12, 13, 12, 13];

/// Months elapsed before each year of the 19-year cycle
pub(crate) const YEAR_OFFSET: [i64; 19] = [
    0, 12, 24, 37, 49, 61, 74, 86, 99, 111, 123, 136, 148, 160, 173, 185, 197, 210, 222,
];

// --- Gregorian arithmetic ---

pub(crate) const GREGORIAN_SDN_OFFSET: i64 = 32045;
pub(crate) const DAYS_PER_5_MONTHS: i64 = 153;
pub(crate) const DAYS_PER_4_YEARS: i64 = 1461;
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;
/// Earliest representable Gregorian year (SDN 1 is 25 Nov 4714 BC)
pub(crate) const MIN_GREGORIAN_YEAR: i32 = -4714;
